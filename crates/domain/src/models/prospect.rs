//! Prospect domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::validate_phone;
use uuid::Uuid;
use validator::Validate;

/// A prospective member: contact info plus who referred them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Prospect {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Person who referred this prospect.
    pub referred_by: Option<Uuid>,
    pub is_active: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a prospect.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateProspectRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be between 1 and 100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name must be between 1 and 100 characters"))]
    pub last_name: String,

    #[validate(email(message = "Email is not valid"))]
    pub email: Option<String>,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    pub referred_by: Option<Uuid>,

    pub is_active: Option<bool>,

    #[validate(length(max = 5000, message = "Notes must be at most 5000 characters"))]
    pub notes: Option<String>,
}

/// Request payload for updating a prospect. All fields optional.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateProspectRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be between 1 and 100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Last name must be between 1 and 100 characters"))]
    pub last_name: Option<String>,

    #[validate(email(message = "Email is not valid"))]
    pub email: Option<String>,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    pub referred_by: Option<Uuid>,

    pub is_active: Option<bool>,

    #[validate(length(max = 5000, message = "Notes must be at most 5000 characters"))]
    pub notes: Option<String>,
}

/// Query parameters for listing prospects.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProspectQuery {
    pub search: Option<String>,
    pub active: Option<bool>,
}
