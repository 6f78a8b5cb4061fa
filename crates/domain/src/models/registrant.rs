//! Registrant domain models.
//!
//! A registrant ties a person's contact details to an event, with an
//! audience (staff or participant) and a registration status. The status is
//! a stored label, not a state machine; the backend does not enforce
//! transitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::{one_of, validate_phone};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Which side of the event a registrant belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "audience", rename_all = "lowercase")]
pub enum Audience {
    Staff,
    Participant,
}

impl Audience {
    pub const ALL: [&'static str; 2] = ["staff", "participant"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Staff => "staff",
            Audience::Participant => "participant",
        }
    }
}

impl FromStr for Audience {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "staff" => Ok(Audience::Staff),
            "participant" => Ok(Audience::Participant),
            _ => Err(format!("Invalid audience: {}", s)),
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Registration status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "registrant_status", rename_all = "lowercase")]
pub enum RegistrantStatus {
    Potential,
    Committed,
    Waitlisted,
    Cancelled,
}

impl RegistrantStatus {
    pub const ALL: [&'static str; 4] = ["potential", "committed", "waitlisted", "cancelled"];

    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrantStatus::Potential => "potential",
            RegistrantStatus::Committed => "committed",
            RegistrantStatus::Waitlisted => "waitlisted",
            RegistrantStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for RegistrantStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "potential" => Ok(RegistrantStatus::Potential),
            "committed" => Ok(RegistrantStatus::Committed),
            "waitlisted" => Ok(RegistrantStatus::Waitlisted),
            "cancelled" => Ok(RegistrantStatus::Cancelled),
            _ => Err(format!("Invalid registrant status: {}", s)),
        }
    }
}

impl fmt::Display for RegistrantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn validate_audience(value: &str) -> Result<(), ValidationError> {
    one_of(value, &Audience::ALL, "audience")
}

fn validate_registrant_status(value: &str) -> Result<(), ValidationError> {
    one_of(value, &RegistrantStatus::ALL, "registrant_status")
}

/// A registrant record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Registrant {
    pub id: Uuid,
    pub event_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub audience: Audience,
    pub status: RegistrantStatus,
    /// Free-form registration data (answers, dietary needs, etc.).
    pub data: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a registrant.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateRegistrantRequest {
    pub event_id: Uuid,

    #[validate(length(min = 1, max = 100, message = "First name must be between 1 and 100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name must be between 1 and 100 characters"))]
    pub last_name: String,

    #[validate(email(message = "Email is not valid"))]
    pub email: Option<String>,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    #[validate(custom(function = "validate_audience"))]
    pub audience: String,

    #[validate(custom(function = "validate_registrant_status"))]
    pub status: Option<String>,

    pub data: Option<serde_json::Value>,
}

/// Request payload for updating a registrant. All fields optional.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateRegistrantRequest {
    pub event_id: Option<Uuid>,

    #[validate(length(min = 1, max = 100, message = "First name must be between 1 and 100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Last name must be between 1 and 100 characters"))]
    pub last_name: Option<String>,

    #[validate(email(message = "Email is not valid"))]
    pub email: Option<String>,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    #[validate(custom(function = "validate_audience"))]
    pub audience: Option<String>,

    #[validate(custom(function = "validate_registrant_status"))]
    pub status: Option<String>,

    pub data: Option<serde_json::Value>,
}

/// Query parameters for listing registrants.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RegistrantQuery {
    pub event_id: Option<Uuid>,
    pub audience: Option<String>,
    pub status: Option<String>,
}
