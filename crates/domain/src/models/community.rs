//! Community domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::validate_hex_color;
use uuid::Uuid;
use validator::Validate;

/// A top-level organizational grouping of areas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Community {
    pub id: Uuid,
    pub name: String,
    /// Short code used in rosters and reports, e.g. `PNW`.
    pub code: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a community.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateCommunityRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 10, message = "Code must be between 1 and 10 characters"))]
    pub code: String,

    #[validate(custom(function = "validate_hex_color"))]
    pub color: String,
}

/// Request payload for updating a community. All fields optional.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateCommunityRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 10, message = "Code must be between 1 and 10 characters"))]
    pub code: Option<String>,

    #[validate(custom(function = "validate_hex_color"))]
    pub color: Option<String>,
}

/// Query parameters for listing communities.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CommunityQuery {
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_community_request_valid() {
        let request = CreateCommunityRequest {
            name: "Pacific Northwest".to_string(),
            code: "PNW".to_string(),
            color: "#1a7f37".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_community_request_bad_color() {
        let request = CreateCommunityRequest {
            name: "Pacific Northwest".to_string(),
            code: "PNW".to_string(),
            color: "green".to_string(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("color"));
    }
}
