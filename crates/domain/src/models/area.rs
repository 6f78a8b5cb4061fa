//! Area domain models.
//!
//! An area is a geographic organizational unit inside a community. The
//! boundary is an opaque, potentially large GeoJSON document produced
//! offline; the API stores and serves it without interpreting it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::validate_hex_color;
use uuid::Uuid;
use validator::Validate;

/// A geographic organizational unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Area {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub color: String,
    pub community_id: Option<Uuid>,
    /// GeoJSON boundary document. Omitted from list responses unless
    /// explicitly requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating an area.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateAreaRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 10, message = "Code must be between 1 and 10 characters"))]
    pub code: String,

    #[validate(custom(function = "validate_hex_color"))]
    pub color: String,

    pub community_id: Option<Uuid>,

    pub boundary: Option<serde_json::Value>,
}

/// Request payload for updating an area. All fields optional.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateAreaRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 10, message = "Code must be between 1 and 10 characters"))]
    pub code: Option<String>,

    #[validate(custom(function = "validate_hex_color"))]
    pub color: Option<String>,

    pub community_id: Option<Uuid>,

    pub boundary: Option<serde_json::Value>,
}

/// Query parameters for listing areas.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AreaQuery {
    pub community_id: Option<Uuid>,
    /// Include the (large) boundary documents in the list response.
    pub include_boundary: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_area_request_valid() {
        let request = CreateAreaRequest {
            name: "Portland Metro".to_string(),
            code: "PDX".to_string(),
            color: "#0a5aa5".to_string(),
            community_id: Some(Uuid::new_v4()),
            boundary: Some(serde_json::json!({"type": "MultiPolygon", "coordinates": []})),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_area_request_code_too_long() {
        let request = CreateAreaRequest {
            name: "Portland Metro".to_string(),
            code: "PORTLANDMETRO".to_string(),
            color: "#0a5aa5".to_string(),
            community_id: None,
            boundary: None,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("code"));
    }
}
