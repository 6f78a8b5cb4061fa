//! I-Group domain models.
//!
//! An I-Group is a local peer-support chapter that meets on a regular
//! schedule within an area.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::one_of;
use uuid::Uuid;
use validator::{Validate, ValidationError};

const MEETING_DAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

fn validate_meeting_day(value: &str) -> Result<(), ValidationError> {
    one_of(value, &MEETING_DAYS, "meeting_day")
}

/// A local peer-support chapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct IGroup {
    pub id: Uuid,
    pub name: String,
    pub area_id: Option<Uuid>,
    /// Lowercase weekday name, e.g. `tuesday`.
    pub meeting_day: Option<String>,
    /// Free-form meeting time, e.g. `7:00 PM`.
    pub meeting_time: Option<String>,
    pub meeting_location: Option<String>,
    pub contact_email: Option<String>,
    pub is_active: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating an I-Group.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateIGroupRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    pub area_id: Option<Uuid>,

    #[validate(custom(function = "validate_meeting_day"))]
    pub meeting_day: Option<String>,

    #[validate(length(max = 50, message = "Meeting time must be at most 50 characters"))]
    pub meeting_time: Option<String>,

    #[validate(length(max = 200, message = "Meeting location must be at most 200 characters"))]
    pub meeting_location: Option<String>,

    #[validate(email(message = "Contact email is not valid"))]
    pub contact_email: Option<String>,

    pub is_active: Option<bool>,

    #[validate(length(max = 5000, message = "Notes must be at most 5000 characters"))]
    pub notes: Option<String>,
}

/// Request payload for updating an I-Group. All fields optional.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateIGroupRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: Option<String>,

    pub area_id: Option<Uuid>,

    #[validate(custom(function = "validate_meeting_day"))]
    pub meeting_day: Option<String>,

    #[validate(length(max = 50, message = "Meeting time must be at most 50 characters"))]
    pub meeting_time: Option<String>,

    #[validate(length(max = 200, message = "Meeting location must be at most 200 characters"))]
    pub meeting_location: Option<String>,

    #[validate(email(message = "Contact email is not valid"))]
    pub contact_email: Option<String>,

    pub is_active: Option<bool>,

    #[validate(length(max = 5000, message = "Notes must be at most 5000 characters"))]
    pub notes: Option<String>,
}

/// Query parameters for listing I-Groups.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct IGroupQuery {
    pub search: Option<String>,
    pub area_id: Option<Uuid>,
    pub active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_igroup_request_valid() {
        let request = CreateIGroupRequest {
            name: "Eastside Circle".to_string(),
            area_id: Some(Uuid::new_v4()),
            meeting_day: Some("tuesday".to_string()),
            meeting_time: Some("7:00 PM".to_string()),
            meeting_location: Some("Community Hall, Room 2".to_string()),
            contact_email: Some("eastside@example.org".to_string()),
            is_active: None,
            notes: None,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_igroup_request_bad_day() {
        let request = CreateIGroupRequest {
            name: "Eastside Circle".to_string(),
            area_id: None,
            meeting_day: Some("someday".to_string()),
            meeting_time: None,
            meeting_location: None,
            contact_email: None,
            is_active: None,
            notes: None,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("meeting_day"));
    }
}
