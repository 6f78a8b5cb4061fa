//! Person domain models.
//!
//! A person is the base contact record; warriors, prospects and registrants
//! carry the same contact fields with their own extensions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::{validate_phone, validate_photo_position};
use uuid::Uuid;
use validator::Validate;

/// A member contact record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Person {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    /// CSS object-position style crop hint for the photo, e.g. `50% 25%`.
    pub photo_position: Option<String>,
    pub is_active: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a person.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreatePersonRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be between 1 and 100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name must be between 1 and 100 characters"))]
    pub last_name: String,

    #[validate(email(message = "Email is not valid"))]
    pub email: Option<String>,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    #[validate(length(max = 500, message = "Photo URL must be at most 500 characters"))]
    pub photo_url: Option<String>,

    #[validate(custom(function = "validate_photo_position"))]
    pub photo_position: Option<String>,

    pub is_active: Option<bool>,

    #[validate(length(max = 5000, message = "Notes must be at most 5000 characters"))]
    pub notes: Option<String>,
}

/// Request payload for updating a person. All fields optional.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdatePersonRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be between 1 and 100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Last name must be between 1 and 100 characters"))]
    pub last_name: Option<String>,

    #[validate(email(message = "Email is not valid"))]
    pub email: Option<String>,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    #[validate(length(max = 500, message = "Photo URL must be at most 500 characters"))]
    pub photo_url: Option<String>,

    #[validate(custom(function = "validate_photo_position"))]
    pub photo_position: Option<String>,

    pub is_active: Option<bool>,

    #[validate(length(max = 5000, message = "Notes must be at most 5000 characters"))]
    pub notes: Option<String>,
}

/// Query parameters for listing people.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PersonQuery {
    /// Free-text search across first and last name and email.
    pub search: Option<String>,
    pub active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreatePersonRequest {
        CreatePersonRequest {
            first_name: "Miguel".to_string(),
            last_name: "Alvarez".to_string(),
            email: Some("miguel@example.com".to_string()),
            phone: Some("503-555-0188".to_string()),
            photo_url: Some("https://cdn.example.com/photos/miguel.jpg".to_string()),
            photo_position: Some("50% 25%".to_string()),
            is_active: Some(true),
            notes: None,
        }
    }

    #[test]
    fn test_create_person_request_valid() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_create_person_request_empty_name() {
        let mut request = valid_request();
        request.first_name = String::new();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_person_request_bad_email() {
        let mut request = valid_request();
        request.email = Some("not-an-email".to_string());
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_create_person_request_bad_photo_position() {
        let mut request = valid_request();
        request.photo_position = Some("center".to_string());
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("photo_position"));
    }

    #[test]
    fn test_update_person_request_all_none_is_valid() {
        let request = UpdatePersonRequest {
            first_name: None,
            last_name: None,
            email: None,
            phone: None,
            photo_url: None,
            photo_position: None,
            is_active: None,
            notes: None,
        };
        assert!(request.validate().is_ok());
    }
}
