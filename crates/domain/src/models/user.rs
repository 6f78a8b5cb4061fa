//! Application user domain models.
//!
//! Users are the accounts that sign in to the admin UI. Authentication
//! itself is delegated to the identity provider; the backend only stores the
//! account record and its role.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::one_of;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Application role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Leader,
    Member,
}

impl UserRole {
    pub const ALL: [&'static str; 3] = ["admin", "leader", "member"];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Leader => "leader",
            UserRole::Member => "member",
        }
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "leader" => Ok(UserRole::Leader),
            "member" => Ok(UserRole::Member),
            _ => Err(format!("Invalid user role: {}", s)),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn validate_user_role(value: &str) -> Result<(), ValidationError> {
    one_of(value, &UserRole::ALL, "role")
}

/// An application account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub display_name: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a user.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateUserRequest {
    #[validate(email(message = "Email is not valid"))]
    pub email: String,

    #[validate(length(max = 100, message = "Display name must be at most 100 characters"))]
    pub display_name: Option<String>,

    #[validate(custom(function = "validate_user_role"))]
    pub role: Option<String>,

    pub is_active: Option<bool>,
}

/// Request payload for updating a user. All fields optional.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateUserRequest {
    #[validate(email(message = "Email is not valid"))]
    pub email: Option<String>,

    #[validate(length(max = 100, message = "Display name must be at most 100 characters"))]
    pub display_name: Option<String>,

    #[validate(custom(function = "validate_user_role"))]
    pub role: Option<String>,

    pub is_active: Option<bool>,
}

/// Query parameters for listing users.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UserQuery {
    pub search: Option<String>,
    pub active: Option<bool>,
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_round_trip() {
        for name in UserRole::ALL {
            assert_eq!(UserRole::from_str(name).unwrap().as_str(), name);
        }
    }

    #[test]
    fn test_create_user_request_valid() {
        let request = CreateUserRequest {
            email: "admin@example.org".to_string(),
            display_name: Some("Site Admin".to_string()),
            role: Some("admin".to_string()),
            is_active: None,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_user_request_bad_role() {
        let request = CreateUserRequest {
            email: "admin@example.org".to_string(),
            display_name: None,
            role: Some("superuser".to_string()),
            is_active: None,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("role"));
    }

    #[test]
    fn test_create_user_request_bad_email() {
        let request = CreateUserRequest {
            email: "nope".to_string(),
            display_name: None,
            role: None,
            is_active: None,
        };
        assert!(request.validate().is_err());
    }
}
