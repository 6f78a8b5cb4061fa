//! Warrior domain models.
//!
//! A warrior is a person record augmented with brotherhood-progression status
//! and event-participation history. The event-ID lists are maintained by
//! calling code; no invariant ties them to the status field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::{one_of, validate_phone, validate_photo_position};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Brotherhood-progression status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "warrior_status", rename_all = "lowercase")]
pub enum WarriorStatus {
    Candidate,
    Initiated,
    Staff,
    Elder,
}

impl WarriorStatus {
    pub const ALL: [&'static str; 4] = ["candidate", "initiated", "staff", "elder"];

    pub fn as_str(&self) -> &'static str {
        match self {
            WarriorStatus::Candidate => "candidate",
            WarriorStatus::Initiated => "initiated",
            WarriorStatus::Staff => "staff",
            WarriorStatus::Elder => "elder",
        }
    }
}

impl FromStr for WarriorStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "candidate" => Ok(WarriorStatus::Candidate),
            "initiated" => Ok(WarriorStatus::Initiated),
            "staff" => Ok(WarriorStatus::Staff),
            "elder" => Ok(WarriorStatus::Elder),
            _ => Err(format!("Invalid warrior status: {}", s)),
        }
    }
}

impl fmt::Display for WarriorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn validate_warrior_status(value: &str) -> Result<(), ValidationError> {
    one_of(value, &WarriorStatus::ALL, "warrior_status")
}

/// A warrior record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Warrior {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub photo_position: Option<String>,
    pub status: WarriorStatus,
    /// NWTA events this warrior attended as a participant.
    pub nwta_events: Vec<Uuid>,
    /// Trainings attended.
    pub trainings: Vec<Uuid>,
    /// Events staffed.
    pub staffings: Vec<Uuid>,
    pub is_active: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a warrior.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateWarriorRequest {
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

    #[validate(custom(function = "validate_warrior_status"))]
    pub status: Option<String>,

    pub nwta_events: Option<Vec<Uuid>>,
    pub trainings: Option<Vec<Uuid>>,
    pub staffings: Option<Vec<Uuid>>,

    pub is_active: Option<bool>,

    #[validate(length(max = 5000, message = "Notes must be at most 5000 characters"))]
    pub notes: Option<String>,
}

/// Request payload for updating a warrior. All fields optional.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateWarriorRequest {
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

    #[validate(custom(function = "validate_warrior_status"))]
    pub status: Option<String>,

    pub nwta_events: Option<Vec<Uuid>>,
    pub trainings: Option<Vec<Uuid>>,
    pub staffings: Option<Vec<Uuid>>,

    pub is_active: Option<bool>,

    #[validate(length(max = 5000, message = "Notes must be at most 5000 characters"))]
    pub notes: Option<String>,
}

/// Query parameters for listing warriors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WarriorQuery {
    pub search: Option<String>,
    pub active: Option<bool>,
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warrior_status_round_trip() {
        for name in WarriorStatus::ALL {
            let status = WarriorStatus::from_str(name).unwrap();
            assert_eq!(status.as_str(), name);
        }
    }

    #[test]
    fn test_warrior_status_from_str_case_insensitive() {
        assert_eq!(WarriorStatus::from_str("ELDER").unwrap(), WarriorStatus::Elder);
    }

    #[test]
    fn test_warrior_status_from_str_invalid() {
        assert!(WarriorStatus::from_str("novice").is_err());
    }

    #[test]
    fn test_create_warrior_request_invalid_status() {
        let request = CreateWarriorRequest {
            first_name: "Dan".to_string(),
            last_name: "Okafor".to_string(),
            email: None,
            phone: None,
            photo_url: None,
            photo_position: None,
            status: Some("novice".to_string()),
            nwta_events: None,
            trainings: None,
            staffings: None,
            is_active: None,
            notes: None,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("status"));
    }
}
