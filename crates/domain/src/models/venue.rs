//! Venue domain models.

use crate::models::event::EventType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::{one_of, validate_phone};
use uuid::Uuid;
use validator::{Validate, ValidationError};

fn validate_event_types(values: &Vec<String>) -> Result<(), ValidationError> {
    for value in values {
        one_of(value, &EventType::ALL, "supported_event_types")?;
    }
    Ok(())
}

/// A venue where events are held.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Venue {
    pub id: Uuid,
    pub name: String,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Event types this venue can host.
    pub supported_event_types: Vec<String>,
    pub is_active: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a venue.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateVenueRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be between 1 and 200 characters"))]
    pub name: String,

    #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
    pub address1: Option<String>,

    #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
    pub address2: Option<String>,

    #[validate(length(max = 100, message = "City must be at most 100 characters"))]
    pub city: Option<String>,

    #[validate(length(max = 50, message = "State must be at most 50 characters"))]
    pub state: Option<String>,

    #[validate(length(max = 20, message = "Postal code must be at most 20 characters"))]
    pub postal_code: Option<String>,

    #[validate(length(max = 100, message = "Contact name must be at most 100 characters"))]
    pub contact_name: Option<String>,

    #[validate(email(message = "Contact email is not valid"))]
    pub contact_email: Option<String>,

    #[validate(custom(function = "validate_phone"))]
    pub contact_phone: Option<String>,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub longitude: Option<f64>,

    #[validate(custom(function = "validate_event_types"))]
    pub supported_event_types: Option<Vec<String>>,

    pub is_active: Option<bool>,

    #[validate(length(max = 5000, message = "Notes must be at most 5000 characters"))]
    pub notes: Option<String>,
}

/// Request payload for updating a venue. All fields optional.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateVenueRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be between 1 and 200 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
    pub address1: Option<String>,

    #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
    pub address2: Option<String>,

    #[validate(length(max = 100, message = "City must be at most 100 characters"))]
    pub city: Option<String>,

    #[validate(length(max = 50, message = "State must be at most 50 characters"))]
    pub state: Option<String>,

    #[validate(length(max = 20, message = "Postal code must be at most 20 characters"))]
    pub postal_code: Option<String>,

    #[validate(length(max = 100, message = "Contact name must be at most 100 characters"))]
    pub contact_name: Option<String>,

    #[validate(email(message = "Contact email is not valid"))]
    pub contact_email: Option<String>,

    #[validate(custom(function = "validate_phone"))]
    pub contact_phone: Option<String>,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub longitude: Option<f64>,

    #[validate(custom(function = "validate_event_types"))]
    pub supported_event_types: Option<Vec<String>>,

    pub is_active: Option<bool>,

    #[validate(length(max = 5000, message = "Notes must be at most 5000 characters"))]
    pub notes: Option<String>,
}

/// Query parameters for listing venues.
///
/// When `lat`, `lng` and `radius_km` are all present, the list is filtered
/// to venues within the radius, nearest first.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct VenueQuery {
    pub search: Option<String>,
    pub active: Option<bool>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub radius_km: Option<f64>,
}

impl VenueQuery {
    /// Returns the radius filter when all three parameters are present.
    pub fn radius_filter(&self) -> Option<(f64, f64, f64)> {
        match (self.lat, self.lng, self.radius_km) {
            (Some(lat), Some(lng), Some(radius)) => Some((lat, lng, radius)),
            _ => None,
        }
    }
}
