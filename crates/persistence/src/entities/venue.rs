//! Venue database entity.

use chrono::{DateTime, Utc};
use domain::models::Venue;
use sqlx::FromRow;
use uuid::Uuid;

/// Row in the `venues` table.
#[derive(Debug, Clone, FromRow)]
pub struct VenueEntity {
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
    pub supported_event_types: Vec<String>,
    pub is_active: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<VenueEntity> for Venue {
    fn from(entity: VenueEntity) -> Self {
        Venue {
            id: entity.id,
            name: entity.name,
            address1: entity.address1,
            address2: entity.address2,
            city: entity.city,
            state: entity.state,
            postal_code: entity.postal_code,
            contact_name: entity.contact_name,
            contact_email: entity.contact_email,
            contact_phone: entity.contact_phone,
            latitude: entity.latitude,
            longitude: entity.longitude,
            supported_event_types: entity.supported_event_types,
            is_active: entity.is_active,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
