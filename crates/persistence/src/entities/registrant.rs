//! Registrant database entity.

use chrono::{DateTime, Utc};
use domain::models::{Audience, Registrant, RegistrantStatus};
use sqlx::FromRow;
use uuid::Uuid;

/// Row in the `registrants` table.
#[derive(Debug, Clone, FromRow)]
pub struct RegistrantEntity {
    pub id: Uuid,
    pub event_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub audience: Audience,
    pub status: RegistrantStatus,
    pub data: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RegistrantEntity> for Registrant {
    fn from(entity: RegistrantEntity) -> Self {
        Registrant {
            id: entity.id,
            event_id: entity.event_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            audience: entity.audience,
            status: entity.status,
            data: entity.data,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
