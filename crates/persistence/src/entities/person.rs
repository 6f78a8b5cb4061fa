//! Person database entity.

use chrono::{DateTime, Utc};
use domain::models::Person;
use sqlx::FromRow;
use uuid::Uuid;

/// Row in the `people` table.
#[derive(Debug, Clone, FromRow)]
pub struct PersonEntity {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub photo_position: Option<String>,
    pub is_active: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PersonEntity> for Person {
    fn from(entity: PersonEntity) -> Self {
        Person {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            photo_url: entity.photo_url,
            photo_position: entity.photo_position,
            is_active: entity.is_active,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
