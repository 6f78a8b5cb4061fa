//! Warrior database entity.

use chrono::{DateTime, Utc};
use domain::models::{Warrior, WarriorStatus};
use sqlx::FromRow;
use uuid::Uuid;

/// Row in the `warriors` table.
#[derive(Debug, Clone, FromRow)]
pub struct WarriorEntity {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub photo_position: Option<String>,
    pub status: WarriorStatus,
    pub nwta_events: Vec<Uuid>,
    pub trainings: Vec<Uuid>,
    pub staffings: Vec<Uuid>,
    pub is_active: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<WarriorEntity> for Warrior {
    fn from(entity: WarriorEntity) -> Self {
        Warrior {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            photo_url: entity.photo_url,
            photo_position: entity.photo_position,
            status: entity.status,
            nwta_events: entity.nwta_events,
            trainings: entity.trainings,
            staffings: entity.staffings,
            is_active: entity.is_active,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
