//! Prospect database entity.

use chrono::{DateTime, Utc};
use domain::models::Prospect;
use sqlx::FromRow;
use uuid::Uuid;

/// Row in the `prospects` table.
#[derive(Debug, Clone, FromRow)]
pub struct ProspectEntity {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub referred_by: Option<Uuid>,
    pub is_active: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProspectEntity> for Prospect {
    fn from(entity: ProspectEntity) -> Self {
        Prospect {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            referred_by: entity.referred_by,
            is_active: entity.is_active,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
