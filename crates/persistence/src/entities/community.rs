//! Community database entity.

use chrono::{DateTime, Utc};
use domain::models::Community;
use sqlx::FromRow;
use uuid::Uuid;

/// Row in the `communities` table.
#[derive(Debug, Clone, FromRow)]
pub struct CommunityEntity {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CommunityEntity> for Community {
    fn from(entity: CommunityEntity) -> Self {
        Community {
            id: entity.id,
            name: entity.name,
            code: entity.code,
            color: entity.color,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
