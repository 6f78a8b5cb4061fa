//! Area database entity.

use chrono::{DateTime, Utc};
use domain::models::Area;
use sqlx::FromRow;
use uuid::Uuid;

/// Row in the `areas` table.
///
/// `boundary` is NULL both for areas without one and in list queries that
/// project it away; the query decides, not the entity.
#[derive(Debug, Clone, FromRow)]
pub struct AreaEntity {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub color: String,
    pub community_id: Option<Uuid>,
    pub boundary: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AreaEntity> for Area {
    fn from(entity: AreaEntity) -> Self {
        Area {
            id: entity.id,
            name: entity.name,
            code: entity.code,
            color: entity.color,
            community_id: entity.community_id,
            boundary: entity.boundary,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
