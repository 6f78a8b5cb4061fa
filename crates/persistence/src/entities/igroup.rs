//! I-Group database entity.

use chrono::{DateTime, Utc};
use domain::models::IGroup;
use sqlx::FromRow;
use uuid::Uuid;

/// Row in the `igroups` table.
#[derive(Debug, Clone, FromRow)]
pub struct IGroupEntity {
    pub id: Uuid,
    pub name: String,
    pub area_id: Option<Uuid>,
    pub meeting_day: Option<String>,
    pub meeting_time: Option<String>,
    pub meeting_location: Option<String>,
    pub contact_email: Option<String>,
    pub is_active: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<IGroupEntity> for IGroup {
    fn from(entity: IGroupEntity) -> Self {
        IGroup {
            id: entity.id,
            name: entity.name,
            area_id: entity.area_id,
            meeting_day: entity.meeting_day,
            meeting_time: entity.meeting_time,
            meeting_location: entity.meeting_location,
            contact_email: entity.contact_email,
            is_active: entity.is_active,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
