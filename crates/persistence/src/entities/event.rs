//! Event database entity.

use chrono::{DateTime, Utc};
use domain::models::{Event, EventType, ScheduleEntry};
use sqlx::FromRow;
use uuid::Uuid;

/// Row in the `events` table.
///
/// The schedule is stored as a JSONB array of start/end pairs; entries that
/// fail to parse are dropped rather than failing the whole read.
#[derive(Debug, Clone, FromRow)]
pub struct EventEntity {
    pub id: Uuid,
    pub name: String,
    pub event_type: EventType,
    pub venue_id: Option<Uuid>,
    pub is_published: bool,
    pub staff_capacity: i32,
    pub participant_capacity: i32,
    pub committed_staff: Vec<Uuid>,
    pub waitlisted_staff: Vec<Uuid>,
    pub potential_staff: Vec<Uuid>,
    pub committed_participants: Vec<Uuid>,
    pub waitlisted_participants: Vec<Uuid>,
    pub potential_participants: Vec<Uuid>,
    pub staff_open_at: Option<DateTime<Utc>>,
    pub staff_close_at: Option<DateTime<Utc>>,
    pub participant_open_at: Option<DateTime<Utc>>,
    pub participant_close_at: Option<DateTime<Utc>>,
    pub schedule: serde_json::Value,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EventEntity> for Event {
    fn from(entity: EventEntity) -> Self {
        let schedule: Vec<ScheduleEntry> =
            serde_json::from_value(entity.schedule).unwrap_or_default();
        Event {
            id: entity.id,
            name: entity.name,
            event_type: entity.event_type,
            venue_id: entity.venue_id,
            is_published: entity.is_published,
            staff_capacity: entity.staff_capacity,
            participant_capacity: entity.participant_capacity,
            committed_staff: entity.committed_staff,
            waitlisted_staff: entity.waitlisted_staff,
            potential_staff: entity.potential_staff,
            committed_participants: entity.committed_participants,
            waitlisted_participants: entity.waitlisted_participants,
            potential_participants: entity.potential_participants,
            staff_open_at: entity.staff_open_at,
            staff_close_at: entity.staff_close_at,
            participant_open_at: entity.participant_open_at,
            participant_close_at: entity.participant_close_at,
            schedule,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
