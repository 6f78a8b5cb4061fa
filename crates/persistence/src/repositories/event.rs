//! Event repository for database operations.

use domain::models::event::{CreateEventRequest, EventQuery, ScheduleEntry, UpdateEventRequest};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::EventEntity;
use crate::metrics::QueryTimer;

const COLUMNS: &str = "id, name, event_type, venue_id, is_published, \
                       staff_capacity, participant_capacity, \
                       committed_staff, waitlisted_staff, potential_staff, \
                       committed_participants, waitlisted_participants, potential_participants, \
                       staff_open_at, staff_close_at, participant_open_at, participant_close_at, \
                       schedule, notes, created_at, updated_at";

fn schedule_json(entries: Option<&Vec<ScheduleEntry>>) -> Option<serde_json::Value> {
    entries.map(|entries| {
        serde_json::to_value(entries).unwrap_or(serde_json::Value::Array(Vec::new()))
    })
}

/// Repository for event-related database operations.
#[derive(Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    /// Creates a new EventRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new event. Events start unpublished with zero capacities.
    pub async fn create(&self, request: &CreateEventRequest) -> Result<EventEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_event");
        let result = sqlx::query_as::<_, EventEntity>(&format!(
            r#"
            INSERT INTO events (name, event_type, venue_id, is_published,
                                staff_capacity, participant_capacity,
                                committed_staff, waitlisted_staff, potential_staff,
                                committed_participants, waitlisted_participants, potential_participants,
                                staff_open_at, staff_close_at, participant_open_at, participant_close_at,
                                schedule, notes)
            VALUES ($1, $2::event_type, $3, COALESCE($4, FALSE),
                    COALESCE($5, 0), COALESCE($6, 0),
                    COALESCE($7, ARRAY[]::uuid[]), COALESCE($8, ARRAY[]::uuid[]), COALESCE($9, ARRAY[]::uuid[]),
                    COALESCE($10, ARRAY[]::uuid[]), COALESCE($11, ARRAY[]::uuid[]), COALESCE($12, ARRAY[]::uuid[]),
                    $13, $14, $15, $16,
                    COALESCE($17, '[]'::jsonb), $18)
            RETURNING {COLUMNS}
            "#,
        ))
        .bind(&request.name)
        .bind(&request.event_type)
        .bind(request.venue_id)
        .bind(request.is_published)
        .bind(request.staff_capacity)
        .bind(request.participant_capacity)
        .bind(&request.committed_staff)
        .bind(&request.waitlisted_staff)
        .bind(&request.potential_staff)
        .bind(&request.committed_participants)
        .bind(&request.waitlisted_participants)
        .bind(&request.potential_participants)
        .bind(request.staff_open_at)
        .bind(request.staff_close_at)
        .bind(request.participant_open_at)
        .bind(request.participant_close_at)
        .bind(schedule_json(request.schedule.as_ref()))
        .bind(&request.notes)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find an event by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<EventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_event_by_id");
        let result = sqlx::query_as::<_, EventEntity>(&format!(
            "SELECT {COLUMNS} FROM events WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List events, optionally filtered by type, venue and published flag.
    pub async fn list(&self, query: &EventQuery) -> Result<Vec<EventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_events");
        let result = sqlx::query_as::<_, EventEntity>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM events
            WHERE ($1::text IS NULL OR event_type::text = $1)
              AND ($2::uuid IS NULL OR venue_id = $2)
              AND ($3::boolean IS NULL OR is_published = $3)
            ORDER BY created_at DESC
            "#,
        ))
        .bind(query.event_type.as_deref())
        .bind(query.venue_id)
        .bind(query.published)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Partially update an event. Returns None when the ID does not exist.
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateEventRequest,
    ) -> Result<Option<EventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_event");
        let result = sqlx::query_as::<_, EventEntity>(&format!(
            r#"
            UPDATE events SET
                name = COALESCE($2, name),
                event_type = COALESCE($3::event_type, event_type),
                venue_id = COALESCE($4, venue_id),
                is_published = COALESCE($5, is_published),
                staff_capacity = COALESCE($6, staff_capacity),
                participant_capacity = COALESCE($7, participant_capacity),
                committed_staff = COALESCE($8, committed_staff),
                waitlisted_staff = COALESCE($9, waitlisted_staff),
                potential_staff = COALESCE($10, potential_staff),
                committed_participants = COALESCE($11, committed_participants),
                waitlisted_participants = COALESCE($12, waitlisted_participants),
                potential_participants = COALESCE($13, potential_participants),
                staff_open_at = COALESCE($14, staff_open_at),
                staff_close_at = COALESCE($15, staff_close_at),
                participant_open_at = COALESCE($16, participant_open_at),
                participant_close_at = COALESCE($17, participant_close_at),
                schedule = COALESCE($18, schedule),
                notes = COALESCE($19, notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(&request.name)
        .bind(request.event_type.as_deref())
        .bind(request.venue_id)
        .bind(request.is_published)
        .bind(request.staff_capacity)
        .bind(request.participant_capacity)
        .bind(&request.committed_staff)
        .bind(&request.waitlisted_staff)
        .bind(&request.potential_staff)
        .bind(&request.committed_participants)
        .bind(&request.waitlisted_participants)
        .bind(&request.potential_participants)
        .bind(request.staff_open_at)
        .bind(request.staff_close_at)
        .bind(request.participant_open_at)
        .bind(request.participant_close_at)
        .bind(schedule_json(request.schedule.as_ref()))
        .bind(&request.notes)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete an event. Registrants cascade.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_event");
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }
}
