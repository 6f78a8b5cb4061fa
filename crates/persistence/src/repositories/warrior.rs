//! Warrior repository for database operations.

use domain::models::warrior::{CreateWarriorRequest, UpdateWarriorRequest, WarriorQuery};
use shared::search::like_pattern;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::WarriorEntity;
use crate::metrics::QueryTimer;

const COLUMNS: &str = "id, first_name, last_name, email, phone, photo_url, photo_position, \
                       status, nwta_events, trainings, staffings, is_active, notes, \
                       created_at, updated_at";

/// Repository for warrior-related database operations.
#[derive(Clone)]
pub struct WarriorRepository {
    pool: PgPool,
}

impl WarriorRepository {
    /// Creates a new WarriorRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new warrior. Status defaults to `candidate`.
    pub async fn create(
        &self,
        request: &CreateWarriorRequest,
    ) -> Result<WarriorEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_warrior");
        let result = sqlx::query_as::<_, WarriorEntity>(&format!(
            r#"
            INSERT INTO warriors (first_name, last_name, email, phone, photo_url, photo_position,
                                  status, nwta_events, trainings, staffings, is_active, notes)
            VALUES ($1, $2, $3, $4, $5, $6,
                    COALESCE($7::warrior_status, 'candidate'),
                    COALESCE($8, ARRAY[]::uuid[]),
                    COALESCE($9, ARRAY[]::uuid[]),
                    COALESCE($10, ARRAY[]::uuid[]),
                    COALESCE($11, TRUE), $12)
            RETURNING {COLUMNS}
            "#,
        ))
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&request.photo_url)
        .bind(&request.photo_position)
        .bind(request.status.as_deref())
        .bind(&request.nwta_events)
        .bind(&request.trainings)
        .bind(&request.staffings)
        .bind(request.is_active)
        .bind(&request.notes)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a warrior by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<WarriorEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_warrior_by_id");
        let result = sqlx::query_as::<_, WarriorEntity>(&format!(
            "SELECT {COLUMNS} FROM warriors WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List warriors, optionally filtered by search term, active flag and status.
    pub async fn list(&self, query: &WarriorQuery) -> Result<Vec<WarriorEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_warriors");
        let pattern = query.search.as_deref().and_then(like_pattern);
        let result = sqlx::query_as::<_, WarriorEntity>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM warriors
            WHERE ($1::text IS NULL OR first_name ILIKE $1 OR last_name ILIKE $1 OR email ILIKE $1)
              AND ($2::boolean IS NULL OR is_active = $2)
              AND ($3::text IS NULL OR status::text = $3)
            ORDER BY last_name, first_name
            "#,
        ))
        .bind(pattern)
        .bind(query.active)
        .bind(query.status.as_deref())
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Partially update a warrior. Returns None when the ID does not exist.
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateWarriorRequest,
    ) -> Result<Option<WarriorEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_warrior");
        let result = sqlx::query_as::<_, WarriorEntity>(&format!(
            r#"
            UPDATE warriors SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone),
                photo_url = COALESCE($6, photo_url),
                photo_position = COALESCE($7, photo_position),
                status = COALESCE($8::warrior_status, status),
                nwta_events = COALESCE($9, nwta_events),
                trainings = COALESCE($10, trainings),
                staffings = COALESCE($11, staffings),
                is_active = COALESCE($12, is_active),
                notes = COALESCE($13, notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&request.photo_url)
        .bind(&request.photo_position)
        .bind(request.status.as_deref())
        .bind(&request.nwta_events)
        .bind(&request.trainings)
        .bind(&request.staffings)
        .bind(request.is_active)
        .bind(&request.notes)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a warrior. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_warrior");
        let result = sqlx::query("DELETE FROM warriors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }
}
