//! I-Group repository for database operations.

use domain::models::igroup::{CreateIGroupRequest, IGroupQuery, UpdateIGroupRequest};
use shared::search::like_pattern;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::IGroupEntity;
use crate::metrics::QueryTimer;

const COLUMNS: &str = "id, name, area_id, meeting_day, meeting_time, meeting_location, \
                       contact_email, is_active, notes, created_at, updated_at";

/// Repository for I-Group-related database operations.
#[derive(Clone)]
pub struct IGroupRepository {
    pool: PgPool,
}

impl IGroupRepository {
    /// Creates a new IGroupRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new I-Group.
    pub async fn create(
        &self,
        request: &CreateIGroupRequest,
    ) -> Result<IGroupEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_igroup");
        let result = sqlx::query_as::<_, IGroupEntity>(&format!(
            r#"
            INSERT INTO igroups (name, area_id, meeting_day, meeting_time, meeting_location,
                                 contact_email, is_active, notes)
            VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, TRUE), $8)
            RETURNING {COLUMNS}
            "#,
        ))
        .bind(&request.name)
        .bind(request.area_id)
        .bind(&request.meeting_day)
        .bind(&request.meeting_time)
        .bind(&request.meeting_location)
        .bind(&request.contact_email)
        .bind(request.is_active)
        .bind(&request.notes)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find an I-Group by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<IGroupEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_igroup_by_id");
        let result = sqlx::query_as::<_, IGroupEntity>(&format!(
            "SELECT {COLUMNS} FROM igroups WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List I-Groups, optionally filtered by search term, area and active flag.
    pub async fn list(&self, query: &IGroupQuery) -> Result<Vec<IGroupEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_igroups");
        let pattern = query.search.as_deref().and_then(like_pattern);
        let result = sqlx::query_as::<_, IGroupEntity>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM igroups
            WHERE ($1::text IS NULL OR name ILIKE $1 OR meeting_location ILIKE $1)
              AND ($2::uuid IS NULL OR area_id = $2)
              AND ($3::boolean IS NULL OR is_active = $3)
            ORDER BY name
            "#,
        ))
        .bind(pattern)
        .bind(query.area_id)
        .bind(query.active)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Partially update an I-Group. Returns None when the ID does not exist.
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateIGroupRequest,
    ) -> Result<Option<IGroupEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_igroup");
        let result = sqlx::query_as::<_, IGroupEntity>(&format!(
            r#"
            UPDATE igroups SET
                name = COALESCE($2, name),
                area_id = COALESCE($3, area_id),
                meeting_day = COALESCE($4, meeting_day),
                meeting_time = COALESCE($5, meeting_time),
                meeting_location = COALESCE($6, meeting_location),
                contact_email = COALESCE($7, contact_email),
                is_active = COALESCE($8, is_active),
                notes = COALESCE($9, notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(&request.name)
        .bind(request.area_id)
        .bind(&request.meeting_day)
        .bind(&request.meeting_time)
        .bind(&request.meeting_location)
        .bind(&request.contact_email)
        .bind(request.is_active)
        .bind(&request.notes)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete an I-Group. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_igroup");
        let result = sqlx::query("DELETE FROM igroups WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }
}
