//! Registrant repository for database operations.

use domain::models::registrant::{
    CreateRegistrantRequest, RegistrantQuery, UpdateRegistrantRequest,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::RegistrantEntity;
use crate::metrics::QueryTimer;

const COLUMNS: &str = "id, event_id, first_name, last_name, email, phone, audience, status, \
                       data, created_at, updated_at";

/// Repository for registrant-related database operations.
#[derive(Clone)]
pub struct RegistrantRepository {
    pool: PgPool,
}

impl RegistrantRepository {
    /// Creates a new RegistrantRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new registrant. Status defaults to `potential`.
    pub async fn create(
        &self,
        request: &CreateRegistrantRequest,
    ) -> Result<RegistrantEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_registrant");
        let result = sqlx::query_as::<_, RegistrantEntity>(&format!(
            r#"
            INSERT INTO registrants (event_id, first_name, last_name, email, phone, audience, status, data)
            VALUES ($1, $2, $3, $4, $5, $6::audience, COALESCE($7::registrant_status, 'potential'), $8)
            RETURNING {COLUMNS}
            "#,
        ))
        .bind(request.event_id)
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&request.audience)
        .bind(request.status.as_deref())
        .bind(&request.data)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a registrant by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<RegistrantEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_registrant_by_id");
        let result = sqlx::query_as::<_, RegistrantEntity>(&format!(
            "SELECT {COLUMNS} FROM registrants WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List registrants, optionally filtered by event, audience and status.
    pub async fn list(
        &self,
        query: &RegistrantQuery,
    ) -> Result<Vec<RegistrantEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_registrants");
        let result = sqlx::query_as::<_, RegistrantEntity>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM registrants
            WHERE ($1::uuid IS NULL OR event_id = $1)
              AND ($2::text IS NULL OR audience::text = $2)
              AND ($3::text IS NULL OR status::text = $3)
            ORDER BY last_name, first_name
            "#,
        ))
        .bind(query.event_id)
        .bind(query.audience.as_deref())
        .bind(query.status.as_deref())
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Partially update a registrant. Returns None when the ID does not exist.
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateRegistrantRequest,
    ) -> Result<Option<RegistrantEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_registrant");
        let result = sqlx::query_as::<_, RegistrantEntity>(&format!(
            r#"
            UPDATE registrants SET
                event_id = COALESCE($2, event_id),
                first_name = COALESCE($3, first_name),
                last_name = COALESCE($4, last_name),
                email = COALESCE($5, email),
                phone = COALESCE($6, phone),
                audience = COALESCE($7::audience, audience),
                status = COALESCE($8::registrant_status, status),
                data = COALESCE($9, data),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(request.event_id)
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(request.audience.as_deref())
        .bind(request.status.as_deref())
        .bind(&request.data)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a registrant. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_registrant");
        let result = sqlx::query("DELETE FROM registrants WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }
}
