//! Prospect repository for database operations.

use domain::models::prospect::{CreateProspectRequest, ProspectQuery, UpdateProspectRequest};
use shared::search::like_pattern;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::ProspectEntity;
use crate::metrics::QueryTimer;

const COLUMNS: &str = "id, first_name, last_name, email, phone, referred_by, is_active, notes, \
                       created_at, updated_at";

/// Repository for prospect-related database operations.
#[derive(Clone)]
pub struct ProspectRepository {
    pool: PgPool,
}

impl ProspectRepository {
    /// Creates a new ProspectRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new prospect.
    pub async fn create(
        &self,
        request: &CreateProspectRequest,
    ) -> Result<ProspectEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_prospect");
        let result = sqlx::query_as::<_, ProspectEntity>(&format!(
            r#"
            INSERT INTO prospects (first_name, last_name, email, phone, referred_by, is_active, notes)
            VALUES ($1, $2, $3, $4, $5, COALESCE($6, TRUE), $7)
            RETURNING {COLUMNS}
            "#,
        ))
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(request.referred_by)
        .bind(request.is_active)
        .bind(&request.notes)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a prospect by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ProspectEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_prospect_by_id");
        let result = sqlx::query_as::<_, ProspectEntity>(&format!(
            "SELECT {COLUMNS} FROM prospects WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List prospects, optionally filtered by search term and active flag.
    pub async fn list(&self, query: &ProspectQuery) -> Result<Vec<ProspectEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_prospects");
        let pattern = query.search.as_deref().and_then(like_pattern);
        let result = sqlx::query_as::<_, ProspectEntity>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM prospects
            WHERE ($1::text IS NULL OR first_name ILIKE $1 OR last_name ILIKE $1 OR email ILIKE $1)
              AND ($2::boolean IS NULL OR is_active = $2)
            ORDER BY last_name, first_name
            "#,
        ))
        .bind(pattern)
        .bind(query.active)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Partially update a prospect. Returns None when the ID does not exist.
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateProspectRequest,
    ) -> Result<Option<ProspectEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_prospect");
        let result = sqlx::query_as::<_, ProspectEntity>(&format!(
            r#"
            UPDATE prospects SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone),
                referred_by = COALESCE($6, referred_by),
                is_active = COALESCE($7, is_active),
                notes = COALESCE($8, notes),
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
        .bind(request.referred_by)
        .bind(request.is_active)
        .bind(&request.notes)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a prospect. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_prospect");
        let result = sqlx::query("DELETE FROM prospects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }
}
