//! Community repository for database operations.

use domain::models::community::{CommunityQuery, CreateCommunityRequest, UpdateCommunityRequest};
use shared::search::like_pattern;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::CommunityEntity;
use crate::metrics::QueryTimer;

const COLUMNS: &str = "id, name, code, color, created_at, updated_at";

/// Repository for community-related database operations.
#[derive(Clone)]
pub struct CommunityRepository {
    pool: PgPool,
}

impl CommunityRepository {
    /// Creates a new CommunityRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new community. Codes are unique.
    pub async fn create(
        &self,
        request: &CreateCommunityRequest,
    ) -> Result<CommunityEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_community");
        let result = sqlx::query_as::<_, CommunityEntity>(&format!(
            r#"
            INSERT INTO communities (name, code, color)
            VALUES ($1, $2, $3)
            RETURNING {COLUMNS}
            "#,
        ))
        .bind(&request.name)
        .bind(&request.code)
        .bind(&request.color)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a community by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<CommunityEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_community_by_id");
        let result = sqlx::query_as::<_, CommunityEntity>(&format!(
            "SELECT {COLUMNS} FROM communities WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List communities, optionally filtered by search term.
    pub async fn list(&self, query: &CommunityQuery) -> Result<Vec<CommunityEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_communities");
        let pattern = query.search.as_deref().and_then(like_pattern);
        let result = sqlx::query_as::<_, CommunityEntity>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM communities
            WHERE ($1::text IS NULL OR name ILIKE $1 OR code ILIKE $1)
            ORDER BY name
            "#,
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Partially update a community. Returns None when the ID does not exist.
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateCommunityRequest,
    ) -> Result<Option<CommunityEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_community");
        let result = sqlx::query_as::<_, CommunityEntity>(&format!(
            r#"
            UPDATE communities SET
                name = COALESCE($2, name),
                code = COALESCE($3, code),
                color = COALESCE($4, color),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(&request.name)
        .bind(&request.code)
        .bind(&request.color)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a community. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_community");
        let result = sqlx::query("DELETE FROM communities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }
}
