//! Area repository for database operations.

use domain::models::area::{AreaQuery, CreateAreaRequest, UpdateAreaRequest};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::AreaEntity;
use crate::metrics::QueryTimer;

const COLUMNS: &str = "id, name, code, color, community_id, boundary, created_at, updated_at";

// Boundary documents can run to megabytes of GeoJSON, so list queries
// project them away unless the caller asks.
const COLUMNS_NO_BOUNDARY: &str =
    "id, name, code, color, community_id, NULL::jsonb AS boundary, created_at, updated_at";

/// Repository for area-related database operations.
#[derive(Clone)]
pub struct AreaRepository {
    pool: PgPool,
}

impl AreaRepository {
    /// Creates a new AreaRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new area. Codes are unique.
    pub async fn create(&self, request: &CreateAreaRequest) -> Result<AreaEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_area");
        let result = sqlx::query_as::<_, AreaEntity>(&format!(
            r#"
            INSERT INTO areas (name, code, color, community_id, boundary)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {COLUMNS}
            "#,
        ))
        .bind(&request.name)
        .bind(&request.code)
        .bind(&request.color)
        .bind(request.community_id)
        .bind(&request.boundary)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find an area by ID, boundary included.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<AreaEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_area_by_id");
        let result = sqlx::query_as::<_, AreaEntity>(&format!(
            "SELECT {COLUMNS} FROM areas WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List areas, optionally filtered by community.
    pub async fn list(&self, query: &AreaQuery) -> Result<Vec<AreaEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_areas");
        let columns = if query.include_boundary.unwrap_or(false) {
            COLUMNS
        } else {
            COLUMNS_NO_BOUNDARY
        };
        let result = sqlx::query_as::<_, AreaEntity>(&format!(
            r#"
            SELECT {columns}
            FROM areas
            WHERE ($1::uuid IS NULL OR community_id = $1)
            ORDER BY name
            "#,
        ))
        .bind(query.community_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Partially update an area. Returns None when the ID does not exist.
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateAreaRequest,
    ) -> Result<Option<AreaEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_area");
        let result = sqlx::query_as::<_, AreaEntity>(&format!(
            r#"
            UPDATE areas SET
                name = COALESCE($2, name),
                code = COALESCE($3, code),
                color = COALESCE($4, color),
                community_id = COALESCE($5, community_id),
                boundary = COALESCE($6, boundary),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(&request.name)
        .bind(&request.code)
        .bind(&request.color)
        .bind(request.community_id)
        .bind(&request.boundary)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete an area. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_area");
        let result = sqlx::query("DELETE FROM areas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }
}
