//! User repository for database operations.

use domain::models::user::{CreateUserRequest, UpdateUserRequest, UserQuery};
use shared::search::like_pattern;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::UserEntity;
use crate::metrics::QueryTimer;

const COLUMNS: &str = "id, email, display_name, role, is_active, created_at, updated_at";

/// Repository for user-account database operations.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user. Role defaults to `member`. Emails are unique.
    pub async fn create(&self, request: &CreateUserRequest) -> Result<UserEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_user");
        let result = sqlx::query_as::<_, UserEntity>(&format!(
            r#"
            INSERT INTO users (email, display_name, role, is_active)
            VALUES ($1, $2, COALESCE($3::user_role, 'member'), COALESCE($4, TRUE))
            RETURNING {COLUMNS}
            "#,
        ))
        .bind(&request.email)
        .bind(&request.display_name)
        .bind(request.role.as_deref())
        .bind(request.is_active)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a user by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_user_by_id");
        let result = sqlx::query_as::<_, UserEntity>(&format!(
            "SELECT {COLUMNS} FROM users WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List users, optionally filtered by search term, active flag and role.
    pub async fn list(&self, query: &UserQuery) -> Result<Vec<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_users");
        let pattern = query.search.as_deref().and_then(like_pattern);
        let result = sqlx::query_as::<_, UserEntity>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM users
            WHERE ($1::text IS NULL OR email ILIKE $1 OR display_name ILIKE $1)
              AND ($2::boolean IS NULL OR is_active = $2)
              AND ($3::text IS NULL OR role::text = $3)
            ORDER BY email
            "#,
        ))
        .bind(pattern)
        .bind(query.active)
        .bind(query.role.as_deref())
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Partially update a user. Returns None when the ID does not exist.
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateUserRequest,
    ) -> Result<Option<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_user");
        let result = sqlx::query_as::<_, UserEntity>(&format!(
            r#"
            UPDATE users SET
                email = COALESCE($2, email),
                display_name = COALESCE($3, display_name),
                role = COALESCE($4::user_role, role),
                is_active = COALESCE($5, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(&request.email)
        .bind(&request.display_name)
        .bind(request.role.as_deref())
        .bind(request.is_active)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a user. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_user");
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }
}
