//! Person repository for database operations.

use domain::models::person::{CreatePersonRequest, PersonQuery, UpdatePersonRequest};
use shared::search::like_pattern;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::PersonEntity;
use crate::metrics::QueryTimer;

const COLUMNS: &str = "id, first_name, last_name, email, phone, photo_url, photo_position, \
                       is_active, notes, created_at, updated_at";

/// Repository for person-related database operations.
#[derive(Clone)]
pub struct PersonRepository {
    pool: PgPool,
}

impl PersonRepository {
    /// Creates a new PersonRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new person.
    pub async fn create(
        &self,
        request: &CreatePersonRequest,
    ) -> Result<PersonEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_person");
        let result = sqlx::query_as::<_, PersonEntity>(&format!(
            r#"
            INSERT INTO people (first_name, last_name, email, phone, photo_url, photo_position, is_active, notes)
            VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, TRUE), $8)
            RETURNING {COLUMNS}
            "#,
        ))
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&request.photo_url)
        .bind(&request.photo_position)
        .bind(request.is_active)
        .bind(&request.notes)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a person by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<PersonEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_person_by_id");
        let result = sqlx::query_as::<_, PersonEntity>(&format!(
            "SELECT {COLUMNS} FROM people WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List people, optionally filtered by search term and active flag.
    pub async fn list(&self, query: &PersonQuery) -> Result<Vec<PersonEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_people");
        let pattern = query.search.as_deref().and_then(like_pattern);
        let result = sqlx::query_as::<_, PersonEntity>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM people
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

    /// Partially update a person. Returns None when the ID does not exist.
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdatePersonRequest,
    ) -> Result<Option<PersonEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_person");
        let result = sqlx::query_as::<_, PersonEntity>(&format!(
            r#"
            UPDATE people SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone),
                photo_url = COALESCE($6, photo_url),
                photo_position = COALESCE($7, photo_position),
                is_active = COALESCE($8, is_active),
                notes = COALESCE($9, notes),
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
        .bind(request.is_active)
        .bind(&request.notes)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a person. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_person");
        let result = sqlx::query("DELETE FROM people WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }
}
