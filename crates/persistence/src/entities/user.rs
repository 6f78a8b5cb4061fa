//! User database entity.

use chrono::{DateTime, Utc};
use domain::models::{User, UserRole};
use sqlx::FromRow;
use uuid::Uuid;

/// Row in the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub id: Uuid,
    pub email: String,
    pub display_name: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserEntity> for User {
    fn from(entity: UserEntity) -> Self {
        User {
            id: entity.id,
            email: entity.email,
            display_name: entity.display_name,
            role: entity.role,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
