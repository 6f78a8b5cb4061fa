//! Database connection pool management.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

/// Database configuration.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

/// Creates a PostgreSQL connection pool with the given configuration.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect(&config.url)
        .await
}

/// Creates a pool if the datastore is configured.
///
/// An empty URL means the datastore credentials were never provided. The
/// caller serves requests anyway; the storage guard answers everything with
/// a uniform 500 until a pool exists.
pub async fn try_create_pool(config: &DatabaseConfig) -> Result<Option<PgPool>, sqlx::Error> {
    if config.url.is_empty() {
        return Ok(None);
    }
    create_pool(config).await.map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_try_create_pool_empty_url() {
        let config = DatabaseConfig {
            url: String::new(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout_secs: 5,
            idle_timeout_secs: 60,
        };
        let pool = try_create_pool(&config).await.unwrap();
        assert!(pool.is_none());
    }
}
