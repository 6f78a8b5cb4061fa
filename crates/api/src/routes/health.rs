//! Health check endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::app::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: DatabaseHealth,
}

/// Database health status.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DatabaseHealth {
    pub configured: bool,
    pub connected: bool,
    pub latency_ms: Option<u64>,
}

/// Simple status response for liveness/readiness probes.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Full health check endpoint.
///
/// `healthy` with a connected database, `degraded` when storage was never
/// configured (the app still serves), `unhealthy` with 503 when a configured
/// database is unreachable.
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, StatusCode> {
    let (database, status) = match &state.pool {
        Some(pool) => {
            let start = std::time::Instant::now();
            let connected = sqlx::query("SELECT 1").execute(pool).await.is_ok();
            let latency_ms = start.elapsed().as_millis() as u64;
            let database = DatabaseHealth {
                configured: true,
                connected,
                latency_ms: connected.then_some(latency_ms),
            };
            let status = if connected { "healthy" } else { "unhealthy" };
            (database, status)
        }
        None => (
            DatabaseHealth {
                configured: false,
                connected: false,
                latency_ms: None,
            },
            "degraded",
        ),
    };

    let response = HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
    };

    if status == "unhealthy" {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    } else {
        Ok(Json(response))
    }
}

/// Liveness probe endpoint.
///
/// Returns 200 OK if the process is running.
pub async fn live() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "alive".to_string(),
    })
}

/// Readiness probe endpoint.
///
/// The app accepts traffic without a configured datastore (the storage guard
/// handles resource requests), so only a configured-but-unreachable database
/// fails readiness.
pub async fn ready(State(state): State<AppState>) -> Result<Json<StatusResponse>, StatusCode> {
    if let Some(pool) = &state.pool {
        if sqlx::query("SELECT 1").execute(pool).await.is_err() {
            return Err(StatusCode::SERVICE_UNAVAILABLE);
        }
    }
    Ok(Json(StatusResponse {
        status: "ready".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_healthy() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.9.2".to_string(),
            database: DatabaseHealth {
                configured: true,
                connected: true,
                latency_ms: Some(5),
            },
        };
        assert_eq!(response.status, "healthy");
        assert!(response.database.connected);
    }

    #[test]
    fn test_health_response_degraded() {
        let response = HealthResponse {
            status: "degraded".to_string(),
            version: "0.9.2".to_string(),
            database: DatabaseHealth {
                configured: false,
                connected: false,
                latency_ms: None,
            },
        };
        assert!(!response.database.configured);
        assert!(response.database.latency_ms.is_none());
    }

    #[test]
    fn test_status_response() {
        let response = StatusResponse {
            status: "alive".to_string(),
        };
        assert_eq!(response.status, "alive");
    }
}
