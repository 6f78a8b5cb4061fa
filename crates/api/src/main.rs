use anyhow::Result;
use tracing::{info, warn};

use emma_api::{app, config, middleware};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::load()?;

    // Initialize logging and metrics
    middleware::logging::init_logging(&config.logging);
    middleware::metrics::init_metrics();

    info!("Starting Emma API v{}", env!("CARGO_PKG_VERSION"));

    // Create database pool. An empty URL is a valid degraded state: the app
    // serves, and the storage guard answers every resource request with 500.
    let pool = persistence::db::try_create_pool(&config.database.pool_config()).await?;

    match &pool {
        Some(pool) => {
            info!("Running database migrations...");
            sqlx::migrate!("../persistence/src/migrations")
                .run(pool)
                .await?;
            info!("Migrations completed");
        }
        None => {
            warn!("No database URL configured; serving with storage unconfigured");
        }
    }

    // Build application
    let app = app::create_app(config.clone(), pool);

    // Start server
    let addr = config.socket_addr();
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
