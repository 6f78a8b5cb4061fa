use axum::{middleware, routing::get, Router};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::error::ApiError;
use crate::middleware::{metrics_handler, metrics_middleware, require_storage, trace_id};
use crate::routes::{
    areas, communities, events, health, igroups, people, prospects, public_config, registrants,
    transactions, users, venues, warriors,
};

#[derive(Clone)]
pub struct AppState {
    /// None when the datastore was never configured; the storage guard then
    /// rejects every resource request.
    pub pool: Option<PgPool>,
    pub config: Arc<Config>,
}

impl AppState {
    /// The pool, or the unconfigured-storage error.
    pub fn pool(&self) -> Result<PgPool, ApiError> {
        self.pool.clone().ok_or(ApiError::Unconfigured)
    }
}

pub fn create_app(config: Config, pool: Option<PgPool>) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        pool,
        config: config.clone(),
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Resource routes, all behind the storage guard
    let resource_routes = Router::new()
        .route(
            "/api/v1/people",
            get(people::list_people).post(people::create_person),
        )
        .route(
            "/api/v1/people/:id",
            get(people::get_person)
                .put(people::update_person)
                .delete(people::delete_person),
        )
        .route(
            "/api/v1/warriors",
            get(warriors::list_warriors).post(warriors::create_warrior),
        )
        .route(
            "/api/v1/warriors/:id",
            get(warriors::get_warrior)
                .put(warriors::update_warrior)
                .delete(warriors::delete_warrior),
        )
        .route(
            "/api/v1/prospects",
            get(prospects::list_prospects).post(prospects::create_prospect),
        )
        .route(
            "/api/v1/prospects/:id",
            get(prospects::get_prospect)
                .put(prospects::update_prospect)
                .delete(prospects::delete_prospect),
        )
        .route(
            "/api/v1/registrants",
            get(registrants::list_registrants).post(registrants::create_registrant),
        )
        .route(
            "/api/v1/registrants/:id",
            get(registrants::get_registrant)
                .put(registrants::update_registrant)
                .delete(registrants::delete_registrant),
        )
        .route(
            "/api/v1/igroups",
            get(igroups::list_igroups).post(igroups::create_igroup),
        )
        .route(
            "/api/v1/igroups/:id",
            get(igroups::get_igroup)
                .put(igroups::update_igroup)
                .delete(igroups::delete_igroup),
        )
        .route(
            "/api/v1/areas",
            get(areas::list_areas).post(areas::create_area),
        )
        .route(
            "/api/v1/areas/:id",
            get(areas::get_area)
                .put(areas::update_area)
                .delete(areas::delete_area),
        )
        .route(
            "/api/v1/communities",
            get(communities::list_communities).post(communities::create_community),
        )
        .route(
            "/api/v1/communities/:id",
            get(communities::get_community)
                .put(communities::update_community)
                .delete(communities::delete_community),
        )
        .route(
            "/api/v1/venues",
            get(venues::list_venues).post(venues::create_venue),
        )
        .route(
            "/api/v1/venues/:id",
            get(venues::get_venue)
                .put(venues::update_venue)
                .delete(venues::delete_venue),
        )
        .route(
            "/api/v1/events",
            get(events::list_events).post(events::create_event),
        )
        .route(
            "/api/v1/events/:id",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
        .route(
            "/api/v1/transactions",
            get(transactions::list_transactions).post(transactions::create_transaction),
        )
        .route(
            "/api/v1/transactions/stats",
            get(transactions::transaction_stats),
        )
        .route(
            "/api/v1/transactions/:id",
            get(transactions::get_transaction)
                .put(transactions::update_transaction)
                .delete(transactions::delete_transaction),
        )
        .route(
            "/api/v1/users",
            get(users::list_users).post(users::create_user),
        )
        .route(
            "/api/v1/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_storage,
        ));

    // Public routes (no storage guard)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/api/v1/config/public", get(public_config::public_config))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(resource_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
