//! Event resource handlers.
//!
//! Every event returned by these handlers is wrapped in [`EventResponse`],
//! which carries the publication statuses derived at response time.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum::Json;
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use domain::models::event::{CreateEventRequest, EventQuery, UpdateEventRequest};
use domain::models::{Event, EventResponse};
use persistence::repositories::EventRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::response::ApiResponse;

pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<EventQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = EventRepository::new(state.pool()?);
    let now = Utc::now();
    let events: Vec<EventResponse> = repo
        .list(&query)
        .await?
        .into_iter()
        .map(|entity| EventResponse::at(Event::from(entity), now))
        .collect();
    Ok(ApiResponse::ok(events))
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = EventRepository::new(state.pool()?);
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".into()))?;
    Ok(ApiResponse::ok(EventResponse::at(
        Event::from(entity),
        Utc::now(),
    )))
}

pub async fn create_event(
    State(state): State<AppState>,
    Json(request): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;
    let repo = EventRepository::new(state.pool()?);
    let entity = repo.create(&request).await?;
    tracing::info!(event_id = %entity.id, event_type = %entity.event_type, "Created event");
    Ok((
        StatusCode::CREATED,
        ApiResponse::ok(EventResponse::at(Event::from(entity), Utc::now())),
    ))
}

pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateEventRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;
    let repo = EventRepository::new(state.pool()?);
    let entity = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".into()))?;
    tracing::info!(event_id = %id, "Updated event");
    Ok(ApiResponse::ok(EventResponse::at(
        Event::from(entity),
        Utc::now(),
    )))
}

pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = EventRepository::new(state.pool()?);
    if !repo.delete(id).await? {
        return Err(ApiError::NotFound("Event not found".into()));
    }
    tracing::info!(event_id = %id, "Deleted event");
    Ok(ApiResponse::ok(serde_json::json!({ "id": id })))
}
