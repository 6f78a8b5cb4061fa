//! Registrant resource handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use domain::models::registrant::{
    CreateRegistrantRequest, RegistrantQuery, UpdateRegistrantRequest,
};
use domain::models::Registrant;
use persistence::repositories::RegistrantRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::response::ApiResponse;

pub async fn list_registrants(
    State(state): State<AppState>,
    Query(query): Query<RegistrantQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = RegistrantRepository::new(state.pool()?);
    let registrants: Vec<Registrant> = repo
        .list(&query)
        .await?
        .into_iter()
        .map(Registrant::from)
        .collect();
    Ok(ApiResponse::ok(registrants))
}

pub async fn get_registrant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = RegistrantRepository::new(state.pool()?);
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Registrant not found".into()))?;
    Ok(ApiResponse::ok(Registrant::from(entity)))
}

pub async fn create_registrant(
    State(state): State<AppState>,
    Json(request): Json<CreateRegistrantRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;
    let repo = RegistrantRepository::new(state.pool()?);
    let entity = repo.create(&request).await?;
    tracing::info!(
        registrant_id = %entity.id,
        event_id = %entity.event_id,
        audience = %entity.audience,
        "Created registrant"
    );
    Ok((
        StatusCode::CREATED,
        ApiResponse::ok(Registrant::from(entity)),
    ))
}

pub async fn update_registrant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRegistrantRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;
    let repo = RegistrantRepository::new(state.pool()?);
    let entity = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Registrant not found".into()))?;
    tracing::info!(registrant_id = %id, "Updated registrant");
    Ok(ApiResponse::ok(Registrant::from(entity)))
}

pub async fn delete_registrant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = RegistrantRepository::new(state.pool()?);
    if !repo.delete(id).await? {
        return Err(ApiError::NotFound("Registrant not found".into()));
    }
    tracing::info!(registrant_id = %id, "Deleted registrant");
    Ok(ApiResponse::ok(serde_json::json!({ "id": id })))
}
