//! Warrior resource handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use domain::models::warrior::{CreateWarriorRequest, UpdateWarriorRequest, WarriorQuery};
use domain::models::Warrior;
use persistence::repositories::WarriorRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::response::ApiResponse;

pub async fn list_warriors(
    State(state): State<AppState>,
    Query(query): Query<WarriorQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = WarriorRepository::new(state.pool()?);
    let warriors: Vec<Warrior> = repo
        .list(&query)
        .await?
        .into_iter()
        .map(Warrior::from)
        .collect();
    Ok(ApiResponse::ok(warriors))
}

pub async fn get_warrior(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = WarriorRepository::new(state.pool()?);
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Warrior not found".into()))?;
    Ok(ApiResponse::ok(Warrior::from(entity)))
}

pub async fn create_warrior(
    State(state): State<AppState>,
    Json(request): Json<CreateWarriorRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;
    let repo = WarriorRepository::new(state.pool()?);
    let entity = repo.create(&request).await?;
    tracing::info!(warrior_id = %entity.id, status = %entity.status, "Created warrior");
    Ok((StatusCode::CREATED, ApiResponse::ok(Warrior::from(entity))))
}

pub async fn update_warrior(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateWarriorRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;
    let repo = WarriorRepository::new(state.pool()?);
    let entity = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Warrior not found".into()))?;
    tracing::info!(warrior_id = %id, "Updated warrior");
    Ok(ApiResponse::ok(Warrior::from(entity)))
}

pub async fn delete_warrior(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = WarriorRepository::new(state.pool()?);
    if !repo.delete(id).await? {
        return Err(ApiError::NotFound("Warrior not found".into()));
    }
    tracing::info!(warrior_id = %id, "Deleted warrior");
    Ok(ApiResponse::ok(serde_json::json!({ "id": id })))
}
