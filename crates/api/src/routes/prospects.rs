//! Prospect resource handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use domain::models::prospect::{CreateProspectRequest, ProspectQuery, UpdateProspectRequest};
use domain::models::Prospect;
use persistence::repositories::ProspectRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::response::ApiResponse;

pub async fn list_prospects(
    State(state): State<AppState>,
    Query(query): Query<ProspectQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = ProspectRepository::new(state.pool()?);
    let prospects: Vec<Prospect> = repo
        .list(&query)
        .await?
        .into_iter()
        .map(Prospect::from)
        .collect();
    Ok(ApiResponse::ok(prospects))
}

pub async fn get_prospect(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = ProspectRepository::new(state.pool()?);
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Prospect not found".into()))?;
    Ok(ApiResponse::ok(Prospect::from(entity)))
}

pub async fn create_prospect(
    State(state): State<AppState>,
    Json(request): Json<CreateProspectRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;
    let repo = ProspectRepository::new(state.pool()?);
    let entity = repo.create(&request).await?;
    tracing::info!(prospect_id = %entity.id, "Created prospect");
    Ok((StatusCode::CREATED, ApiResponse::ok(Prospect::from(entity))))
}

pub async fn update_prospect(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateProspectRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;
    let repo = ProspectRepository::new(state.pool()?);
    let entity = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Prospect not found".into()))?;
    tracing::info!(prospect_id = %id, "Updated prospect");
    Ok(ApiResponse::ok(Prospect::from(entity)))
}

pub async fn delete_prospect(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = ProspectRepository::new(state.pool()?);
    if !repo.delete(id).await? {
        return Err(ApiError::NotFound("Prospect not found".into()));
    }
    tracing::info!(prospect_id = %id, "Deleted prospect");
    Ok(ApiResponse::ok(serde_json::json!({ "id": id })))
}
