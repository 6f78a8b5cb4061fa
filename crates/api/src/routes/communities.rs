//! Community resource handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use domain::models::community::{CommunityQuery, CreateCommunityRequest, UpdateCommunityRequest};
use domain::models::Community;
use persistence::repositories::CommunityRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::response::ApiResponse;

pub async fn list_communities(
    State(state): State<AppState>,
    Query(query): Query<CommunityQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = CommunityRepository::new(state.pool()?);
    let communities: Vec<Community> = repo
        .list(&query)
        .await?
        .into_iter()
        .map(Community::from)
        .collect();
    Ok(ApiResponse::ok(communities))
}

pub async fn get_community(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = CommunityRepository::new(state.pool()?);
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Community not found".into()))?;
    Ok(ApiResponse::ok(Community::from(entity)))
}

pub async fn create_community(
    State(state): State<AppState>,
    Json(request): Json<CreateCommunityRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;
    let repo = CommunityRepository::new(state.pool()?);
    let entity = repo.create(&request).await?;
    tracing::info!(community_id = %entity.id, code = %entity.code, "Created community");
    Ok((
        StatusCode::CREATED,
        ApiResponse::ok(Community::from(entity)),
    ))
}

pub async fn update_community(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCommunityRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;
    let repo = CommunityRepository::new(state.pool()?);
    let entity = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Community not found".into()))?;
    tracing::info!(community_id = %id, "Updated community");
    Ok(ApiResponse::ok(Community::from(entity)))
}

pub async fn delete_community(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = CommunityRepository::new(state.pool()?);
    if !repo.delete(id).await? {
        return Err(ApiError::NotFound("Community not found".into()));
    }
    tracing::info!(community_id = %id, "Deleted community");
    Ok(ApiResponse::ok(serde_json::json!({ "id": id })))
}
