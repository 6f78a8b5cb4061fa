//! I-Group resource handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use domain::models::igroup::{CreateIGroupRequest, IGroupQuery, UpdateIGroupRequest};
use domain::models::IGroup;
use persistence::repositories::IGroupRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::response::ApiResponse;

pub async fn list_igroups(
    State(state): State<AppState>,
    Query(query): Query<IGroupQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = IGroupRepository::new(state.pool()?);
    let igroups: Vec<IGroup> = repo
        .list(&query)
        .await?
        .into_iter()
        .map(IGroup::from)
        .collect();
    Ok(ApiResponse::ok(igroups))
}

pub async fn get_igroup(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = IGroupRepository::new(state.pool()?);
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("I-Group not found".into()))?;
    Ok(ApiResponse::ok(IGroup::from(entity)))
}

pub async fn create_igroup(
    State(state): State<AppState>,
    Json(request): Json<CreateIGroupRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;
    let repo = IGroupRepository::new(state.pool()?);
    let entity = repo.create(&request).await?;
    tracing::info!(igroup_id = %entity.id, "Created I-Group");
    Ok((StatusCode::CREATED, ApiResponse::ok(IGroup::from(entity))))
}

pub async fn update_igroup(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateIGroupRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;
    let repo = IGroupRepository::new(state.pool()?);
    let entity = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("I-Group not found".into()))?;
    tracing::info!(igroup_id = %id, "Updated I-Group");
    Ok(ApiResponse::ok(IGroup::from(entity)))
}

pub async fn delete_igroup(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = IGroupRepository::new(state.pool()?);
    if !repo.delete(id).await? {
        return Err(ApiError::NotFound("I-Group not found".into()));
    }
    tracing::info!(igroup_id = %id, "Deleted I-Group");
    Ok(ApiResponse::ok(serde_json::json!({ "id": id })))
}
