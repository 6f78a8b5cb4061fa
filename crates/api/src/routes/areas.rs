//! Area resource handlers.
//!
//! List responses omit the boundary geometry unless `include_boundary=true`
//! is passed; the polygons can run to hundreds of kilobytes per area.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use domain::models::area::{AreaQuery, CreateAreaRequest, UpdateAreaRequest};
use domain::models::Area;
use persistence::repositories::AreaRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::response::ApiResponse;

pub async fn list_areas(
    State(state): State<AppState>,
    Query(query): Query<AreaQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = AreaRepository::new(state.pool()?);
    let areas: Vec<Area> = repo
        .list(&query)
        .await?
        .into_iter()
        .map(Area::from)
        .collect();
    Ok(ApiResponse::ok(areas))
}

pub async fn get_area(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = AreaRepository::new(state.pool()?);
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Area not found".into()))?;
    Ok(ApiResponse::ok(Area::from(entity)))
}

pub async fn create_area(
    State(state): State<AppState>,
    Json(request): Json<CreateAreaRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;
    let repo = AreaRepository::new(state.pool()?);
    let entity = repo.create(&request).await?;
    tracing::info!(area_id = %entity.id, "Created area");
    Ok((StatusCode::CREATED, ApiResponse::ok(Area::from(entity))))
}

pub async fn update_area(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAreaRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;
    let repo = AreaRepository::new(state.pool()?);
    let entity = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Area not found".into()))?;
    tracing::info!(area_id = %id, "Updated area");
    Ok(ApiResponse::ok(Area::from(entity)))
}

pub async fn delete_area(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = AreaRepository::new(state.pool()?);
    if !repo.delete(id).await? {
        return Err(ApiError::NotFound("Area not found".into()));
    }
    tracing::info!(area_id = %id, "Deleted area");
    Ok(ApiResponse::ok(serde_json::json!({ "id": id })))
}
