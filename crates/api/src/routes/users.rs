//! User resource handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use domain::models::user::{CreateUserRequest, UpdateUserRequest, UserQuery};
use domain::models::User;
use persistence::repositories::UserRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::response::ApiResponse;

pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = UserRepository::new(state.pool()?);
    let users: Vec<User> = repo.list(&query).await?.into_iter().map(User::from).collect();
    Ok(ApiResponse::ok(users))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = UserRepository::new(state.pool()?);
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
    Ok(ApiResponse::ok(User::from(entity)))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;
    let repo = UserRepository::new(state.pool()?);
    let entity = repo.create(&request).await?;
    tracing::info!(user_id = %entity.id, role = %entity.role, "Created user");
    Ok((StatusCode::CREATED, ApiResponse::ok(User::from(entity))))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;
    let repo = UserRepository::new(state.pool()?);
    let entity = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
    tracing::info!(user_id = %id, "Updated user");
    Ok(ApiResponse::ok(User::from(entity)))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = UserRepository::new(state.pool()?);
    if !repo.delete(id).await? {
        return Err(ApiError::NotFound("User not found".into()));
    }
    tracing::info!(user_id = %id, "Deleted user");
    Ok(ApiResponse::ok(serde_json::json!({ "id": id })))
}
