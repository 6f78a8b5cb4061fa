//! Person resource handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use domain::models::person::{CreatePersonRequest, PersonQuery, UpdatePersonRequest};
use domain::models::Person;
use persistence::repositories::PersonRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::response::ApiResponse;

pub async fn list_people(
    State(state): State<AppState>,
    Query(query): Query<PersonQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = PersonRepository::new(state.pool()?);
    let people: Vec<Person> = repo
        .list(&query)
        .await?
        .into_iter()
        .map(Person::from)
        .collect();
    Ok(ApiResponse::ok(people))
}

pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = PersonRepository::new(state.pool()?);
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Person not found".into()))?;
    Ok(ApiResponse::ok(Person::from(entity)))
}

pub async fn create_person(
    State(state): State<AppState>,
    Json(request): Json<CreatePersonRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;
    let repo = PersonRepository::new(state.pool()?);
    let entity = repo.create(&request).await?;
    tracing::info!(person_id = %entity.id, "Created person");
    Ok((StatusCode::CREATED, ApiResponse::ok(Person::from(entity))))
}

pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdatePersonRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;
    let repo = PersonRepository::new(state.pool()?);
    let entity = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Person not found".into()))?;
    tracing::info!(person_id = %id, "Updated person");
    Ok(ApiResponse::ok(Person::from(entity)))
}

pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = PersonRepository::new(state.pool()?);
    if !repo.delete(id).await? {
        return Err(ApiError::NotFound("Person not found".into()));
    }
    tracing::info!(person_id = %id, "Deleted person");
    Ok(ApiResponse::ok(serde_json::json!({ "id": id })))
}
