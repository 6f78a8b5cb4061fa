//! Transaction resource handlers and the aggregate stats endpoint.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use domain::models::transaction::{
    CreateTransactionRequest, TransactionQuery, UpdateTransactionRequest,
};
use domain::models::Transaction;
use persistence::repositories::TransactionRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::response::ApiResponse;

pub async fn list_transactions(
    State(state): State<AppState>,
    Query(query): Query<TransactionQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = TransactionRepository::new(state.pool()?);
    let transactions: Vec<Transaction> = repo
        .list(&query)
        .await?
        .into_iter()
        .map(Transaction::from)
        .collect();
    Ok(ApiResponse::ok(transactions))
}

pub async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = TransactionRepository::new(state.pool()?);
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Transaction not found".into()))?;
    Ok(ApiResponse::ok(Transaction::from(entity)))
}

pub async fn create_transaction(
    State(state): State<AppState>,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;
    let repo = TransactionRepository::new(state.pool()?);
    let entity = repo.create(&request).await?;
    tracing::info!(
        transaction_id = %entity.id,
        transaction_type = %entity.transaction_type,
        amount_cents = entity.amount_cents,
        "Created transaction"
    );
    Ok((
        StatusCode::CREATED,
        ApiResponse::ok(Transaction::from(entity)),
    ))
}

pub async fn update_transaction(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTransactionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;
    let repo = TransactionRepository::new(state.pool()?);
    let entity = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Transaction not found".into()))?;
    tracing::info!(transaction_id = %id, "Updated transaction");
    Ok(ApiResponse::ok(Transaction::from(entity)))
}

pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = TransactionRepository::new(state.pool()?);
    if !repo.delete(id).await? {
        return Err(ApiError::NotFound("Transaction not found".into()));
    }
    tracing::info!(transaction_id = %id, "Deleted transaction");
    Ok(ApiResponse::ok(serde_json::json!({ "id": id })))
}

/// Aggregate totals across all transactions. The component queries run
/// without a shared snapshot, so counts may drift under concurrent writes.
pub async fn transaction_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = TransactionRepository::new(state.pool()?);
    let stats = repo.stats().await?;
    Ok(ApiResponse::ok(stats))
}
