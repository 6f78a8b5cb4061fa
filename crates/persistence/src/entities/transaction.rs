//! Transaction database entity.

use chrono::{DateTime, Utc};
use domain::models::{PaymentMethod, Transaction, TransactionType};
use sqlx::FromRow;
use uuid::Uuid;

/// Row in the `transactions` table.
#[derive(Debug, Clone, FromRow)]
pub struct TransactionEntity {
    pub id: Uuid,
    pub payor_id: Option<Uuid>,
    pub payee_id: Option<Uuid>,
    pub transaction_type: TransactionType,
    pub method: PaymentMethod,
    pub amount_cents: i64,
    pub data: Option<serde_json::Value>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TransactionEntity> for Transaction {
    fn from(entity: TransactionEntity) -> Self {
        Transaction {
            id: entity.id,
            payor_id: entity.payor_id,
            payee_id: entity.payee_id,
            transaction_type: entity.transaction_type,
            method: entity.method,
            amount_cents: entity.amount_cents,
            data: entity.data,
            sort_order: entity.sort_order,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
