//! Transaction repository for database operations and aggregate statistics.

use domain::models::transaction::{
    CreateTransactionRequest, MethodTotal, TransactionQuery, TransactionStats, TypeTotal,
    UpdateTransactionRequest,
};
use domain::models::{PaymentMethod, TransactionType};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::TransactionEntity;
use crate::metrics::QueryTimer;

const COLUMNS: &str = "id, payor_id, payee_id, transaction_type, method, amount_cents, data, \
                       sort_order, created_at, updated_at";

/// Repository for transaction-related database operations.
#[derive(Clone)]
pub struct TransactionRepository {
    pool: PgPool,
}

impl TransactionRepository {
    /// Creates a new TransactionRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new transaction.
    pub async fn create(
        &self,
        request: &CreateTransactionRequest,
    ) -> Result<TransactionEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_transaction");
        let result = sqlx::query_as::<_, TransactionEntity>(&format!(
            r#"
            INSERT INTO transactions (payor_id, payee_id, transaction_type, method,
                                      amount_cents, data, sort_order)
            VALUES ($1, $2, $3::transaction_type, $4::payment_method, $5, $6, COALESCE($7, 0))
            RETURNING {COLUMNS}
            "#,
        ))
        .bind(request.payor_id)
        .bind(request.payee_id)
        .bind(&request.transaction_type)
        .bind(&request.method)
        .bind(request.amount_cents)
        .bind(&request.data)
        .bind(request.sort_order)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a transaction by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<TransactionEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_transaction_by_id");
        let result = sqlx::query_as::<_, TransactionEntity>(&format!(
            "SELECT {COLUMNS} FROM transactions WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List transactions, optionally filtered by person, type and method.
    ///
    /// The person filter matches either side of the transaction.
    pub async fn list(
        &self,
        query: &TransactionQuery,
    ) -> Result<Vec<TransactionEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_transactions");
        let result = sqlx::query_as::<_, TransactionEntity>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM transactions
            WHERE ($1::uuid IS NULL OR payor_id = $1 OR payee_id = $1)
              AND ($2::text IS NULL OR transaction_type::text = $2)
              AND ($3::text IS NULL OR method::text = $3)
            ORDER BY sort_order, created_at DESC
            "#,
        ))
        .bind(query.person_id)
        .bind(query.transaction_type.as_deref())
        .bind(query.method.as_deref())
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Partially update a transaction. Returns None when the ID does not exist.
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateTransactionRequest,
    ) -> Result<Option<TransactionEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_transaction");
        let result = sqlx::query_as::<_, TransactionEntity>(&format!(
            r#"
            UPDATE transactions SET
                payor_id = COALESCE($2, payor_id),
                payee_id = COALESCE($3, payee_id),
                transaction_type = COALESCE($4::transaction_type, transaction_type),
                method = COALESCE($5::payment_method, method),
                amount_cents = COALESCE($6, amount_cents),
                data = COALESCE($7, data),
                sort_order = COALESCE($8, sort_order),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(request.payor_id)
        .bind(request.payee_id)
        .bind(request.transaction_type.as_deref())
        .bind(request.method.as_deref())
        .bind(request.amount_cents)
        .bind(&request.data)
        .bind(request.sort_order)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a transaction. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_transaction");
        let result = sqlx::query("DELETE FROM transactions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }

    /// Aggregate statistics over the whole ledger.
    ///
    /// The four queries run sequentially without a shared snapshot; writes
    /// landing between them can leave the pieces slightly inconsistent.
    pub async fn stats(&self) -> Result<TransactionStats, sqlx::Error> {
        let timer = QueryTimer::new("transaction_stats");

        let total_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM transactions")
            .fetch_one(&self.pool)
            .await?;

        let by_type: Vec<(TransactionType, i64, i64)> = sqlx::query_as(
            r#"
            SELECT transaction_type, COUNT(*), COALESCE(SUM(amount_cents), 0)::bigint
            FROM transactions
            GROUP BY transaction_type
            ORDER BY transaction_type
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let by_method: Vec<(PaymentMethod, i64, i64)> = sqlx::query_as(
            r#"
            SELECT method, COUNT(*), COALESCE(SUM(amount_cents), 0)::bigint
            FROM transactions
            GROUP BY method
            ORDER BY method
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let net_cents: i64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(
                CASE WHEN transaction_type = 'payment' THEN amount_cents ELSE -amount_cents END
            ), 0)::bigint
            FROM transactions
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        timer.record();
        Ok(TransactionStats {
            total_count,
            totals_by_type: by_type
                .into_iter()
                .map(|(transaction_type, count, total_cents)| TypeTotal {
                    transaction_type,
                    count,
                    total_cents,
                })
                .collect(),
            totals_by_method: by_method
                .into_iter()
                .map(|(method, count, total_cents)| MethodTotal {
                    method,
                    count,
                    total_cents,
                })
                .collect(),
            net_cents,
        })
    }
}
