//! Transaction domain models and aggregate statistics DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::one_of;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Kind of monetary event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "transaction_type", rename_all = "lowercase")]
pub enum TransactionType {
    Payment,
    Refund,
    Expense,
    Reimbursement,
}

impl TransactionType {
    pub const ALL: [&'static str; 4] = ["payment", "refund", "expense", "reimbursement"];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Payment => "payment",
            TransactionType::Refund => "refund",
            TransactionType::Expense => "expense",
            TransactionType::Reimbursement => "reimbursement",
        }
    }

    /// Whether this kind of transaction adds to the balance.
    pub fn is_credit(&self) -> bool {
        matches!(self, TransactionType::Payment)
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "payment" => Ok(TransactionType::Payment),
            "refund" => Ok(TransactionType::Refund),
            "expense" => Ok(TransactionType::Expense),
            "reimbursement" => Ok(TransactionType::Reimbursement),
            _ => Err(format!("Invalid transaction type: {}", s)),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the money moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "payment_method", rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Check,
    Credit,
    Debit,
    Transfer,
    Other,
}

impl PaymentMethod {
    pub const ALL: [&'static str; 6] = ["cash", "check", "credit", "debit", "transfer", "other"];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Check => "check",
            PaymentMethod::Credit => "credit",
            PaymentMethod::Debit => "debit",
            PaymentMethod::Transfer => "transfer",
            PaymentMethod::Other => "other",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "check" => Ok(PaymentMethod::Check),
            "credit" => Ok(PaymentMethod::Credit),
            "debit" => Ok(PaymentMethod::Debit),
            "transfer" => Ok(PaymentMethod::Transfer),
            "other" => Ok(PaymentMethod::Other),
            _ => Err(format!("Invalid payment method: {}", s)),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn validate_transaction_type(value: &str) -> Result<(), ValidationError> {
    one_of(value, &TransactionType::ALL, "transaction_type")
}

fn validate_payment_method(value: &str) -> Result<(), ValidationError> {
    one_of(value, &PaymentMethod::ALL, "method")
}

/// A monetary event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Transaction {
    pub id: Uuid,
    pub payor_id: Option<Uuid>,
    pub payee_id: Option<Uuid>,
    pub transaction_type: TransactionType,
    pub method: PaymentMethod,
    /// Amount in minor currency units. Always positive; direction comes from
    /// the transaction type.
    pub amount_cents: i64,
    pub data: Option<serde_json::Value>,
    /// Ordering hint for ledger displays.
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a transaction.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateTransactionRequest {
    pub payor_id: Option<Uuid>,
    pub payee_id: Option<Uuid>,

    #[validate(custom(function = "validate_transaction_type"))]
    pub transaction_type: String,

    #[validate(custom(function = "validate_payment_method"))]
    pub method: String,

    #[validate(range(min = 1, message = "Amount must be a positive integer"))]
    pub amount_cents: i64,

    pub data: Option<serde_json::Value>,

    pub sort_order: Option<i32>,
}

/// Request payload for updating a transaction. All fields optional.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateTransactionRequest {
    pub payor_id: Option<Uuid>,
    pub payee_id: Option<Uuid>,

    #[validate(custom(function = "validate_transaction_type"))]
    pub transaction_type: Option<String>,

    #[validate(custom(function = "validate_payment_method"))]
    pub method: Option<String>,

    #[validate(range(min = 1, message = "Amount must be a positive integer"))]
    pub amount_cents: Option<i64>,

    pub data: Option<serde_json::Value>,

    pub sort_order: Option<i32>,
}

/// Query parameters for listing transactions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TransactionQuery {
    /// Matches either payor or payee.
    pub person_id: Option<Uuid>,
    pub transaction_type: Option<String>,
    pub method: Option<String>,
}

/// Per-type aggregate row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TypeTotal {
    pub transaction_type: TransactionType,
    pub count: i64,
    pub total_cents: i64,
}

/// Per-method aggregate row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MethodTotal {
    pub method: PaymentMethod,
    pub count: i64,
    pub total_cents: i64,
}

/// Aggregate transaction statistics.
///
/// Computed from several independent queries with no shared snapshot, so the
/// pieces may disagree slightly if writes land mid-computation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TransactionStats {
    pub total_count: i64,
    pub totals_by_type: Vec<TypeTotal>,
    pub totals_by_method: Vec<MethodTotal>,
    /// Payments minus refunds, expenses and reimbursements, in cents.
    pub net_cents: i64,
}
