//! Ledger error types.

use fintrack_shared::AppError;
use fintrack_shared::types::TransactionId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Ledger-related errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// Title is empty or whitespace.
    #[error("Transaction title cannot be empty")]
    EmptyTitle,

    /// Amount cannot be negative; direction is carried by the income flag.
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(Decimal),

    /// Amount exceeds what the ledger accepts.
    #[error("Amount is too large: {0}")]
    AmountTooLarge(Decimal),

    /// Transaction not found.
    #[error("Transaction not found: {0}")]
    NotFound(TransactionId),
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::NotFound(_) => Self::NotFound(err.to_string()),
            LedgerError::EmptyTitle
            | LedgerError::NegativeAmount(_)
            | LedgerError::AmountTooLarge(_) => {
                Self::Validation(err.to_string())
            }
        }
    }
}
