//! Transaction ledger: the stored record type and the balance math built on it.
//!
//! Every amount here is in USD. Conversion to the display currency happens
//! at the edges through [`CurrencyService`](crate::currency::CurrencyService).

pub mod error;
pub mod summary;
pub mod transaction;

#[cfg(test)]
mod props;

pub use error::LedgerError;
pub use summary::{
    ExpenseShare, MonthKey, MonthlySummary, available_months, balance, expense_breakdown,
    monthly_summaries, total_expenses, total_income, transactions_in_month,
};
pub use transaction::{MAX_AMOUNT, NewTransaction, Transaction, TransactionKind};
