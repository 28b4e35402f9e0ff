//! Transaction record and the input used to create or edit one.

use chrono::{DateTime, Utc};
use fintrack_shared::types::{LocaleTag, TransactionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::LedgerError;
use crate::currency::CurrencyService;

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    /// Money in.
    Income,
    /// Money out.
    Expense,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A recorded income or expense.
///
/// `amount_usd` is always in USD and never negative, whatever the display
/// locale was when it was entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier.
    pub id: TransactionId,
    /// Free-text label.
    pub title: String,
    /// Amount in USD.
    #[serde(rename = "amountUSD")]
    pub amount_usd: Decimal,
    /// Whether the amount is income (otherwise expense).
    pub is_income: bool,
    /// When the transaction happened.
    pub date: DateTime<Utc>,
}

impl Transaction {
    /// Creates a transaction from a USD amount.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        amount_usd: Decimal,
        is_income: bool,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            title: title.into(),
            amount_usd,
            is_income,
            date,
        }
    }

    /// Income or expense.
    #[must_use]
    pub const fn kind(&self) -> TransactionKind {
        if self.is_income {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        }
    }

    /// USD amount with expenses negated.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        if self.is_income {
            self.amount_usd
        } else {
            -self.amount_usd
        }
    }

    /// Amount in the locale's display currency.
    #[must_use]
    pub fn local_amount(&self, currency: &CurrencyService, locale: &LocaleTag) -> Decimal {
        currency.convert_from_usd(self.amount_usd, locale)
    }

    /// Formatted amount in the locale's display currency.
    #[must_use]
    pub fn formatted_amount(&self, currency: &CurrencyService, locale: &LocaleTag) -> String {
        currency.display_amount(self.amount_usd, locale)
    }

    /// Replaces the editable fields, keeping the identifier.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the edit is invalid; the transaction is
    /// left unchanged in that case.
    pub fn apply_edit(
        &mut self,
        edit: NewTransaction,
        currency: &CurrencyService,
        locale: &LocaleTag,
    ) -> Result<(), LedgerError> {
        let id = self.id;
        *self = edit.into_transaction(currency, locale)?;
        self.id = id;
        Ok(())
    }
}

/// Largest amount accepted from user input: one quadrillion in the display
/// currency.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xa4c6_8000, 0x0003_8d7e, 0, false, 0);

/// User input for a transaction, with the amount in the display currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    /// Free-text label.
    pub title: String,
    /// Amount as typed, in the locale's display currency.
    pub amount_local: Decimal,
    /// Whether the amount is income.
    pub is_income: bool,
    /// When the transaction happened.
    pub date: DateTime<Utc>,
}

impl NewTransaction {
    /// Checks the title and amount.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::EmptyTitle` for a blank title and
    /// `LedgerError::NegativeAmount` for amounts below zero, and
    /// `LedgerError::AmountTooLarge` above [`MAX_AMOUNT`].
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.title.trim().is_empty() {
            return Err(LedgerError::EmptyTitle);
        }
        if self.amount_local.is_sign_negative() && !self.amount_local.is_zero() {
            return Err(LedgerError::NegativeAmount(self.amount_local));
        }
        if self.amount_local > MAX_AMOUNT {
            return Err(LedgerError::AmountTooLarge(self.amount_local));
        }
        Ok(())
    }

    /// Validates the input and converts its amount to USD for storage.
    ///
    /// # Errors
    ///
    /// See [`NewTransaction::validate`].
    pub fn into_transaction(
        self,
        currency: &CurrencyService,
        locale: &LocaleTag,
    ) -> Result<Transaction, LedgerError> {
        self.validate()?;
        let amount_usd = currency.convert_to_usd(self.amount_local, locale);
        Ok(Transaction::new(
            self.title.trim(),
            amount_usd,
            self.is_income,
            self.date,
        ))
    }
}
