//! Currency error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while building an exchange-rate table.
///
/// Conversion and formatting never fail; only table construction is checked.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurrencyError {
    /// A rate was zero or negative.
    #[error("rate for {code} must be positive, got {rate}")]
    NonPositiveRate {
        /// Currency code.
        code: String,
        /// Offending rate.
        rate: Decimal,
    },

    /// The base currency was given a rate other than one.
    #[error("base currency USD must have rate 1, got {0}")]
    BaseRateNotOne(Decimal),

    /// A currency code was empty.
    #[error("currency code must not be empty")]
    EmptyCode,
}
