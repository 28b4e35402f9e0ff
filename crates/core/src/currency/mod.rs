//! Display-currency resolution, conversion, and formatting.
//!
//! Amounts are persisted in USD. This module turns them into the display
//! currency of the active locale and back again.

pub mod error;
pub mod format;
pub mod rates;
pub mod service;

#[cfg(test)]
mod props;

pub use error::CurrencyError;
pub use format::format_amount;
pub use rates::ExchangeRateTable;
pub use service::CurrencyService;
