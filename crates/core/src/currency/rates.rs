//! Fixed exchange-rate table keyed by currency code.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::error::CurrencyError;

/// Exchange rates expressed as units of currency per one USD.
///
/// The table is static for the life of the process. `USD` is always present
/// with a rate of exactly one and every rate is strictly positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeRateTable {
    rates: BTreeMap<String, Decimal>,
}

impl ExchangeRateTable {
    /// Code of the canonical storage currency.
    pub const BASE: &'static str = "USD";

    /// The approximate rates shipped with the application.
    #[must_use]
    pub fn standard() -> Self {
        let rates = [
            (Self::BASE, Decimal::ONE),
            ("MXN", Decimal::new(17, 0)),
            ("JPY", Decimal::new(150, 0)),
            ("SAR", Decimal::new(375, 2)),
        ]
        .into_iter()
        .map(|(code, rate)| (code.to_string(), rate))
        .collect();

        Self { rates }
    }

    /// Builds a table from arbitrary rates.
    ///
    /// Codes are upper-cased. `USD` is added with rate one when missing.
    ///
    /// # Errors
    ///
    /// Returns an error for empty codes, non-positive rates, or a USD rate
    /// other than one.
    pub fn from_rates<I, K>(rates: I) -> Result<Self, CurrencyError>
    where
        I: IntoIterator<Item = (K, Decimal)>,
        K: Into<String>,
    {
        let mut table = BTreeMap::new();
        for (code, rate) in rates {
            let code = code.into().trim().to_ascii_uppercase();
            if code.is_empty() {
                return Err(CurrencyError::EmptyCode);
            }
            if rate <= Decimal::ZERO {
                return Err(CurrencyError::NonPositiveRate { code, rate });
            }
            if code == Self::BASE && rate != Decimal::ONE {
                return Err(CurrencyError::BaseRateNotOne(rate));
            }
            table.insert(code, rate);
        }
        table
            .entry(Self::BASE.to_string())
            .or_insert(Decimal::ONE);

        Ok(Self { rates: table })
    }

    /// Returns the rate for `code`, if the table knows it.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<Decimal> {
        self.rates.get(&code.to_ascii_uppercase()).copied()
    }

    /// Returns the rate for `code`, or one for unknown codes.
    ///
    /// Unknown codes convert as identity rather than failing.
    #[must_use]
    pub fn rate(&self, code: &str) -> Decimal {
        self.get(code).unwrap_or(Decimal::ONE)
    }

    /// Iterates over `(code, rate)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.rates.iter().map(|(code, rate)| (code.as_str(), *rate))
    }
}

impl Default for ExchangeRateTable {
    fn default() -> Self {
        Self::standard()
    }
}
