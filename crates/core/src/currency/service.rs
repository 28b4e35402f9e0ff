//! Currency service for locale-driven conversion and display.
//!
//! The active locale is passed in explicitly on every call; the service holds
//! only the immutable rate table and can be shared freely.

use fintrack_shared::types::{Currency, LocaleTag};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

use super::format::format_amount;
use super::rates::ExchangeRateTable;

/// Currency service for conversion and display operations.
///
/// Unknown currency codes never fail: they convert at rate one and show the
/// dollar glyph.
#[derive(Debug, Clone, Default)]
pub struct CurrencyService {
    rates: ExchangeRateTable,
}

impl CurrencyService {
    /// Creates a service over the given rate table.
    #[must_use]
    pub fn new(rates: ExchangeRateTable) -> Self {
        Self { rates }
    }

    /// Returns the rate table in use.
    #[must_use]
    pub fn rates(&self) -> &ExchangeRateTable {
        &self.rates
    }

    /// Display currency derived from the locale's language.
    #[must_use]
    pub fn current_currency(&self, locale: &LocaleTag) -> Currency {
        let currency = Currency::for_language(locale.language());
        debug!(locale = %locale, currency = %currency, "Resolved display currency");
        currency
    }

    /// ISO code of the display currency (`es` → MXN, `ja` → JPY, `ar` → SAR, else USD).
    #[must_use]
    pub fn current_currency_code(&self, locale: &LocaleTag) -> &'static str {
        self.current_currency(locale).code()
    }

    /// Short glyph of the display currency.
    #[must_use]
    pub fn currency_symbol(&self, locale: &LocaleTag) -> &'static str {
        self.current_currency(locale).symbol()
    }

    fn current_rate(&self, locale: &LocaleTag) -> Decimal {
        self.rates.rate(self.current_currency_code(locale))
    }

    /// Converts a stored USD amount into the display currency.
    ///
    /// # Example
    ///
    /// ```
    /// use fintrack_core::currency::CurrencyService;
    /// use fintrack_shared::types::LocaleTag;
    /// use rust_decimal_macros::dec;
    ///
    /// let service = CurrencyService::default();
    /// let yen = service.convert_from_usd(dec!(10), &LocaleTag::new("ja"));
    /// assert_eq!(yen, dec!(1500));
    /// ```
    #[must_use]
    pub fn convert_from_usd(&self, amount_usd: Decimal, locale: &LocaleTag) -> Decimal {
        let rate = self.current_rate(locale);
        amount_usd.checked_mul(rate).unwrap_or_else(|| {
            warn!(%amount_usd, %rate, "Conversion overflowed, showing unconverted amount");
            amount_usd
        })
    }

    /// Converts an amount entered in the display currency back to USD for storage.
    ///
    /// Rates are strictly positive by construction of [`ExchangeRateTable`].
    #[must_use]
    pub fn convert_to_usd(&self, amount_local: Decimal, locale: &LocaleTag) -> Decimal {
        let rate = self.current_rate(locale);
        amount_local.checked_div(rate).unwrap_or_else(|| {
            warn!(%amount_local, %rate, "Conversion overflowed, storing unconverted amount");
            amount_local
        })
    }

    /// Formats an amount that is already in the display currency.
    #[must_use]
    pub fn format(&self, amount: Decimal, locale: &LocaleTag) -> String {
        format_amount(amount, self.current_currency(locale))
    }

    /// Converts a stored USD amount and formats it, as every transaction row does.
    #[must_use]
    pub fn display_amount(&self, amount_usd: Decimal, locale: &LocaleTag) -> String {
        self.format(self.convert_from_usd(amount_usd, locale), locale)
    }

    /// Human-readable rate line such as `1 USD = 17 MXN` or `1 USD = 3.75 SAR`.
    ///
    /// Rates of ten or more are shown without decimals.
    #[must_use]
    pub fn exchange_rate_info(&self, locale: &LocaleTag) -> String {
        let rate = self.current_rate(locale);
        if rate == Decimal::ONE {
            return format!("1 {base} = 1 {base}", base = ExchangeRateTable::BASE);
        }

        let decimal_places = if rate >= Decimal::TEN { 0 } else { 2 };
        let mut shown =
            rate.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven);
        shown.rescale(decimal_places);

        format!(
            "1 {} = {shown} {}",
            ExchangeRateTable::BASE,
            self.current_currency_code(locale)
        )
    }
}
