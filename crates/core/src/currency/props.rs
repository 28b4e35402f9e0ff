//! Property-based tests for currency operations.
//!
//! - Round-trip conversion stays within a cent for every display currency
//! - Rate table invariants
//! - Formatting is total

use fintrack_shared::types::{Currency, LocaleTag};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::format::format_amount;
use super::rates::ExchangeRateTable;
use super::service::CurrencyService;

/// Strategy to generate non-negative USD amounts (0.00 to 1,000,000.00).
fn usd_amount() -> impl Strategy<Value = Decimal> {
    (0i64..=100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate signed amounts with up to 4 decimals.
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000i64..10_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to pick one of the supported locales.
fn locale() -> impl Strategy<Value = LocaleTag> {
    prop::sample::select(vec!["en", "es", "ja", "ar", "fr", "es-MX", "ja_JP"])
        .prop_map(LocaleTag::new)
}

/// Strategy to pick one of the supported currencies.
fn currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Converting to the display currency and back returns the original
    /// amount within one cent.
    #[test]
    fn prop_round_trip_within_a_cent(
        amount in usd_amount(),
        locale in locale(),
    ) {
        let service = CurrencyService::default();
        let local = service.convert_from_usd(amount, &locale);
        let back = service.convert_to_usd(local, &locale);
        prop_assert!(
            (back - amount).abs() <= Decimal::new(1, 2),
            "{} -> {} -> {} drifted",
            amount, local, back
        );
    }

    /// Locale resolution is a pure function of the language subtag.
    #[test]
    fn prop_currency_code_is_deterministic(locale in locale()) {
        let service = CurrencyService::default();
        let first = service.current_currency_code(&locale);
        let second = service.current_currency_code(&locale);
        prop_assert_eq!(first, second);
        prop_assert_eq!(first, Currency::for_language(locale.language()).code());
    }

    /// Conversion of a non-negative amount is non-negative.
    #[test]
    fn prop_conversion_preserves_sign(
        amount in usd_amount(),
        locale in locale(),
    ) {
        let service = CurrencyService::default();
        prop_assert!(service.convert_from_usd(amount, &locale) >= Decimal::ZERO);
    }

    /// Formatting never yields an empty string and always carries the glyph.
    #[test]
    fn prop_format_is_total(
        amount in any_amount(),
        currency in currency(),
    ) {
        let formatted = format_amount(amount, currency);
        prop_assert!(!formatted.is_empty());
        prop_assert!(formatted.contains(currency.display_symbol()));
    }

    /// Yen never shows a fraction; other currencies always show two digits.
    #[test]
    fn prop_fraction_digits_follow_currency(
        amount in any_amount(),
        currency in currency(),
    ) {
        let formatted = format_amount(amount, currency);
        let fraction = formatted.rsplit_once('.').map(|(_, f)| f.len());
        if currency == Currency::Jpy {
            prop_assert_eq!(fraction, None);
        } else {
            prop_assert_eq!(fraction, Some(2));
        }
    }
}

#[test]
fn test_round_trip_representative_amounts() {
    let service = CurrencyService::default();
    let amounts = [
        Decimal::ZERO,
        Decimal::new(1, 2),
        Decimal::ONE_HUNDRED,
        Decimal::new(1_000_000, 0),
    ];

    for (code, _) in service.rates().iter() {
        let currency: Currency = code.parse().unwrap();
        let locale = match currency {
            Currency::Usd => LocaleTag::new("en"),
            Currency::Mxn => LocaleTag::new("es"),
            Currency::Jpy => LocaleTag::new("ja"),
            Currency::Sar => LocaleTag::new("ar"),
        };
        for amount in amounts {
            let back = service.convert_to_usd(service.convert_from_usd(amount, &locale), &locale);
            assert!((back - amount).abs() <= Decimal::new(1, 2), "{code}: {amount} -> {back}");
        }
    }
}

#[test]
fn test_rate_table_invariants() {
    let table = ExchangeRateTable::standard();
    assert_eq!(table.get(ExchangeRateTable::BASE), Some(Decimal::ONE));
    for (code, rate) in table.iter() {
        assert!(rate > Decimal::ZERO, "{code} has non-positive rate {rate}");
    }
}
