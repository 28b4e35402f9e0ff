//! Display currencies supported by the application.
//!
//! Amounts are always stored in USD; the other currencies exist only for
//! presentation and are selected from the active locale.

use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar (canonical storage currency)
    Usd,
    /// Mexican Peso
    Mxn,
    /// Japanese Yen
    Jpy,
    /// Saudi Riyal
    Sar,
}

impl Currency {
    /// All supported currencies.
    pub const ALL: [Self; 4] = [Self::Usd, Self::Mxn, Self::Jpy, Self::Sar];

    /// Picks the display currency for a primary language subtag.
    ///
    /// `es` → MXN, `ja` → JPY, `ar` → SAR, anything else → USD.
    #[must_use]
    pub fn for_language(language: &str) -> Self {
        match language {
            "es" => Self::Mxn,
            "ja" => Self::Jpy,
            "ar" => Self::Sar,
            _ => Self::Usd,
        }
    }

    /// Returns the ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Mxn => "MXN",
            Self::Jpy => "JPY",
            Self::Sar => "SAR",
        }
    }

    /// Returns the short glyph shown next to amount inputs.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Usd | Self::Mxn => "$",
            Self::Jpy => "¥",
            Self::Sar => "﷼",
        }
    }

    /// Returns the glyph used when rendering formatted amounts.
    ///
    /// The peso is rendered as `MX$` so it cannot be mistaken for dollars.
    #[must_use]
    pub const fn display_symbol(self) -> &'static str {
        match self {
            Self::Mxn => "MX$",
            other => other.symbol(),
        }
    }

    /// Maximum number of fraction digits shown for this currency.
    #[must_use]
    pub const fn max_fraction_digits(self) -> u32 {
        match self {
            Self::Jpy => 0,
            _ => 2,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "MXN" => Ok(Self::Mxn),
            "JPY" => Ok(Self::Jpy),
            "SAR" => Ok(Self::Sar),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("es", Currency::Mxn)]
    #[case("ja", Currency::Jpy)]
    #[case("ar", Currency::Sar)]
    #[case("en", Currency::Usd)]
    #[case("fr", Currency::Usd)]
    #[case("", Currency::Usd)]
    fn test_for_language(#[case] language: &str, #[case] expected: Currency) {
        assert_eq!(Currency::for_language(language), expected);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Currency::Usd.symbol(), "$");
        assert_eq!(Currency::Mxn.symbol(), "$");
        assert_eq!(Currency::Jpy.symbol(), "¥");
        assert_eq!(Currency::Sar.symbol(), "﷼");
        assert_eq!(Currency::Mxn.display_symbol(), "MX$");
        assert_eq!(Currency::Jpy.display_symbol(), "¥");
    }

    #[test]
    fn test_fraction_digits() {
        assert_eq!(Currency::Jpy.max_fraction_digits(), 0);
        assert_eq!(Currency::Usd.max_fraction_digits(), 2);
        assert_eq!(Currency::Mxn.max_fraction_digits(), 2);
        assert_eq!(Currency::Sar.max_fraction_digits(), 2);
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::Usd.to_string(), "USD");
        assert_eq!(Currency::Mxn.to_string(), "MXN");
        assert_eq!(Currency::Jpy.to_string(), "JPY");
        assert_eq!(Currency::Sar.to_string(), "SAR");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!(Currency::from_str("USD").unwrap(), Currency::Usd);
        assert_eq!(Currency::from_str("jpy").unwrap(), Currency::Jpy);
        assert_eq!(Currency::from_str("Sar").unwrap(), Currency::Sar);

        assert!(Currency::from_str("XXX").is_err());
        assert!(Currency::from_str("").is_err());
    }
}
