//! `Currency`: ISO 4217 currency records.

use crate::currencies;
use tam_core::errors::{Error, Result};
use tam_core::Settings;

/// Data describing a single currency.
///
/// Currencies are `'static` records (see [`crate::currencies`]); money
/// values hold a `&'static Currency`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Currency {
    /// Full name (e.g. "US Dollar").
    pub name: &'static str,
    /// ISO 4217 alphabetic code (e.g. "USD").
    pub code: &'static str,
    /// ISO 4217 numeric code (e.g. 840).
    pub numeric_code: u16,
    /// Symbol used when displaying amounts (e.g. "$").
    pub symbol: &'static str,
    /// Number of digits after the decimal point in amounts of this currency
    /// (2 for cents, 0 for yen).
    pub default_fraction_digits: u32,
}

impl Currency {
    /// Look up a predefined currency by its ISO 4217 code.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if no predefined currency has that code.
    pub fn of(code: &str) -> Result<&'static Currency> {
        currencies::ALL
            .iter()
            .copied()
            .find(|c| c.code.eq_ignore_ascii_case(code))
            .ok_or_else(|| Error::InvalidArgument(format!("unknown currency code {code:?}")))
    }

    /// The currency configured in [`Settings`] as the default.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if the configured code is not a predefined
    /// currency.
    pub fn default_currency() -> Result<&'static Currency> {
        Currency::of(Settings::instance().default_currency_code())
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}
