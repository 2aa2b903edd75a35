//! # tam-money
//!
//! Currencies and exact-decimal monetary amounts.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Currency records and lookup.
pub mod currency;

/// Predefined ISO 4217 currencies.
pub mod currencies;

/// `Money`: an exact amount in a currency.
pub mod money;

/// `MoneyTimeRate`: money per duration.
pub mod money_time_rate;

/// `Tally`: a single-currency list of amounts.
pub mod tally;

pub use currency::Currency;
pub use money::Money;
pub use money_time_rate::MoneyTimeRate;
pub use tally::Tally;
