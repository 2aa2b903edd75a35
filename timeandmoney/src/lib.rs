//! # timeandmoney
//!
//! Immutable calendar, duration, and money value types, plus a rule engine
//! for recurring dates.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `tam-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! timeandmoney = "0.1"
//! ```
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use timeandmoney::core::{Ratio, RoundingMode};
//! use timeandmoney::money::Money;
//! use timeandmoney::time::{CalendarDate, CalendarInterval, DateSpecification, Month, Weekday};
//!
//! // Split a benefit two ways, rounding each share down to whole dollars.
//! let benefit = Money::dollars(200)?;
//! let share = benefit.applying(&Ratio::of(2, 3)?, 0, RoundingMode::Down)?;
//! assert_eq!(share, Money::dollars(dec!(133))?);
//!
//! // US Memorial Day is the last Monday of May; in 2012 that was the fourth.
//! let fourth_monday =
//!     DateSpecification::nth_occurrence_of_weekday_in_month(Month::May, Weekday::Monday, 4)?;
//! let first = fourth_monday.first_occurrence_in(&CalendarInterval::year(2012)?)?;
//! assert_eq!(first, Some(CalendarDate::from_ymd(2012, 5, 28)?));
//! # Ok::<(), timeandmoney::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Errors, rounding modes, exact decimal helpers, ratios, and settings.
pub use tam_core as core;

/// Dates, intervals, durations, and date specifications.
pub use tam_time as time;

/// Currencies, money, money rates, and tallies.
pub use tam_money as money;
