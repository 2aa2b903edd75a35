//! # tam-time
//!
//! Calendar dates, intervals, durations, and the date-specification engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `CalendarDate`: a day in the proleptic Gregorian calendar.
pub mod date;

/// `Duration`: a quantity of a `TimeUnit`.
pub mod duration;

/// `CalendarInterval`: a closed range of dates with optional limits.
pub mod interval;

/// `Month`: month of the year.
pub mod month;

/// Date specifications: fixed dates, nth weekdays, interval membership and
/// their boolean combinations.
pub mod spec;

/// `TimeRate`: a quantity per duration.
pub mod time_rate;

/// `TimeUnit`: milliseconds up to years.
pub mod time_unit;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{CalendarDate, ParseDateError};
pub use duration::Duration;
pub use interval::{CalendarInterval, Days, DaysInReverse};
pub use month::Month;
pub use spec::{AnnualDateSpecification, DateSpecification, Occurrences};
pub use time_rate::TimeRate;
pub use time_unit::TimeUnit;
pub use weekday::Weekday;
