//! `TimeUnit`: units of time used by [`Duration`](crate::Duration).
//!
//! Units fall into two families that cannot be converted into each other:
//! fixed-length units measured in milliseconds (millisecond up to week) and
//! calendar units measured in months (month, quarter, year).

/// A unit of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeUnit {
    /// Milliseconds (base of the fixed-length family).
    Milliseconds,
    /// Seconds.
    Seconds,
    /// Minutes.
    Minutes,
    /// Hours.
    Hours,
    /// Days (24 hours).
    Days,
    /// Weeks (7 days).
    Weeks,
    /// Months (base of the calendar family).
    Months,
    /// Quarters (3 months).
    Quarters,
    /// Years (12 months).
    Years,
}

impl TimeUnit {
    /// The base unit of this unit's family.
    pub fn base(self) -> TimeUnit {
        match self {
            TimeUnit::Months | TimeUnit::Quarters | TimeUnit::Years => TimeUnit::Months,
            _ => TimeUnit::Milliseconds,
        }
    }

    /// How many base units one of this unit is worth.
    pub fn factor_to_base(self) -> i64 {
        match self {
            TimeUnit::Milliseconds => 1,
            TimeUnit::Seconds => 1_000,
            TimeUnit::Minutes => 60_000,
            TimeUnit::Hours => 3_600_000,
            TimeUnit::Days => 86_400_000,
            TimeUnit::Weeks => 604_800_000,
            TimeUnit::Months => 1,
            TimeUnit::Quarters => 3,
            TimeUnit::Years => 12,
        }
    }

    /// Whether durations in `self` and `other` can be converted into each
    /// other.
    pub fn is_convertible_to(self, other: TimeUnit) -> bool {
        self.base() == other.base()
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TimeUnit::Milliseconds => "millisecond",
            TimeUnit::Seconds => "second",
            TimeUnit::Minutes => "minute",
            TimeUnit::Hours => "hour",
            TimeUnit::Days => "day",
            TimeUnit::Weeks => "week",
            TimeUnit::Months => "month",
            TimeUnit::Quarters => "quarter",
            TimeUnit::Years => "year",
        };
        f.write_str(name)
    }
}
