//! `CalendarInterval`: a closed range of calendar dates with optional limits.

use crate::date::CalendarDate;
use crate::month::Month;
use tam_core::errors::Result;
use tam_core::{ensure, require};

/// A closed interval of [`CalendarDate`]s.
///
/// Either limit may be absent, in which case the interval extends without
/// bound in that direction.  When both are present `lower <= upper`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CalendarInterval {
    lower: Option<CalendarDate>,
    upper: Option<CalendarDate>,
}

impl CalendarInterval {
    /// Interval with optional limits, both included.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`](tam_core::Error::InvalidArgument) if both limits are present and
    /// `lower > upper`.
    pub fn inclusive(lower: Option<CalendarDate>, upper: Option<CalendarDate>) -> Result<Self> {
        if let (Some(l), Some(u)) = (lower, upper) {
            require!(l <= u, "lower limit {l} is after upper limit {u}");
        }
        Ok(Self { lower, upper })
    }

    /// `[lower, upper]`.
    pub fn closed(lower: CalendarDate, upper: CalendarDate) -> Result<Self> {
        Self::inclusive(Some(lower), Some(upper))
    }

    /// `[lower, ∞)`.
    pub fn starting_from(lower: CalendarDate) -> Self {
        Self {
            lower: Some(lower),
            upper: None,
        }
    }

    /// `(-∞, upper]`.
    pub fn ending_at(upper: CalendarDate) -> Self {
        Self {
            lower: None,
            upper: Some(upper),
        }
    }

    /// The interval containing every date.
    pub fn unbounded() -> Self {
        Self {
            lower: None,
            upper: None,
        }
    }

    /// January 1 to December 31 of `year`.
    pub fn year(year: u16) -> Result<Self> {
        let first = CalendarDate::new(year, Month::January, 1)?;
        let last = CalendarDate::new(year, Month::December, 31)?;
        Self::closed(first, last)
    }

    /// The whole of `month` in `year`.
    pub fn month(year: u16, month: Month) -> Result<Self> {
        let first = CalendarDate::new(year, month, 1)?;
        Self::closed(first, first.last_of_month())
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    /// Lower limit, if any.
    pub fn lower_limit(&self) -> Option<CalendarDate> {
        self.lower
    }

    /// Upper limit, if any.
    pub fn upper_limit(&self) -> Option<CalendarDate> {
        self.upper
    }

    /// Whether the interval is bounded below.
    pub fn has_lower_limit(&self) -> bool {
        self.lower.is_some()
    }

    /// Whether the interval is bounded above.
    pub fn has_upper_limit(&self) -> bool {
        self.upper.is_some()
    }

    /// Whether `date` lies inside the interval.
    pub fn includes(&self, date: CalendarDate) -> bool {
        self.lower.map_or(true, |l| l <= date) && self.upper.map_or(true, |u| date <= u)
    }

    /// The overlap of two intervals, or `None` if they are disjoint.
    pub fn intersect(&self, other: &CalendarInterval) -> Option<CalendarInterval> {
        let lower = match (self.lower, other.lower) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        let upper = match (self.upper, other.upper) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        CalendarInterval::inclusive(lower, upper).ok()
    }

    /// Number of days in the interval, or `None` if it is unbounded.
    pub fn length_in_days(&self) -> Option<i32> {
        match (self.lower, self.upper) {
            (Some(l), Some(u)) => Some(u - l + 1),
            _ => None,
        }
    }

    // ── Iteration ────────────────────────────────────────────────────────────

    /// Every day of the interval, earliest first.
    ///
    /// # Errors
    /// [`Error::PreconditionViolated`](tam_core::Error::PreconditionViolated) if there is no lower limit.
    pub fn days(&self) -> Result<Days> {
        ensure!(self.has_lower_limit(), "{self} has no lower limit");
        Ok(Days {
            next: self.lower,
            end: self.upper.unwrap_or(CalendarDate::MAX),
        })
    }

    /// Every day of the interval, latest first.
    ///
    /// # Errors
    /// [`Error::PreconditionViolated`](tam_core::Error::PreconditionViolated) if there is no upper limit.
    pub fn days_in_reverse(&self) -> Result<DaysInReverse> {
        ensure!(self.has_upper_limit(), "{self} has no upper limit");
        Ok(DaysInReverse {
            next: self.upper,
            end: self.lower.unwrap_or(CalendarDate::MIN),
        })
    }
}

impl std::fmt::Display for CalendarInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.lower {
            Some(l) => write!(f, "[{l}, ")?,
            None => f.write_str("(-∞, ")?,
        }
        match self.upper {
            Some(u) => write!(f, "{u}]"),
            None => f.write_str("∞)"),
        }
    }
}

// ── Day iterators ─────────────────────────────────────────────────────────────

/// Forward iterator over the days of a [`CalendarInterval`].
#[derive(Clone, Debug)]
pub struct Days {
    next: Option<CalendarDate>,
    end: CalendarDate,
}

impl Iterator for Days {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<CalendarDate> {
        let current = self.next.filter(|d| *d <= self.end)?;
        self.next = current.next_day();
        Some(current)
    }
}

impl std::iter::FusedIterator for Days {}

/// Backward iterator over the days of a [`CalendarInterval`].
#[derive(Clone, Debug)]
pub struct DaysInReverse {
    next: Option<CalendarDate>,
    end: CalendarDate,
}

impl Iterator for DaysInReverse {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<CalendarDate> {
        let current = self.next.filter(|d| *d >= self.end)?;
        self.next = current.previous_day();
        Some(current)
    }
}

impl std::iter::FusedIterator for DaysInReverse {}
