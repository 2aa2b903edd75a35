//! Date specifications: composable predicates over calendar dates.
//!
//! A [`DateSpecification`] answers "does this date match?" and, given a
//! [`CalendarInterval`], finds the first or last matching date or lazily
//! enumerates every match.  Annual rules ([`AnnualDateSpecification`])
//! compute their date for a given year directly; all other rules are
//! answered by scanning day by day.
//!
//! # Example
//!
//! ```
//! use tam_time::{CalendarDate, CalendarInterval, DateSpecification, Month, Weekday};
//!
//! let thanksgiving =
//!     DateSpecification::nth_occurrence_of_weekday_in_month(Month::November, Weekday::Thursday, 4)?;
//! let interval = CalendarInterval::closed(
//!     CalendarDate::from_ymd(2002, 1, 1)?,
//!     CalendarDate::from_ymd(2004, 12, 31)?,
//! )?;
//! let dates: Vec<_> = thanksgiving
//!     .iterate_over(&interval)?
//!     .collect::<Result<_, _>>()?;
//! assert_eq!(dates.len(), 3);
//! assert_eq!(dates[0].to_string(), "2002-11-28");
//! # Ok::<(), tam_core::Error>(())
//! ```

mod annual;
mod occurrences;

pub use annual::AnnualDateSpecification;
pub use occurrences::Occurrences;

use crate::date::CalendarDate;
use crate::interval::CalendarInterval;
use crate::month::Month;
use crate::weekday::Weekday;
use std::sync::Arc;
use tam_core::ensure;
use tam_core::errors::Result;

/// A predicate over [`CalendarDate`]s.
///
/// Composites share their operands through [`Arc`], so `and`/`or`/`not`
/// never copy a subtree and specifications can be sent between threads.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DateSpecification {
    /// One date per year.
    Annual(AnnualDateSpecification),
    /// Every date inside an interval.
    Interval(CalendarInterval),
    /// Dates satisfying both operands.
    And(Arc<DateSpecification>, Arc<DateSpecification>),
    /// Dates satisfying either operand.
    Or(Arc<DateSpecification>, Arc<DateSpecification>),
    /// Dates not satisfying the operand.
    Not(Arc<DateSpecification>),
}

impl DateSpecification {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// `month`/`day` of every year. See [`AnnualDateSpecification::fixed`].
    pub fn fixed(month: u8, day: u8) -> Result<Self> {
        Ok(AnnualDateSpecification::fixed(month, day)?.into())
    }

    /// The `occurrence`th `day_of_week` of `month` every year. See
    /// [`AnnualDateSpecification::nth_occurrence_of_weekday_in_month`].
    pub fn nth_occurrence_of_weekday_in_month(
        month: Month,
        day_of_week: Weekday,
        occurrence: u8,
    ) -> Result<Self> {
        Ok(
            AnnualDateSpecification::nth_occurrence_of_weekday_in_month(
                month,
                day_of_week,
                occurrence,
            )?
            .into(),
        )
    }

    /// Every date inside `interval`.
    pub fn within(interval: CalendarInterval) -> Self {
        DateSpecification::Interval(interval)
    }

    // ── Combinators ──────────────────────────────────────────────────────────

    /// Dates satisfying both `self` and `other`.
    pub fn and(&self, other: &DateSpecification) -> DateSpecification {
        DateSpecification::And(Arc::new(self.clone()), Arc::new(other.clone()))
    }

    /// Dates satisfying `self`, `other`, or both.
    pub fn or(&self, other: &DateSpecification) -> DateSpecification {
        DateSpecification::Or(Arc::new(self.clone()), Arc::new(other.clone()))
    }

    /// Dates not satisfying `self`.  Negating a negation returns its operand.
    #[allow(clippy::should_implement_trait)]
    pub fn not(&self) -> DateSpecification {
        match self {
            DateSpecification::Not(inner) => (**inner).clone(),
            _ => DateSpecification::Not(Arc::new(self.clone())),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    /// Whether `date` matches.
    pub fn is_satisfied_by(&self, date: CalendarDate) -> bool {
        match self {
            DateSpecification::Annual(annual) => annual.is_satisfied_by(date),
            DateSpecification::Interval(interval) => interval.includes(date),
            DateSpecification::And(left, right) => {
                left.is_satisfied_by(date) && right.is_satisfied_by(date)
            }
            DateSpecification::Or(left, right) => {
                left.is_satisfied_by(date) || right.is_satisfied_by(date)
            }
            DateSpecification::Not(inner) => !inner.is_satisfied_by(date),
        }
    }

    /// Whether this is a one-date-per-year rule.
    pub fn is_annual(&self) -> bool {
        matches!(self, DateSpecification::Annual(_))
    }

    /// The annual rule, if this is one.
    pub fn as_annual(&self) -> Option<&AnnualDateSpecification> {
        match self {
            DateSpecification::Annual(annual) => Some(annual),
            _ => None,
        }
    }

    /// The earliest matching date in `interval`, or `None`.
    ///
    /// # Errors
    /// [`Error::PreconditionViolated`](tam_core::Error::PreconditionViolated)
    /// if the search has no lower limit to start from.  Interval membership
    /// narrows the search first, so an interval unbounded below is accepted
    /// when the specification itself bounds it.
    pub fn first_occurrence_in(&self, interval: &CalendarInterval) -> Result<Option<CalendarDate>> {
        if let DateSpecification::Annual(annual) = self {
            return annual.first_occurrence_in(interval);
        }
        let Some(narrowed) = self.restrict(interval) else {
            log::trace!("{self} cannot match inside {interval}");
            return Ok(None);
        };
        ensure!(
            narrowed.has_lower_limit(),
            "first occurrence of {self} needs a lower limit, {interval} has none"
        );
        log::trace!("scanning {narrowed} forward for {self}");
        let found = narrowed.days()?.find(|d| self.is_satisfied_by(*d));
        log::debug!("first occurrence of {self} in {interval}: {found:?}");
        Ok(found)
    }

    /// The latest matching date in `interval`, or `None`.
    ///
    /// # Errors
    /// [`Error::PreconditionViolated`](tam_core::Error::PreconditionViolated)
    /// if the search has no upper limit to start from.
    pub fn last_occurrence_in(&self, interval: &CalendarInterval) -> Result<Option<CalendarDate>> {
        if let DateSpecification::Annual(annual) = self {
            return annual.last_occurrence_in(interval);
        }
        let Some(narrowed) = self.restrict(interval) else {
            log::trace!("{self} cannot match inside {interval}");
            return Ok(None);
        };
        ensure!(
            narrowed.has_upper_limit(),
            "last occurrence of {self} needs an upper limit, {interval} has none"
        );
        log::trace!("scanning {narrowed} backward for {self}");
        let found = narrowed.days_in_reverse()?.find(|d| self.is_satisfied_by(*d));
        log::debug!("last occurrence of {self} in {interval}: {found:?}");
        Ok(found)
    }

    /// Matching dates in `interval`, earliest first, computed lazily.
    ///
    /// The interval may be unbounded above; iteration then ends at the last
    /// match before [`CalendarDate::MAX`].
    ///
    /// # Errors
    /// As for [`DateSpecification::first_occurrence_in`], which seeds the
    /// sequence.
    pub fn iterate_over(&self, interval: &CalendarInterval) -> Result<Occurrences> {
        if let DateSpecification::Annual(annual) = self {
            return annual.iterate_over(interval);
        }
        let Some(narrowed) = self.restrict(interval) else {
            return Ok(Occurrences::empty(self.clone()));
        };
        let seed = self.first_occurrence_in(&narrowed)?;
        Ok(Occurrences::daily(self.clone(), narrowed, seed))
    }

    /// The part of `interval` this specification can possibly match, or
    /// `None` if it matches nothing there.
    fn restrict(&self, interval: &CalendarInterval) -> Option<CalendarInterval> {
        match self {
            DateSpecification::Interval(own) => interval.intersect(own),
            DateSpecification::And(left, right) => {
                let narrowed = left.restrict(interval)?;
                right.restrict(&narrowed)
            }
            _ => Some(*interval),
        }
    }
}

impl From<AnnualDateSpecification> for DateSpecification {
    fn from(annual: AnnualDateSpecification) -> Self {
        DateSpecification::Annual(annual)
    }
}

impl From<CalendarInterval> for DateSpecification {
    fn from(interval: CalendarInterval) -> Self {
        DateSpecification::Interval(interval)
    }
}

impl std::fmt::Display for DateSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateSpecification::Annual(annual) => write!(f, "{annual}"),
            DateSpecification::Interval(interval) => write!(f, "within {interval}"),
            DateSpecification::And(left, right) => write!(f, "({left} and {right})"),
            DateSpecification::Or(left, right) => write!(f, "({left} or {right})"),
            DateSpecification::Not(inner) => write!(f, "not {inner}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tam_core::errors::Error;

    fn date(y: u16, m: u8, d: u8) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn double_negation_is_eliminated() {
        let spec = DateSpecification::fixed(1, 15).unwrap();
        assert_eq!(spec.not().not(), spec);
        assert!(matches!(spec.not(), DateSpecification::Not(_)));
    }

    #[test]
    fn annual_detection() {
        let spec = DateSpecification::fixed(7, 4).unwrap();
        assert!(spec.is_annual());
        assert!(spec.as_annual().is_some());
        assert!(!spec.not().is_annual());
        assert!(!DateSpecification::within(CalendarInterval::unbounded()).is_annual());
    }

    #[test]
    fn membership_narrows_an_open_search() {
        let membership = DateSpecification::within(
            CalendarInterval::closed(date(2004, 2, 1), date(2004, 2, 29)).unwrap(),
        );
        let unbounded = CalendarInterval::unbounded();
        assert_eq!(
            membership.first_occurrence_in(&unbounded).unwrap(),
            Some(date(2004, 2, 1))
        );
        assert_eq!(
            membership.last_occurrence_in(&unbounded).unwrap(),
            Some(date(2004, 2, 29))
        );
        assert_eq!(membership.iterate_over(&unbounded).unwrap().count(), 29);
    }

    #[test]
    fn disjoint_membership_matches_nothing() {
        let membership =
            DateSpecification::within(CalendarInterval::ending_at(date(2000, 1, 1)));
        let later = CalendarInterval::starting_from(date(2001, 1, 1));
        assert_eq!(membership.first_occurrence_in(&later).unwrap(), None);
        assert_eq!(membership.iterate_over(&later).unwrap().count(), 0);
    }

    #[test]
    fn scanning_needs_a_limit() {
        let holidays = DateSpecification::fixed(1, 1)
            .unwrap()
            .or(&DateSpecification::fixed(12, 31).unwrap());
        assert!(matches!(
            holidays.first_occurrence_in(&CalendarInterval::ending_at(date(2000, 1, 1))),
            Err(Error::PreconditionViolated(_))
        ));
        assert!(matches!(
            holidays.last_occurrence_in(&CalendarInterval::starting_from(date(2000, 1, 1))),
            Err(Error::PreconditionViolated(_))
        ));
    }

    #[test]
    fn composite_scan() {
        let new_year_or_eve = DateSpecification::fixed(1, 1)
            .unwrap()
            .or(&DateSpecification::fixed(12, 31).unwrap());
        let interval = CalendarInterval::closed(date(2003, 6, 1), date(2005, 6, 1)).unwrap();
        let dates: Vec<_> = new_year_or_eve
            .iterate_over(&interval)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(
            dates,
            vec![
                date(2003, 12, 31),
                date(2004, 1, 1),
                date(2004, 12, 31),
                date(2005, 1, 1)
            ]
        );
        assert_eq!(
            new_year_or_eve.last_occurrence_in(&interval).unwrap(),
            Some(date(2005, 1, 1))
        );
    }

    #[test]
    fn display() {
        let spec = DateSpecification::fixed(1, 1)
            .unwrap()
            .and(&DateSpecification::fixed(12, 25).unwrap().not());
        assert_eq!(spec.to_string(), "(January 1 and not December 25)");
    }
}
