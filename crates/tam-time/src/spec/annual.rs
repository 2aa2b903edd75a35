//! Annual date specifications: rules that pick out one date per year.

use super::occurrences::Occurrences;
use crate::date::CalendarDate;
use crate::interval::CalendarInterval;
use crate::month::Month;
use crate::weekday::Weekday;
use tam_core::errors::{Error, Result};
use tam_core::require;

/// A rule matching exactly one date in every year where that date exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnnualDateSpecification {
    /// The same month and day every year (New Year's Day, Christmas, ...).
    ///
    /// Day 30 of February is representable but never satisfied.
    Fixed {
        /// Month.
        month: Month,
        /// Day of the month, 1–31.
        day: u8,
    },
    /// The nth occurrence of a weekday in a month (Thanksgiving is the 4th
    /// Thursday of November).
    NthWeekdayOfMonth {
        /// Month.
        month: Month,
        /// Weekday.
        day_of_week: Weekday,
        /// Which occurrence, 1–5.
        occurrence: u8,
    },
}

impl AnnualDateSpecification {
    /// `month`/`day` of every year.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`](tam_core::Error::InvalidArgument) if
    /// `month` is outside 1–12 or `day` outside 1–31.
    pub fn fixed(month: u8, day: u8) -> Result<Self> {
        let month = Month::try_from(month)?;
        require!((1..=31).contains(&day), "day {day} out of range [1, 31]");
        Ok(AnnualDateSpecification::Fixed { month, day })
    }

    /// The `occurrence`th `day_of_week` of `month` every year.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`](tam_core::Error::InvalidArgument) if
    /// `occurrence` is outside 1–5.
    pub fn nth_occurrence_of_weekday_in_month(
        month: Month,
        day_of_week: Weekday,
        occurrence: u8,
    ) -> Result<Self> {
        require!(
            (1..=5).contains(&occurrence),
            "occurrence {occurrence} out of range [1, 5]"
        );
        Ok(AnnualDateSpecification::NthWeekdayOfMonth {
            month,
            day_of_week,
            occurrence,
        })
    }

    /// The matching date in `year`.
    ///
    /// # Errors
    /// [`Error::InvalidCalendarDate`](tam_core::Error::InvalidCalendarDate)
    /// if the rule names a day that does not exist in `year` (February 29
    /// of a common year, a fifth Monday in a month that has four).
    pub fn of_year(&self, year: u16) -> Result<CalendarDate> {
        match *self {
            AnnualDateSpecification::Fixed { month, day } => CalendarDate::new(year, month, day),
            AnnualDateSpecification::NthWeekdayOfMonth {
                month,
                day_of_week,
                occurrence,
            } => {
                let first_of_month = CalendarDate::new(year, month, 1)?;
                let offset =
                    day_of_week.ordinal() as i8 - first_of_month.day_of_week().ordinal() as i8;
                let first_occurrence = if offset < 0 { offset + 8 } else { offset + 1 };
                let day = (occurrence as i8 - 1) * 7 + first_occurrence;
                CalendarDate::new(year, month, day as u8)
            }
        }
    }

    /// Whether `date` is the date this rule picks in its year.
    pub fn is_satisfied_by(&self, date: CalendarDate) -> bool {
        match *self {
            AnnualDateSpecification::Fixed { month, day } => {
                date.month() == month && date.day_of_month() == day
            }
            AnnualDateSpecification::NthWeekdayOfMonth {
                month,
                day_of_week,
                occurrence,
            } => {
                date.month() == month
                    && date.day_of_week() == day_of_week
                    && (date.day_of_month() - 1) / 7 + 1 == occurrence
            }
        }
    }

    /// The first matching date in `interval`.
    ///
    /// Only the year of the lower limit and the year after it are probed, so
    /// a match further out is not found.
    ///
    /// # Errors
    /// [`Error::PreconditionViolated`](tam_core::Error::PreconditionViolated)
    /// if `interval` has no lower limit; any error from
    /// [`AnnualDateSpecification::of_year`] for a probed year.
    pub fn first_occurrence_in(&self, interval: &CalendarInterval) -> Result<Option<CalendarDate>> {
        let start = interval.lower_limit().ok_or_else(|| {
            Error::PreconditionViolated(format!("{interval} has no lower limit"))
        })?;
        let first_try = self.of_year(start.year())?;
        if interval.includes(first_try) {
            return Ok(Some(first_try));
        }
        log::trace!("{self}: {first_try} is outside {interval}, probing the next year");
        if start.year() == CalendarDate::MAX_YEAR {
            return Ok(None);
        }
        let second_try = self.of_year(start.year() + 1)?;
        Ok(interval.includes(second_try).then_some(second_try))
    }

    /// The last matching date in `interval`, found by scanning backward from
    /// the upper limit.
    ///
    /// # Errors
    /// [`Error::PreconditionViolated`](tam_core::Error::PreconditionViolated)
    /// if `interval` has no upper limit.
    pub fn last_occurrence_in(&self, interval: &CalendarInterval) -> Result<Option<CalendarDate>> {
        Ok(interval
            .days_in_reverse()?
            .find(|d| self.is_satisfied_by(*d)))
    }

    /// Matching dates in `interval`, one per year, earliest first.
    ///
    /// # Errors
    /// As for [`AnnualDateSpecification::first_occurrence_in`].
    pub fn iterate_over(&self, interval: &CalendarInterval) -> Result<Occurrences> {
        let seed = self.first_occurrence_in(interval)?;
        Ok(Occurrences::yearly(*self, *interval, seed))
    }
}

fn ordinal_suffix(n: u8) -> &'static str {
    match n {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

impl std::fmt::Display for AnnualDateSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnnualDateSpecification::Fixed { month, day } => write!(f, "{month} {day}"),
            AnnualDateSpecification::NthWeekdayOfMonth {
                month,
                day_of_week,
                occurrence,
            } => write!(
                f,
                "{occurrence}{} {day_of_week} of {month}",
                ordinal_suffix(*occurrence)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    fn thanksgiving() -> AnnualDateSpecification {
        AnnualDateSpecification::nth_occurrence_of_weekday_in_month(
            Month::November,
            Weekday::Thursday,
            4,
        )
        .unwrap()
    }

    #[test]
    fn construction_ranges() {
        assert!(AnnualDateSpecification::fixed(0, 1).is_err());
        assert!(AnnualDateSpecification::fixed(13, 1).is_err());
        assert!(AnnualDateSpecification::fixed(1, 0).is_err());
        assert!(AnnualDateSpecification::fixed(1, 32).is_err());
        assert!(AnnualDateSpecification::fixed(2, 30).is_ok());
        assert!(matches!(
            AnnualDateSpecification::nth_occurrence_of_weekday_in_month(
                Month::May,
                Weekday::Monday,
                6
            ),
            Err(Error::InvalidArgument(_))
        ));
        assert!(AnnualDateSpecification::nth_occurrence_of_weekday_in_month(
            Month::May,
            Weekday::Monday,
            0
        )
        .is_err());
    }

    #[test]
    fn thanksgiving_of_year() {
        let spec = thanksgiving();
        assert_eq!(spec.of_year(2002).unwrap(), date(2002, 11, 28));
        assert_eq!(spec.of_year(2003).unwrap(), date(2003, 11, 27));
        assert_eq!(spec.of_year(2004).unwrap(), date(2004, 11, 25));
        assert_eq!(spec.of_year(2005).unwrap(), date(2005, 11, 24));
        assert!(spec.is_satisfied_by(date(2005, 11, 24)));
        assert!(!spec.is_satisfied_by(date(2005, 11, 25)));
        assert!(!spec.is_satisfied_by(date(2005, 11, 17)));
    }

    #[test]
    fn fifth_weekday_is_not_clamped() {
        let fifth_monday =
            AnnualDateSpecification::nth_occurrence_of_weekday_in_month(
                Month::January,
                Weekday::Monday,
                5,
            )
            .unwrap();
        assert_eq!(fifth_monday.of_year(2024).unwrap(), date(2024, 1, 29));
        let february = AnnualDateSpecification::nth_occurrence_of_weekday_in_month(
            Month::February,
            Weekday::Monday,
            5,
        )
        .unwrap();
        assert!(matches!(
            february.of_year(2024),
            Err(Error::InvalidCalendarDate(_))
        ));
    }

    #[test]
    fn fixed_of_year() {
        let christmas = AnnualDateSpecification::fixed(12, 25).unwrap();
        assert_eq!(christmas.of_year(2010).unwrap(), date(2010, 12, 25));
        let leap_day = AnnualDateSpecification::fixed(2, 29).unwrap();
        assert!(leap_day.of_year(2024).is_ok());
        assert!(matches!(
            leap_day.of_year(2023),
            Err(Error::InvalidCalendarDate(_))
        ));
        let never = AnnualDateSpecification::fixed(2, 30).unwrap();
        assert!(!never.is_satisfied_by(date(2024, 2, 29)));
    }

    #[test]
    fn first_occurrence_probes_two_years() {
        let spec = thanksgiving();
        let interval = CalendarInterval::closed(date(2002, 12, 1), date(2005, 12, 31)).unwrap();
        assert_eq!(
            spec.first_occurrence_in(&interval).unwrap(),
            Some(date(2003, 11, 27))
        );
        let tight = CalendarInterval::closed(date(2002, 12, 1), date(2003, 1, 31)).unwrap();
        assert_eq!(spec.first_occurrence_in(&tight).unwrap(), None);
        assert!(matches!(
            spec.first_occurrence_in(&CalendarInterval::unbounded()),
            Err(Error::PreconditionViolated(_))
        ));
    }

    #[test]
    fn last_occurrence() {
        let spec = thanksgiving();
        let interval = CalendarInterval::closed(date(2002, 1, 1), date(2005, 11, 23)).unwrap();
        assert_eq!(
            spec.last_occurrence_in(&interval).unwrap(),
            Some(date(2004, 11, 25))
        );
    }

    #[test]
    fn display() {
        assert_eq!(thanksgiving().to_string(), "4th Thursday of November");
        assert_eq!(
            AnnualDateSpecification::fixed(1, 15).unwrap().to_string(),
            "January 15"
        );
    }
}
