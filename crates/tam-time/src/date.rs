//! `CalendarDate`: a day in the proleptic Gregorian calendar.
//!
//! Dates are stored as a serial day number counted from 1970-01-01
//! (serial 0).  The valid range is 0001-01-01 to 9999-12-31; every
//! constructor and every piece of day arithmetic checks it, so a
//! `CalendarDate` value always denotes a real day.

use crate::month::Month;
use crate::weekday::Weekday;
use tam_core::errors::{Error, Result};

/// A calendar date represented as a serial day number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl CalendarDate {
    /// Earliest representable year.
    pub const MIN_YEAR: u16 = 1;

    /// Latest representable year.
    pub const MAX_YEAR: u16 = 9999;

    /// 0001-01-01.
    pub const MIN: CalendarDate = CalendarDate(days_from_civil(1, 1, 1));

    /// 9999-12-31.
    pub const MAX: CalendarDate = CalendarDate(days_from_civil(9999, 12, 31));

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month.
    ///
    /// # Errors
    /// [`Error::InvalidCalendarDate`] if the combination does not exist
    /// (month 13, April 31, February 29 of a common year, year 0, ...).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        let m = Month::from_number(month).ok_or_else(|| {
            Error::InvalidCalendarDate(format!("month {month} out of range [1, 12]"))
        })?;
        Self::new(year, m, day)
    }

    /// Create a date from year, [`Month`], and day-of-month.
    pub fn new(year: u16, month: Month, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::InvalidCalendarDate(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        let days_in = month.days_in(year);
        if day == 0 || day > days_in {
            return Err(Error::InvalidCalendarDate(format!(
                "day {day} out of range [1, {days_in}] for {year:04}-{:02}",
                month.number()
            )));
        }
        Ok(CalendarDate(days_from_civil(
            year as i32,
            month.number() as u32,
            day as u32,
        )))
    }

    /// Create a date from its serial number (days since 1970-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        let date = CalendarDate(serial);
        if date < Self::MIN || date > Self::MAX {
            return Err(Error::InvalidCalendarDate(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(date)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number (days since 1970-01-01).
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> u16 {
        civil_from_days(self.0).0
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        let (_, m, _) = civil_from_days(self.0);
        Month::ALL[m as usize - 1]
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        civil_from_days(self.0).2
    }

    /// Return the day of the week.
    pub fn day_of_week(&self) -> Weekday {
        // 1970-01-01 was a Thursday.
        Weekday::Thursday.plus_days(self.0 as i64)
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        (self.0 - self.first_of_year().0 + 1) as u16
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// The following day, or `None` at [`CalendarDate::MAX`].
    pub fn next_day(&self) -> Option<Self> {
        (*self < Self::MAX).then(|| CalendarDate(self.0 + 1))
    }

    /// The preceding day, or `None` at [`CalendarDate::MIN`].
    pub fn previous_day(&self) -> Option<Self> {
        (*self > Self::MIN).then(|| CalendarDate(self.0 - 1))
    }

    /// Advance by `n` days (negative `n` goes back).
    ///
    /// # Errors
    /// [`Error::InvalidCalendarDate`] if the result leaves the valid range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0.checked_add(n).ok_or_else(|| {
            Error::InvalidCalendarDate(format!("{self} plus {n} days overflows"))
        })?;
        Self::from_serial(serial)
    }

    /// Number of days from `self` to `other`; positive if `other` is later.
    pub fn days_until(self, other: CalendarDate) -> i32 {
        other.0 - self.0
    }

    /// The first day of this date's month.
    pub fn first_of_month(self) -> Self {
        CalendarDate(self.0 - self.day_of_month() as i32 + 1)
    }

    /// The last day of this date's month.
    pub fn last_of_month(self) -> Self {
        let (y, m, d) = civil_from_days(self.0);
        let last = Month::ALL[m as usize - 1].days_in(y);
        CalendarDate(self.0 + (last - d) as i32)
    }

    fn first_of_year(self) -> Self {
        CalendarDate(days_from_civil(self.year() as i32, 1, 1))
    }
}

impl std::ops::Sub<CalendarDate> for CalendarDate {
    type Output = i32;
    fn sub(self, rhs: CalendarDate) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = civil_from_days(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CalendarDate({self})")
    }
}

/// Error returned when parsing a [`CalendarDate`] from a string fails.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ParseDateError {
    /// The input is not of the form `YYYY-MM-DD`.
    #[error("expected YYYY-MM-DD, got {0:?}")]
    Format(String),
    /// The fields parsed but do not form a valid date.
    #[error(transparent)]
    Invalid(#[from] Error),
}

impl std::str::FromStr for CalendarDate {
    type Err = ParseDateError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let bad = || ParseDateError::Format(s.to_string());
        let mut parts = s.trim().splitn(3, '-');
        let mut field = || parts.next().ok_or_else(bad);
        let year: u16 = field()?.parse().map_err(|_| bad())?;
        let month: u8 = field()?.parse().map_err(|_| bad())?;
        let day: u8 = field()?.parse().map_err(|_| bad())?;
        Ok(CalendarDate::from_ymd(year, month, day)?)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Days from 1970-01-01 to the given civil date.
const fn days_from_civil(year: i32, month: u32, day: u32) -> i32 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = (y - era * 400) as u32;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe as i32 - 719_468
}

/// Inverse of [`days_from_civil`]: (year, month, day).
fn civil_from_days(serial: i32) -> (u16, u8, u8) {
    let z = serial + 719_468;
    let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
    let doe = (z - era * 146_097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe as i32 + era * 400 + i32::from(month <= 2);
    (year as u16, month as u8, day as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let d = CalendarDate::from_ymd(1970, 1, 1).unwrap();
        assert_eq!(d.serial(), 0);
        assert_eq!(d.day_of_week(), Weekday::Thursday);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1, 1, 1),
            (1900, 2, 28),
            (2000, 2, 29),
            (2100, 2, 28),
            (1929, 1, 15),
            (2005, 11, 24),
            (9999, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = CalendarDate::from_ymd(y, m, d).unwrap();
            assert_eq!(date.year(), y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.month().number(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.day_of_month(), d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_invalid() {
        assert!(matches!(
            CalendarDate::from_ymd(2005, 2, 29),
            Err(Error::InvalidCalendarDate(_))
        ));
        assert!(CalendarDate::from_ymd(2005, 4, 31).is_err());
        assert!(CalendarDate::from_ymd(2005, 13, 1).is_err());
        assert!(CalendarDate::from_ymd(0, 1, 1).is_err());
    }

    #[test]
    fn test_weekday() {
        assert_eq!(
            CalendarDate::from_ymd(2024, 1, 1).unwrap().day_of_week(),
            Weekday::Monday
        );
        assert_eq!(
            CalendarDate::from_ymd(2005, 11, 24).unwrap().day_of_week(),
            Weekday::Thursday
        );
    }

    #[test]
    fn test_bounds() {
        assert_eq!(CalendarDate::MAX.next_day(), None);
        assert_eq!(CalendarDate::MIN.previous_day(), None);
        assert!(CalendarDate::MAX.add_days(1).is_err());
        assert_eq!(CalendarDate::MIN.to_string(), "0001-01-01");
    }

    #[test]
    fn test_month_edges() {
        let d = CalendarDate::from_ymd(2024, 2, 15).unwrap();
        assert_eq!(d.first_of_month().to_string(), "2024-02-01");
        assert_eq!(d.last_of_month().to_string(), "2024-02-29");
        assert_eq!(d.day_of_year(), 46);
    }

    #[test]
    fn test_arithmetic() {
        let d = CalendarDate::from_ymd(2023, 1, 1).unwrap();
        let d2 = d.add_days(31).unwrap();
        assert_eq!(d2, CalendarDate::from_ymd(2023, 2, 1).unwrap());
        assert_eq!(d2 - d, 31);
        assert_eq!(d.days_until(d2), 31);
        assert_eq!(d.next_day().unwrap().previous_day(), Some(d));
    }

    #[test]
    fn test_parse() {
        let d: CalendarDate = "1968-04-04".parse().unwrap();
        assert_eq!(d, CalendarDate::from_ymd(1968, 4, 4).unwrap());
        assert!(matches!(
            "1968/04/04".parse::<CalendarDate>(),
            Err(ParseDateError::Format(_))
        ));
        assert!(matches!(
            "1968-02-30".parse::<CalendarDate>(),
            Err(ParseDateError::Invalid(Error::InvalidCalendarDate(_)))
        ));
    }
}
