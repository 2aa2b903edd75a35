//! `Duration`: a length of time expressed as a quantity of a [`TimeUnit`].

use crate::time_unit::TimeUnit;
use tam_core::errors::{Error, Result};
use tam_core::require;

/// A non-negative quantity of a [`TimeUnit`].
///
/// Durations compare by value within a unit family (`Duration::hours(24)`
/// equals `Duration::days(1)`); durations of different families are never
/// equal.
#[derive(Clone, Copy, Debug)]
pub struct Duration {
    quantity: i64,
    unit: TimeUnit,
}

impl Duration {
    /// Create a duration.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `quantity` is negative or its size in
    /// base units does not fit in an `i64`.
    pub fn new(quantity: i64, unit: TimeUnit) -> Result<Self> {
        require!(quantity >= 0, "duration quantity must be non-negative, got {quantity}");
        require!(
            quantity.checked_mul(unit.factor_to_base()).is_some(),
            "{quantity} {unit}(s) overflows the base unit"
        );
        Ok(Self { quantity, unit })
    }

    /// `n` milliseconds.
    pub fn milliseconds(n: i64) -> Result<Self> {
        Self::new(n, TimeUnit::Milliseconds)
    }

    /// `n` seconds.
    pub fn seconds(n: i64) -> Result<Self> {
        Self::new(n, TimeUnit::Seconds)
    }

    /// `n` minutes.
    pub fn minutes(n: i64) -> Result<Self> {
        Self::new(n, TimeUnit::Minutes)
    }

    /// `n` hours.
    pub fn hours(n: i64) -> Result<Self> {
        Self::new(n, TimeUnit::Hours)
    }

    /// `n` days.
    pub fn days(n: i64) -> Result<Self> {
        Self::new(n, TimeUnit::Days)
    }

    /// `n` weeks.
    pub fn weeks(n: i64) -> Result<Self> {
        Self::new(n, TimeUnit::Weeks)
    }

    /// `n` months.
    pub fn months(n: i64) -> Result<Self> {
        Self::new(n, TimeUnit::Months)
    }

    /// `n` quarters.
    pub fn quarters(n: i64) -> Result<Self> {
        Self::new(n, TimeUnit::Quarters)
    }

    /// `n` years.
    pub fn years(n: i64) -> Result<Self> {
        Self::new(n, TimeUnit::Years)
    }

    /// The quantity, in [`Duration::unit`]s.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// The unit the quantity is expressed in.
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// The length in the base unit of the family (milliseconds or months).
    pub fn in_base_units(&self) -> i64 {
        // Checked in `new`.
        self.quantity * self.unit.factor_to_base()
    }

    /// Whether this duration is zero.
    pub fn is_zero(&self) -> bool {
        self.quantity == 0
    }

    /// Sum of two durations of the same family, expressed in base units.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if the families differ or the sum overflows.
    pub fn plus(&self, other: &Duration) -> Result<Duration> {
        self.check_convertible(other)?;
        let sum = self
            .in_base_units()
            .checked_add(other.in_base_units())
            .ok_or_else(|| Error::InvalidArgument(format!("{self} + {other} overflows")))?;
        Duration::new(sum, self.unit.base())
    }

    pub(crate) fn check_convertible(&self, other: &Duration) -> Result<()> {
        require!(
            self.unit.is_convertible_to(other.unit),
            "{} and {} are not convertible",
            self.unit,
            other.unit
        );
        Ok(())
    }
}

impl PartialEq for Duration {
    fn eq(&self, other: &Self) -> bool {
        self.unit.is_convertible_to(other.unit) && self.in_base_units() == other.in_base_units()
    }
}

impl Eq for Duration {}

impl std::hash::Hash for Duration {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.unit.base().hash(state);
        self.in_base_units().hash(state);
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let plural = if self.quantity == 1 { "" } else { "s" };
        write!(f, "{} {}{plural}", self.quantity, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_within_family() {
        assert_eq!(Duration::hours(24).unwrap(), Duration::days(1).unwrap());
        assert_eq!(Duration::quarters(4).unwrap(), Duration::years(1).unwrap());
        assert_ne!(Duration::days(30).unwrap(), Duration::months(1).unwrap());
    }

    #[test]
    fn rejects_negative() {
        assert!(matches!(Duration::days(-1), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn plus() {
        let d = Duration::days(1).unwrap().plus(&Duration::hours(12).unwrap()).unwrap();
        assert_eq!(d, Duration::hours(36).unwrap());
        assert!(Duration::days(1).unwrap().plus(&Duration::months(1).unwrap()).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Duration::days(1).unwrap().to_string(), "1 day");
        assert_eq!(Duration::months(3).unwrap().to_string(), "3 months");
    }
}
