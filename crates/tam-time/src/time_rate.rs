//! `TimeRate`: a quantity per unit of time.

use crate::duration::Duration;
use rust_decimal::Decimal;
use tam_core::decimal::RoundingMode;
use tam_core::errors::Result;
use tam_core::ratio::Ratio;
use tam_core::require;

/// A decimal quantity per [`Duration`], for example "2.5 per hour".
///
/// The rate is kept as a [`Ratio`] of the quantity to the duration's length
/// in base units, so projecting it over another duration of the same family
/// rounds exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimeRate {
    quantity: Decimal,
    per: Duration,
}

impl TimeRate {
    /// `quantity` per `per`.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`](tam_core::Error::InvalidArgument) if `per`
    /// is zero.
    pub fn new(quantity: Decimal, per: Duration) -> Result<Self> {
        require!(!per.is_zero(), "rate over a zero duration");
        Ok(Self { quantity, per })
    }

    /// The quantity.
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// The duration the quantity is measured over.
    pub fn per(&self) -> Duration {
        self.per
    }

    /// Fractional digits of the quantity.
    pub fn scale(&self) -> u32 {
        self.quantity.scale()
    }

    /// The rate per base unit (millisecond or month).
    pub fn rate(&self) -> Result<Ratio> {
        Ratio::new(self.quantity, Decimal::from(self.per.in_base_units()))
    }

    /// The quantity accumulated over `duration`, with `scale` fractional
    /// digits.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`](tam_core::Error::InvalidArgument) if
    /// `duration` is not convertible to this rate's unit;
    /// [`Error::InexactResult`](tam_core::Error::InexactResult) under
    /// [`RoundingMode::Unnecessary`] if the result needs rounding.
    pub fn over(&self, duration: &Duration, scale: u32, mode: RoundingMode) -> Result<Decimal> {
        self.per.check_convertible(duration)?;
        self.rate()?
            .times(Decimal::from(duration.in_base_units()))?
            .decimal_value(scale, mode)
    }

    /// [`TimeRate::over`] at the quantity's own scale.
    pub fn over_at_quantity_scale(&self, duration: &Duration, mode: RoundingMode) -> Result<Decimal> {
        self.over(duration, self.scale(), mode)
    }
}

impl std::fmt::Display for TimeRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} per {}", self.quantity, self.per)
    }
}
