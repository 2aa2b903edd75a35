//! `Ratio`: a deferred, unitless division of two exact decimals.

use crate::decimal::{self, RoundingMode};
use crate::errors::Result;
use crate::require;
use rust_decimal::Decimal;

/// A numerator over a non-zero denominator.
///
/// No decimal value is computed until [`Ratio::decimal_value`] is called, so
/// chains of multiplications stay exact.  Ratios are never reduced: `2/4` and
/// `1/2` are different values, and so are `2/4` and `2.0/4`.
#[derive(Debug, Clone, Copy)]
pub struct Ratio {
    numerator: Decimal,
    denominator: Decimal,
}

impl Ratio {
    /// Create a ratio.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) if the
    /// denominator is zero.
    pub fn new(numerator: Decimal, denominator: Decimal) -> Result<Self> {
        require!(!denominator.is_zero(), "denominator is zero");
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Create a ratio of two integers.
    pub fn of(numerator: i64, denominator: i64) -> Result<Self> {
        Self::new(Decimal::from(numerator), Decimal::from(denominator))
    }

    /// Create the ratio `fractional / 1`.
    pub fn from_decimal(fractional: Decimal) -> Self {
        Self {
            numerator: fractional,
            denominator: Decimal::ONE,
        }
    }

    /// The numerator.
    pub fn numerator(&self) -> Decimal {
        self.numerator
    }

    /// The denominator (never zero).
    pub fn denominator(&self) -> Decimal {
        self.denominator
    }

    /// Materialise the ratio with `scale` fractional digits.
    ///
    /// # Errors
    /// [`Error::InexactResult`](crate::Error::InexactResult) under
    /// [`RoundingMode::Unnecessary`] when the quotient needs rounding.
    pub fn decimal_value(&self, scale: u32, mode: RoundingMode) -> Result<Decimal> {
        decimal::divide(self.numerator, self.denominator, scale, mode)
    }

    /// Multiply the numerator by `multiplier`; the denominator is unchanged.
    pub fn times(&self, multiplier: Decimal) -> Result<Self> {
        Ok(Self {
            numerator: decimal::multiply(self.numerator, multiplier)?,
            denominator: self.denominator,
        })
    }

    /// Multiply numerators and denominators componentwise.
    pub fn times_ratio(&self, multiplier: &Ratio) -> Result<Self> {
        Ok(Self {
            numerator: decimal::multiply(self.numerator, multiplier.numerator)?,
            denominator: decimal::multiply(self.denominator, multiplier.denominator)?,
        })
    }
}

impl PartialEq for Ratio {
    fn eq(&self, other: &Self) -> bool {
        decimal::exact_eq(&self.numerator, &other.numerator)
            && decimal::exact_eq(&self.denominator, &other.denominator)
    }
}

impl Eq for Ratio {}

impl std::hash::Hash for Ratio {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.numerator.hash(state);
        self.numerator.scale().hash(state);
        self.denominator.hash(state);
        self.denominator.scale().hash(state);
    }
}

impl std::fmt::Display for Ratio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use rust_decimal_macros::dec;

    #[test]
    fn zero_denominator_is_rejected() {
        assert!(matches!(
            Ratio::new(dec!(1), dec!(0.00)),
            Err(Error::InvalidArgument(_))
        ));
        assert!(Ratio::of(3, 0).is_err());
    }

    #[test]
    fn big_decimal_ratio() {
        let r = Ratio::new(dec!(3), dec!(2)).unwrap();
        assert_eq!(r.decimal_value(1, RoundingMode::Unnecessary).unwrap(), dec!(1.5));

        let r = Ratio::new(dec!(10), dec!(3)).unwrap();
        assert_eq!(r.decimal_value(3, RoundingMode::HalfEven).unwrap(), dec!(3.333));

        let r = Ratio::new(dec!(9), dec!(3)).unwrap();
        assert_eq!(r.decimal_value(0, RoundingMode::Unnecessary).unwrap(), dec!(3));
    }

    #[test]
    fn long_decimal_ratio() {
        let r = Ratio::of(9001, 3).unwrap();
        assert_eq!(r.decimal_value(6, RoundingMode::HalfEven).unwrap(), dec!(3000.333333));
    }

    #[test]
    fn multiplying_by_decimal_keeps_denominator() {
        let r = Ratio::of(1, 3).unwrap().times(dec!(100)).unwrap();
        assert_eq!(r.numerator(), dec!(100));
        assert_eq!(r.denominator(), dec!(3));
        assert_eq!(r.decimal_value(1, RoundingMode::Up).unwrap(), dec!(33.4));
    }

    #[test]
    fn ratios_are_not_reduced() {
        let product = Ratio::of(1, 2).unwrap().times_ratio(&Ratio::of(2, 2).unwrap()).unwrap();
        assert_eq!(product, Ratio::of(2, 4).unwrap());
        assert_ne!(product, Ratio::of(1, 2).unwrap());
        assert_ne!(Ratio::new(dec!(2.0), dec!(4)).unwrap(), Ratio::of(2, 4).unwrap());
    }

    #[test]
    fn from_decimal_and_display() {
        let r = Ratio::from_decimal(dec!(0.25));
        assert_eq!(r.denominator(), Decimal::ONE);
        assert_eq!(r.to_string(), "0.25/1");
    }
}
