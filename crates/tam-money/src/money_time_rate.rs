//! `MoneyTimeRate`: an amount of money per duration ("$ 1200.00 per month").

use crate::currency::Currency;
use crate::money::Money;
use tam_core::decimal::RoundingMode;
use tam_core::errors::Result;
use tam_time::{Duration, TimeRate};

/// Money accrued per unit of time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MoneyTimeRate {
    rate: TimeRate,
    currency: &'static Currency,
}

impl MoneyTimeRate {
    /// `money` per `duration`.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`](tam_core::Error::InvalidArgument) if
    /// `duration` is zero.
    pub fn new(money: Money, duration: Duration) -> Result<Self> {
        Ok(Self {
            rate: TimeRate::new(money.amount(), duration)?,
            currency: money.currency(),
        })
    }

    /// The underlying quantity-per-duration rate.
    pub fn rate(&self) -> &TimeRate {
        &self.rate
    }

    /// The currency.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// The money accrued over `duration`, which must need no rounding.
    ///
    /// # Errors
    /// [`Error::InexactResult`](tam_core::Error::InexactResult) if the
    /// result has more digits than the currency allows;
    /// [`Error::InvalidArgument`](tam_core::Error::InvalidArgument) if
    /// `duration` is of a different unit family.
    pub fn over(&self, duration: &Duration) -> Result<Money> {
        self.over_rounded(duration, RoundingMode::Unnecessary)
    }

    /// The money accrued over `duration`, rounded with `mode` at the
    /// currency's scale.
    pub fn over_rounded(&self, duration: &Duration, mode: RoundingMode) -> Result<Money> {
        self.over_at_scale(duration, self.rate.scale(), mode)
    }

    /// The money accrued over `duration`, computed with `scale` fractional
    /// digits and `mode`, then brought to the currency's scale.
    ///
    /// # Errors
    /// [`Error::InexactResult`](tam_core::Error::InexactResult) if the value
    /// at `scale` has non-zero digits beyond the currency's scale.
    pub fn over_at_scale(&self, duration: &Duration, scale: u32, mode: RoundingMode) -> Result<Money> {
        Money::of(self.rate.over(duration, scale, mode)?, self.currency)
    }
}

impl std::fmt::Display for MoneyTimeRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.currency.symbol, self.rate)
    }
}
