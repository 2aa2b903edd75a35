//! `Money`: an exact decimal amount in a currency.
//!
//! The amount always carries exactly as many fractional digits as the
//! currency's [`default_fraction_digits`](Currency::default_fraction_digits):
//! `Money::new` rejects any other scale, and every operation that could
//! produce more digits takes an explicit [`RoundingMode`].

use crate::currencies::{EUR, JPY, USD};
use crate::currency::Currency;
use crate::money_time_rate::MoneyTimeRate;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use tam_core::decimal::{self, RoundingMode};
use tam_core::errors::{Error, Result};
use tam_core::ratio::Ratio;
use tam_core::require;
use tam_time::Duration;

/// An amount of money.
///
/// Two values are equal when both their amounts and their currencies are.
#[derive(Clone, Copy, Debug)]
pub struct Money {
    amount: Decimal,
    currency: &'static Currency,
}

impl Money {
    // ── Construction ─────────────────────────────────────────────────────────

    /// Create an amount whose scale already matches the currency.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `amount` does not have exactly
    /// `currency.default_fraction_digits` fractional digits.
    pub fn new(amount: Decimal, currency: &'static Currency) -> Result<Self> {
        require!(
            amount.scale() == currency.default_fraction_digits,
            "scale of {amount} does not match {} ({} fraction digits)",
            currency.code,
            currency.default_fraction_digits
        );
        Ok(Self { amount, currency })
    }

    /// Create an amount, widening its scale to the currency's as needed.
    ///
    /// # Errors
    /// [`Error::InexactResult`] if `amount` has more fractional digits than
    /// the currency allows and they are not all zero.
    pub fn of(amount: Decimal, currency: &'static Currency) -> Result<Self> {
        Self::rounded(amount, currency, RoundingMode::Unnecessary)
    }

    /// Create an amount, rescaling it to the currency's scale with `mode`.
    pub fn rounded(amount: Decimal, currency: &'static Currency, mode: RoundingMode) -> Result<Self> {
        let amount = decimal::rescale(amount, currency.default_fraction_digits, mode)?;
        Ok(Self { amount, currency })
    }

    /// Create an amount from a binary float, rounding half-even.
    pub fn from_f64(amount: f64, currency: &'static Currency) -> Result<Self> {
        Self::rounded(decimal::from_f64(amount)?, currency, RoundingMode::HalfEven)
    }

    /// Zero in `currency`.
    pub fn zero(currency: &'static Currency) -> Self {
        Self {
            amount: Decimal::new(0, currency.default_fraction_digits),
            currency,
        }
    }

    /// US dollars.
    pub fn dollars(amount: impl Into<Decimal>) -> Result<Self> {
        Self::of(amount.into(), &USD)
    }

    /// Euros.
    pub fn euros(amount: impl Into<Decimal>) -> Result<Self> {
        Self::of(amount.into(), &EUR)
    }

    /// Japanese yen.
    pub fn yens(amount: impl Into<Decimal>) -> Result<Self> {
        Self::of(amount.into(), &JPY)
    }

    /// Total of `monies`.
    ///
    /// An empty collection sums to zero in the default currency
    /// ([`Currency::default_currency`]).
    ///
    /// # Errors
    /// [`Error::CurrencyMismatch`] if two non-zero amounts have different
    /// currencies.
    pub fn sum<'a, I>(monies: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        let mut iter = monies.into_iter();
        let Some(first) = iter.next() else {
            return Ok(Money::zero(Currency::default_currency()?));
        };
        iter.try_fold(*first, |total, each| total.plus(each))
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    /// The amount.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Whether the amount is greater than zero.
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Whether the amount is less than zero.
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Whether the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Whether `self` and `other` may be combined: same currency, or either
    /// amount is zero.
    pub fn has_same_currency_as(&self, other: &Money) -> bool {
        self.currency == other.currency || self.is_zero() || other.is_zero()
    }

    fn check_same_currency(&self, other: &Money) -> Result<()> {
        if self.has_same_currency_as(other) {
            return Ok(());
        }
        log::debug!("currency mismatch between {self} and {other}");
        Err(Error::CurrencyMismatch {
            left: self.to_string(),
            right: other.to_string(),
        })
    }

    // ── Arithmetic ───────────────────────────────────────────────────────────

    /// `self + other`.
    ///
    /// The result is in the receiver's currency, unless the receiver is zero
    /// and `other` is not.
    ///
    /// # Errors
    /// [`Error::CurrencyMismatch`] if the currencies differ and neither
    /// amount is zero.
    pub fn plus(&self, other: &Money) -> Result<Money> {
        self.check_same_currency(other)?;
        let currency = if self.is_zero() && !other.is_zero() {
            other.currency
        } else {
            self.currency
        };
        let sum = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| Error::Overflow(format!("{self} + {other}")))?;
        Money::of(sum, currency)
    }

    /// `self - other`. Same currency rules as [`Money::plus`].
    pub fn minus(&self, other: &Money) -> Result<Money> {
        self.plus(&other.negated())
    }

    /// The amount with its sign flipped.
    pub fn negated(&self) -> Money {
        Money {
            amount: -self.amount,
            currency: self.currency,
        }
    }

    /// The absolute value.
    pub fn abs(&self) -> Money {
        Money {
            amount: self.amount.abs(),
            currency: self.currency,
        }
    }

    /// `self × factor`, rounded half-even.
    pub fn times(&self, factor: Decimal) -> Result<Money> {
        self.times_rounded(factor, RoundingMode::HalfEven)
    }

    /// `self × factor`, rounded with `mode`.
    pub fn times_rounded(&self, factor: Decimal, mode: RoundingMode) -> Result<Money> {
        Money::rounded(decimal::multiply(self.amount, factor)?, self.currency, mode)
    }

    /// `self ÷ divisor` at the currency's scale, rounded with `mode`.
    ///
    /// # Errors
    /// [`Error::DivisionByZero`] if `divisor` is zero.
    pub fn divided_by(&self, divisor: Decimal, mode: RoundingMode) -> Result<Money> {
        let quotient =
            decimal::divide(self.amount, divisor, self.currency.default_fraction_digits, mode)?;
        Ok(Money {
            amount: quotient,
            currency: self.currency,
        })
    }

    /// `self ÷ divisor` as an unrounded [`Ratio`].
    ///
    /// # Errors
    /// [`Error::CurrencyMismatch`] under the rules of [`Money::plus`];
    /// [`Error::DivisionByZero`] if `divisor` is zero.
    pub fn divided_by_money(&self, divisor: &Money) -> Result<Ratio> {
        self.check_same_currency(divisor)?;
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ratio::new(self.amount, divisor.amount)
    }

    /// `ratio × self`, materialized at `scale` with `mode`, then brought to
    /// the currency's scale.
    ///
    /// # Errors
    /// [`Error::InexactResult`] if the value at `scale` has non-zero digits
    /// beyond the currency's scale.
    pub fn applying(&self, ratio: &Ratio, scale: u32, mode: RoundingMode) -> Result<Money> {
        let applied = ratio.times(self.amount)?.decimal_value(scale, mode)?;
        Money::of(applied, self.currency)
    }

    /// [`Money::applying`] at the currency's scale.
    pub fn applying_at_currency_scale(&self, ratio: &Ratio, mode: RoundingMode) -> Result<Money> {
        self.applying(ratio, self.currency.default_fraction_digits, mode)
    }

    /// The smallest positive amount of the currency (one cent, one yen).
    pub fn minimum_increment(&self) -> Money {
        Money {
            amount: Decimal::new(1, self.currency.default_fraction_digits),
            currency: self.currency,
        }
    }

    /// `self` plus [`Money::minimum_increment`].
    pub fn incremented(&self) -> Result<Money> {
        self.plus(&self.minimum_increment())
    }

    /// The rate of this amount per `duration`.
    pub fn per(&self, duration: Duration) -> Result<MoneyTimeRate> {
        MoneyTimeRate::new(*self, duration)
    }

    // ── Comparison ───────────────────────────────────────────────────────────

    /// Order two amounts.
    ///
    /// # Errors
    /// [`Error::CurrencyMismatch`] under the rules of [`Money::plus`].
    pub fn compare_to(&self, other: &Money) -> Result<Ordering> {
        self.check_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// `self > other`.
    pub fn is_greater_than(&self, other: &Money) -> Result<bool> {
        Ok(self.compare_to(other)? == Ordering::Greater)
    }

    /// `self < other`.
    pub fn is_less_than(&self, other: &Money) -> Result<bool> {
        Ok(self.compare_to(other)? == Ordering::Less)
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        decimal::exact_eq(&self.amount, &other.amount) && self.currency == other.currency
    }
}

impl Eq for Money {}

impl std::hash::Hash for Money {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.amount.hash(state);
        self.currency.code.hash(state);
    }
}

impl std::ops::Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        self.negated()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.currency.symbol, self.amount)
    }
}
