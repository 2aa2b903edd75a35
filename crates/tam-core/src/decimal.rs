//! Exact decimal helpers with explicit rounding.
//!
//! [`Decimal`] is the exact-decimal primitive used by every monetary type.
//! It carries its own scale, but its arithmetic rounds silently once a result
//! no longer fits; the functions here never do.  [`divide`] computes the
//! quotient together with its remainder so that the rounding decision is taken
//! on the exact value, and [`rescale`] is division by one.

use crate::errors::{Error, Result};
use rust_decimal::Decimal;

/// Largest scale representable by [`Decimal`].
pub const MAX_SCALE: u32 = 28;

/// How to discard digits when a result has to be shortened to a given scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Away from zero.
    Up,
    /// Towards zero (truncation).
    Down,
    /// Towards positive infinity.
    Ceiling,
    /// Towards negative infinity.
    Floor,
    /// To nearest; ties away from zero.
    HalfUp,
    /// To nearest; ties towards zero.
    HalfDown,
    /// To nearest; ties to the even neighbour (banker's rounding).
    #[default]
    HalfEven,
    /// No rounding allowed: inexact results are an [`Error::InexactResult`].
    Unnecessary,
}

impl std::fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RoundingMode::Up => "UP",
            RoundingMode::Down => "DOWN",
            RoundingMode::Ceiling => "CEILING",
            RoundingMode::Floor => "FLOOR",
            RoundingMode::HalfUp => "HALF_UP",
            RoundingMode::HalfDown => "HALF_DOWN",
            RoundingMode::HalfEven => "HALF_EVEN",
            RoundingMode::Unnecessary => "UNNECESSARY",
        };
        write!(f, "{name}")
    }
}

/// `10^exp` as a decimal with scale 0.
fn pow10(exp: u32) -> Decimal {
    debug_assert!(exp <= MAX_SCALE);
    Decimal::from_i128_with_scale(10i128.pow(exp), 0)
}

fn overflow(op: &str, lhs: Decimal, rhs: Decimal) -> Error {
    Error::Overflow(format!("{lhs} {op} {rhs}"))
}

/// Divide `numerator` by `denominator`, returning a value with exactly
/// `scale` fractional digits rounded according to `mode`.
///
/// # Errors
/// * [`Error::DivisionByZero`] if the denominator is zero.
/// * [`Error::InvalidArgument`] if `scale` exceeds [`MAX_SCALE`].
/// * [`Error::InexactResult`] under [`RoundingMode::Unnecessary`] when the
///   quotient has more than `scale` fractional digits.
/// * [`Error::Overflow`] if an intermediate value does not fit.
pub fn divide(
    numerator: Decimal,
    denominator: Decimal,
    scale: u32,
    mode: RoundingMode,
) -> Result<Decimal> {
    if denominator.is_zero() {
        return Err(Error::DivisionByZero);
    }
    crate::require!(
        scale <= MAX_SCALE,
        "scale {scale} out of range [0, {MAX_SCALE}]"
    );

    let negative = !numerator.is_zero()
        && (numerator.is_sign_negative() != denominator.is_sign_negative());
    let b = denominator.abs();
    let a = numerator
        .abs()
        .checked_mul(pow10(scale))
        .ok_or_else(|| overflow("*", numerator, pow10(scale)))?;

    // a = q * b + r with 0 <= r < b; q is integral.
    let r = a.checked_rem(b).ok_or_else(|| overflow("%", a, b))?;
    let mut q = (a - r)
        .checked_div(b)
        .ok_or_else(|| overflow("/", a - r, b))?
        .round();

    if !r.is_zero() {
        let rest = b - r;
        let bump = match mode {
            RoundingMode::Up => true,
            RoundingMode::Down => false,
            RoundingMode::Ceiling => !negative,
            RoundingMode::Floor => negative,
            RoundingMode::HalfUp => r >= rest,
            RoundingMode::HalfDown => r > rest,
            RoundingMode::HalfEven => r > rest || (r == rest && is_odd(q)),
            RoundingMode::Unnecessary => {
                log::trace!("{numerator} / {denominator} is inexact at scale {scale}");
                return Err(Error::InexactResult(format!(
                    "{numerator} / {denominator} cannot be represented with scale {scale}"
                )));
            }
        };
        if bump {
            q = q
                .checked_add(Decimal::ONE)
                .ok_or_else(|| overflow("+", q, Decimal::ONE))?;
        }
    }

    q.rescale(0);
    q.set_scale(scale)
        .map_err(|e| Error::Overflow(format!("cannot apply scale {scale} to {q}: {e}")))?;
    if negative && !q.is_zero() {
        q.set_sign_negative(true);
    }
    Ok(q)
}

/// Return `value` with exactly `scale` fractional digits.
///
/// Widening the scale is always exact; narrowing it rounds per `mode`.
///
/// # Errors
/// As for [`divide`]; in particular [`Error::InexactResult`] when narrowing
/// under [`RoundingMode::Unnecessary`] would drop non-zero digits.
pub fn rescale(value: Decimal, scale: u32, mode: RoundingMode) -> Result<Decimal> {
    divide(value, Decimal::ONE, scale, mode)
}

/// Multiply two decimals, failing instead of rounding or panicking when the
/// product does not fit.
pub fn multiply(lhs: Decimal, rhs: Decimal) -> Result<Decimal> {
    lhs.checked_mul(rhs).ok_or_else(|| overflow("*", lhs, rhs))
}

/// Exact equality: same numeric value *and* same scale (`2.50 != 2.5`).
pub fn exact_eq(lhs: &Decimal, rhs: &Decimal) -> bool {
    lhs == rhs && lhs.scale() == rhs.scale()
}

/// Convert a binary floating-point value to the decimal it denotes exactly
/// (as far as [`Decimal`] can hold it).
///
/// # Errors
/// [`Error::InvalidArgument`] for NaN, infinities, and out-of-range values.
pub fn from_f64(value: f64) -> Result<Decimal> {
    Decimal::from_f64_retain(value)
        .ok_or_else(|| Error::InvalidArgument(format!("{value} is not representable as a decimal")))
}

fn is_odd(integral: Decimal) -> bool {
    !(integral % Decimal::TWO).is_zero()
}
