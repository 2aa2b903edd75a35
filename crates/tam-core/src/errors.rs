//! Error types for timeandmoney.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! half is the single `thiserror`-derived [`Error`] enum below.  Argument
//! checks are written with the [`require!`](crate::require) and
//! [`ensure!`](crate::ensure) macros.

use thiserror::Error;

/// The top-level error type used throughout timeandmoney.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An out-of-range construction input (day 32, month 13, occurrence 6,
    /// zero denominator, mismatched scale, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Arithmetic or comparison between amounts of different, non-zero
    /// currencies.
    #[error("currency mismatch: {left} is not the same currency as {right}")]
    CurrencyMismatch {
        /// The receiver of the operation.
        left: String,
        /// The argument of the operation.
        right: String,
    },

    /// A rescale or division that would lose precision under a rounding mode
    /// that forbids rounding.
    #[error("inexact result: {0}")]
    InexactResult(String),

    /// A computed year/month/day combination that does not exist.
    #[error("invalid calendar date: {0}")]
    InvalidCalendarDate(String),

    /// A method was called on an argument lacking a required property
    /// (for example an interval without a lower limit).
    #[error("precondition not satisfied: {0}")]
    PreconditionViolated(String),

    /// Division by an exactly-zero amount.
    #[error("division by zero")]
    DivisionByZero,

    /// The result does not fit in the exact decimal representation.
    #[error("decimal overflow: {0}")]
    Overflow(String),
}

/// Shorthand `Result` type used throughout timeandmoney.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::PreconditionViolated(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use tam_core::{ensure, errors::Error};
/// fn lower_bounded(lower: Option<u32>) -> tam_core::errors::Result<u32> {
///     ensure!(lower.is_some(), "a lower limit is required");
///     Ok(lower.unwrap_or_default())
/// }
/// assert!(lower_bounded(Some(1)).is_ok());
/// assert!(matches!(lower_bounded(None), Err(Error::PreconditionViolated(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::PreconditionViolated(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use tam_core::{require, errors::Error};
/// fn month(m: u8) -> tam_core::errors::Result<u8> {
///     require!((1..=12).contains(&m), "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(month(12).is_ok());
/// assert!(matches!(month(13), Err(Error::InvalidArgument(_))));
/// ```
#[macro_export]
macro_rules! require {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}
