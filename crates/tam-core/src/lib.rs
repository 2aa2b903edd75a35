//! # tam-core
//!
//! Core types and error definitions for timeandmoney.
//!
//! This crate provides the foundational building blocks shared across the
//! other crates in the workspace: the error enum and its check macros, exact
//! decimal arithmetic with explicit rounding, the deferred [`Ratio`], and the
//! process-wide [`Settings`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Rounding modes and exact decimal division / rescaling.
pub mod decimal;

/// Error types and the `ensure!` / `require!` macros.
pub mod errors;

/// Deferred division of two decimals.
pub mod ratio;

/// Global library settings (default currency).
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use decimal::RoundingMode;
pub use errors::{Error, Result};
pub use ratio::Ratio;
pub use rust_decimal::Decimal;
pub use settings::{ScopedDefaultCurrency, Settings};
