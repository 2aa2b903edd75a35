//! Process-wide library settings.
//!
//! [`Settings`] holds the **default currency code**: the currency of the zero
//! amount returned when summing an empty collection of money.  It is a
//! process-wide singleton accessed via a `std::sync::OnceLock`, stored behind
//! a `Mutex` so that it can be changed from any thread.
//!
//! The code is kept as a plain ISO 4217 string; `tam-money` resolves it to a
//! currency record.

use std::sync::{Mutex, MutexGuard, OnceLock};

/// The currency code used while no default has been set.
pub const FALLBACK_CURRENCY_CODE: &str = "USD";

/// Process-wide settings used by timeandmoney.
pub struct Settings {
    default_currency: Mutex<Option<&'static str>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            default_currency: Mutex::new(None),
        })
    }

    fn slot(&self) -> MutexGuard<'_, Option<&'static str>> {
        // The slot is a plain `Option<&str>`, never observed half-written.
        self.default_currency
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Return the default currency code, [`FALLBACK_CURRENCY_CODE`] if unset.
    pub fn default_currency_code(&self) -> &'static str {
        self.slot().unwrap_or(FALLBACK_CURRENCY_CODE)
    }

    /// Set the default currency code.
    pub fn set_default_currency_code(&self, code: &'static str) {
        log::debug!("default currency set to {code}");
        *self.slot() = Some(code);
    }

    /// Clear the default currency, reverting to [`FALLBACK_CURRENCY_CODE`].
    pub fn reset_default_currency(&self) {
        *self.slot() = None;
    }
}

/// Sets the default currency for the lifetime of the guard, restoring the
/// previous value on drop.
#[must_use = "the previous default is restored as soon as the guard is dropped"]
pub struct ScopedDefaultCurrency {
    previous: Option<&'static str>,
}

impl ScopedDefaultCurrency {
    /// Make `code` the default currency until the guard is dropped.
    pub fn new(code: &'static str) -> Self {
        let settings = Settings::instance();
        let previous = settings.slot().replace(code);
        Self { previous }
    }
}

impl Drop for ScopedDefaultCurrency {
    fn drop(&mut self) {
        *Settings::instance().slot() = self.previous;
    }
}
