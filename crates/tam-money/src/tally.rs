//! `Tally`: a list of amounts in one currency.

use crate::currency::Currency;
use crate::money::Money;
use tam_core::errors::{Error, Result};

/// A non-empty collection of amounts sharing one currency.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tally {
    monies: Vec<Money>,
}

impl Tally {
    /// Collect `monies` into a tally.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `monies` is empty or the amounts are not
    /// all in the same currency.  Zero amounts are not exempt.
    pub fn new(monies: impl IntoIterator<Item = Money>) -> Result<Self> {
        let monies: Vec<Money> = monies.into_iter().collect();
        let Some(first) = monies.first() else {
            return Err(Error::InvalidArgument("a tally needs at least one amount".into()));
        };
        let currency = first.currency();
        if let Some(odd) = monies.iter().find(|m| m.currency() != currency) {
            log::debug!("tally of {currency} rejects {odd}");
            return Err(Error::InvalidArgument(format!(
                "all amounts in a tally must be in {currency}, got {odd}"
            )));
        }
        Ok(Self { monies })
    }

    /// The shared currency.
    pub fn currency(&self) -> &'static Currency {
        self.monies[0].currency()
    }

    /// Number of amounts.
    pub fn len(&self) -> usize {
        self.monies.len()
    }

    /// Always `false`; a tally holds at least one amount.
    pub fn is_empty(&self) -> bool {
        self.monies.is_empty()
    }

    /// The amounts, in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Money> {
        self.monies.iter()
    }

    /// The sum of all amounts.
    pub fn net(&self) -> Result<Money> {
        Money::sum(&self.monies)
    }
}

impl<'a> IntoIterator for &'a Tally {
    type Item = &'a Money;
    type IntoIter = std::slice::Iter<'a, Money>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, m) in self.monies.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{m}")?;
        }
        f.write_str("]")
    }
}
