//! Predefined ISO 4217 currencies, organized by region.

pub mod america;
pub mod asia;
pub mod europe;
pub mod oceania;

// Re-export all currencies at the `currencies` module level for convenience.
pub use america::*;
pub use asia::*;
pub use europe::*;
pub use oceania::*;

use crate::currency::Currency;

/// Every predefined currency, searched by [`Currency::of`].
pub static ALL: [&Currency; 21] = [
    &USD, &CAD, &BRL, &MXN, &CLP, &EUR, &GBP, &CHF, &NOK, &SEK, &DKK, &PLN, &JPY, &CNY, &HKD,
    &INR, &KRW, &SGD, &BHD, &AUD, &NZD,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn usd_properties() {
        assert_eq!(USD.code, "USD");
        assert_eq!(USD.numeric_code, 840);
        assert_eq!(USD.default_fraction_digits, 2);
    }

    #[test]
    fn zero_and_three_digit_currencies() {
        assert_eq!(JPY.default_fraction_digits, 0);
        assert_eq!(KRW.default_fraction_digits, 0);
        assert_eq!(BHD.default_fraction_digits, 3);
    }

    #[test]
    fn codes_are_unique() {
        let codes: HashSet<_> = ALL.iter().map(|c| c.code).collect();
        let numbers: HashSet<_> = ALL.iter().map(|c| c.numeric_code).collect();
        assert_eq!(codes.len(), ALL.len());
        assert_eq!(numbers.len(), ALL.len());
    }
}
