//! Oceanian currencies.

use crate::currency::Currency;

/// Australian Dollar.
pub static AUD: Currency = Currency {
    name: "Australian Dollar",
    code: "AUD",
    numeric_code: 36,
    symbol: "A$",
    default_fraction_digits: 2,
};

/// New Zealand Dollar.
pub static NZD: Currency = Currency {
    name: "New Zealand Dollar",
    code: "NZD",
    numeric_code: 554,
    symbol: "NZ$",
    default_fraction_digits: 2,
};
