//! European currencies.

use crate::currency::Currency;

/// Euro.
pub static EUR: Currency = Currency {
    name: "Euro",
    code: "EUR",
    numeric_code: 978,
    symbol: "€",
    default_fraction_digits: 2,
};

/// Pound Sterling.
pub static GBP: Currency = Currency {
    name: "Pound Sterling",
    code: "GBP",
    numeric_code: 826,
    symbol: "£",
    default_fraction_digits: 2,
};

/// Swiss Franc.
pub static CHF: Currency = Currency {
    name: "Swiss Franc",
    code: "CHF",
    numeric_code: 756,
    symbol: "CHF",
    default_fraction_digits: 2,
};

/// Norwegian Krone.
pub static NOK: Currency = Currency {
    name: "Norwegian Krone",
    code: "NOK",
    numeric_code: 578,
    symbol: "kr",
    default_fraction_digits: 2,
};

/// Swedish Krona.
pub static SEK: Currency = Currency {
    name: "Swedish Krona",
    code: "SEK",
    numeric_code: 752,
    symbol: "kr",
    default_fraction_digits: 2,
};

/// Danish Krone.
pub static DKK: Currency = Currency {
    name: "Danish Krone",
    code: "DKK",
    numeric_code: 208,
    symbol: "kr",
    default_fraction_digits: 2,
};

/// Polish Zloty.
pub static PLN: Currency = Currency {
    name: "Polish Zloty",
    code: "PLN",
    numeric_code: 985,
    symbol: "zł",
    default_fraction_digits: 2,
};
