//! Americas currencies.

use crate::currency::Currency;

/// US Dollar.
pub static USD: Currency = Currency {
    name: "US Dollar",
    code: "USD",
    numeric_code: 840,
    symbol: "$",
    default_fraction_digits: 2,
};

/// Canadian Dollar.
pub static CAD: Currency = Currency {
    name: "Canadian Dollar",
    code: "CAD",
    numeric_code: 124,
    symbol: "CA$",
    default_fraction_digits: 2,
};

/// Brazilian Real.
pub static BRL: Currency = Currency {
    name: "Brazilian Real",
    code: "BRL",
    numeric_code: 986,
    symbol: "R$",
    default_fraction_digits: 2,
};

/// Mexican Peso.
pub static MXN: Currency = Currency {
    name: "Mexican Peso",
    code: "MXN",
    numeric_code: 484,
    symbol: "Mex$",
    default_fraction_digits: 2,
};

/// Chilean Peso.
pub static CLP: Currency = Currency {
    name: "Chilean Peso",
    code: "CLP",
    numeric_code: 152,
    symbol: "CLP$",
    default_fraction_digits: 0,
};
