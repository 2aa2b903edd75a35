//! Asian currencies.

use crate::currency::Currency;

/// Japanese Yen.
pub static JPY: Currency = Currency {
    name: "Japanese Yen",
    code: "JPY",
    numeric_code: 392,
    symbol: "¥",
    default_fraction_digits: 0,
};

/// Chinese Yuan.
pub static CNY: Currency = Currency {
    name: "Chinese Yuan",
    code: "CNY",
    numeric_code: 156,
    symbol: "CN¥",
    default_fraction_digits: 2,
};

/// Hong Kong Dollar.
pub static HKD: Currency = Currency {
    name: "Hong Kong Dollar",
    code: "HKD",
    numeric_code: 344,
    symbol: "HK$",
    default_fraction_digits: 2,
};

/// Indian Rupee.
pub static INR: Currency = Currency {
    name: "Indian Rupee",
    code: "INR",
    numeric_code: 356,
    symbol: "₹",
    default_fraction_digits: 2,
};

/// South Korean Won.
pub static KRW: Currency = Currency {
    name: "South Korean Won",
    code: "KRW",
    numeric_code: 410,
    symbol: "₩",
    default_fraction_digits: 0,
};

/// Singapore Dollar.
pub static SGD: Currency = Currency {
    name: "Singapore Dollar",
    code: "SGD",
    numeric_code: 702,
    symbol: "S$",
    default_fraction_digits: 2,
};

/// Bahraini Dinar.
pub static BHD: Currency = Currency {
    name: "Bahraini Dinar",
    code: "BHD",
    numeric_code: 48,
    symbol: "BD",
    default_fraction_digits: 3,
};
