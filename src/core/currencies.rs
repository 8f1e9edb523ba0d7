//! ISO 4217 currency codes accepted on invoices.
//!
//! The list is the home currency plus every currency quoted on the Czech
//! National Bank daily rate sheet, so any accepted invoice currency can be
//! converted to CZK.

/// Currency the native totals are expressed in.
pub const HOME_CURRENCY: &str = "CZK";

/// Whether `code` is the home currency (exchange rate is always 1).
pub fn is_home_currency(code: &str) -> bool {
    code == HOME_CURRENCY
}

/// Check whether `code` is an accepted invoice currency.
pub fn is_known_currency_code(code: &str) -> bool {
    CURRENCY_CODES.binary_search(&code).is_ok()
}

/// Sorted for binary search.
static CURRENCY_CODES: &[&str] = &[
    "AUD", // Australian Dollar
    "BRL", // Brazilian Real
    "CAD", // Canadian Dollar
    "CHF", // Swiss Franc
    "CNY", // Chinese Yuan
    "CZK", // Czech Koruna
    "DKK", // Danish Krone
    "EUR", // Euro
    "GBP", // Pound Sterling
    "HKD", // Hong Kong Dollar
    "HUF", // Hungarian Forint
    "IDR", // Indonesian Rupiah
    "ILS", // Israeli Shekel
    "INR", // Indian Rupee
    "ISK", // Icelandic Krona
    "JPY", // Japanese Yen
    "KRW", // South Korean Won
    "MXN", // Mexican Peso
    "MYR", // Malaysian Ringgit
    "NOK", // Norwegian Krone
    "NZD", // New Zealand Dollar
    "PHP", // Philippine Peso
    "PLN", // Polish Zloty
    "RON", // Romanian Leu
    "SEK", // Swedish Krona
    "SGD", // Singapore Dollar
    "THB", // Thai Baht
    "TRY", // Turkish Lira
    "USD", // US Dollar
    "XDR", // IMF Special Drawing Rights
    "ZAR", // South African Rand
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_currencies() {
        assert!(is_known_currency_code("CZK"));
        assert!(is_known_currency_code("EUR"));
        assert!(is_known_currency_code("USD"));
        assert!(is_known_currency_code("XDR"));
    }

    #[test]
    fn unknown_currencies() {
        assert!(!is_known_currency_code("XYZ"));
        assert!(!is_known_currency_code(""));
        assert!(!is_known_currency_code("czk"));
    }

    #[test]
    fn home_currency() {
        assert!(is_home_currency("CZK"));
        assert!(!is_home_currency("EUR"));
        assert!(is_known_currency_code(HOME_CURRENCY));
    }

    #[test]
    fn list_is_sorted() {
        for window in CURRENCY_CODES.windows(2) {
            assert!(
                window[0] < window[1],
                "currency codes not sorted: {} >= {}",
                window[0],
                window[1]
            );
        }
    }
}
