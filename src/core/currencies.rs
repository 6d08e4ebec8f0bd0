//! ISO 4217 codes of the currencies in circulation across the SEPA area.
//!
//! SEPA credit transfers settle in euro, but the scheme countries outside the
//! euro area still exchange transfers labelled with their own currency. The
//! currency is a passthrough label: nothing here converts amounts.

/// Check whether `code` is a currency used in a SEPA scheme country.
pub fn is_known_currency_code(code: &str) -> bool {
    CURRENCY_CODES.binary_search(&code).is_ok()
}

/// Sorted for binary search.
static CURRENCY_CODES: &[&str] = &[
    "ALL", // Albanian Lek
    "BGN", // Bulgarian Lev
    "CHF", // Swiss Franc
    "CZK", // Czech Koruna
    "DKK", // Danish Krone
    "EUR", // Euro
    "GBP", // Pound Sterling
    "GIP", // Gibraltar Pound
    "HUF", // Hungarian Forint
    "ISK", // Icelandic Krona
    "MDL", // Moldovan Leu
    "MKD", // Macedonian Denar
    "NOK", // Norwegian Krone
    "PLN", // Polish Zloty
    "RON", // Romanian Leu
    "SEK", // Swedish Krona
];
