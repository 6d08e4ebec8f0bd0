//! IBAN checksum verification (ISO 13616 / ISO 7064 mod-97-10).
//!
//! Also carries the registered IBAN lengths of the SEPA scheme countries,
//! which doubles as the list of countries a SEPA credit transfer can reach.

use super::validation::strip_whitespace;

/// Shortest IBAN issued anywhere (Norway).
pub const MIN_IBAN_LENGTH: usize = 15;

/// Longest IBAN permitted by ISO 13616.
pub const MAX_IBAN_LENGTH: usize = 34;

/// Verify the mod-97 checksum of an IBAN in electronic format (no spaces).
///
/// The first four characters are moved to the end, letters become two-digit
/// numbers (A = 10 … Z = 35) and the resulting numeral must leave remainder 1
/// when divided by 97. The remainder is folded digit by digit, so no
/// big-integer arithmetic is needed.
///
/// Malformed input (wrong length, non-alphanumeric characters, a country
/// prefix that is not two letters, check digits that are not digits) yields
/// `false`.
///
/// ```
/// use sepa_ct::verify_account_checksum;
///
/// assert!(verify_account_checksum("GB82WEST12345698765432"));
/// assert!(!verify_account_checksum("GB82WEST12345698765433"));
/// ```
pub fn verify_account_checksum(iban: &str) -> bool {
    let bytes = iban.as_bytes();
    if !(MIN_IBAN_LENGTH..=MAX_IBAN_LENGTH).contains(&bytes.len())
        || !bytes.iter().all(u8::is_ascii_alphanumeric)
    {
        return false;
    }

    let [c0, c1, d0, d1, bban @ ..] = bytes else {
        return false;
    };
    if !c0.is_ascii_alphabetic()
        || !c1.is_ascii_alphabetic()
        || !d0.is_ascii_digit()
        || !d1.is_ascii_digit()
    {
        return false;
    }

    let remainder = bban
        .iter()
        .chain(&bytes[..4])
        .fold(0u32, |acc, &b| match b {
            b'0'..=b'9' => (acc * 10 + u32::from(b - b'0')) % 97,
            _ => (acc * 100 + u32::from(b.to_ascii_uppercase() - b'A') + 10) % 97,
        });

    remainder == 1
}

/// Country prefix of an IBAN, if the first two characters are ASCII letters.
pub fn iban_country(iban: &str) -> Option<&str> {
    let prefix = iban.get(..2)?;
    prefix
        .bytes()
        .all(|b| b.is_ascii_alphabetic())
        .then_some(prefix)
}

/// Registered IBAN length for a SEPA scheme country.
pub fn iban_length(country: &str) -> Option<usize> {
    IBAN_LENGTHS
        .binary_search_by(|(code, _)| (*code).cmp(country))
        .ok()
        .map(|i| IBAN_LENGTHS[i].1)
}

/// Whether `code` is an ISO 3166-1 alpha-2 code of a SEPA scheme country.
pub fn is_sepa_country(code: &str) -> bool {
    iban_length(code).is_some()
}

/// Format an IBAN for print: uppercase, in blocks of four separated by spaces.
///
/// ```
/// use sepa_ct::format_iban;
///
/// assert_eq!(format_iban("gb82west12345698765432"), "GB82 WEST 1234 5698 7654 32");
/// ```
pub fn format_iban(iban: &str) -> String {
    let compact = strip_whitespace(iban).to_uppercase();
    let mut out = String::with_capacity(compact.len() + compact.len() / 4);
    for (i, ch) in compact.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// IBAN lengths of the SEPA scheme countries (EPC register).
/// Sorted by country code for binary search.
static IBAN_LENGTHS: &[(&str, usize)] = &[
    ("AD", 24),
    ("AL", 28),
    ("AT", 20),
    ("BE", 16),
    ("BG", 22),
    ("CH", 21),
    ("CY", 28),
    ("CZ", 24),
    ("DE", 22),
    ("DK", 18),
    ("EE", 20),
    ("ES", 24),
    ("FI", 18),
    ("FR", 27),
    ("GB", 22),
    ("GI", 23),
    ("GR", 27),
    ("HR", 21),
    ("HU", 28),
    ("IE", 22),
    ("IS", 26),
    ("IT", 27),
    ("LI", 21),
    ("LT", 20),
    ("LU", 20),
    ("LV", 21),
    ("MC", 27),
    ("MD", 24),
    ("ME", 22),
    ("MK", 19),
    ("MT", 31),
    ("NL", 18),
    ("NO", 15),
    ("PL", 28),
    ("PT", 25),
    ("RO", 24),
    ("SE", 24),
    ("SI", 19),
    ("SK", 24),
    ("SM", 27),
    ("VA", 22),
];
