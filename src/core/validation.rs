use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use super::currencies::is_known_currency_code;
use super::error::{SepaError, ValidationError};
use super::iban::{iban_country, iban_length, is_sepa_country};
use super::types::Transaction;

/// Format an amount as fixed-point text with exactly two fractional digits.
///
/// Rounds half away from zero. Equal values normalize identically regardless
/// of their scale, so `1`, `1.0` and `1.00` all give `"1.00"`.
///
/// ```
/// use sepa_ct::normalize_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(normalize_amount(Decimal::new(1, 0)), "1.00");
/// assert_eq!(normalize_amount(Decimal::new(12345, 3)), "12.35");
/// ```
pub fn normalize_amount(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        // drop the sign of negative zero
        rounded = Decimal::ZERO;
    }
    format!("{rounded:.2}")
}

/// Parse amount text into a [`Decimal`].
///
/// Accepts an optional sign, digits and at most one `.` separator; surrounding
/// whitespace is ignored. Exponents, thousands separators and currency symbols
/// are rejected.
pub fn parse_amount(text: &str) -> Result<Decimal, SepaError> {
    let trimmed = text.trim();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);

    let mut digits = 0usize;
    let mut dots = 0usize;
    for ch in unsigned.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return Err(SepaError::InvalidAmount(text.to_string())),
        }
    }
    if digits == 0 || dots > 1 {
        return Err(SepaError::InvalidAmount(text.to_string()));
    }

    Decimal::from_str(trimmed).map_err(|e| SepaError::InvalidAmount(format!("{text}: {e}")))
}

/// Remove every whitespace character, not only leading and trailing ones.
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Whether `s` has at most `max` characters.
///
/// Counts Unicode scalar values, so multi-byte text is measured by what a
/// reader sees rather than by its UTF-8 size.
pub fn check_length(s: &str, max: usize) -> bool {
    s.chars().count() <= max
}

/// Canonicalize free text before it is length-checked and stored.
///
/// Literal `\uXXXX` escape sequences (as produced by JSON encoders and some
/// ERP exports) are replaced by the characters they denote, including UTF-16
/// surrogate pairs. Escapes that do not denote a character are kept as they
/// are.
///
/// ```
/// use sepa_ct::decode_text;
///
/// assert_eq!(decode_text(r"M\u00fcller GmbH"), "Müller GmbH");
/// assert_eq!(decode_text(r"\uZZZZ"), r"\uZZZZ");
/// ```
pub fn decode_text(s: &str) -> String {
    if !s.contains("\\u") {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find("\\u") {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match decode_escape(tail) {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &tail[consumed..];
            }
            None => {
                out.push_str("\\u");
                rest = &tail[2..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Read the UTF-16 code unit of a `\uXXXX` escape at the start of `s`.
fn escape_unit(s: &str) -> Option<u16> {
    let hex = s.strip_prefix("\\u")?.get(..4)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(hex, 16).ok()
}

/// Decode one escape (or surrogate pair) at the start of `s`.
/// Returns the character and the number of bytes consumed.
fn decode_escape(s: &str) -> Option<(char, usize)> {
    let unit = escape_unit(s)?;
    match unit {
        0xD800..=0xDBFF => {
            let low = escape_unit(s.get(6..)?)?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return None;
            }
            let code = 0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
            char::from_u32(code).map(|c| (c, 12))
        }
        0xDC00..=0xDFFF => None,
        _ => char::from_u32(u32::from(unit)).map(|c| (c, 6)),
    }
}

/// Check a transaction for problems that do not block its setters.
/// Returns all findings (not just the first).
///
/// Callers use this to decide whether a transaction may join a batch; an
/// empty result means no finding.
pub fn validate_transaction(tx: &Transaction) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for field in tx.missing_fields() {
        errors.push(ValidationError::with_rule(
            field,
            "required field must not be empty",
            "COMPLETE",
        ));
    }

    if let Ok(amount) = Decimal::from_str(tx.instructed_amount()) {
        if amount.is_sign_negative() && !amount.is_zero() {
            errors.push(ValidationError::with_rule(
                "instructed_amount",
                format!("amount {amount} must not be negative"),
                "AMOUNT",
            ));
        }
    }

    let currency = tx.currency();
    if !is_known_currency_code(currency) {
        errors.push(ValidationError::with_rule(
            "currency",
            format!("'{currency}' is not a SEPA-area ISO 4217 currency code"),
            "CCY",
        ));
    }

    let iban = tx.iban();
    if let Some(expected) = iban_country(iban).and_then(|c| iban_length(&c.to_ascii_uppercase()))
    {
        if iban.len() != expected {
            errors.push(ValidationError::with_rule(
                "iban",
                format!(
                    "IBAN has {} characters, {expected} expected for its country",
                    iban.len()
                ),
                "IBAN-LEN",
            ));
        }
    }

    if !tx.uses_beneficiary_code() {
        validate_country(tx.creditor_country(), "creditor_country", &mut errors);
        validate_country(tx.institution_address(), "institution_address", &mut errors);
    }

    errors
}

fn validate_country(code: &str, field: &str, errors: &mut Vec<ValidationError>) {
    if !code.is_empty() && !is_sepa_country(code) {
        errors.push(ValidationError::with_rule(
            field,
            format!("'{code}' is not a SEPA scheme country code"),
            "CTRY",
        ));
    }
}
