use rust_decimal_macros::dec;
use sepa_ct::core::*;

const IBAN: &str = "GB82WEST12345698765432";

fn complete() -> Transaction {
    let mut tx = Transaction::new();
    tx.set_instruction_id("I1")
        .set_end_to_end_id("E1")
        .set_instructed_amount(dec!(10))
        .set_bic("WESTGB2L")
        .set_iban(IBAN)
        .unwrap()
        .set_creditor_name("Jane Doe")
        .unwrap();
    tx
}

// --- Validation library ---

#[test]
fn amount_normalization_ignores_scale() {
    assert_eq!(normalize_amount(dec!(1)), normalize_amount(dec!(1.00)));
    assert_eq!(normalize_amount(dec!(1)), "1.00");
    assert_eq!(normalize_amount(dec!(1000000)), "1000000.00");
    assert_eq!(normalize_amount(dec!(0)), "0.00");
}

#[test]
fn whitespace_stripping() {
    assert_eq!(strip_whitespace(" AB CD 12 "), "ABCD12");
    assert_eq!(strip_whitespace(""), "");
}

#[test]
fn reference_iban_checksum() {
    assert!(verify_account_checksum(IBAN));
    // every single-digit change breaks the checksum
    for (i, ch) in IBAN.char_indices() {
        let Some(digit) = ch.to_digit(10) else {
            continue;
        };
        let replacement = char::from_digit((digit + 1) % 10, 10).unwrap();
        let mut mutated = IBAN.to_string();
        mutated.replace_range(i..i + 1, &replacement.to_string());
        assert!(!verify_account_checksum(&mutated), "{mutated} passed");
    }
}

// --- Transaction ---

#[test]
fn currency_defaults_lazily() {
    let mut tx = Transaction::new();
    assert_eq!(tx.currency(), "EUR");
    assert_eq!(tx.currency(), "EUR");
    tx.set_currency("eur");
    assert_eq!(tx.currency(), "EUR");
    tx.set_currency("sek");
    assert_eq!(tx.currency(), "SEK");
}

#[test]
fn bic_and_iban_are_compacted() {
    let mut tx = Transaction::new();
    tx.set_bic(" WEST GB 2L ");
    tx.set_iban("GB82 WEST 1234 5698 7654 32").unwrap();
    assert_eq!(tx.bic(), "WESTGB2L");
    assert_eq!(tx.iban(), IBAN);
}

#[test]
fn bad_iban_is_rejected() {
    let mut tx = Transaction::new();
    let err = tx.set_iban("GB82 WEST 1234 5698 7654 31").unwrap_err();
    assert!(matches!(err, SepaError::InvalidAccountNumber(ref v) if v == "GB82WEST12345698765431"));
    assert_eq!(tx.iban(), "");
    assert!(tx.set_iban("").is_err());
}

#[test]
fn creditor_name_limit() {
    let mut tx = Transaction::new();
    let seventy = "a".repeat(70);
    tx.set_creditor_name(&seventy).unwrap();
    assert_eq!(tx.creditor_name(), seventy);

    let err = tx.set_creditor_name(&"b".repeat(71)).unwrap_err();
    assert_eq!(
        err,
        SepaError::FieldTooLong {
            field: "creditor_name",
            max: 70,
            actual: 71,
        }
    );
    assert_eq!(tx.creditor_name(), seventy);
}

#[test]
fn creditor_name_counts_characters_not_bytes() {
    let mut tx = Transaction::new();
    // 70 characters, 140 bytes
    let umlauts = "ä".repeat(70);
    assert!(tx.set_creditor_name(&umlauts).is_ok());
    assert!(tx.set_creditor_name(&"ä".repeat(71)).is_err());
}

#[test]
fn creditor_name_is_decoded() {
    let mut tx = Transaction::new();
    tx.set_creditor_name(r"M\u00fcller GmbH").unwrap();
    assert_eq!(tx.creditor_name(), "Müller GmbH");

    // 71 characters before decoding, 66 after
    let escaped = format!("{}{}", "x".repeat(65), r"\u00e9");
    assert_eq!(escaped.chars().count(), 71);
    assert!(tx.set_creditor_name(&escaped).is_ok());
    assert_eq!(tx.creditor_name().chars().count(), 66);
}

#[test]
fn remittance_limit() {
    let mut tx = Transaction::new();
    tx.set_remittance_info(&"r".repeat(140)).unwrap();
    let err = tx.set_remittance_info(&"r".repeat(141)).unwrap_err();
    assert!(matches!(
        err,
        SepaError::FieldTooLong {
            field: "remittance_info",
            max: 140,
            actual: 141,
        }
    ));
    assert_eq!(tx.remittance_info().len(), 140);
}

#[test]
fn last_write_wins() {
    let mut tx = Transaction::new();
    tx.set_instruction_id("first").set_instruction_id("second");
    tx.set_instructed_amount(dec!(1)).set_instructed_amount(dec!(2.5));
    assert_eq!(tx.instruction_id(), "second");
    assert_eq!(tx.instructed_amount(), "2.50");
}

#[test]
fn completeness() {
    assert!(complete().is_complete());

    let mut tx = complete();
    tx.set_bic("   ");
    assert!(!tx.is_complete());
    assert_eq!(tx.missing_fields(), vec!["bic"]);
}

// --- Advisory validation ---

#[test]
fn complete_transaction_has_no_findings() {
    assert!(validate_transaction(&complete()).is_empty());
}

#[test]
fn findings_are_collected() {
    let mut tx = Transaction::new();
    tx.set_instructed_amount(dec!(-5))
        .set_currency("usd")
        .set_uses_beneficiary_code(false)
        .set_creditor_country("US")
        .set_institution_address("GB");

    let errors = validate_transaction(&tx);
    let rules: Vec<_> = errors.iter().filter_map(|e| e.rule.as_deref()).collect();
    assert_eq!(
        rules,
        vec!["COMPLETE", "COMPLETE", "COMPLETE", "AMOUNT", "CCY", "CTRY"]
    );
    assert_eq!(errors[5].field, "creditor_country");
}

#[test]
fn iban_length_must_match_country() {
    let mut tx = complete();
    tx.set_iban("DE75512108001245126199").unwrap();
    assert!(validate_transaction(&tx).is_empty());

    // checksum holds, but Germany registers 22 characters
    tx.set_iban("DE863704004405320130").unwrap();
    let errors = validate_transaction(&tx);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].rule.as_deref(), Some("IBAN-LEN"));
    assert_eq!(
        errors[0].to_string(),
        "[IBAN-LEN] iban: IBAN has 20 characters, 22 expected for its country"
    );
}

#[test]
fn code_based_scheme_skips_country_checks() {
    let mut tx = complete();
    tx.set_creditor_country("ZZ").set_institution_address("ZZ");
    assert!(validate_transaction(&tx).is_empty());
}

#[test]
fn serde_replays_setters() {
    let mut tx = complete();
    tx.set_remittance_info("Invoice 42").unwrap();
    let json = serde_json::to_string(&tx).unwrap();
    let back: Transaction = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tx);

    let bad = json.replace(IBAN, "GB82WEST12345698765431");
    assert!(serde_json::from_str::<Transaction>(&bad).is_err());
}

#[test]
fn serde_keeps_literal_escape_text() {
    let mut tx = complete();
    tx.set_creditor_name(r"\u005Cu0041").unwrap();
    tx.set_remittance_info(r"ref \u005Cu00e9").unwrap();
    assert_eq!(tx.creditor_name(), r"\u0041");

    let json = serde_json::to_string(&tx).unwrap();
    let back: Transaction = serde_json::from_str(&json).unwrap();
    assert_eq!(back.creditor_name(), r"\u0041");
    assert_eq!(back, tx);
}

#[test]
fn serde_rejects_over_long_text() {
    let json = format!(r#"{{"creditor_name": "{}"}}"#, "x".repeat(71));
    assert!(serde_json::from_str::<Transaction>(&json).is_err());
}

#[test]
fn serde_accepts_sparse_records() {
    let tx: Transaction =
        serde_json::from_str(r#"{"instructed_amount": "7.5", "currency": "chf"}"#).unwrap();
    assert_eq!(tx.instructed_amount(), "7.50");
    assert_eq!(tx.currency(), "CHF");
    assert!(tx.uses_beneficiary_code());
}
