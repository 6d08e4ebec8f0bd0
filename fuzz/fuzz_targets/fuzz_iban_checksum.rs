#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic; accepted input must survive the setter unchanged.
        if sepa_ct::verify_account_checksum(s) {
            let mut tx = sepa_ct::Transaction::new();
            assert!(tx.set_iban(s).is_ok());
            assert_eq!(tx.iban(), s);
        }
        let _ = sepa_ct::decode_text(s);
    }
});
