#![no_main]

use libfuzzer_sys::fuzz_target;
use sepa_ct::xml::{XmlOptions, from_xml, to_xml_with};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(node) = from_xml(s) else {
        return;
    };
    // Anything we can read, we can write and read again without panicking.
    if let Ok(written) = to_xml_with(&node, &XmlOptions::fragment()) {
        let _ = from_xml(&written);
    }
});
