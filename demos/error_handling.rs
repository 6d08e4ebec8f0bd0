use rust_decimal_macros::dec;
use sepa_ct::core::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sepa_ct=debug")),
        )
        .init();

    let mut tx = Transaction::new();
    tx.set_instruction_id("ERR-001")
        .set_instructed_amount(dec!(-12.5))
        .set_currency("usd");

    // ── 1. Setter rejections: nothing is stored ───────────────────────
    println!("=== Setter Errors ===");
    match tx.set_iban("GB82 WEST 1234 5698 7654 31") {
        Ok(_) => println!("  IBAN accepted (unexpected)"),
        Err(e) => println!("  IBAN: {}", e),
    }
    match tx.set_creditor_name(&"Very Long Company Name ".repeat(4)) {
        Ok(_) => println!("  Name accepted (unexpected)"),
        Err(e) => println!("  Name: {}", e),
    }
    match tx.set_instructed_amount_str("1,000.00") {
        Ok(_) => println!("  Amount accepted (unexpected)"),
        Err(e) => println!("  Amount: {}", e),
    }

    // ── 2. Advisory findings ──────────────────────────────────────────
    println!("\n=== Validation Findings ===");
    let errors = validate_transaction(&tx);
    println!("  Found {} findings:", errors.len());
    for e in &errors {
        println!("  - {}", e);
    }

    // ── 3. Strict build refuses incomplete transactions ───────────────
    println!("\n=== Strict Build ===");
    match DocumentBuilder::new().strict(true).build(&tx) {
        Ok(_) => println!("  Built (unexpected)"),
        Err(e) => println!("  Rejected: {}", e),
    }
    let lenient = DocumentBuilder::new().build_unchecked(&tx);
    println!("  Lenient build produced <{}> anyway", lenient.name);
}
