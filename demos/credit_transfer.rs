use rust_decimal_macros::dec;
use sepa_ct::core::*;
use sepa_ct::xml;

fn main() -> Result<(), SepaError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sepa_ct=trace")),
        )
        .init();

    // Beneficiary-code scheme: the creditor is identified by a customer code.
    let mut coded = Transaction::new();
    coded
        .set_instruction_id("INSTR-2024-0001")
        .set_end_to_end_id("E2E-2024-0001")
        .set_instructed_amount(dec!(250))
        .set_bic("WEST GB 2L")
        .set_iban("GB82 WEST 1234 5698 7654 32")?
        .set_creditor_name("Jane Doe")?;

    // Full scheme: creditor by name, bank by clearing member id.
    let mut full = Transaction::new();
    full.set_instruction_id("INSTR-2024-0002")
        .set_end_to_end_id("E2E-2024-0002")
        .set_instructed_amount(dec!(1499.99))
        .set_currency("eur")
        .set_bic("COBADEFFXXX")
        .set_uses_beneficiary_code(false)
        .set_clearance_code("37040044")
        .set_institution_name("Commerzbank")
        .set_institution_address("DE")
        .set_creditor_country("DE")
        .set_iban("DE89 3704 0044 0532 0130 00")?
        .set_creditor_name(r"M\u00fcller GmbH")?
        .set_remittance_info("Rechnung RE-2024-001")?;

    let builder = DocumentBuilder::new().strict(true);
    for tx in [&coded, &full] {
        println!("=== {} ({}) ===", tx.instruction_id(), format_iban(tx.iban()));
        for finding in validate_transaction(tx) {
            println!("  finding: {finding}");
        }
        let doc = builder.build(tx)?;
        println!("{}\n", xml::to_xml(&doc)?);
    }

    Ok(())
}
