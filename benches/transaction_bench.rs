use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use sepa_ct::core::*;
use sepa_ct::xml;

fn full_scheme_transaction() -> Transaction {
    let mut tx = Transaction::new();
    tx.set_instruction_id("BENCH-001")
        .set_end_to_end_id("E2E-BENCH-001")
        .set_instructed_amount(dec!(1234.5))
        .set_currency("eur")
        .set_bic("WEST GB 2L")
        .set_uses_beneficiary_code(false)
        .set_creditor_country("GB")
        .set_clearance_code("GBDSC123456")
        .set_institution_name("West Bank plc")
        .set_institution_address("GB")
        .set_iban("GB82 WEST 1234 5698 7654 32")
        .unwrap()
        .set_creditor_name("Benchmark Ltd")
        .unwrap()
        .set_remittance_info("Invoice BENCH-001")
        .unwrap();
    tx
}

fn bench_checksum(c: &mut Criterion) {
    c.bench_function("verify_account_checksum", |b| {
        b.iter(|| black_box(verify_account_checksum(black_box("GB82WEST12345698765432"))));
    });
}

fn bench_populate(c: &mut Criterion) {
    c.bench_function("populate_transaction", |b| {
        b.iter(|| black_box(full_scheme_transaction()));
    });
}

fn bench_build(c: &mut Criterion) {
    let tx = full_scheme_transaction();
    c.bench_function("build_transaction", |b| {
        b.iter(|| black_box(build_transaction(black_box(&tx))));
    });
}

fn bench_xml(c: &mut Criterion) {
    let doc = build_transaction(&full_scheme_transaction());
    let text = xml::to_xml(&doc).unwrap();
    c.bench_function("xml_serialize", |b| {
        b.iter(|| black_box(xml::to_xml(black_box(&doc))));
    });
    c.bench_function("xml_parse", |b| {
        b.iter(|| black_box(xml::from_xml(black_box(&text))));
    });
}

fn bench_validate_100(c: &mut Criterion) {
    let batch: Vec<Transaction> = (0..100).map(|_| full_scheme_transaction()).collect();
    c.bench_function("validate_100_transactions", |b| {
        b.iter(|| {
            let findings: usize = batch
                .iter()
                .map(|tx| validate_transaction(black_box(tx)).len())
                .sum();
            black_box(findings)
        });
    });
}

criterion_group!(
    benches,
    bench_checksum,
    bench_populate,
    bench_build,
    bench_xml,
    bench_validate_100,
);
criterion_main!(benches);
