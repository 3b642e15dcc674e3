use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use ifaktura::core::*;

const URL: &str = "https://www.ifirma.pl/iapi/fakturakraj.json";

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn invoice(lines: usize) -> ConfiguredInvoice {
    ConfiguredInvoice {
        id: "bench".into(),
        to: "ACME".into(),
        issued_at: None,
        sold_at: None,
        positions: (1..=lines)
            .map(|i| Position::new(format!("Service item {i}"), 5, "godz.", dec!(0.23)))
            .collect(),
        comment: Some("Benchmark".into()),
    }
}

fn payment() -> Payment {
    Payment {
        bank: "61 1090 1014 0000 0712 1981 2874".into(),
    }
}

fn bench_build_request(c: &mut Criterion) {
    let inv = invoice(10);
    let pay = payment();
    c.bench_function("build_request_10_positions", |b| {
        b.iter(|| {
            black_box(
                RequestBuilder::new(black_box(&inv), &pay, dec!(120))
                    .line_mode(LineMode::AllPositions)
                    .today(test_date())
                    .build(),
            )
        });
    });
}

fn bench_serialize_and_sign(c: &mut Criterion) {
    let signer = Signer::new("bench@example.com", "00112233445566778899aabbccddeeff").unwrap();
    let inv = invoice(100);
    let pay = payment();
    let request = RequestBuilder::new(&inv, &pay, dec!(120))
        .line_mode(LineMode::AllPositions)
        .today(test_date())
        .build()
        .unwrap();

    c.bench_function("serialize_and_sign_100_positions", |b| {
        b.iter(|| {
            let body = black_box(&request).to_json_bytes().unwrap();
            black_box(signer.authorization(URL, &body))
        });
    });
}

criterion_group!(benches, bench_build_request, bench_serialize_and_sign);
criterion_main!(benches);
