//! Token parsing performance benchmarks
//!
//! Parsing runs before any key is touched, so its cost is what an attacker
//! can impose with arbitrary input.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use jwtforge::*;

/// Helper to generate test tokens of different sizes
mod helpers {
    use jwtforge::*;

    pub fn generate_token_with_payload_size(payload_size: usize) -> String {
        let claims = ClaimsBuilder::new()
            .issuer("https://example.com")
            .subject("user123")
            .claim("iat", 1_516_239_022)
            .claim("exp", 9_999_999_999_i64)
            .claim("data", "x".repeat(payload_size.saturating_sub(96)))
            .build()
            .unwrap();

        TokenBuilder::new(Algorithm::HS256)
            .claims(claims)
            .sign(&Key::symmetric("test-secret-key"))
            .unwrap()
    }
}

fn bench_parsing_by_size(c: &mut Criterion) {
    use helpers::generate_token_with_payload_size;

    let mut group = c.benchmark_group("parse_by_size");

    for size in [64, 256, 1024, 4096, 16384] {
        let token = generate_token_with_payload_size(size);

        group.throughput(Throughput::Bytes(token.len() as u64));
        group.bench_function(format!("size_{size}"), |b| {
            b.iter(|| parse(black_box(&token)).unwrap());
        });
    }

    group.finish();
}

fn bench_rejected_input(c: &mut Criterion) {
    let oversized = "a".repeat(128 * 1024);
    let cases = [
        ("part_count", "eyJhbGciOiJIUzI1NiJ9.e30".to_string()),
        ("bad_base64", "eyJhbGciOiJIUzI1NiJ9.!!!.c2ln".to_string()),
        (
            "none_alg",
            format!(
                "{}.e30.",
                utils::base64url::encode(r#"{"alg":"none","typ":"JWT"}"#)
            ),
        ),
        ("oversized", oversized),
    ];

    let mut group = c.benchmark_group("parse_rejected");
    for (name, token) in &cases {
        group.bench_function(*name, |b| {
            b.iter(|| parse(black_box(token)).unwrap_err());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parsing_by_size, bench_rejected_input);
criterion_main!(benches);
