//! End-to-end tests: SemiprimeReader over a real subprocess
//!
//! A `sh -c` script plays the generator, writing the same layout the real
//! generator does: per record the semiprime (size bytes) then both factors
//! ((size + 1) / 2 bytes each), each behind a 4-byte big-endian length.

#![cfg(unix)]

use std::sync::Arc;

use num_bigint::BigUint;
use sprime_core::application::{ReaderOptions, SemiprimeReader};
use sprime_core::domain::{encode_field, DecodeError};
use sprime_core::port::time_provider::SystemTimeProvider;
use sprime_core::port::{GenerationRequest, GeneratorError};
use sprime_core::AppError;
use sprime_infra_system::SubprocessGenerator;

/// printf script emitting `bytes` verbatim as octal escapes
fn printf_script(bytes: &[u8]) -> String {
    let escaped: String = bytes.iter().map(|b| format!("\\{:03o}", b)).collect();
    format!("printf '{}'", escaped)
}

fn record(sprime: &BigUint, factor1: &BigUint, factor2: &BigUint, size: u32) -> Vec<u8> {
    let half = (size + 1) / 2;
    let mut out = encode_field(sprime, size).unwrap();
    out.extend(encode_field(factor1, half).unwrap());
    out.extend(encode_field(factor2, half).unwrap());
    out
}

fn reader_for(script: String, check_factors: bool) -> SemiprimeReader {
    let generator = SubprocessGenerator::new(Arc::new(SystemTimeProvider), "sh")
        .with_prefix_args(vec!["-c".to_string(), script]);
    SemiprimeReader::new(Arc::new(generator), ReaderOptions { check_factors })
}

#[tokio::test]
async fn test_sample_buffer_end_to_end() {
    let sample = [
        0, 0, 0, 1, 0x0f, //
        0, 0, 0, 1, 0x03, //
        0, 0, 0, 1, 0x05,
    ];
    let reader = reader_for(printf_script(&sample), false);

    let records = reader.read(&GenerationRequest::default()).await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].sprime, BigUint::from(15u32));
    assert_eq!(records[0].factor1, BigUint::from(3u32));
    assert_eq!(records[0].factor2, BigUint::from(5u32));
    assert_eq!(records[0].to_string(), "3 * 5 = 15");
}

#[tokio::test]
async fn test_ten_byte_semiprime() {
    // Two 40-bit factors; the product needs 10 bytes
    let p = BigUint::from(1_000_000_000_039u64);
    let q = BigUint::from(1_000_000_000_061u64);
    let n = &p * &q;
    let reader = reader_for(printf_script(&record(&n, &p, &q, 10)), true);

    let records = reader.read(&GenerationRequest::default()).await.unwrap();

    assert_eq!(records[0].sprime, n);
    assert_eq!(records[0].to_string(), format!("{} * {} = {}", p, q, n));
}

#[tokio::test]
async fn test_multiple_records() {
    let mut bytes = Vec::new();
    for (p, q) in [(3u32, 5u32), (101, 103), (65_521, 65_519)] {
        let (p, q) = (BigUint::from(p), BigUint::from(q));
        bytes.extend(record(&(&p * &q), &p, &q, 4));
    }
    let reader = reader_for(printf_script(&bytes), true);
    let request = GenerationRequest {
        count: 3,
        ..GenerationRequest::default()
    };

    let records = reader.read(&request).await.unwrap();

    let lines: Vec<String> = records.iter().map(|r| r.to_string()).collect();
    assert_eq!(
        lines,
        vec!["3 * 5 = 15", "101 * 103 = 10403", "65521 * 65519 = 4292870399"]
    );
}

#[tokio::test]
async fn test_truncated_output_is_decode_error() {
    // Second field declares 2 bytes, only 1 written
    let bytes = [0, 0, 0, 1, 0x0f, 0, 0, 0, 2, 0x03];
    let reader = reader_for(printf_script(&bytes), false);

    let result = reader.read(&GenerationRequest::default()).await;

    assert!(matches!(
        result,
        Err(AppError::Decode(DecodeError::TruncatedValue {
            offset: 5,
            declared: 2,
            available: 1
        }))
    ));
}

#[tokio::test]
async fn test_empty_output_is_decode_error() {
    let reader = reader_for("true".to_string(), false);

    let result = reader.read(&GenerationRequest::default()).await;

    assert!(matches!(
        result,
        Err(AppError::Decode(DecodeError::TruncatedLength {
            offset: 0,
            available: 0
        }))
    ));
}

#[tokio::test]
async fn test_generator_failure_is_fatal() {
    let reader = reader_for("exit 1".to_string(), false);

    let result = reader.read(&GenerationRequest::default()).await;

    assert!(matches!(
        result,
        Err(AppError::Generator(GeneratorError::NonZeroExit {
            code: Some(1),
            ..
        }))
    ));
}
