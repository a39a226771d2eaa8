//! Integration tests for the full CRC pipeline.
//!
//! These tests verify end-to-end behavior: polynomial parsing -> payload
//! encoding -> checksum computation -> frame verification, including the
//! properties that make the engine trustworthy (clean round-trips and
//! single-bit error detection).

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crc_sim_core::{
    bits::to_bits,
    corruption::{flip_bit, simulate},
    engine::{encode, run, verify, CrcRequest},
    Generator,
};

/// Generate a random bit string of the given length.
fn random_bits(rng: &mut ChaCha8Rng, len: usize) -> String {
    (0..len).map(|_| if rng.gen::<bool>() { '1' } else { '0' }).collect()
}

/// Generate a random generator word of the given degree with a constant
/// term, so single-bit errors anywhere in the frame are detectable.
fn random_generator(rng: &mut ChaCha8Rng, degree: usize) -> Generator {
    let mut word = String::from("1");
    for _ in 0..degree.saturating_sub(1) {
        word.push(if rng.gen::<bool>() { '1' } else { '0' });
    }
    word.push('1');
    Generator::parse(&word).expect("generated word is valid")
}

/// The worked example from the classic presentation of the algorithm:
/// generator x^3+x+1, payload 1101011011.
#[test]
fn test_textbook_end_to_end() {
    let generator = Generator::parse("x^3+x+1").expect("polynomial parses");
    assert_eq!(generator.bits(), "1011");
    assert_eq!(generator.degree(), 3);

    let encoded = encode("1101011011", &generator).expect("encode succeeds");
    assert_eq!(encoded.checksum, "100");

    // Appending the checksum and re-dividing leaves an all-zero remainder.
    let verified = verify("1101011011", &generator, &encoded.checksum).expect("verify succeeds");
    assert!(verified.clean);
    assert_eq!(verified.remainder, "0000");
}

/// Both polynomial notations must produce the same engine behavior.
#[test]
fn test_algebraic_and_binary_generators_agree() {
    let algebraic = Generator::parse("x^4+x+1").unwrap();
    let binary = Generator::parse("10011").unwrap();
    assert_eq!(algebraic, binary);

    let payload = to_bits("A");
    assert_eq!(payload, "01000001");

    let a = encode(&payload, &algebraic).unwrap();
    let b = encode(&payload, &binary).unwrap();
    assert_eq!(a.checksum, b.checksum);
    assert_eq!(a.checksum, "0100");
}

/// Encode-then-verify is always clean, for any generator and payload.
#[test]
fn test_round_trip_property() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..500 {
        let degree = rng.gen_range(1..=10);
        let generator = random_generator(&mut rng, degree);
        let payload_len = rng.gen_range(1..=64);
        let payload = random_bits(&mut rng, payload_len);

        let encoded = encode(&payload, &generator).unwrap();
        assert_eq!(encoded.checksum.len(), degree);

        let verified = verify(&payload, &generator, &encoded.checksum).unwrap();
        assert!(
            verified.clean,
            "round-trip not clean: generator={} payload={} checksum={} remainder={}",
            generator.bits(),
            payload,
            encoded.checksum,
            verified.remainder
        );
    }
}

/// Flipping any single bit of payload ++ checksum is detected, for any
/// generator with a constant term.
#[test]
fn test_single_bit_error_detection() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..500 {
        let degree = rng.gen_range(1..=8);
        let generator = random_generator(&mut rng, degree);
        let payload_len = rng.gen_range(1..=40);
        let payload = random_bits(&mut rng, payload_len);

        let encoded = encode(&payload, &generator).unwrap();
        let frame = format!("{}{}", payload, encoded.checksum);

        let index = rng.gen_range(0..frame.len());
        let damaged = flip_bit(&frame, index).unwrap();

        let (data, checksum) = damaged.split_at(payload.len());
        let verified = verify(data, &generator, checksum).unwrap();
        assert!(
            !verified.clean,
            "flip at {index} not detected: generator={} frame={}",
            generator.bits(),
            frame
        );
    }
}

/// A text payload goes through the bit encoder before division.
#[test]
fn test_text_payload_round_trip() {
    let report = run(&CrcRequest {
        generator: "x^4+x+1".to_string(),
        payload: "Hello, CRC".to_string(),
        simulate_corruption: false,
    })
    .unwrap();

    assert_eq!(report.payload_bits.len(), "Hello, CRC".len() * 8);
    assert_eq!(report.checksum.len(), 4);
    assert!(!report.corrupted);
}

/// The corruption scenario damages the tail and (for this input) the verify
/// pass catches it.
#[test]
fn test_corruption_scenario() {
    let generator = Generator::parse("x^4+x+1").unwrap();
    let outcome = simulate("1101011011", &generator).unwrap();

    assert_eq!(outcome.corrupted_bits, "110101101111111");
    assert!(outcome.detected);

    // The same scenario through the request boundary.
    let report = run(&CrcRequest {
        generator: "x^4+x+1".to_string(),
        payload: "1101011011".to_string(),
        simulate_corruption: true,
    })
    .unwrap();
    assert!(report.corrupted);
}

/// Each division returns its own trace; two requests never share state.
#[test]
fn test_traces_are_per_request() {
    let generator = Generator::parse("1011").unwrap();

    let first = encode("1101011011", &generator).unwrap();
    let second = encode("1", &generator).unwrap();

    // 13-bit extended frame, window starts at bit 3: 9 steps.
    assert_eq!(first.trace.len(), 9);
    // 4-bit extended frame: the window covers it whole, no shifts.
    assert!(second.trace.is_empty());
}

/// Malformed inputs fail fast with typed errors.
#[test]
fn test_error_paths() {
    assert!(Generator::parse("x^").is_err());
    assert!(Generator::parse("").is_err());
    assert!(Generator::parse("0000").is_err());

    let generator = Generator::parse("1011").unwrap();
    assert!(encode("", &generator).is_err());
    assert!(verify("10z1", &generator, "000").is_err());
}
