//! Property-based tests for Reed-Solomon error correction
//!
//! These tests use proptest to validate field arithmetic, encoding and
//! decoding with randomly generated inputs, and a seeded `StdRng` for
//! corruption patterns so failures are reproducible.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rscodec::reed_solomon::{polynomial, syndrome};
use rscodec::{DecodeState, FieldEngine, Primitive, ReedSolomon};

fn field(qr: bool) -> &'static FieldEngine {
    FieldEngine::shared(if qr { Primitive::Qr } else { Primitive::DataMatrix })
}

/// Flip `count` distinct symbols of `block` with nonzero masks
fn corrupt(block: &mut [u8], count: usize, seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut positions = index::sample(&mut rng, block.len(), count).into_vec();
    positions.sort_unstable();
    for &p in &positions {
        block[p] ^= rng.random_range(1..=255u8);
    }
    positions
}

proptest! {
    /// Property: multiplication is commutative and distributes over XOR
    #[test]
    fn prop_field_distributive(a in any::<u8>(), b in any::<u8>(), c in any::<u8>(), qr in any::<bool>()) {
        let gf = field(qr);
        prop_assert_eq!(gf.multiply(a, b), gf.multiply(b, a));
        prop_assert_eq!(gf.multiply(a, b ^ c), gf.multiply(a, b) ^ gf.multiply(a, c));
    }

    /// Property: (a / b) * b = a for b != 0
    #[test]
    fn prop_field_division_consistency(a in any::<u8>(), b in 1u8..=255, qr in any::<bool>()) {
        let gf = field(qr);
        prop_assert_eq!(gf.multiply(gf.divide(a, b).unwrap(), b), a);
    }

    /// Property: evaluating a product is the product of evaluations
    #[test]
    fn prop_poly_multiply_evaluates(
        p in prop::collection::vec(any::<u8>(), 1..20),
        q in prop::collection::vec(any::<u8>(), 1..20),
        x in any::<u8>(),
    ) {
        let gf = field(true);
        let product = polynomial::multiply(gf, &p, &q);
        prop_assert_eq!(
            polynomial::evaluate(gf, &product, x),
            gf.multiply(polynomial::evaluate(gf, &p, x), polynomial::evaluate(gf, &q, x))
        );
    }

    /// Property: quotient * divisor + remainder == dividend
    #[test]
    fn prop_poly_division_identity(
        dividend in prop::collection::vec(any::<u8>(), 0..40),
        mut divisor in prop::collection::vec(any::<u8>(), 1..10),
    ) {
        let gf = field(false);
        if divisor[0] == 0 {
            divisor[0] = 1;
        }
        let (q, r) = polynomial::divide(gf, &dividend, &divisor).unwrap();
        prop_assert_eq!(r.len(), divisor.len() - 1);
        let rebuilt = polynomial::add(&polynomial::multiply(gf, &q, &divisor), &r);
        // Rebuilt may carry extra leading zeros when the dividend was short
        prop_assert_eq!(
            polynomial::strip_leading_zeros(&rebuilt),
            polynomial::strip_leading_zeros(&dividend)
        );
    }

    /// Property: encoded blocks have all-zero syndromes and decode cleanly
    #[test]
    fn prop_roundtrip_no_corruption(
        ecc in 1usize..=64,
        message in prop::collection::vec(any::<u8>(), 0..191),
        qr in any::<bool>(),
    ) {
        let rs = ReedSolomon::new(field(qr), ecc).unwrap();
        let codeword = rs.encode(&message).unwrap();
        prop_assert_eq!(codeword.len(), message.len() + ecc);
        prop_assert!(syndrome::all_zero(&rs.syndromes(&codeword)));

        let decoded = rs.decode(&codeword).unwrap();
        prop_assert_eq!(decoded.state, DecodeState::Clean);
        prop_assert_eq!(&decoded.message, &message);
        prop_assert_eq!(&decoded.parity[..], &codeword[message.len()..]);
    }

    /// Property: up to ecc/2 corrupted symbols are always corrected
    #[test]
    fn prop_corrects_within_capacity(
        ecc in 2usize..=40,
        message in prop::collection::vec(any::<u8>(), 1..200),
        errors_seed in any::<u64>(),
        qr in any::<bool>(),
    ) {
        let rs = ReedSolomon::new(field(qr), ecc).unwrap();
        let message = &message[..message.len().min(rs.max_message_len())];
        let codeword = rs.encode(message).unwrap();

        let mut received = codeword.clone();
        let count = (errors_seed as usize % (rs.correction_capacity() + 1)).min(received.len());
        let positions = corrupt(&mut received, count, errors_seed);

        let decoded = rs.decode(&received).unwrap();
        prop_assert_eq!(&decoded.message[..], message);
        prop_assert_eq!(decoded.corrected, positions);
        let expected_state = if count == 0 { DecodeState::Clean } else { DecodeState::Verified };
        prop_assert_eq!(decoded.state, expected_state);
    }
}

/// Beyond capacity the decoder reports failure instead of a wrong message
#[test]
fn test_beyond_capacity_is_detected() {
    let gf = field(true);
    let rs = ReedSolomon::new(gf, 10).unwrap();
    let codeword = rs.encode(b"HELLO").unwrap();

    for seed in 0..200u64 {
        let mut received = codeword.clone();
        corrupt(&mut received, 6, seed);
        let result = rs.decode(&received);
        assert!(result.is_err(), "seed {} decoded to {:?}", seed, result);
    }
}
