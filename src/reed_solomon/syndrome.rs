//! Syndrome computation
//!
//! The syndrome vector has `ecc_symbols + 1` entries: slot 0 is a fixed zero
//! and slot `i + 1` holds the received block evaluated at `alpha^i`, one per
//! generator root. The locator solver skips the leading slot and the Forney
//! step relies on it when the vector is reversed into the syndrome
//! polynomial.

use super::galois::FieldEngine;
use super::polynomial;

pub fn calc_syndromes(gf: &FieldEngine, block: &[u8], ecc_symbols: usize) -> Vec<u8> {
    let mut synd = Vec::with_capacity(ecc_symbols + 1);
    synd.push(0);
    synd.extend((0..ecc_symbols).map(|i| polynomial::evaluate(gf, block, gf.alpha_pow(i as i32))));
    synd
}

/// True when the block is a valid codeword
pub fn all_zero(synd: &[u8]) -> bool {
    synd.iter().all(|&s| s == 0)
}
