//! Generator polynomial construction

use super::galois::FieldEngine;
use super::polynomial;

/// Degree-`ecc_symbols` generator `(x + alpha^0)(x + alpha^1)...(x + alpha^(ecc-1))`
pub fn build_generator(gf: &FieldEngine, ecc_symbols: usize) -> Vec<u8> {
    (0..ecc_symbols).fold(vec![1u8], |g, i| {
        polynomial::multiply(gf, &g, &[1, gf.alpha_pow(i as i32)])
    })
}
