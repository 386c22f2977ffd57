//! Chien search: brute-force root finding for the error locator

use super::error::{Result, RsError};
use super::galois::FieldEngine;
use super::polynomial;

/// Corrupted positions (0-based from the start of the block)
///
/// `err_loc` is the reversed locator, whose roots are `alpha^i` for each
/// corrupted coefficient `x^i`. A root count different from the locator
/// degree means the locator is unreliable.
pub fn find_errors(gf: &FieldEngine, err_loc: &[u8], block_len: usize) -> Result<Vec<usize>> {
    let expected = err_loc.len().saturating_sub(1);

    let positions: Vec<usize> = (0..block_len)
        .filter(|&i| polynomial::evaluate(gf, err_loc, gf.alpha_pow(i as i32)) == 0)
        .map(|i| block_len - 1 - i)
        .collect();

    if positions.len() != expected {
        return Err(RsError::RootMismatch {
            expected,
            found: positions.len(),
        });
    }
    Ok(positions)
}
