//! Systematic encoder: codeword = message followed by parity

use super::error::{Result, RsError};
use super::galois::FieldEngine;
use super::polynomial;

/// Longest codeword representable with 8-bit symbols
pub const MAX_BLOCK_LEN: usize = 255;

/// Check `ecc_symbols` is in 1..=254
pub fn validate_ecc_symbols(ecc_symbols: usize) -> Result<()> {
    if ecc_symbols == 0 || ecc_symbols >= MAX_BLOCK_LEN {
        return Err(RsError::InvalidEccSymbols(ecc_symbols));
    }
    Ok(())
}

/// Append the remainder of `message·x^ecc mod generator` to the message
///
/// `generator` must be the degree-`ecc` polynomial from
/// [`build_generator`](super::generator::build_generator).
pub fn encode_with_generator(gf: &FieldEngine, generator: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    let ecc_symbols = generator.len().saturating_sub(1);
    let len = message.len() + ecc_symbols;
    if len > MAX_BLOCK_LEN {
        return Err(RsError::BlockTooLarge {
            len,
            max: MAX_BLOCK_LEN,
        });
    }

    let mut padded = Vec::with_capacity(len);
    padded.extend_from_slice(message);
    padded.resize(len, 0);

    let (_, remainder) = polynomial::divide(gf, &padded, generator)?;

    let mut codeword = message.to_vec();
    codeword.extend_from_slice(&remainder);
    Ok(codeword)
}
