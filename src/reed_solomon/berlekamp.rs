//! Berlekamp-Massey error locator solver
//!
//! Iteratively refines the locator estimate from the syndromes. Each step
//! computes a discrepancy `delta` telling whether the current estimate still
//! explains the next syndrome; the estimate only resets to the shifted older
//! one when that one is strictly longer.

use super::error::{Result, RsError};
use super::galois::FieldEngine;
use super::polynomial;
use log::trace;

/// Error locator polynomial for `synd`, leading zeros stripped
///
/// Fails with [`RsError::TooManyErrors`] when the locator degree is larger
/// than `ecc_symbols / 2`.
pub fn find_error_locator(gf: &FieldEngine, synd: &[u8], ecc_symbols: usize) -> Result<Vec<u8>> {
    if synd.len() < ecc_symbols {
        return Err(RsError::SyndromeLength {
            expected: ecc_symbols,
            actual: synd.len(),
        });
    }

    let mut err_loc: Vec<u8> = vec![1];
    let mut old_loc: Vec<u8> = vec![1];

    // Skips the placeholder slot when the vector carries one
    let shift = synd.len() - ecc_symbols;

    for i in 0..ecc_symbols {
        let k = i + shift;

        let mut delta = synd[k];
        for j in 1..err_loc.len().min(k + 1) {
            delta ^= gf.multiply(err_loc[err_loc.len() - 1 - j], synd[k - j]);
        }

        old_loc.push(0);

        if delta != 0 {
            if old_loc.len() > err_loc.len() {
                let new_loc = polynomial::scale(gf, &old_loc, delta);
                old_loc = polynomial::scale(gf, &err_loc, gf.inverse(delta)?);
                err_loc = new_loc;
            }
            err_loc = polynomial::add(&err_loc, &polynomial::scale(gf, &old_loc, delta));
        }
    }

    let err_loc = polynomial::strip_leading_zeros(&err_loc);
    let errors = err_loc.len().saturating_sub(1);
    trace!("locator degree {} after {} steps", errors, ecc_symbols);

    if errors * 2 > ecc_symbols {
        return Err(RsError::TooManyErrors {
            errors,
            capacity: ecc_symbols / 2,
        });
    }

    Ok(err_loc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reed_solomon::encoder::encode_with_generator;
    use crate::reed_solomon::galois::Primitive;
    use crate::reed_solomon::generator::build_generator;
    use crate::reed_solomon::syndrome::calc_syndromes;

    fn corrupted(positions: &[usize], ecc: usize) -> (FieldEngine, Vec<u8>) {
        let gf = FieldEngine::new(Primitive::Qr);
        let g = build_generator(&gf, ecc);
        let mut codeword = encode_with_generator(&gf, &g, b"berlekamp massey").unwrap();
        for &p in positions {
            codeword[p] ^= 0x5A;
        }
        let synd = calc_syndromes(&gf, &codeword, ecc);
        (gf, synd)
    }

    #[test]
    fn test_locator_degree_matches_error_count() {
        for errors in [&[3usize][..], &[0, 7], &[1, 4, 9, 20]] {
            let (gf, synd) = corrupted(errors, 8);
            let loc = find_error_locator(&gf, &synd, 8).unwrap();
            assert_eq!(loc.len() - 1, errors.len());
            // Constant term of the locator is always one
            assert_eq!(*loc.last().unwrap(), 1);
        }
    }

    #[test]
    fn test_clean_syndromes_give_trivial_locator() {
        let (gf, synd) = corrupted(&[], 6);
        assert_eq!(find_error_locator(&gf, &synd, 6).unwrap(), vec![1]);
    }

    #[test]
    fn test_single_parity_symbol_cannot_locate() {
        let (gf, synd) = corrupted(&[2], 1);
        assert_eq!(
            find_error_locator(&gf, &synd, 1),
            Err(RsError::TooManyErrors {
                errors: 1,
                capacity: 0
            })
        );
    }

    #[test]
    fn test_short_syndrome_vector_rejected() {
        let gf = FieldEngine::default();
        assert_eq!(
            find_error_locator(&gf, &[0, 1, 2], 6),
            Err(RsError::SyndromeLength {
                expected: 6,
                actual: 3
            })
        );
    }
}
