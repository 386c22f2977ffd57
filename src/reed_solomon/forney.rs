//! Forney algorithm: error magnitudes and correction

use super::error::Result;
use super::galois::{FieldEngine, FIELD_LIMIT};
use super::polynomial;

/// Locator rebuilt from known coefficient powers: `prod(1 + alpha^p x)`
pub fn errata_locator(gf: &FieldEngine, coef_pos: &[usize]) -> Vec<u8> {
    coef_pos.iter().fold(vec![1u8], |loc, &p| {
        let factor = polynomial::add(&[1], &[gf.alpha_pow(p as i32), 0]);
        polynomial::multiply(gf, &loc, &factor)
    })
}

/// Evaluator `(synd · locator) mod x^(degree + 1)`
///
/// `synd` is the syndrome polynomial, i.e. the reversed syndrome vector.
pub fn error_evaluator(gf: &FieldEngine, synd: &[u8], err_loc: &[u8], degree: usize) -> Result<Vec<u8>> {
    let mut divisor = vec![0u8; degree + 2];
    divisor[0] = 1;
    let (_, remainder) = polynomial::divide(gf, &polynomial::multiply(gf, synd, err_loc), &divisor)?;
    Ok(remainder)
}

/// Apply the correction for `err_pos` to `block`
///
/// Returns the corrected block; the caller re-checks the syndromes.
pub fn correct_errata(gf: &FieldEngine, block: &[u8], synd: &[u8], err_pos: &[usize]) -> Result<Vec<u8>> {
    let coef_pos: Vec<usize> = err_pos.iter().map(|&p| block.len() - 1 - p).collect();

    let err_loc = errata_locator(gf, &coef_pos);
    let loc_prime = polynomial::formal_derivative(&err_loc);
    let evaluator = error_evaluator(gf, &polynomial::reverse(synd), &err_loc, err_loc.len() - 1)?;

    // alpha^-(255 - p) == alpha^p
    let locations: Vec<u8> = coef_pos
        .iter()
        .map(|&p| gf.alpha_pow(-((FIELD_LIMIT - p) as i32)))
        .collect();

    let mut correction = vec![0u8; block.len()];
    for (i, &x) in locations.iter().enumerate() {
        let x_inv = gf.inverse(x)?;

        // Locator derivative over x is prod_{j != i}(1 + X_j / X_i)
        let denominator = gf.multiply(polynomial::evaluate(gf, &loc_prime, x_inv), x_inv);
        let numerator = gf.multiply(x, polynomial::evaluate(gf, &evaluator, x_inv));

        correction[err_pos[i]] = gf.divide(numerator, denominator)?;
    }

    Ok(polynomial::add(block, &correction))
}
