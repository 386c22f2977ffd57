//! Polynomial algebra over GF(2^8)
//!
//! Polynomials are plain coefficient slices, most-significant coefficient
//! first, so `[a, b, c]` is `a·x² + b·x + c`. Nothing is trimmed implicitly:
//! every function documents the length of what it returns.

use super::error::{Result, RsError};
use super::galois::FieldEngine;

/// Element-wise XOR after left-padding the shorter operand
///
/// Result length is `max(p.len(), q.len())`.
pub fn add(p: &[u8], q: &[u8]) -> Vec<u8> {
    let len = p.len().max(q.len());
    let mut out = vec![0u8; len];
    for (i, &c) in p.iter().enumerate() {
        out[i + len - p.len()] = c;
    }
    for (i, &c) in q.iter().enumerate() {
        out[i + len - q.len()] ^= c;
    }
    out
}

/// Multiply every coefficient by `k`
pub fn scale(gf: &FieldEngine, p: &[u8], k: u8) -> Vec<u8> {
    p.iter().map(|&c| gf.multiply(c, k)).collect()
}

/// Full convolution, result length `p.len() + q.len() - 1`
pub fn multiply(gf: &FieldEngine, p: &[u8], q: &[u8]) -> Vec<u8> {
    if p.is_empty() || q.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0u8; p.len() + q.len() - 1];
    for (j, &qj) in q.iter().enumerate() {
        if qj == 0 {
            continue;
        }
        for (i, &pi) in p.iter().enumerate() {
            out[i + j] ^= gf.multiply(pi, qj);
        }
    }
    out
}

/// Synthetic division returning `(quotient, remainder)`
///
/// The remainder always has `divisor.len() - 1` coefficients. A divisor with
/// a zero (or missing) leading coefficient is rejected.
pub fn divide(gf: &FieldEngine, dividend: &[u8], divisor: &[u8]) -> Result<(Vec<u8>, Vec<u8>)> {
    let lead = *divisor.first().ok_or(RsError::DivisionByZero)?;
    let lead_inv = gf.inverse(lead)?;
    let rem_len = divisor.len() - 1;

    if dividend.len() <= rem_len {
        let mut remainder = vec![0u8; rem_len - dividend.len()];
        remainder.extend_from_slice(dividend);
        return Ok((Vec::new(), remainder));
    }

    let steps = dividend.len() - rem_len;
    let mut work = dividend.to_vec();
    for i in 0..steps {
        let coef = gf.multiply(work[i], lead_inv);
        work[i] = coef;
        if coef == 0 {
            continue;
        }
        for (j, &d) in divisor.iter().enumerate().skip(1) {
            if d != 0 {
                work[i + j] ^= gf.multiply(d, coef);
            }
        }
    }

    let remainder = work.split_off(steps);
    Ok((work, remainder))
}

/// Horner evaluation at `x`
pub fn evaluate(gf: &FieldEngine, p: &[u8], x: u8) -> u8 {
    p.iter().fold(0u8, |acc, &c| gf.multiply(acc, x) ^ c)
}

/// New polynomial with the coefficient order reversed
pub fn reverse(p: &[u8]) -> Vec<u8> {
    p.iter().rev().copied().collect()
}

/// Drop leading zero coefficients (an all-zero input becomes empty)
pub fn strip_leading_zeros(p: &[u8]) -> Vec<u8> {
    let first = p.iter().position(|&c| c != 0).unwrap_or(p.len());
    p[first..].to_vec()
}

/// Formal derivative
///
/// In characteristic 2 the even powers vanish, so only the coefficients of
/// odd powers survive, each shifted down one degree. Result length is
/// `p.len() - 1`.
pub fn formal_derivative(p: &[u8]) -> Vec<u8> {
    let n = p.len();
    if n < 2 {
        return Vec::new();
    }
    (0..n - 1)
        .map(|k| if (n - 1 - k) % 2 == 1 { p[k] } else { 0 })
        .collect()
}
