//! Galois Field GF(2^8) arithmetic for Reed-Solomon block coding
//!
//! ## Primitive polynomials
//!
//! Two field-generating polynomials are supported for 8-bit symbols:
//!
//! - **285** = 0x11D (x⁸ + x⁴ + x³ + x² + 1) - used by QR codes
//! - **301** = 0x12D (x⁸ + x⁵ + x³ + x² + 1) - used by Data Matrix
//!
//! In both fields the element 2 (the polynomial `x`) generates the
//! multiplicative group, so every nonzero element is `alpha^i` for `alpha = 2`.
//!
//! ## Tables
//!
//! A [`FieldEngine`] owns an exponent table of 512 entries (the 255 powers of
//! alpha, duplicated so `exp[log a + log b]` never needs a modulo) and a
//! logarithm table. Tables are built once and never mutated afterwards, so a
//! `&FieldEngine` can be shared freely across threads.

use super::error::{Result, RsError};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Order of the multiplicative group of GF(2^8)
pub const FIELD_LIMIT: usize = 255;

/// Fixed generator element used to build the tables
const ALPHA: u8 = 2;

/// Supported field-generating polynomials, in decimal notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Primitive {
    /// x⁸ + x⁴ + x³ + x² + 1
    #[default]
    Qr = 285,
    /// x⁸ + x⁵ + x³ + x² + 1
    DataMatrix = 301,
}

impl Primitive {
    pub fn value(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for Primitive {
    type Error = RsError;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            285 => Ok(Primitive::Qr),
            301 => Ok(Primitive::DataMatrix),
            other => Err(RsError::InvalidPrimitive(other)),
        }
    }
}

impl FromStr for Primitive {
    type Err = RsError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s
            .trim()
            .parse::<u32>()
            .map_err(|_| RsError::UnparsablePrimitive(s.to_string()))?;
        Primitive::try_from(value)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Carry-less ("Russian peasant") multiplication reduced modulo `primitive`
///
/// Table-free reference multiply, used to build the lookup tables.
pub fn carryless_multiply(a: u8, mut b: u8, primitive: u32) -> u8 {
    let mut acc: u32 = 0;
    let mut x = a as u32;
    while b != 0 {
        if b & 1 != 0 {
            acc ^= x;
        }
        b >>= 1;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= primitive;
        }
    }
    acc as u8
}

/// Immutable exponent/logarithm tables for one primitive polynomial
#[derive(Clone)]
pub struct FieldEngine {
    primitive: Primitive,
    exp: [u8; 2 * FIELD_LIMIT + 2],
    log: [u8; 256],
}

impl fmt::Debug for FieldEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldEngine")
            .field("primitive", &self.primitive)
            .finish_non_exhaustive()
    }
}

impl Default for FieldEngine {
    fn default() -> Self {
        Self::new(Primitive::default())
    }
}

impl FieldEngine {
    /// Build the tables for a supported primitive polynomial
    pub fn new(primitive: Primitive) -> Self {
        let mut exp = [0u8; 2 * FIELD_LIMIT + 2];
        let mut log = [0u8; 256];

        let mut x = 1u8;
        for i in 0..FIELD_LIMIT {
            exp[i] = x;
            log[x as usize] = i as u8;
            x = carryless_multiply(x, ALPHA, primitive.value());
        }

        for i in FIELD_LIMIT..exp.len() {
            exp[i] = exp[i - FIELD_LIMIT];
        }

        Self {
            primitive,
            exp,
            log,
        }
    }

    /// Validated constructor from the decimal encoding of the polynomial
    pub fn build(primitive: u32) -> Result<Self> {
        Ok(Self::new(Primitive::try_from(primitive)?))
    }

    /// Process-wide tables for `primitive`, built on first use
    pub fn shared(primitive: Primitive) -> &'static FieldEngine {
        static QR: OnceLock<FieldEngine> = OnceLock::new();
        static DATA_MATRIX: OnceLock<FieldEngine> = OnceLock::new();

        match primitive {
            Primitive::Qr => QR.get_or_init(|| FieldEngine::new(Primitive::Qr)),
            Primitive::DataMatrix => {
                DATA_MATRIX.get_or_init(|| FieldEngine::new(Primitive::DataMatrix))
            }
        }
    }

    pub fn primitive(&self) -> Primitive {
        self.primitive
    }

    /// Exponent table, `exp[i] = alpha^(i mod 255)`
    pub fn exp_table(&self) -> &[u8] {
        &self.exp
    }

    /// Discrete logarithm base alpha; `None` for zero
    pub fn log(&self, x: u8) -> Option<u8> {
        (x != 0).then(|| self.log[x as usize])
    }

    /// Addition and subtraction are both XOR
    #[inline]
    pub fn add(&self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    #[inline]
    pub fn multiply(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        self.exp[self.log[a as usize] as usize + self.log[b as usize] as usize]
    }

    pub fn divide(&self, a: u8, b: u8) -> Result<u8> {
        if b == 0 {
            return Err(RsError::DivisionByZero);
        }
        if a == 0 {
            return Ok(0);
        }
        let diff = self.log[a as usize] as usize + FIELD_LIMIT - self.log[b as usize] as usize;
        Ok(self.exp[diff])
    }

    /// `base^exponent`; negative exponents raise the inverse
    pub fn power(&self, base: u8, exponent: i32) -> Result<u8> {
        if base == 0 {
            return match exponent {
                0 => Ok(1),
                e if e > 0 => Ok(0),
                _ => Err(RsError::DivisionByZero),
            };
        }
        let e = (self.log[base as usize] as i64 * exponent as i64).rem_euclid(FIELD_LIMIT as i64);
        Ok(self.exp[e as usize])
    }

    /// `alpha^exponent`, the field roots used by the generator and syndromes
    #[inline]
    pub fn alpha_pow(&self, exponent: i32) -> u8 {
        self.exp[exponent.rem_euclid(FIELD_LIMIT as i32) as usize]
    }

    pub fn inverse(&self, a: u8) -> Result<u8> {
        if a == 0 {
            return Err(RsError::DivisionByZero);
        }
        Ok(self.exp[FIELD_LIMIT - self.log[a as usize] as usize])
    }
}
