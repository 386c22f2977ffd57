//! Single-block Reed-Solomon codec
//!
//! ## Decode states
//!
//! - **Clean**: syndromes all zero, the block is split into message and parity
//! - **Correcting**: syndromes nonzero, locator/Chien/Forney run once
//! - **Verified**: syndromes recomputed after correction and found zero
//! - **Failed**: too many errors, locator/root mismatch, or syndromes still
//!   nonzero; returned as `Err` and never as a corrected block
//!
//! Every operation is a pure function of the field tables, the block and the
//! number of parity symbols, so blocks can be fanned out across threads with
//! a shared `&FieldEngine`.

use super::berlekamp::find_error_locator;
use super::chien::find_errors;
use super::encoder::{encode_with_generator, validate_ecc_symbols, MAX_BLOCK_LEN};
use super::error::{Result, RsError};
use super::forney::correct_errata;
use super::galois::FieldEngine;
use super::generator::build_generator;
use super::polynomial;
use super::syndrome::{all_zero, calc_syndromes};
use log::{debug, trace};
use std::fmt;

/// Terminal state of a successful decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeState {
    /// No corruption detected
    Clean,
    /// Corruption corrected and re-checked
    Verified,
}

impl fmt::Display for DecodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeState::Clean => write!(f, "clean"),
            DecodeState::Verified => write!(f, "verified"),
        }
    }
}

/// A decoded block split into message and parity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub message: Vec<u8>,
    pub parity: Vec<u8>,
    pub state: DecodeState,
    /// Positions (from the start of the block) that were corrected
    pub corrected: Vec<usize>,
}

impl Decoded {
    fn split(mut block: Vec<u8>, ecc_symbols: usize, state: DecodeState, corrected: Vec<usize>) -> Self {
        let parity = block.split_off(block.len() - ecc_symbols);
        Self {
            message: block,
            parity,
            state,
            corrected,
        }
    }
}

/// Reed-Solomon codec for a fixed field and number of parity symbols
///
/// Holds the generator polynomial so repeated encodes don't rebuild it.
#[derive(Debug, Clone)]
pub struct ReedSolomon<'a> {
    field: &'a FieldEngine,
    ecc_symbols: usize,
    generator: Vec<u8>,
}

impl<'a> ReedSolomon<'a> {
    pub fn new(field: &'a FieldEngine, ecc_symbols: usize) -> Result<Self> {
        validate_ecc_symbols(ecc_symbols)?;
        Ok(Self {
            field,
            ecc_symbols,
            generator: build_generator(field, ecc_symbols),
        })
    }

    pub fn field(&self) -> &FieldEngine {
        self.field
    }

    pub fn ecc_symbols(&self) -> usize {
        self.ecc_symbols
    }

    pub fn generator(&self) -> &[u8] {
        &self.generator
    }

    /// Longest message that fits in one codeword
    pub fn max_message_len(&self) -> usize {
        MAX_BLOCK_LEN - self.ecc_symbols
    }

    /// Number of corrupted symbols that are guaranteed to be corrected
    pub fn correction_capacity(&self) -> usize {
        self.ecc_symbols / 2
    }

    pub fn syndromes(&self, block: &[u8]) -> Vec<u8> {
        calc_syndromes(self.field, block, self.ecc_symbols)
    }

    /// Encode `message` into a codeword of `message.len() + ecc_symbols` symbols
    pub fn encode(&self, message: &[u8]) -> Result<Vec<u8>> {
        encode_with_generator(self.field, &self.generator, message)
    }

    /// Decode `block`, correcting up to `ecc_symbols / 2` corrupted symbols
    pub fn decode(&self, block: &[u8]) -> Result<Decoded> {
        let ecc = self.ecc_symbols;

        if block.len() > MAX_BLOCK_LEN {
            return Err(RsError::BlockTooLarge {
                len: block.len(),
                max: MAX_BLOCK_LEN,
            });
        }
        if block.len() < ecc {
            return Err(RsError::BlockTooShort {
                len: block.len(),
                ecc_symbols: ecc,
            });
        }

        let synd = self.syndromes(block);
        if all_zero(&synd) {
            trace!("block of {} symbols: {}", block.len(), DecodeState::Clean);
            return Ok(Decoded::split(block.to_vec(), ecc, DecodeState::Clean, Vec::new()));
        }
        trace!("block of {} symbols: correcting {}", block.len(), hex::encode(block));

        let (fixed, positions) = self.correct(block, &synd).inspect_err(|e| {
            debug!("block of {} symbols: failed: {}", block.len(), e);
        })?;
        debug!(
            "block of {} symbols: {} after fixing {} positions",
            block.len(),
            DecodeState::Verified,
            positions.len()
        );
        Ok(Decoded::split(fixed, ecc, DecodeState::Verified, positions))
    }

    fn correct(&self, block: &[u8], synd: &[u8]) -> Result<(Vec<u8>, Vec<usize>)> {
        let gf = self.field;

        let err_loc = find_error_locator(gf, synd, self.ecc_symbols)?;
        // Nonzero syndromes with no located error
        if err_loc.len() == 1 {
            return Err(RsError::CorrectionFailed);
        }
        let err_pos = find_errors(gf, &polynomial::reverse(&err_loc), block.len())?;
        let fixed = correct_errata(gf, block, synd, &err_pos)?;

        if !all_zero(&self.syndromes(&fixed)) {
            return Err(RsError::CorrectionFailed);
        }

        let mut positions = err_pos;
        positions.sort_unstable();
        Ok((fixed, positions))
    }
}

/// Encode one message block
pub fn encode(field: &FieldEngine, ecc_symbols: usize, message: &[u8]) -> Result<Vec<u8>> {
    ReedSolomon::new(field, ecc_symbols)?.encode(message)
}

/// Decode one received block
pub fn decode(field: &FieldEngine, ecc_symbols: usize, block: &[u8]) -> Result<Decoded> {
    ReedSolomon::new(field, ecc_symbols)?.decode(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reed_solomon::galois::Primitive;

    #[test]
    fn test_hello_single_error() {
        let gf = FieldEngine::new(Primitive::Qr);
        let rs = ReedSolomon::new(&gf, 10).unwrap();
        let codeword = rs.encode(b"HELLO").unwrap();
        assert_eq!(codeword.len(), 15);

        for pos in 0..codeword.len() {
            let mut received = codeword.clone();
            received[pos] ^= 0xFF;
            let decoded = rs.decode(&received).unwrap();
            assert_eq!(decoded.message, b"HELLO");
            assert_eq!(decoded.parity, &codeword[5..]);
            assert_eq!(decoded.state, DecodeState::Verified);
            assert_eq!(decoded.corrected, vec![pos]);
        }
    }

    #[test]
    fn test_clean_path() {
        let gf = FieldEngine::new(Primitive::DataMatrix);
        let codeword = encode(&gf, 4, b"clean").unwrap();
        let decoded = decode(&gf, 4, &codeword).unwrap();
        assert_eq!(decoded.state, DecodeState::Clean);
        assert!(decoded.corrected.is_empty());
        assert_eq!(decoded.message, b"clean");
    }

    #[test]
    fn test_block_size_checks() {
        let gf = FieldEngine::default();
        let rs = ReedSolomon::new(&gf, 8).unwrap();
        assert_eq!(
            rs.decode(&[0u8; 256]),
            Err(RsError::BlockTooLarge { len: 256, max: 255 })
        );
        assert_eq!(
            rs.decode(&[0u8; 7]),
            Err(RsError::BlockTooShort {
                len: 7,
                ecc_symbols: 8
            })
        );
        assert_eq!(ReedSolomon::new(&gf, 0).unwrap_err(), RsError::InvalidEccSymbols(0));
    }

    #[test]
    fn test_nonzero_syndromes_without_locator_fail() {
        let gf = FieldEngine::new(Primitive::Qr);
        let rs = ReedSolomon::new(&gf, 2).unwrap();
        let block = [31u8, 98, 16, 101, 231, 119, 106, 116, 125];
        assert_eq!(rs.syndromes(&block), vec![0, 251, 0]);
        assert_eq!(rs.decode(&block), Err(RsError::CorrectionFailed));
    }

    #[test]
    fn test_parity_only_block() {
        let gf = FieldEngine::default();
        let rs = ReedSolomon::new(&gf, 6).unwrap();
        let codeword = rs.encode(&[]).unwrap();
        assert_eq!(codeword, vec![0; 6]);
        let decoded = rs.decode(&codeword).unwrap();
        assert!(decoded.message.is_empty());
    }
}
