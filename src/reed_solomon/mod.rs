//! Reed-Solomon Error Correction Module
//!
//! Classic BCH-view Reed-Solomon over GF(2^8): systematic encoding by
//! polynomial division against the generator, decoding by syndromes,
//! Berlekamp-Massey, Chien search and the Forney algorithm.
//!
//! The [`FieldEngine`] is built once per primitive polynomial and passed by
//! reference to every operation; nothing in this module holds mutable global
//! state.

pub mod berlekamp;
pub mod chien;
pub mod codec;
pub mod encoder;
pub mod error;
pub mod forney;
pub mod galois;
pub mod generator;
pub mod polynomial;
pub mod syndrome;

pub use codec::{decode, encode, DecodeState, Decoded, ReedSolomon};
pub use encoder::MAX_BLOCK_LEN;
pub use error::{Result, RsError};
pub use galois::{FieldEngine, Primitive};
