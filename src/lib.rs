//! Reed-Solomon forward error correction over GF(2^8)
//!
//! The [`reed_solomon`] module is the codec itself: field tables, polynomial
//! algebra and the encode/decode stack for single blocks of up to 255
//! symbols. [`pipeline`] drives it over whole files, [`corruption`] simulates
//! damage for testing, and [`reporters`] formats progress for the binary.

pub mod args;
pub mod corruption;
pub mod file_ops;
pub mod pipeline;
pub mod reed_solomon;
pub mod reporters;

pub use args::parse_args;
pub use reed_solomon::{decode, encode, DecodeState, Decoded, FieldEngine, Primitive, ReedSolomon, RsError};
