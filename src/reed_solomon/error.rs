//! Error types for GF(2^8) Reed-Solomon operations

use thiserror::Error;

/// Errors that can occur while building a field or encoding/decoding a block
///
/// Every variant is terminal for the block being processed: nothing is
/// partially corrected when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsError {
    /// Unsupported field-generating polynomial
    #[error("Unsupported primitive polynomial {0} (expected 285 or 301)")]
    InvalidPrimitive(u32),

    /// Primitive polynomial given as something other than a decimal number
    #[error("Primitive polynomial {0:?} is not a decimal number (expected 285 or 301)")]
    UnparsablePrimitive(String),

    /// Inverse or division requested for the zero element
    #[error("Division by zero in GF(2^8)")]
    DivisionByZero,

    /// Number of parity symbols outside 1..=254
    #[error("Invalid number of ECC symbols: {0} (expected 1..=254)")]
    InvalidEccSymbols(usize),

    /// Message plus parity does not fit in a 255-symbol codeword
    #[error("Block too large: {len} symbols exceeds the maximum of {max}")]
    BlockTooLarge { len: usize, max: usize },

    /// Received block cannot even hold the parity symbols
    #[error("Block too short: {len} symbols but {ecc_symbols} ECC symbols expected")]
    BlockTooShort { len: usize, ecc_symbols: usize },

    /// Locator solver handed fewer syndromes than ECC symbols
    #[error("Syndrome vector has {actual} entries, at least {expected} required")]
    SyndromeLength { expected: usize, actual: usize },

    /// Locator degree exceeds the correction capacity
    #[error("Too many errors to correct: {errors} (capacity {capacity})")]
    TooManyErrors { errors: usize, capacity: usize },

    /// Chien search disagrees with the locator degree
    #[error("Chien search found {found} error positions, locator predicts {expected}")]
    RootMismatch { expected: usize, found: usize },

    /// Syndromes still nonzero after applying the correction
    #[error("Could not correct block: syndromes nonzero after correction")]
    CorrectionFailed,
}

impl RsError {
    /// True for the errors produced by an over-corrupted block, as opposed to
    /// caller mistakes such as oversized input or a bad configuration
    pub fn is_uncorrectable(&self) -> bool {
        matches!(
            self,
            RsError::TooManyErrors { .. }
                | RsError::RootMismatch { .. }
                | RsError::CorrectionFailed
                | RsError::DivisionByZero
        )
    }
}

/// Type alias for Result with RsError
pub type Result<T> = std::result::Result<T, RsError>;
