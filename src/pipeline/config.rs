//! Configuration for file-level codec operations

use super::error::{PipelineError, Result};
use crate::reed_solomon::encoder::validate_ecc_symbols;
use crate::reed_solomon::{Primitive, MAX_BLOCK_LEN};

/// Default number of parity symbols per block (corrects up to 5 symbols)
pub const DEFAULT_ECC_SYMBOLS: usize = 10;

/// Configuration shared by encode, corrupt and decode
#[derive(Debug, Clone)]
pub struct CodecConfig {
    /// Field-generating polynomial
    pub primitive: Primitive,
    /// Parity symbols appended to every block
    pub ecc_symbols: usize,
    /// Number of threads for computation (0 = auto-detect)
    pub threads: usize,
    /// Whether to fan blocks out across threads
    pub parallel: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            primitive: Primitive::Qr,
            ecc_symbols: DEFAULT_ECC_SYMBOLS,
            threads: 0, // Auto-detect CPU cores
            parallel: true,
        }
    }
}

impl CodecConfig {
    pub fn new(primitive: Primitive, ecc_symbols: usize, threads: usize, parallel: bool) -> Result<Self> {
        validate_ecc_symbols(ecc_symbols)?;
        Ok(Self {
            primitive,
            ecc_symbols,
            threads,
            parallel,
        })
    }

    pub fn from_args(matches: &clap::ArgMatches) -> Result<Self> {
        let primitive = matches
            .get_one::<String>("primitive")
            .map(|s| s.parse::<Primitive>())
            .transpose()?
            .unwrap_or_default();

        let ecc_symbols = match matches.get_one::<String>("ecc") {
            Some(s) => s
                .parse()
                .map_err(|_| PipelineError::InvalidConfig(format!("ECC symbols must be a number, got {:?}", s)))?,
            None => DEFAULT_ECC_SYMBOLS,
        };

        let threads = matches
            .get_one::<String>("threads")
            .and_then(|s| s.parse().ok())
            .unwrap_or(0);

        let parallel = !matches.get_flag("no-parallel");

        Self::new(primitive, ecc_symbols, threads, parallel)
    }

    /// Message bytes carried by one encoded block
    pub fn data_block_len(&self) -> usize {
        MAX_BLOCK_LEN - self.ecc_symbols
    }

    /// Length of one encoded block
    pub fn encoded_block_len(&self) -> usize {
        MAX_BLOCK_LEN
    }

    /// Get effective thread count (auto-detect if 0)
    pub fn effective_threads(&self) -> usize {
        match (self.parallel, self.threads) {
            (false, _) => 1, // Sequential mode always uses single thread
            (true, 0) => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
            (true, n) => n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CodecConfig::default();
        assert_eq!(config.primitive, Primitive::Qr);
        assert_eq!(config.data_block_len(), 245);
        assert_eq!(config.encoded_block_len(), 255);
    }

    #[test]
    fn test_rejects_bad_ecc() {
        assert!(CodecConfig::new(Primitive::Qr, 0, 0, true).is_err());
        assert!(CodecConfig::new(Primitive::Qr, 255, 0, true).is_err());
        assert!(CodecConfig::new(Primitive::DataMatrix, 254, 0, true).is_ok());
    }

    #[test]
    fn test_sequential_uses_one_thread() {
        let config = CodecConfig::new(Primitive::Qr, 10, 8, false).unwrap();
        assert_eq!(config.effective_threads(), 1);
        let config = CodecConfig::new(Primitive::Qr, 10, 3, true).unwrap();
        assert_eq!(config.effective_threads(), 3);
    }
}
