//! File-level encode, corrupt and decode
//!
//! Files are split into blocks, each block goes through the single-block
//! codec independently, and the outputs are joined back in order:
//!
//! - **encode**: `255 - ecc` message bytes per block, 255-byte codewords out
//! - **corrupt**: 255-byte blocks, a fixed number of symbols damaged per block
//! - **decode**: 255-byte blocks, message bytes out
//!
//! Blocks are independent, so encode and decode fan out over a rayon pool
//! sharing one `&'static FieldEngine`. A block that fails to decode never
//! stops the file: it is reported, its received message bytes are written
//! unchanged so later blocks keep their offsets, and the summary is marked
//! as failed.

mod config;
mod error;

pub use config::{CodecConfig, DEFAULT_ECC_SYMBOLS};
pub use error::{PipelineError, Result};

use crate::corruption::{CorruptionConfig, Corruptor};
use crate::file_ops::{join_blocks, read_file, split_blocks, write_file};
use crate::reed_solomon::{DecodeState, FieldEngine, ReedSolomon, RsError, MAX_BLOCK_LEN};
use crate::reporters::CodecReporter;
use log::{debug, warn};
use rayon::prelude::*;
use std::fmt;
use std::path::Path;
use std::time::{Duration, Instant};

/// File-level operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Encode,
    Corrupt,
    Decode,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Encode => write!(f, "encode"),
            Operation::Corrupt => write!(f, "corrupt"),
            Operation::Decode => write!(f, "decode"),
        }
    }
}

/// Outcome of one file-level operation
#[derive(Debug)]
pub struct PipelineSummary {
    pub operation: Operation,
    pub blocks: usize,
    /// Blocks decoded without corruption
    pub clean_blocks: usize,
    /// Blocks decoded after correction
    pub repaired_blocks: usize,
    /// Symbols corrected (decode) or damaged (corrupt)
    pub symbols_changed: usize,
    /// Blocks that could not be decoded, with the reason
    pub failed: Vec<(usize, RsError)>,
    pub bytes_in: usize,
    pub bytes_out: usize,
    pub elapsed: Duration,
}

impl PipelineSummary {
    fn new(operation: Operation, blocks: usize, bytes_in: usize) -> Self {
        Self {
            operation,
            blocks,
            clean_blocks: 0,
            repaired_blocks: 0,
            symbols_changed: 0,
            failed: Vec::new(),
            bytes_in,
            bytes_out: 0,
            elapsed: Duration::ZERO,
        }
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

impl fmt::Display for PipelineSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {} blocks, {} bytes in, {} bytes out",
            self.operation, self.blocks, self.bytes_in, self.bytes_out
        )?;
        match self.operation {
            Operation::Decode => {
                writeln!(f, "  Clean blocks: {}", self.clean_blocks)?;
                writeln!(
                    f,
                    "  Repaired blocks: {} ({} symbols)",
                    self.repaired_blocks, self.symbols_changed
                )?;
                writeln!(f, "  Failed blocks: {}", self.failed.len())?;
            }
            Operation::Corrupt => writeln!(f, "  Damaged symbols: {}", self.symbols_changed)?,
            Operation::Encode => {}
        }
        writeln!(f, "Runtime: {:?}", self.elapsed)
    }
}

/// Apply `f` to every block, in parallel when configured
fn map_blocks<T, F>(config: &CodecConfig, blocks: &[&[u8]], f: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(usize, &[u8]) -> T + Send + Sync,
{
    if !config.parallel || blocks.len() < 2 {
        return Ok(blocks.iter().enumerate().map(|(i, b)| f(i, b)).collect());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.effective_threads())
        .build()
        .map_err(|e| PipelineError::ThreadPool(e.to_string()))?;

    Ok(pool.install(|| blocks.par_iter().enumerate().map(|(i, b)| f(i, b)).collect()))
}

/// Encode `data` block by block
pub fn encode_bytes(data: &[u8], config: &CodecConfig) -> Result<Vec<u8>> {
    let rs = ReedSolomon::new(FieldEngine::shared(config.primitive), config.ecc_symbols)?;
    let blocks = split_blocks(data, config.data_block_len());

    let encoded = map_blocks(config, &blocks, |index, block| {
        rs.encode(block)
            .map_err(|source| PipelineError::Codec { block: index, source })
    })?
    .into_iter()
    .collect::<Result<Vec<_>>>()?;

    Ok(join_blocks(&encoded))
}

/// Encode a file into 255-byte codewords
pub fn encode_file<R: CodecReporter>(
    input: &Path,
    output: &Path,
    config: &CodecConfig,
    reporter: &R,
) -> Result<PipelineSummary> {
    let start = Instant::now();
    let data = read_file(input)?;

    let blocks = data.len().div_ceil(config.data_block_len());
    reporter.report_start(Operation::Encode, blocks, config.parallel);
    let mut summary = PipelineSummary::new(Operation::Encode, blocks, data.len());

    let encoded = encode_bytes(&data, config)?;
    write_file(output, &encoded)?;

    summary.bytes_out = encoded.len();
    summary.elapsed = start.elapsed();
    debug!("encoded {} into {} ({} blocks)", input.display(), output.display(), blocks);
    reporter.report_summary(&summary);
    Ok(summary)
}

/// Damage every 255-byte block of `data` in place
///
/// Returns the damaged positions per block. Runs sequentially so a seeded
/// run is reproducible.
pub fn corrupt_bytes(data: &mut [u8], corruption: &CorruptionConfig) -> Vec<Vec<usize>> {
    let mut corruptor = Corruptor::new(corruption);
    data.chunks_mut(MAX_BLOCK_LEN)
        .map(|block| corruptor.corrupt_block(block))
        .collect()
}

/// Simulate transmission damage on an encoded file
pub fn corrupt_file<R: CodecReporter>(
    input: &Path,
    output: &Path,
    corruption: &CorruptionConfig,
    reporter: &R,
) -> Result<PipelineSummary> {
    let start = Instant::now();
    let mut data = read_file(input)?;

    let blocks = data.len().div_ceil(MAX_BLOCK_LEN);
    reporter.report_start(Operation::Corrupt, blocks, false);
    let mut summary = PipelineSummary::new(Operation::Corrupt, blocks, data.len());

    let damaged = corrupt_bytes(&mut data, corruption);
    write_file(output, &data)?;

    summary.symbols_changed = damaged.iter().map(Vec::len).sum();
    summary.bytes_out = data.len();
    summary.elapsed = start.elapsed();
    reporter.report_summary(&summary);
    Ok(summary)
}

/// Decode `data` block by block
///
/// Failed blocks contribute their received message bytes and are listed in
/// the returned summary.
pub fn decode_bytes<R: CodecReporter>(
    data: &[u8],
    config: &CodecConfig,
    reporter: &R,
) -> Result<(Vec<u8>, PipelineSummary)> {
    let ecc = config.ecc_symbols;
    let rs = ReedSolomon::new(FieldEngine::shared(config.primitive), ecc)?;
    let blocks = split_blocks(data, config.encoded_block_len());
    let mut summary = PipelineSummary::new(Operation::Decode, blocks.len(), data.len());

    let results = map_blocks(config, &blocks, |_, block| rs.decode(block))?;

    let mut messages: Vec<Vec<u8>> = Vec::with_capacity(blocks.len());
    for (index, (block, result)) in blocks.iter().zip(results).enumerate() {
        match result {
            Ok(decoded) => {
                match decoded.state {
                    DecodeState::Clean => summary.clean_blocks += 1,
                    DecodeState::Verified => {
                        summary.repaired_blocks += 1;
                        summary.symbols_changed += decoded.corrected.len();
                        reporter.report_block_corrected(index, &decoded.corrected);
                    }
                }
                messages.push(decoded.message);
            }
            Err(e) => {
                warn!("block {} could not be decoded: {}", index, e);
                reporter.report_block_failed(index, &e);
                messages.push(block[..block.len().saturating_sub(ecc)].to_vec());
                summary.failed.push((index, e));
            }
        }
    }

    let decoded = join_blocks(&messages);
    summary.bytes_out = decoded.len();
    Ok((decoded, summary))
}

/// Decode and repair an encoded file
pub fn decode_file<R: CodecReporter>(
    input: &Path,
    output: &Path,
    config: &CodecConfig,
    reporter: &R,
) -> Result<PipelineSummary> {
    let start = Instant::now();
    let data = read_file(input)?;

    reporter.report_start(
        Operation::Decode,
        data.len().div_ceil(config.encoded_block_len()),
        config.parallel,
    );

    let (decoded, mut summary) = decode_bytes(&data, config, reporter)?;
    write_file(output, &decoded)?;

    summary.elapsed = start.elapsed();
    debug!(
        "decoded {}: {} clean, {} repaired, {} failed",
        input.display(),
        summary.clean_blocks,
        summary.repaired_blocks,
        summary.failed.len()
    );
    reporter.report_summary(&summary);
    Ok(summary)
}
