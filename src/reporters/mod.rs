//! Progress and output reporting for codec operations
//!
//! This module provides traits and implementations for reporting progress and
//! results of file-level encode, corrupt and decode runs. It keeps the
//! pipeline decoupled from output formatting.

mod console;
mod silent;

pub use console::ConsoleCodecReporter;
pub use silent::SilentCodecReporter;

use crate::pipeline::{Operation, PipelineSummary};
use crate::reed_solomon::RsError;

/// Base trait for all reporters
///
/// Provides common functionality that all reporters should have, regardless of
/// the specific operation.
pub trait Reporter: Send + Sync {
    /// Report an error that occurred during operation
    fn report_error(&self, error: &str);

    /// Report successful completion of an operation
    fn report_complete(&self, message: &str);
}

/// Trait for reporting block-level codec progress and results
pub trait CodecReporter: Reporter {
    /// Report starting an operation over `blocks` blocks
    fn report_start(&self, operation: Operation, blocks: usize, parallel: bool);

    /// Report that a block was repaired at the given positions
    fn report_block_corrected(&self, index: usize, positions: &[usize]);

    /// Report that a block could not be decoded
    fn report_block_failed(&self, index: usize, error: &RsError);

    /// Report the final summary
    fn report_summary(&self, summary: &PipelineSummary);
}
