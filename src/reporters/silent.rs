//! Silent reporter
//!
//! Provides a no-output implementation for testing or when quiet operation is desired.

use super::{CodecReporter, Reporter};
use crate::pipeline::{Operation, PipelineSummary};
use crate::reed_solomon::RsError;

/// Silent implementation for codec operations
#[derive(Default)]
pub struct SilentCodecReporter;

impl SilentCodecReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for SilentCodecReporter {
    fn report_error(&self, _error: &str) {}
    fn report_complete(&self, _message: &str) {}
}

impl CodecReporter for SilentCodecReporter {
    fn report_start(&self, _operation: Operation, _blocks: usize, _parallel: bool) {}
    fn report_block_corrected(&self, _index: usize, _positions: &[usize]) {}
    fn report_block_failed(&self, _index: usize, _error: &RsError) {}
    fn report_summary(&self, _summary: &PipelineSummary) {}
}
