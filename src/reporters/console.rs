//! Console reporter for codec operations

use super::{CodecReporter, Reporter};
use crate::pipeline::{Operation, PipelineSummary};
use crate::reed_solomon::RsError;

/// Show every failed block if there are at most this many
const MAX_FAILED_BLOCKS_LISTED: usize = 20;
/// Otherwise show this many from each end
const FAILED_BLOCKS_HEAD_TAIL: usize = 10;

/// Console implementation for codec operations
#[derive(Default)]
pub struct ConsoleCodecReporter {
    /// Print every repaired block, not just the summary
    verbose: bool,
}

impl ConsoleCodecReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

impl Reporter for ConsoleCodecReporter {
    fn report_error(&self, error: &str) {
        eprintln!("Error: {}", error);
    }

    fn report_complete(&self, message: &str) {
        println!("{}", message);
    }
}

impl CodecReporter for ConsoleCodecReporter {
    fn report_start(&self, operation: Operation, blocks: usize, parallel: bool) {
        println!(
            "Starting {} of {} blocks ({})...",
            operation,
            blocks,
            if parallel { "parallel" } else { "sequential" }
        );
    }

    fn report_block_corrected(&self, index: usize, positions: &[usize]) {
        if self.verbose {
            println!("  Block {}: repaired {} symbols at {:?}", index, positions.len(), positions);
        }
    }

    fn report_block_failed(&self, index: usize, error: &RsError) {
        if self.verbose {
            eprintln!("  Block {}: {}", index, error);
        }
    }

    fn report_summary(&self, summary: &PipelineSummary) {
        print!("{}", summary);

        if !summary.failed.is_empty() {
            let indices: Vec<usize> = summary.failed.iter().map(|(i, _)| *i).collect();
            println!("\nBlocks that could not be repaired:");
            print_block_list(&indices);
            self.report_error(&format!("{} of {} blocks could not be repaired", indices.len(), summary.blocks));
        } else {
            self.report_complete(&format!("{} complete.", summary.operation));
        }
    }
}

/// Print a list of block numbers, with summary for large lists
fn print_block_list(blocks: &[usize]) {
    if blocks.len() <= MAX_FAILED_BLOCKS_LISTED {
        for &block_num in blocks {
            println!("  Block {}: failed", block_num);
        }
    } else {
        for &block_num in &blocks[..FAILED_BLOCKS_HEAD_TAIL] {
            println!("  Block {}: failed", block_num);
        }
        println!(
            "  ... {} more failed blocks ...",
            blocks.len() - (2 * FAILED_BLOCKS_HEAD_TAIL)
        );
        for &block_num in &blocks[blocks.len() - FAILED_BLOCKS_HEAD_TAIL..] {
            println!("  Block {}: failed", block_num);
        }
    }
}
