//! File and block operations
//!
//! Whole-file reads and writes plus splitting a byte stream into fixed-size
//! blocks for the codec and joining the results back in order.

use crate::pipeline::{PipelineError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Read the whole file into memory
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `data`, replacing any existing file
pub fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).map_err(|source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Split into consecutive blocks of `block_len`, the last possibly shorter
///
/// Empty input yields no blocks.
pub fn split_blocks(data: &[u8], block_len: usize) -> Vec<&[u8]> {
    if block_len == 0 {
        return Vec::new();
    }
    data.chunks(block_len).collect()
}

/// Concatenate blocks in order
pub fn join_blocks<B: AsRef<[u8]>>(blocks: &[B]) -> Vec<u8> {
    let total = blocks.iter().map(|b| b.as_ref().len()).sum();
    let mut out = Vec::with_capacity(total);
    for block in blocks {
        out.extend_from_slice(block.as_ref());
    }
    out
}

/// Default output path `<dir of input>/<stem><ext of input>`
///
/// Keeps the input's extension so that e.g. `photo.jpg` encodes to
/// `Encoded_File.jpg`.
pub fn default_output_path(input: &Path, stem: &str) -> PathBuf {
    let dir = match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let name = match input.extension() {
        Some(ext) => format!("{}.{}", stem, ext.to_string_lossy()),
        None => stem.to_string(),
    };
    dir.join(name)
}
