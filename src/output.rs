//! Output assembly for crunch results.
//!
//! Renders a [`CrunchResult`] into the single text artifact: the folder
//! structure header followed by every file's content between `=== BEGIN ===`
//! and `=== END ===` markers. File bytes pass through untouched.

use crate::{CrunchError, CrunchResult};
use std::fs;
use std::path::Path;

/// Renders the complete output artifact.
///
/// Each file block is the BEGIN marker line, the raw content bytes, a
/// newline, the END marker line, and one blank line before the next block.
pub fn render(result: &CrunchResult) -> Vec<u8> {
    let content_len: usize = result.files.iter().map(|f| f.content.len()).sum();
    let mut out = Vec::with_capacity(content_len + 1024);
    out.extend_from_slice(b"# Folder Structure\n\n");
    for line in &result.structure {
        out.extend_from_slice(line.as_bytes());
        out.push(b'\n');
    }
    out.extend_from_slice(b"\n--- BEGIN CONCATENATED FILES ---\n\n");
    for file in &result.files {
        let path = file.path.display();
        out.extend_from_slice(format!("=== BEGIN {path} ===\n").as_bytes());
        out.extend_from_slice(&file.content);
        out.extend_from_slice(format!("\n=== END {path} ===\n\n").as_bytes());
    }
    out
}

/// Writes the rendered artifact to a file in one shot, so either a complete
/// file is produced or none is.
pub fn write_to_file(result: &CrunchResult, path: impl AsRef<Path>) -> Result<(), CrunchError> {
    fs::write(&path, render(result)).map_err(|e| CrunchError::io(path.as_ref(), e))?;
    Ok(())
}

/// Formats a byte count with two decimals in the largest fitting unit.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", size, UNITS[unit])
}
