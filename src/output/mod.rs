//! Table Output Domain
//!
//! Persists rendered documents to disk. The whole document is written to a
//! temporary file beside the destination and renamed into place, so a failed
//! run never leaves a truncated table file behind.

pub mod writer;

pub use writer::TableWriter;

use crate::Result;
use std::path::Path;

/// Convenience function to write a rendered document to disk
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    TableWriter::write(path.as_ref(), contents)
}
