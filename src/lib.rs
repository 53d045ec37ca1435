//! 2A03 Period Table Generator
//!
//! Computes the timer-period lookup tables used by the NESIZER synth to play
//! notes on the NES 2A03 sound chip, and emits them as source text.
//!
//! Each 2A03 variant divides the 20 MHz master clock by 12, 15 or 16. For
//! every divisor the generator produces one table of 84 periods covering
//! C1..B7, octave by octave.
//!
//! # Features
//! - Exact frequency/period formula with injectable [`Tuning`] constants
//! - C (`PROGMEM`), Rust and JSON output
//! - Atomic output: the document is buffered and renamed into place
//! - Runtime lookup helpers mirroring the synth's per-channel period logic
//!
//! # Quick start
//! ```no_run
//! period_tables::generate("periods.c").unwrap();
//! ```
//!
//! ## Tables in memory
//! ```
//! use period_tables::{PeriodTables, Tuning};
//! let tables = PeriodTables::generate(&Tuning::default()).unwrap();
//! let table16 = tables.select(16).unwrap();
//! assert_eq!(table16.period(0, 0), Some(2389));
//! ```

#![warn(missing_docs)]

pub mod emit; // Source Text Rendering
pub mod lookup; // Runtime Period Lookup
pub mod output; // Atomic File Output
pub mod table; // Period Tables
pub mod tuning; // Frequency/Period Formula

use std::path::Path;

use tracing::info;

/// Error types for period table generation
#[derive(thiserror::Error, Debug)]
pub enum PeriodTableError {
    /// IO error while creating or writing the destination
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Destination path does not name a file
    #[error("Invalid destination: {0}")]
    InvalidDestination(String),

    /// Error while serializing tables
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid tuning or divisor
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

/// Result type for period table operations
pub type Result<T> = std::result::Result<T, PeriodTableError>;

// Public API exports
pub use emit::{render, OutputFormat, TableRenderer};
pub use lookup::{channel_period, Channel, Tone};
pub use table::{PeriodTable, PeriodTables, DIVISORS, TABLE_LEN};
pub use tuning::Tuning;

/// Generate the C tables with the default tuning and write them to `path`
pub fn generate<P: AsRef<Path>>(path: P) -> Result<()> {
    generate_with(path, &Tuning::default(), OutputFormat::C)
}

/// Generate tables for every divisor and write them to `path` in `format`
///
/// Nothing touches the destination until the whole document is rendered.
pub fn generate_with<P: AsRef<Path>>(
    path: P,
    tuning: &Tuning,
    format: OutputFormat,
) -> Result<()> {
    let path = path.as_ref();
    let tables = PeriodTables::generate(tuning)?;
    let document = render(&tables, format)?;

    info!(
        tables = tables.len(),
        format = %format,
        reload_offset = tuning.reload_offset,
        "rendered period tables"
    );

    output::write_file(path, &document)
}
