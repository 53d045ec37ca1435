//! Table Emitters
//!
//! Renders [`PeriodTables`] as source text for downstream builds. The C
//! layout with `PROGMEM` placement is what the synth firmware includes;
//! Rust and JSON renderings carry the same period sequences.

pub mod c;
pub mod json;
pub mod rust;

pub use c::CRenderer;
pub use json::JsonRenderer;
pub use rust::RustRenderer;

use std::fmt;

use crate::table::{PeriodTable, PeriodTables};
use crate::Result;

/// Common interface for all table renderers
pub trait TableRenderer {
    /// Render every table into one document
    fn render(&self, tables: &PeriodTables) -> Result<String>;

    /// Get renderer name
    fn name(&self) -> &str;
}

/// Output document format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `const uint16_t period_tableN[84] PROGMEM` declarations
    #[default]
    C,
    /// `pub static PERIOD_TABLEN: [u16; 84]` items
    Rust,
    /// Array of `{ divisor, periods }` objects
    Json,
}

impl OutputFormat {
    /// Parse format from string argument.
    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "c" => Some(OutputFormat::C),
            "rust" | "rs" => Some(OutputFormat::Rust),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    /// Get string representation of format.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::C => "c",
            OutputFormat::Rust => "rust",
            OutputFormat::Json => "json",
        }
    }

    /// Renderer producing this format
    pub fn renderer(&self) -> Box<dyn TableRenderer> {
        match self {
            OutputFormat::C => Box::new(CRenderer),
            OutputFormat::Rust => Box::new(RustRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render tables in the given format
pub fn render(tables: &PeriodTables, format: OutputFormat) -> Result<String> {
    format.renderer().render(tables)
}

/// Append a table body: one indented line per octave, values joined by `", "`,
/// with no separator after the final value.
pub(crate) fn push_octave_lines(out: &mut String, table: &PeriodTable) {
    let last_octave = table.octaves().count() - 1;
    for (octave, row) in table.octaves().enumerate() {
        let values: Vec<String> = row.iter().map(u16::to_string).collect();
        out.push_str("  ");
        out.push_str(&values.join(", "));
        if octave != last_octave {
            out.push_str(", ");
        }
        out.push('\n');
    }
}
