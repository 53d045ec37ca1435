//! Rust Source Renderer

use super::{push_octave_lines, TableRenderer};
use crate::table::{PeriodTables, TABLE_LEN};
use crate::Result;

/// Renders `pub static PERIOD_TABLEN: [u16; 84]` items for `include!`
pub struct RustRenderer;

impl TableRenderer for RustRenderer {
    fn render(&self, tables: &PeriodTables) -> Result<String> {
        let mut out = String::new();
        for table in tables {
            out.push_str(&format!(
                "pub static PERIOD_TABLE{}: [u16; {}] = [\n",
                table.divisor(),
                TABLE_LEN
            ));
            push_octave_lines(&mut out, table);
            out.push_str("];\n\n");
        }
        Ok(out)
    }

    fn name(&self) -> &str {
        "Rust Static Renderer"
    }
}
