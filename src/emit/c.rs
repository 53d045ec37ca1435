//! C Header Renderer
//!
//! Emits the declarations the AVR firmware compiles in:
//!
//! ```text
//! const uint16_t period_table12[84] PROGMEM = {
//!   3186, 3007, ...,
//!   ...
//! };
//! ```

use super::{push_octave_lines, TableRenderer};
use crate::table::{PeriodTables, TABLE_LEN};
use crate::Result;

/// Renders `const uint16_t period_tableN[84] PROGMEM` declarations
pub struct CRenderer;

impl TableRenderer for CRenderer {
    fn render(&self, tables: &PeriodTables) -> Result<String> {
        let mut out = String::new();
        for table in tables {
            out.push_str(&format!(
                "const uint16_t period_table{}[{}] PROGMEM = {{\n",
                table.divisor(),
                TABLE_LEN
            ));
            push_octave_lines(&mut out, table);
            out.push_str("};\n\n");
        }
        Ok(out)
    }

    fn name(&self) -> &str {
        "C PROGMEM Renderer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn render_default() -> String {
        let tables = PeriodTables::generate(&Tuning::default()).unwrap();
        CRenderer.render(&tables).unwrap()
    }

    #[test]
    fn test_declaration_headers() {
        let text = render_default();
        assert!(text.starts_with("const uint16_t period_table12[84] PROGMEM = {\n  3186, "));
        assert!(text.contains("period_table15[84]"));
        assert!(text.ends_with("};\n\n"));

        let p12 = text.find("period_table12").unwrap();
        let p15 = text.find("period_table15").unwrap();
        let p16 = text.find("period_table16").unwrap();
        assert!(p12 < p15 && p15 < p16);
    }

    #[test]
    fn test_no_trailing_separator() {
        let text = render_default();
        assert!(text.contains("  50, 47, 44, 42, 40, 37, 35, 33, 31, 30, 28, 26\n};\n\n"));
        assert!(!text.contains(", \n};"));
    }

    #[test]
    fn test_line_layout() {
        let text = render_default();
        // 3 tables x (header + 7 octaves + closing + blank)
        assert_eq!(text.lines().count(), 30);
        assert_eq!(text.matches("PROGMEM").count(), 3);
    }
}
