//! JSON Renderer

use super::TableRenderer;
use crate::table::PeriodTables;
use crate::{PeriodTableError, Result};

/// Renders a pretty-printed array of `{ "divisor", "periods" }` objects
pub struct JsonRenderer;

impl TableRenderer for JsonRenderer {
    fn render(&self, tables: &PeriodTables) -> Result<String> {
        let mut out = serde_json::to_string_pretty(tables)
            .map_err(|e| PeriodTableError::Serialization(e.to_string()))?;
        out.push('\n');
        Ok(out)
    }

    fn name(&self) -> &str {
        "JSON Renderer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use serde_json::Value;

    #[test]
    fn test_json_document() {
        let tables = PeriodTables::generate(&Tuning::default()).unwrap();
        let text = JsonRenderer.render(&tables).unwrap();
        let doc: Value = serde_json::from_str(&text).unwrap();

        let entries = doc.as_array().unwrap();
        assert_eq!(entries.len(), 3);

        let divisors: Vec<u64> = entries
            .iter()
            .map(|entry| entry["divisor"].as_u64().unwrap())
            .collect();
        assert_eq!(divisors, vec![12, 15, 16]);

        let periods16 = entries[2]["periods"].as_array().unwrap();
        assert_eq!(periods16.len(), 84);
        assert_eq!(periods16[0].as_u64(), Some(2389));
    }
}
