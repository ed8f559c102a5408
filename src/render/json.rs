//! JSON rendering of line records.

use crate::error::{Error, Result};

use super::LineRecord;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert line records to a JSON array.
pub fn to_json(records: &[LineRecord], format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(records),
        JsonFormat::Compact => serde_json::to_string(records),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_lines;

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&render_lines("## Title\n- **item**"), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"heading2\""));
        assert!(json.contains("\"bullet\""));
        assert!(json.contains("\"bold\": true"));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&render_lines("text"), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n')); // Compact has no newlines
        assert_eq!(
            json,
            r#"[{"kind":"paragraph","text":"text","spans":[{"text":"text","bold":false}]}]"#
        );
    }

    #[test]
    fn test_to_json_empty() {
        assert_eq!(to_json(&[], JsonFormat::Compact).unwrap(), "[]");
    }
}
