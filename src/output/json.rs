//! JSON output formatting

use crate::parser::Document;

pub fn format_json(document: &Document) -> String {
    serde_json::to_string_pretty(document).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;
    use serde_json::{json, Value};

    #[test]
    fn test_format_json() {
        let doc = parse_document("reflect: r\nContain: a\nRecall: b\n");
        let value: Value = serde_json::from_str(&format_json(&doc)).unwrap();
        assert_eq!(
            value,
            json!([
                { "Reflect": "r" },
                { "Contain": "a", "Recall": "b" }
            ])
        );
    }

    #[test]
    fn test_json_keeps_key_order() {
        let doc = parse_document("Contain: c\nValidate: v\nIntend: i\n");
        let text = format_json(&doc);
        let validate = text.find("\"Validate\"").unwrap();
        let intend = text.find("\"Intend\"").unwrap();
        assert!(validate < intend);
    }

    #[test]
    fn test_empty_document_is_empty_array() {
        assert_eq!(format_json(&Document::default()), "[]");
    }
}
