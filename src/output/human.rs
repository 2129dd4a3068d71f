//! Human-readable output formatting

use crate::parser::Document;

/// Render each record as a numbered task block:
///
/// ```text
///
/// --- Task Block 1 ---
/// Contain: scope
/// Recall: notes
/// ```
pub fn format_human(document: &Document) -> String {
    let mut output = String::new();
    for (i, record) in document.iter().enumerate() {
        output.push_str(&format!("\n--- Task Block {} ---\n", i + 1));
        for (directive, value) in record.iter() {
            output.push_str(&format!("{}: {}\n", directive, value));
        }
    }
    output
}
