//! Output formatting

use crate::output::human::format_human;
use crate::output::json::format_json;
use crate::parser::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

pub fn format_output(document: &Document, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(document),
        OutputFormat::Json => format_json(document),
    }
}
