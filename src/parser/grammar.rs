//! Line grammar for RCQL
//!
//! Each line, once trimmed, is one of:
//!
//! ```text
//! blank      := ""
//! comment    := "#" any*
//! directive  := label ":" ws* value      (label matched case-insensitively)
//! ```
//!
//! Anything else is dropped without error.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::parser::ast::{Directive, Document, Record};

/// Classification of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Comment,
    Directive(Directive, &'a str),
    Unrecognized,
}

fn directive_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let labels = Directive::ALL
            .iter()
            .map(|d| d.label())
            .collect::<Vec<_>>()
            .join("|");
        // Labels are plain words, no escaping needed.
        Regex::new(&format!(r"(?i)^({labels}):\s*(.*)$")).expect("directive pattern is valid")
    })
}

/// Classify one line of input.
pub fn classify_line(line: &str) -> Line<'_> {
    let line = line.trim();
    if line.is_empty() {
        return Line::Blank;
    }
    if line.starts_with('#') {
        return Line::Comment;
    }

    let Some(caps) = directive_pattern().captures(line) else {
        return Line::Unrecognized;
    };
    let (Some(label), Some(value)) = (caps.get(1), caps.get(2)) else {
        return Line::Unrecognized;
    };
    match Directive::from_label(label.as_str()) {
        Some(directive) => Line::Directive(directive, value.as_str()),
        None => Line::Unrecognized,
    }
}

/// Accumulates directives into records, closing a record whenever a
/// `Contain` arrives while the current one already holds a key.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    records: Vec<Record>,
    current: Record,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, directive: Directive, value: impl Into<String>) {
        if directive.is_boundary() && !self.current.is_empty() {
            let closed = std::mem::take(&mut self.current);
            debug!(keys = closed.len(), "closing task block");
            self.records.push(closed);
        }
        self.current.insert(directive, value);
    }

    pub fn finish(mut self) -> Document {
        if !self.current.is_empty() {
            self.records.push(self.current);
        }
        Document {
            records: self.records,
        }
    }
}

/// Parse a sequence of lines into a document.
pub fn parse_lines<I, S>(lines: I) -> Document
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = DocumentBuilder::new();

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        match classify_line(line) {
            Line::Blank | Line::Comment => {}
            Line::Directive(directive, value) => builder.push(directive, value),
            Line::Unrecognized => {
                debug!(line = index + 1, text = line.trim(), "dropping unrecognized line");
            }
        }
    }

    builder.finish()
}

/// Parse full text. `\n`, `\r\n` and lone `\r` all end a line.
pub fn parse_document(input: &str) -> Document {
    parse_lines(input.split(['\n', '\r']))
}
