//! RCQL - parse directive task blocks from RCQL text
//!
//! An RCQL file holds one `Label: value` directive per line. A `Contain`
//! directive starts a new task block; other directives attach to the block
//! currently being built. Comments (`#`), blank lines and anything that is
//! not a recognised directive are skipped.
//!
//! # Example
//!
//! ```
//! use rcql::{parse_document, Directive};
//!
//! let doc = parse_document("Contain: a\nRecall: b\nContain: c\n");
//! assert_eq!(doc.len(), 2);
//! assert_eq!(doc.records[0].get(Directive::Recall), Some("b"));
//! ```

pub mod cli;
pub mod error;
pub mod output;
pub mod parser;
pub mod source;

pub use error::{RcqlError, Result};
pub use output::{format_output, OutputFormat};
pub use parser::{parse_document, parse_lines, Directive, Document, Record};
pub use source::{load_file, load_reader};
