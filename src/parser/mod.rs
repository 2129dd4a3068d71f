//! Parser module for RCQL documents

pub mod ast;
pub mod grammar;

pub use ast::*;
pub use grammar::{classify_line, parse_document, parse_lines, DocumentBuilder, Line};
