//! Error types for RCQL

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the source loader.
///
/// Content-level irregularities are never errors: the parser drops lines it
/// does not recognise. The only failure is not being able to read the input.
#[derive(Error, Debug)]
pub enum RcqlError {
    #[error("Cannot read {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RcqlError>;
