//! Loading RCQL text from files or standard input

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{RcqlError, Result};
use crate::parser::{parse_document, Document};

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Read and parse an RCQL file. `-` reads standard input.
pub fn load_file(path: &Path) -> Result<Document> {
    if path == Path::new(STDIN_PATH) {
        return load_reader(io::stdin().lock(), path);
    }

    let content = fs::read_to_string(path).map_err(|source| RcqlError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_logged(&content, path))
}

/// Read and parse RCQL text from any reader. `origin` names the source in
/// errors and logs.
pub fn load_reader<R: Read>(mut reader: R, origin: impl Into<PathBuf>) -> Result<Document> {
    let origin = origin.into();
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|source| RcqlError::SourceUnavailable {
            path: origin.clone(),
            source,
        })?;

    Ok(parse_logged(&content, &origin))
}

fn parse_logged(content: &str, origin: &Path) -> Document {
    let document = parse_document(content);
    info!(
        source = %origin.display(),
        records = document.len(),
        "parsed task blocks"
    );
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Directive;
    use std::io::Write;

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# plan\nContain: scope\nRecall: notes\n\nContain: next").unwrap();

        let doc = load_file(file.path()).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.records[0].get(Directive::Recall), Some("notes"));
        assert_eq!(doc.records[1].get(Directive::Contain), Some("next"));
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.rcql");

        let err = load_file(&path).unwrap_err();
        let RcqlError::SourceUnavailable { path: reported, source } = &err;
        assert_eq!(reported, &path);
        assert_eq!(source.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("missing.rcql"));
    }

    #[test]
    fn test_invalid_utf8_is_source_unavailable() {
        let bytes: &[u8] = &[0x43, 0x6f, 0xff, 0xfe];
        let err = load_reader(bytes, "bytes").unwrap_err();
        assert!(matches!(err, RcqlError::SourceUnavailable { .. }));
    }

    #[test]
    fn test_load_reader() {
        let input = "Contain: a\nValidate: b\n".as_bytes();
        let doc = load_reader(input, "inline").unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.records[0].get(Directive::Validate), Some("b"));
    }

    #[test]
    fn test_file_without_directives_is_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "just prose\nFoo: bar").unwrap();

        let doc = load_file(file.path()).unwrap();
        assert!(doc.is_empty());
    }
}
