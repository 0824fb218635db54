//! HAR (HTTP Archive) model and loading.
//!
//! Parses the minimal HAR 1.2 subset the extractor reads: `log.entries`,
//! each entry's request URL and optional response content. Everything
//! else in the archive is ignored.

mod parse;

pub use parse::{HarContent, HarEntry, HarLog, HarRequest, HarResponse};

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal archive load failure. Any of these aborts the whole run;
/// per-entry problems are handled later, in the extraction loop.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("archive not found: {path}")]
    NotFound { path: PathBuf },

    #[error("archive is not a valid HAR document: {path}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read archive: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads and parses a HAR file.
///
/// A missing file, invalid JSON, or a document without the expected
/// `log.entries` structure all fail here; there is no partial result.
pub fn load_archive(path: &Path) -> Result<HarLog, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    serde_json::from_slice(&bytes).map_err(|source| LoadError::Format {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn load_archive_parses_entries() {
        let f = write_temp(
            r#"{
                "log": {
                    "version": "1.2",
                    "entries": [
                        {
                            "request": { "url": "https://example.com/js/app.js" },
                            "response": { "content": { "text": "console.log(1);" } }
                        },
                        {
                            "request": { "url": "https://example.com/nobody" },
                            "response": { "content": {} }
                        }
                    ]
                }
            }"#,
        );
        let har = load_archive(f.path()).unwrap();
        assert_eq!(har.log.entries.len(), 2);
        assert_eq!(har.log.entries[0].request.url, "https://example.com/js/app.js");
        let content = har.log.entries[0]
            .response
            .as_ref()
            .unwrap()
            .content
            .as_ref()
            .unwrap();
        assert_eq!(content.text.as_deref(), Some("console.log(1);"));
        assert!(content.encoding.is_none());
    }

    #[test]
    fn load_archive_missing_file_is_not_found() {
        let err = load_archive(Path::new("/no/such/archive.har")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }

    #[test]
    fn load_archive_invalid_json_is_format_error() {
        let f = write_temp("{ not json");
        let err = load_archive(f.path()).unwrap_err();
        assert!(matches!(err, LoadError::Format { .. }));
    }

    #[test]
    fn load_archive_missing_log_is_format_error() {
        let f = write_temp(r#"{"entries": []}"#);
        let err = load_archive(f.path()).unwrap_err();
        assert!(matches!(err, LoadError::Format { .. }));
    }

    #[test]
    fn load_archive_tolerates_missing_response() {
        let f = write_temp(
            r#"{"log":{"entries":[{"request":{"url":"https://example.com/x"}}]}}"#,
        );
        let har = load_archive(f.path()).unwrap();
        assert!(har.log.entries[0].response.is_none());
    }
}
