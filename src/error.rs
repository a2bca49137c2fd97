use std::path::{Path, PathBuf};

use thiserror::Error;

/// Convenience result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Error type returned by every stage of the extraction pipeline.
///
/// Rows lacking a house number or street are not errors; they are skipped and counted in
/// [`crate::observability::ExtractStats::skipped`].
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input table does not exist.
    #[error("input file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    /// The input table exists but could not be opened or read.
    #[error("failed to read input file {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be decoded (invalid UTF-8, broken CSV framing).
    #[error("malformed row{}: {source}", .line.map(|l| format!(" at line {l}")).unwrap_or_default())]
    MalformedRow {
        line: Option<u64>,
        #[source]
        source: csv::Error,
    },

    /// The output directory could not be created or the output file could not be written.
    #[error("failed to write output file {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractError {
    /// Classify a CSV error raised while reading `path`.
    ///
    /// I/O failures become [`Self::InputRead`]; anything else is a [`Self::MalformedRow`]
    /// carrying the record's line number when known.
    pub(crate) fn from_csv(path: &Path, source: csv::Error) -> Self {
        if source.is_io_error() {
            let source = match source.into_kind() {
                csv::ErrorKind::Io(err) => err,
                kind => std::io::Error::other(format!("{kind:?}")),
            };
            return Self::InputRead {
                path: path.to_path_buf(),
                source,
            };
        }
        let line = source.position().map(|p| p.line());
        Self::MalformedRow { line, source }
    }

    pub(crate) fn input_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::InputNotFound { path }
        } else {
            Self::InputRead { path, source }
        }
    }
}
