//! Error type shared by every pass of the pipeline.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while building or running a [`TextMiner`](crate::TextMiner).
#[derive(Debug)]
pub enum MinerError {
    /// The cleaner needs an abbreviation table and none was supplied.
    MissingAbbreviations,
    /// A pass was invoked before a dataset was attached.
    MissingDataset,
    /// The requested column does not exist in the dataset.
    ColumnNotFound { column: String },
    /// A cell holds a value of the wrong kind for the pass.
    TypeMismatch {
        column: String,
        row: usize,
        expected: &'static str,
        found: &'static str,
    },
    /// The stopword corpus is still missing after a fetch.
    CorpusUnavailable { name: String, path: PathBuf },
    /// Fetching the stopword corpus failed.
    CorpusFetch { name: String, source: io::Error },
    /// The spelling dictionary could not be built.
    Dictionary(String),
    /// The abbreviation source could not be parsed.
    Abbreviations(String),
    Io(io::Error),
}

impl fmt::Display for MinerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinerError::MissingAbbreviations => {
                write!(f, "No abbreviation table configured for the cleaner")
            }
            MinerError::MissingDataset => write!(f, "No dataset attached to the pipeline"),
            MinerError::ColumnNotFound { column } => write!(f, "Column '{}' not found", column),
            MinerError::TypeMismatch {
                column,
                row,
                expected,
                found,
            } => write!(
                f,
                "Column '{}' row {}: expected {}, found {}",
                column, row, expected, found
            ),
            MinerError::CorpusUnavailable { name, path } => write!(
                f,
                "Corpus '{}' not available at {}",
                name,
                path.display()
            ),
            MinerError::CorpusFetch { name, source } => {
                write!(f, "Failed to fetch corpus '{}': {}", name, source)
            }
            MinerError::Dictionary(msg) => write!(f, "Spelling dictionary error: {}", msg),
            MinerError::Abbreviations(msg) => write!(f, "Abbreviation table error: {}", msg),
            MinerError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for MinerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MinerError::CorpusFetch { source, .. } => Some(source),
            MinerError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for MinerError {
    fn from(err: io::Error) -> Self {
        MinerError::Io(err)
    }
}

impl From<csv::Error> for MinerError {
    fn from(err: csv::Error) -> Self {
        MinerError::Abbreviations(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MinerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MinerError::ColumnNotFound {
            column: "Tweets".to_string(),
        };
        assert_eq!(format!("{}", err), "Column 'Tweets' not found");

        let err = MinerError::TypeMismatch {
            column: "Tweets".to_string(),
            row: 3,
            expected: "text",
            found: "null",
        };
        assert_eq!(
            format!("{}", err),
            "Column 'Tweets' row 3: expected text, found null"
        );
    }

    #[test]
    fn test_fetch_error_keeps_source() {
        use std::error::Error;

        let err = MinerError::CorpusFetch {
            name: "stopwords".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("read-only"));
    }
}
