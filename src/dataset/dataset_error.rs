use crate::domain::Column;
use thiserror::Error;

/// Fatal at startup: the dashboard has nothing to show without its data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column \"{0}\"")]
    MissingColumn(Column),
    #[error("line {line}: invalid {column} value {value:?}")]
    InvalidValue {
        line: u64,
        column: Column,
        value: String,
    },
}
