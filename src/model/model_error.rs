use thiserror::Error;

/// The artifact could not be turned into a usable model.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("model artifact {path} could not be read: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("model artifact is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("model artifact is incompatible: {0}")]
    Incompatible(String),
}

/// A request the model cannot answer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("{field} {value:?} was not seen when the model was trained")]
    UnknownCategory { field: &'static str, value: String },
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
    #[error("{field} is not a valid value: {value:?}")]
    InvalidInput { field: &'static str, value: String },
    #[error("model produced an unusable price: {0}")]
    InvalidOutput(f64),
}

/// Either failure, as seen from the prediction form.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Load(#[from] ModelLoadError),
    #[error(transparent)]
    Predict(#[from] PredictionError),
}
