mod forest;
mod handle;
mod model_error;

pub use forest::RandomForest;
pub use handle::ModelHandle;
pub use model_error::{ModelError, ModelLoadError, PredictionError};

use crate::domain::{PredictionRequest, PredictionResult};

/// A fitted rent model.
pub trait Regressor: Send + Sync {
    fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, PredictionError>;

    /// Model kind, for logs.
    fn name(&self) -> &str;
}
