// model/handle.rs
use crate::domain::{PredictionRequest, PredictionResult};
use crate::model::{ModelError, ModelLoadError, RandomForest, Regressor};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

/// Lazily loaded model.
///
/// The artifact is read on the first prediction and the same model serves
/// every later one. A failed load leaves the slot empty, so the next
/// prediction tries the file again.
pub struct ModelHandle {
    path: PathBuf,
    slot: Mutex<Option<Arc<dyn Regressor>>>,
}

impl ModelHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            slot: Mutex::new(None),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub fn get(&self) -> Result<Arc<dyn Regressor>, ModelLoadError> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(model) = slot.as_ref() {
            return Ok(Arc::clone(model));
        }

        let model: Arc<dyn Regressor> = match RandomForest::load(&self.path) {
            Ok(forest) => Arc::new(forest),
            Err(err) => {
                tracing::error!(path = %self.path.display(), error = %err, "model load failed");
                return Err(err);
            }
        };
        tracing::info!(path = %self.path.display(), model = model.name(), "model loaded");

        *slot = Some(Arc::clone(&model));
        Ok(model)
    }

    pub fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, ModelError> {
        let model = self.get()?;
        Ok(model.predict(request)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixture() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/model.json")
    }

    #[test]
    fn loads_on_first_use_and_caches() {
        let handle = ModelHandle::new(fixture());
        assert!(!handle.is_loaded());

        let first = handle.get().unwrap();
        assert!(handle.is_loaded());
        let second = handle.get().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn failed_load_is_retried() {
        let path = std::env::temp_dir().join(format!("model_retry_{}.json", std::process::id()));
        let _ = fs::remove_file(&path);

        let handle = ModelHandle::new(&path);
        assert!(matches!(handle.get(), Err(ModelLoadError::Io { .. })));
        assert!(!handle.is_loaded());

        fs::copy(fixture(), &path).unwrap();
        assert!(handle.get().is_ok());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn predict_surfaces_both_error_kinds() {
        let missing = ModelHandle::new("/no/such/model.json");
        let req = PredictionRequest {
            location: "Toronto".into(),
            ..PredictionRequest::default()
        };
        assert!(matches!(missing.predict(&req), Err(ModelError::Load(_))));

        let handle = ModelHandle::new(fixture());
        let bad = PredictionRequest {
            property_type: "Castle".into(),
            ..req
        };
        assert!(matches!(handle.predict(&bad), Err(ModelError::Predict(_))));
    }
}
