use crate::domain::ListingCollection;
use crate::model::ModelHandle;

/// Shared by every request. The listings never change after startup.
pub struct AppState {
    pub collection: ListingCollection,
    pub model: ModelHandle,
}
