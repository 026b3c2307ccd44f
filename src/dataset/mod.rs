mod dataset_error;
mod loader;

pub use dataset_error::DataLoadError;
pub use loader::load;
