pub mod listing;
pub mod prediction;

pub use listing::{Column, Listing, ListingCollection};
pub use prediction::{PredictionRequest, PredictionResult, PropertyType};
