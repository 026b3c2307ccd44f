//! One module per dashboard page. Each view is a pure function of the
//! listings; nothing here mutates the collection.

pub mod dashboard;
pub mod eda;
pub mod geo;
pub mod investment;
pub mod market_trends;
pub mod prediction;

use crate::domain::{Column, ListingCollection};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("the listings file has no \"{0}\" column")]
    MissingColumn(Column),
}

pub(crate) fn require(collection: &ListingCollection, columns: &[Column]) -> Result<(), RenderError> {
    match collection.missing_column(columns) {
        Some(column) => Err(RenderError::MissingColumn(column)),
        None => Ok(()),
    }
}
