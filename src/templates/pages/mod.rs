pub mod charts;
pub mod dashboard;
pub mod prediction;

pub use charts::{charts_page, render_error_page};
pub use dashboard::dashboard_page;
pub use prediction::{prediction_page, prediction_result, PredictionOutcome};
