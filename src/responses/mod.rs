pub mod html;
pub mod json;

pub use crate::errors::ResultResp;

// Normal HTML response
pub use html::{asset_response, html_response, redirect_response};
pub use json::json_response;
