use crate::charts::Chart;
use maud::{html, Markup};

pub mod error;

pub use error::html_error_response;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Placeholder `div` that `charts.js` fills with a Plotly figure.
pub fn chart(id: &str, chart: &Chart) -> Markup {
    let spec = serde_json::to_string(chart).unwrap_or_else(|_| "null".to_string());
    html! {
        figure class="chart" {
            figcaption { (chart.title()) }
            div id=(id) class="chart-canvas" data-spec=(spec) {}
        }
    }
}

/// Error shown in place of a widget, leaving the rest of the page usable.
pub fn inline_error(message: &str) -> Markup {
    html! {
        div class="inline-error" role="alert" { (message) }
    }
}
