use crate::errors::ServerError;
use crate::model::ModelError;
use crate::pages::{self, Page};
use crate::responses::{asset_response, html_response, json_response, redirect_response, ResultResp};
use crate::state::AppState;
use crate::templates;
use crate::views::prediction::{parse_request, property_value_prediction};
use astra::Request;
use serde::Serialize;
use std::collections::HashMap;
use std::io::Read;

const MAIN_CSS: &str = include_str!("../static/main.css");
const CHARTS_JS: &str = include_str!("../static/charts.js");

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    tracing::debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => redirect_response(&Page::Dashboard.href()),
        ("GET", "/healthz") => json_response(
            200,
            &Health {
                status: "ok",
                listings: state.collection.len(),
                model_loaded: state.model.is_loaded(),
            },
        ),
        ("GET", "/static/main.css") => asset_response(MAIN_CSS, mime::TEXT_CSS_UTF_8.as_ref()),
        ("GET", "/static/charts.js") => {
            asset_response(CHARTS_JS, mime::APPLICATION_JAVASCRIPT_UTF_8.as_ref())
        }
        ("POST", "/predict") => predict(&mut req, state),
        ("GET", p) => {
            if let Some(slug) = p.strip_prefix("/page/") {
                let page = resolve_page(slug)?;
                html_response(pages::render(page, &state.collection))
            } else if let Some(slug) = p
                .strip_prefix("/api/pages/")
                .and_then(|rest| rest.strip_suffix("/charts"))
            {
                page_charts(resolve_page(slug)?, state)
            } else {
                Err(ServerError::NotFound(path.clone()))
            }
        }
        _ => Err(ServerError::NotFound(path.clone())),
    }
}

/// Unknown pages are a 404; they never fall back to the dashboard.
fn resolve_page(slug: &str) -> Result<Page, ServerError> {
    slug.parse::<Page>()
        .map_err(|e| ServerError::NotFound(e.to_string()))
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    listings: usize,
    model_loaded: bool,
}

#[derive(Serialize)]
struct ApiError {
    error: String,
}

fn page_charts(page: Page, state: &AppState) -> ResultResp {
    match pages::charts(page, &state.collection) {
        Ok(charts) => json_response(200, &charts),
        Err(err) => json_response(
            422,
            &ApiError {
                error: err.to_string(),
            },
        ),
    }
}

fn predict(req: &mut Request, state: &AppState) -> ResultResp {
    let is_htmx = req.headers().contains_key("hx-request");

    let mut body = String::new();
    req.body_mut()
        .reader()
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;
    let form = parse_form(&body);

    let parsed = parse_request(&form);
    let outcome = match &parsed {
        Ok(request) => state.model.predict(request),
        Err(err) => Err(ModelError::Predict(err.clone())),
    };
    match &outcome {
        Ok(price) => tracing::info!(price = price.value(), "prediction served"),
        Err(err) => tracing::warn!(error = %err, "prediction failed"),
    }

    if is_htmx {
        return html_response(templates::pages::prediction_result(&outcome));
    }

    let mut form_vm = property_value_prediction(&state.collection);
    if let Ok(request) = parsed {
        form_vm.values = request;
    }
    html_response(templates::pages::prediction_page(&form_vm, Some(&outcome)))
}

fn parse_form(body: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect()
}
