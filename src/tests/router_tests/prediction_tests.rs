use crate::model::ModelHandle;
use crate::router::handle;
use crate::state::AppState;
use crate::tests::utils::{body_string, sample_collection, test_state};
use astra::{Body, Request};

fn post_form(body: &str, htmx: bool) -> Request {
    let mut builder = http::Request::builder()
        .method("POST")
        .uri("/predict")
        .header("Content-Type", "application/x-www-form-urlencoded");
    if htmx {
        builder = builder.header("HX-Request", "true");
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn predict(state: &AppState, body: &str, htmx: bool) -> String {
    let resp = handle(post_form(body, htmx), state).unwrap();
    assert_eq!(resp.status(), 200);
    body_string(resp)
}

const DEFAULTS: &str = "property_type=Apartment&bedrooms=2&bathrooms=1&size=1000&location=Toronto";

#[test]
fn htmx_submit_returns_only_the_result_fragment() {
    let body = predict(&test_state(), DEFAULTS, true);
    assert!(!body.contains("<html"));
    // (4300 + 5600 + 4700) / 3
    assert!(body.contains("Predicted Rental Price: $4,866.67"), "{body}");
}

#[test]
fn plain_submit_redraws_the_form_with_the_submitted_values() {
    let body = predict(
        &test_state(),
        "property_type=House&bedrooms=3&bathrooms=2&size=1800&location=Oakville",
        false,
    );
    assert!(body.contains("<html"));
    assert!(body.contains("Predicted Rental Price: $"));
    assert!(body.contains(r#"<option value="House" selected>"#));
    assert!(body.contains(r#"<option value="Oakville" selected>"#));
}

#[test]
fn repeated_predictions_reuse_the_loaded_model() {
    let state = test_state();
    assert!(!state.model.is_loaded());
    let first = predict(&state, DEFAULTS, true);
    assert!(state.model.is_loaded());
    assert_eq!(predict(&state, DEFAULTS, true), first);
}

#[test]
fn unseen_category_is_reported_inline() {
    let body = predict(
        &test_state(),
        "property_type=Castle&bedrooms=2&bathrooms=1&size=1000&location=Toronto",
        true,
    );
    assert!(body.contains("inline-error"));
    assert!(body.contains("Prediction failed"));
    assert!(body.contains("Castle"));
    assert!(!body.contains("Predicted Rental Price"));
}

#[test]
fn out_of_range_slider_is_reported_inline() {
    let body = predict(
        &test_state(),
        "property_type=Condo&bedrooms=2&bathrooms=1&size=9000&location=Toronto",
        true,
    );
    assert!(body.contains("size must be between 300 and 5000, got 9000"));
}

#[test]
fn missing_model_is_reported_inline_and_pages_still_work() {
    let state = AppState {
        collection: sample_collection(),
        model: ModelHandle::new("/no/such/model.json"),
    };
    let body = predict(&state, DEFAULTS, true);
    assert!(body.contains("inline-error"));
    assert!(body.contains("could not be read"));
    assert!(!state.model.is_loaded());

    let req = http::Request::builder()
        .method("GET")
        .uri("/page/market-trends")
        .body(Body::empty())
        .unwrap();
    assert_eq!(handle(req, &state).unwrap().status(), 200);
}
