use crate::domain::{Column, ListingCollection};
use crate::model::ModelHandle;
use crate::pages::Page;
use crate::router::handle;
use crate::state::AppState;
use crate::tests::utils::{body_string, fixture, listing, test_state};
use astra::{Body, Request};

fn get(path: &str) -> Request {
    http::Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

fn page_body(state: &AppState, page: Page) -> String {
    let resp = handle(get(&page.href()), state).unwrap();
    assert_eq!(resp.status(), 200, "{page:?}");
    body_string(resp)
}

const CHART_TITLES: [&str; 5] = [
    "Distribution of Rental Prices",
    "Price Distribution by Property Type",
    "Average Rental Price Over Time",
    "Top 10 Most Expensive Regions",
    "Rental Prices Clustered by Price",
];

fn titles_on(body: &str) -> Vec<&'static str> {
    CHART_TITLES
        .into_iter()
        .filter(|t| body.contains(t))
        .collect()
}

#[test]
fn root_redirects_to_dashboard() {
    let resp = handle(get("/"), &test_state()).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(resp.headers()["Location"], "/page/dashboard");
}

#[test]
fn every_page_renders_only_its_own_view() {
    let state = test_state();

    let body = page_body(&state, Page::Dashboard);
    assert!(body.contains("Agba Baller"));
    assert!(titles_on(&body).is_empty());

    let body = page_body(&state, Page::Eda);
    assert!(body.contains("<h1>Exploratory Data Analysis</h1>"));
    assert_eq!(titles_on(&body), CHART_TITLES[..2].to_vec());

    let body = page_body(&state, Page::MarketTrends);
    assert_eq!(titles_on(&body), vec!["Average Rental Price Over Time"]);

    let body = page_body(&state, Page::InvestmentOpportunities);
    assert_eq!(titles_on(&body), vec!["Top 10 Most Expensive Regions"]);

    let body = page_body(&state, Page::GeographicalAnalysis);
    assert_eq!(titles_on(&body), vec!["Rental Prices Clustered by Price"]);

    let body = page_body(&state, Page::PropertyValuePrediction);
    assert!(body.contains("Type of Property"));
    assert!(titles_on(&body).is_empty());
    assert!(!body.contains("Agba Baller"));
}

#[test]
fn page_root_carries_its_slug() {
    let body = page_body(&test_state(), Page::MarketTrends);
    assert!(body.contains(r#"data-page="market-trends""#));
    assert!(body.contains("<h1>Market Trends</h1>"));
}

#[test]
fn sidebar_marks_the_active_page() {
    let body = page_body(&test_state(), Page::InvestmentOpportunities);
    assert!(body.contains("Select a Page"));
    for page in Page::ALL {
        assert!(body.contains(&page.href()), "{page:?} missing from sidebar");
    }
    assert_eq!(body.matches(r#"aria-current="page""#).count(), 1);
}

#[test]
fn unknown_page_is_not_found() {
    let err = handle(get("/page/settings"), &test_state()).err().unwrap();
    assert_eq!(err.status(), 404);

    let err = handle(get("/nowhere"), &test_state()).err().unwrap();
    assert_eq!(err.status(), 404);
}

#[test]
fn chart_specs_are_served_as_json() {
    let resp = handle(get("/api/pages/eda/charts"), &test_state()).unwrap();
    assert_eq!(resp.status(), 200);
    let charts: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    let kinds: Vec<_> = charts
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["kind"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(kinds, vec!["histogram", "box"]);

    let resp = handle(get("/api/pages/dashboard/charts"), &test_state()).unwrap();
    assert_eq!(body_string(resp), "[]");
}

#[test]
fn missing_column_is_shown_inline() {
    let state = AppState {
        collection: ListingCollection::new(
            vec![listing("Toronto", 4500.0, "2024-01-01")],
            [Column::Price, Column::DatePosted, Column::Csdname],
        ),
        model: ModelHandle::new(fixture("model.json")),
    };

    let body = page_body(&state, Page::Eda);
    assert!(body.contains("inline-error"));
    assert!(body.contains("no &quot;Type&quot; column"));
    assert!(titles_on(&body).is_empty());

    // Views that have their columns still draw.
    let body = page_body(&state, Page::InvestmentOpportunities);
    assert!(!body.contains("inline-error"));

    let resp = handle(get("/api/pages/geographical-analysis/charts"), &state).unwrap();
    assert_eq!(resp.status(), 422);
    assert!(body_string(resp).contains("Latitude"));
}

#[test]
fn static_assets_are_served() {
    let resp = handle(get("/static/charts.js"), &test_state()).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp.headers()["Content-Type"]
        .to_str()
        .unwrap()
        .contains("javascript"));

    let resp = handle(get("/healthz"), &test_state()).unwrap();
    let health: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["listings"], 12);
    assert_eq!(health["model_loaded"], false);
}
