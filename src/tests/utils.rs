use crate::domain::{Listing, ListingCollection};
use crate::model::ModelHandle;
use crate::state::AppState;
use astra::Response;
use chrono::NaiveDate;
use std::io::Read;
use std::path::PathBuf;

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// A one-bedroom apartment in `csdname` posted on `date` (YYYY-MM-DD).
pub fn listing(csdname: &str, price: f64, date: &str) -> Listing {
    Listing {
        price,
        property_type: "Apartment".into(),
        bedrooms: 1,
        bathrooms: 1,
        size: 700.0,
        latitude: 43.65,
        longitude: -79.38,
        csdname: csdname.into(),
        date_posted: NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap_or_else(|e| panic!("bad test date {date}: {e}")),
    }
}

fn at(
    property_type: &str,
    csdname: &str,
    price: f64,
    (latitude, longitude): (f64, f64),
    date: &str,
) -> Listing {
    Listing {
        property_type: property_type.into(),
        latitude,
        longitude,
        ..listing(csdname, price, date)
    }
}

/// Twelve listings over four GTA municipalities and three months.
pub fn sample_collection() -> ListingCollection {
    ListingCollection::with_all_columns(vec![
        at("Condo", "Toronto", 4500.0, (43.6532, -79.3832), "2024-01-15"),
        at("House", "Oakville", 6200.0, (43.4675, -79.6877), "2024-01-20"),
        at("Apartment", "Toronto", 4100.0, (43.6629, -79.3957), "2024-01-28"),
        at("Townhouse", "Mississauga", 5100.0, (43.5890, -79.6441), "2024-02-02"),
        at("House", "Oakville", 7800.0, (43.4500, -79.7000), "2024-02-11"),
        at("Condo", "Hamilton", 4300.0, (43.2557, -79.8711), "2024-02-25"),
        at("Condo", "Toronto", 5600.0, (43.6450, -79.3800), "2024-03-03"),
        at("Apartment", "Mississauga", 4900.0, (43.5950, -79.6400), "2024-03-09"),
        at("Townhouse", "Hamilton", 4400.0, (43.2400, -79.8500), "2024-03-14"),
        at("House", "Toronto", 9100.0, (43.6800, -79.4100), "2024-03-18"),
        at("Apartment", "Oakville", 5200.0, (43.4420, -79.6650), "2024-03-22"),
        at("Condo", "Mississauga", 4700.0, (43.5800, -79.6300), "2024-03-30"),
    ])
}

/// App state over the sample listings and the fixture model.
pub fn test_state() -> AppState {
    AppState {
        collection: sample_collection(),
        model: ModelHandle::new(fixture("model.json")),
    }
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .expect("response body is utf-8");
    body
}
