use crate::charts::{Chart, LatLon, MapPoint, ScatterMap};
use crate::clustering::{cluster, Features, KMeansOptions};
use crate::domain::{Column, ListingCollection};
use crate::views::{require, RenderError};

pub const MAP_ZOOM: u8 = 10;
pub const MAP_STYLE: &str = "open-street-map";

fn center(points: &[Features]) -> LatLon {
    if points.is_empty() {
        return LatLon { lat: 0.0, lon: 0.0 };
    }
    let n = points.len() as f64;
    LatLon {
        lat: points.iter().map(|p| p[0]).sum::<f64>() / n,
        lon: points.iter().map(|p| p[1]).sum::<f64>() / n,
    }
}

/// Price clusters on a map. The title's "higher numbers = higher prices"
/// is a label reversal, not a guarantee; see `clustering::cluster`.
pub fn geographical_analysis(collection: &ListingCollection) -> Result<Vec<Chart>, RenderError> {
    require(
        collection,
        &[Column::Latitude, Column::Longitude, Column::Price, Column::Csdname],
    )?;

    let features: Vec<Features> = collection
        .listings()
        .iter()
        .map(|l| [l.latitude, l.longitude, l.price])
        .collect();
    let labels = cluster(&features, &KMeansOptions::default());

    let points = collection
        .listings()
        .iter()
        .zip(labels)
        .map(|(l, label)| MapPoint {
            lat: l.latitude,
            lon: l.longitude,
            size: l.price,
            color: label,
            hover: l.csdname.clone(),
        })
        .collect();

    Ok(vec![Chart::ScatterMap(ScatterMap {
        title: "Rental Prices Clustered by Price (Higher numbers = Higher Prices)".into(),
        map_style: MAP_STYLE.into(),
        zoom: MAP_ZOOM,
        center: center(&features),
        color_label: "Cluster".into(),
        points,
    })])
}
