//! Declarative chart descriptions.
//!
//! Views build these from the listings; the browser draws them with
//! Plotly (see `static/charts.js`). Every aggregate is computed here so
//! the client only maps fields onto traces.

pub mod stats;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Chart {
    Histogram(Histogram),
    Box(BoxPlot),
    Line(SeriesChart),
    Bar(SeriesChart),
    ScatterMap(ScatterMap),
}

impl Chart {
    pub fn title(&self) -> &str {
        match self {
            Chart::Histogram(c) => &c.title,
            Chart::Box(c) => &c.title,
            Chart::Line(c) | Chart::Bar(c) => &c.title,
            Chart::ScatterMap(c) => &c.title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub title: String,
    pub x_label: String,
    pub bins: Vec<Bin>,
}

/// Half-open `[start, end)`, except the last bin which also holds `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxPlot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub groups: Vec<BoxGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxGroup {
    pub name: String,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Shared by line and bar charts: one y value per category on x.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub x: String,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterMap {
    pub title: String,
    pub map_style: String,
    pub zoom: u8,
    pub center: LatLon,
    pub color_label: String,
    pub points: Vec<MapPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub lat: f64,
    pub lon: f64,
    /// Marker size, the listing price.
    pub size: f64,
    /// Marker color, the cluster label.
    pub color: usize,
    pub hover: String,
}
