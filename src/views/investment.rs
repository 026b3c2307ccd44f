use crate::charts::stats::{mean_by_key, top_n};
use crate::charts::{Chart, Point, SeriesChart};
use crate::domain::{Column, Listing, ListingCollection};
use crate::views::{require, RenderError};

pub const TOP_REGIONS: usize = 10;

/// Highest mean price per location, descending. Locations are grouped in
/// name order first, so equal means come out alphabetically.
pub fn top_regions(listings: &[Listing], n: usize) -> Vec<Point> {
    let means = mean_by_key(listings.iter().map(|l| (l.csdname.as_str(), l.price)));
    top_n(means, n)
}

pub fn investment_opportunities(collection: &ListingCollection) -> Result<Vec<Chart>, RenderError> {
    require(collection, &[Column::Price, Column::Csdname])?;

    Ok(vec![Chart::Bar(SeriesChart {
        title: "Top 10 Most Expensive Regions".into(),
        x_label: "CSDNAME".into(),
        y_label: "Price".into(),
        points: top_regions(collection.listings(), TOP_REGIONS),
    })])
}
