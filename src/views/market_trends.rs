use crate::charts::stats::mean_by_key;
use crate::charts::{Chart, Point, SeriesChart};
use crate::domain::{Column, Listing, ListingCollection};
use crate::views::{require, RenderError};

/// Mean price per `YYYY-MM`, oldest month first.
pub fn monthly_average(listings: &[Listing]) -> Vec<Point> {
    mean_by_key(listings.iter().map(|l| (l.year_month(), l.price)))
}

pub fn market_trends(collection: &ListingCollection) -> Result<Vec<Chart>, RenderError> {
    require(collection, &[Column::Price, Column::DatePosted])?;

    Ok(vec![Chart::Line(SeriesChart {
        title: "Average Rental Price Over Time".into(),
        x_label: "YearMonth".into(),
        y_label: "Price".into(),
        points: monthly_average(collection.listings()),
    })])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::utils::listing;

    #[test]
    fn same_month_prices_are_averaged() {
        let listings = vec![
            listing("Toronto", 100.0, "2024-01-03"),
            listing("Oakville", 300.0, "2024-01-28"),
        ];
        let points = monthly_average(&listings);
        assert_eq!(
            points,
            vec![Point {
                x: "2024-01".into(),
                y: 200.0
            }]
        );
    }

    #[test]
    fn months_are_chronological_across_years() {
        let listings = vec![
            listing("Toronto", 5000.0, "2024-02-01"),
            listing("Toronto", 4000.0, "2023-11-15"),
            listing("Toronto", 4500.0, "2024-01-10"),
            listing("Toronto", 4700.0, "2023-12-31"),
        ];
        let keys: Vec<_> = monthly_average(&listings).into_iter().map(|p| p.x).collect();
        assert_eq!(keys, vec!["2023-11", "2023-12", "2024-01", "2024-02"]);
    }

    #[test]
    fn computing_trends_leaves_the_collection_untouched() {
        let collection = crate::tests::utils::sample_collection();
        let before = collection.listings().to_vec();
        let first = market_trends(&collection).unwrap();
        let second = market_trends(&collection).unwrap();
        assert_eq!(first, second);
        assert_eq!(collection.listings(), before.as_slice());
    }
}
