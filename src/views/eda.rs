use crate::charts::stats::{five_number_summary, group_in_order, histogram};
use crate::charts::{BoxPlot, Chart, Histogram};
use crate::domain::{Column, ListingCollection};
use crate::views::{require, RenderError};

pub const PRICE_BINS: usize = 20;

pub fn exploratory_data_analysis(collection: &ListingCollection) -> Result<Vec<Chart>, RenderError> {
    require(collection, &[Column::Price, Column::Type])?;

    let prices: Vec<f64> = collection.listings().iter().map(|l| l.price).collect();
    let price_distribution = Chart::Histogram(Histogram {
        title: "Distribution of Rental Prices".into(),
        x_label: "Price".into(),
        bins: histogram(&prices, PRICE_BINS),
    });

    let groups = group_in_order(
        collection
            .listings()
            .iter()
            .map(|l| (l.property_type.as_str(), l.price)),
    );
    let by_type = Chart::Box(BoxPlot {
        title: "Price Distribution by Property Type".into(),
        x_label: "Type".into(),
        y_label: "Price".into(),
        groups: groups
            .iter()
            .filter_map(|(name, values)| five_number_summary(name, values))
            .collect(),
    });

    Ok(vec![price_distribution, by_type])
}
