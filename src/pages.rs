// pages.rs
use crate::charts::Chart;
use crate::domain::ListingCollection;
use crate::templates;
use crate::views::{self, RenderError};
use maud::Markup;
use std::str::FromStr;
use thiserror::Error;

/// The six dashboard pages, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Eda,
    MarketTrends,
    PropertyValuePrediction,
    InvestmentOpportunities,
    GeographicalAnalysis,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page {0:?}")]
pub struct UnknownPage(pub String);

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Dashboard,
        Page::Eda,
        Page::MarketTrends,
        Page::PropertyValuePrediction,
        Page::InvestmentOpportunities,
        Page::GeographicalAnalysis,
    ];

    /// Name shown in the page selector.
    pub fn label(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Eda => "EDA",
            Page::MarketTrends => "Market Trends",
            Page::PropertyValuePrediction => "Property Value Prediction",
            Page::InvestmentOpportunities => "Investment Opportunities",
            Page::GeographicalAnalysis => "Geographical Analysis",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Eda => "eda",
            Page::MarketTrends => "market-trends",
            Page::PropertyValuePrediction => "property-value-prediction",
            Page::InvestmentOpportunities => "investment-opportunities",
            Page::GeographicalAnalysis => "geographical-analysis",
        }
    }

    /// Page heading. The dashboard has none, it opens with its headline.
    pub fn heading(self) -> Option<&'static str> {
        match self {
            Page::Dashboard => None,
            Page::Eda => Some("Exploratory Data Analysis"),
            other => Some(other.label()),
        }
    }

    pub fn href(self) -> String {
        format!("/page/{}", self.slug())
    }
}

impl FromStr for Page {
    type Err = UnknownPage;

    /// Accepts a selector label or a URL slug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|p| p.slug() == s || p.label() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

/// Chart specs of a page. Pages without charts give an empty list.
pub fn charts(page: Page, collection: &ListingCollection) -> Result<Vec<Chart>, RenderError> {
    match page {
        Page::Dashboard | Page::PropertyValuePrediction => Ok(Vec::new()),
        Page::Eda => views::eda::exploratory_data_analysis(collection),
        Page::MarketTrends => views::market_trends::market_trends(collection),
        Page::InvestmentOpportunities => views::investment::investment_opportunities(collection),
        Page::GeographicalAnalysis => views::geo::geographical_analysis(collection),
    }
}

/// Page body for `page`. The collection is passed through untouched.
pub fn render(page: Page, collection: &ListingCollection) -> Markup {
    match page {
        Page::Dashboard => templates::pages::dashboard_page(&views::dashboard::dashboard()),
        Page::PropertyValuePrediction => templates::pages::prediction_page(
            &views::prediction::property_value_prediction(collection),
            None,
        ),
        Page::Eda
        | Page::MarketTrends
        | Page::InvestmentOpportunities
        | Page::GeographicalAnalysis => match charts(page, collection) {
            Ok(charts) => templates::pages::charts_page(page, &charts),
            Err(err) => {
                tracing::warn!(page = page.label(), error = %err, "view failed");
                templates::pages::render_error_page(page, &err)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_slugs_both_resolve() {
        for page in Page::ALL {
            assert_eq!(page.label().parse::<Page>(), Ok(page));
            assert_eq!(page.slug().parse::<Page>(), Ok(page));
        }
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert_eq!(
            "Settings".parse::<Page>(),
            Err(UnknownPage("Settings".into()))
        );
        assert!("".parse::<Page>().is_err());
        assert!("DASHBOARD".parse::<Page>().is_err());
    }

    #[test]
    fn only_chart_pages_have_charts() {
        let collection = crate::tests::utils::sample_collection();
        let counts: Vec<usize> = Page::ALL
            .into_iter()
            .map(|p| charts(p, &collection).unwrap().len())
            .collect();
        assert_eq!(counts, vec![0, 2, 1, 0, 1, 1]);
    }
}
