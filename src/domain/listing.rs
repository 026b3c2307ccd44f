use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;
use std::fmt;

/// Source columns the dashboard knows about, keyed by their CSV header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    Price,
    Type,
    Bedrooms,
    Bathrooms,
    Size,
    Csdname,
    Latitude,
    Longitude,
    DatePosted,
}

impl Column {
    pub const ALL: [Column; 9] = [
        Column::Price,
        Column::Type,
        Column::Bedrooms,
        Column::Bathrooms,
        Column::Size,
        Column::Csdname,
        Column::Latitude,
        Column::Longitude,
        Column::DatePosted,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Price => "Price",
            Column::Type => "Type",
            Column::Bedrooms => "Bedrooms",
            Column::Bathrooms => "Bathrooms",
            Column::Size => "Size",
            Column::Csdname => "CSDNAME",
            Column::Latitude => "Latitude",
            Column::Longitude => "Longitude",
            Column::DatePosted => "Date Posted",
        }
    }

    pub fn from_header(header: &str) -> Option<Column> {
        Column::ALL.into_iter().find(|c| c.header() == header)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// One rental listing. Fields whose column was absent in the source file
/// hold their default value; check `ListingCollection::has_column` first.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub price: f64,
    pub property_type: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub size: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// Census subdivision name.
    pub csdname: String,
    pub date_posted: NaiveDate,
}

impl Listing {
    pub fn year(&self) -> i32 {
        self.date_posted.year()
    }

    pub fn month(&self) -> u32 {
        self.date_posted.month()
    }

    pub fn day(&self) -> u32 {
        self.date_posted.day()
    }

    /// `YYYY-MM`, sorts chronologically as a string.
    pub fn year_month(&self) -> String {
        format!("{:04}-{:02}", self.year(), self.month())
    }
}

/// All listings, loaded once and shared read-only by every page.
#[derive(Debug, Clone, Default)]
pub struct ListingCollection {
    listings: Vec<Listing>,
    columns: BTreeSet<Column>,
}

impl ListingCollection {
    pub fn new(listings: Vec<Listing>, columns: impl IntoIterator<Item = Column>) -> Self {
        Self {
            listings,
            columns: columns.into_iter().collect(),
        }
    }

    /// A collection carrying every known column.
    #[cfg(test)]
    pub fn with_all_columns(listings: Vec<Listing>) -> Self {
        Self::new(listings, Column::ALL)
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn has_column(&self, column: Column) -> bool {
        self.columns.contains(&column)
    }

    /// First required column that is not present, if any.
    pub fn missing_column(&self, required: &[Column]) -> Option<Column> {
        required.iter().copied().find(|c| !self.has_column(*c))
    }

    /// Distinct locations in first-appearance order.
    pub fn unique_locations(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.listings
            .iter()
            .map(|l| l.csdname.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(csdname: &str, date: (i32, u32, u32)) -> Listing {
        Listing {
            price: 4500.0,
            property_type: "Condo".into(),
            bedrooms: 2,
            bathrooms: 1,
            size: 900.0,
            latitude: 43.65,
            longitude: -79.38,
            csdname: csdname.into(),
            date_posted: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        }
    }

    #[test]
    fn calendar_parts_follow_posting_date() {
        let l = listing("Toronto", (2024, 3, 7));
        assert_eq!((l.year(), l.month(), l.day()), (2024, 3, 7));
        assert_eq!(l.year_month(), "2024-03");
    }

    #[test]
    fn unique_locations_keep_first_appearance_order() {
        let c = ListingCollection::with_all_columns(vec![
            listing("Toronto", (2024, 1, 1)),
            listing("Oakville", (2024, 1, 2)),
            listing("Toronto", (2024, 1, 3)),
            listing("Mississauga", (2024, 1, 4)),
        ]);
        assert_eq!(c.unique_locations(), vec!["Toronto", "Oakville", "Mississauga"]);
    }

    #[test]
    fn missing_column_reports_first_absent() {
        let c = ListingCollection::new(vec![], [Column::Price, Column::DatePosted]);
        assert_eq!(c.missing_column(&[Column::Price]), None);
        assert_eq!(
            c.missing_column(&[Column::Price, Column::Type, Column::Csdname]),
            Some(Column::Type)
        );
    }

    #[test]
    fn header_lookup_round_trips_known_columns() {
        assert_eq!(Column::from_header("CSDNAME"), Some(Column::Csdname));
        assert_eq!(Column::from_header("Date Posted"), Some(Column::DatePosted));
        assert_eq!(Column::from_header("Parking"), None);
    }
}
