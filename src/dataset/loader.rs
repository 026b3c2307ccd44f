// dataset/loader.rs
use crate::dataset::DataLoadError;
use crate::domain::{Column, Listing, ListingCollection};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::StringRecord;
use encoding_rs::WINDOWS_1252;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Columns without which a row cannot be represented at all.
const REQUIRED: [Column; 1] = [Column::DatePosted];

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Read the listings file. Called once per process, before the server binds.
pub fn load(path: impl AsRef<Path>) -> Result<ListingCollection, DataLoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| DataLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let collection = parse_listings(&bytes)?;

    tracing::info!(
        rows = collection.len(),
        path = %path.display(),
        "listings loaded"
    );
    Ok(collection)
}

/// Parse raw file bytes. The export is Latin-1, never UTF-8, so bytes are
/// decoded as Windows-1252 with no BOM sniffing.
pub fn parse_listings(bytes: &[u8]) -> Result<ListingCollection, DataLoadError> {
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut index = BTreeMap::new();
    for (i, header) in headers.iter().enumerate() {
        if let Some(column) = Column::from_header(header) {
            index.entry(column).or_insert(i);
        }
    }

    if let Some(missing) = REQUIRED.into_iter().find(|c| !index.contains_key(c)) {
        return Err(DataLoadError::MissingColumn(missing));
    }

    let mut listings = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row = Row {
            line: record.position().map(|p| p.line()).unwrap_or(0),
            record: &record,
            index: &index,
        };
        listings.push(row.listing()?);
    }

    Ok(ListingCollection::new(listings, index.into_keys()))
}

struct Row<'a> {
    line: u64,
    record: &'a StringRecord,
    index: &'a BTreeMap<Column, usize>,
}

impl Row<'_> {
    fn listing(&self) -> Result<Listing, DataLoadError> {
        Ok(Listing {
            price: self.float(Column::Price)?,
            property_type: self.text(Column::Type),
            bedrooms: self.count(Column::Bedrooms)?,
            bathrooms: self.count(Column::Bathrooms)?,
            size: self.float(Column::Size)?,
            latitude: self.float(Column::Latitude)?,
            longitude: self.float(Column::Longitude)?,
            csdname: self.text(Column::Csdname),
            date_posted: self.date(Column::DatePosted)?,
        })
    }

    fn raw(&self, column: Column) -> Option<&str> {
        self.index.get(&column).and_then(|&i| self.record.get(i))
    }

    fn invalid(&self, column: Column, value: &str) -> DataLoadError {
        DataLoadError::InvalidValue {
            line: self.line,
            column,
            value: value.to_string(),
        }
    }

    fn text(&self, column: Column) -> String {
        self.raw(column).unwrap_or_default().to_string()
    }

    fn float(&self, column: Column) -> Result<f64, DataLoadError> {
        let Some(raw) = self.raw(column) else {
            return Ok(0.0);
        };
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| self.invalid(column, raw))
    }

    fn count(&self, column: Column) -> Result<u32, DataLoadError> {
        let Some(raw) = self.raw(column) else {
            return Ok(0);
        };
        parse_count(raw).ok_or_else(|| self.invalid(column, raw))
    }

    fn date(&self, column: Column) -> Result<NaiveDate, DataLoadError> {
        let raw = self.raw(column).unwrap_or_default();
        parse_date(raw).ok_or_else(|| self.invalid(column, raw))
    }
}

/// Accepts `"2"` as well as `"2.0"`, the way a float column is written out.
fn parse_count(raw: &str) -> Option<u32> {
    if let Ok(n) = raw.parse::<u32>() {
        return Some(n);
    }
    let f = raw.parse::<f64>().ok()?;
    (f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64).then_some(f as u32)
}

pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%m/%d/%Y").ok()
}
