use std::fmt;
use std::str::FromStr;

/// Property types offered by the prediction form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    Apartment,
    House,
    Condo,
    Townhouse,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Condo,
        PropertyType::Townhouse,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::House => "House",
            PropertyType::Condo => "Condo",
            PropertyType::Townhouse => "Townhouse",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Slider bounds of the prediction form, inclusive.
pub const BEDROOMS_RANGE: (u32, u32) = (1, 5);
pub const BATHROOMS_RANGE: (u32, u32) = (1, 3);
pub const SIZE_RANGE: (u32, u32) = (300, 5000);

/// Exactly the attributes the model was fitted on.
///
/// `property_type` is a free string rather than `PropertyType` so that a
/// value outside the form's choices still reaches the model, which owns the
/// category domain and rejects it there.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRequest {
    pub property_type: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub size: u32,
    pub location: String,
}

impl Default for PredictionRequest {
    fn default() -> Self {
        Self {
            property_type: PropertyType::Apartment.to_string(),
            bedrooms: 2,
            bathrooms: 1,
            size: 1000,
            location: String::new(),
        }
    }
}

/// A predicted monthly rent. Always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult(f64);

impl PredictionResult {
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value >= 0.0).then_some(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for PredictionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_currency(self.0))
    }
}

/// `$1,234.56`
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{frac:02}")
}
