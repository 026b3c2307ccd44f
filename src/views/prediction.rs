use crate::domain::prediction::{BATHROOMS_RANGE, BEDROOMS_RANGE, SIZE_RANGE};
use crate::domain::{ListingCollection, PredictionRequest, PropertyType};
use crate::model::PredictionError;
use std::collections::HashMap;

/// Everything the prediction form needs to draw its widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionForm {
    pub property_types: Vec<&'static str>,
    pub bedrooms: (u32, u32),
    pub bathrooms: (u32, u32),
    pub size: (u32, u32),
    pub locations: Vec<String>,
    /// Current widget values.
    pub values: PredictionRequest,
}

pub fn property_value_prediction(collection: &ListingCollection) -> PredictionForm {
    let locations: Vec<String> = collection
        .unique_locations()
        .into_iter()
        .map(String::from)
        .collect();

    let values = PredictionRequest {
        location: locations.first().cloned().unwrap_or_default(),
        ..PredictionRequest::default()
    };

    PredictionForm {
        property_types: PropertyType::ALL.iter().map(|t| t.as_str()).collect(),
        bedrooms: BEDROOMS_RANGE,
        bathrooms: BATHROOMS_RANGE,
        size: SIZE_RANGE,
        locations,
        values,
    }
}

fn field<'a>(form: &'a HashMap<String, String>, name: &'static str) -> Result<&'a str, PredictionError> {
    form.get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .ok_or(PredictionError::InvalidInput {
            field: name,
            value: String::new(),
        })
}

fn bounded(
    form: &HashMap<String, String>,
    name: &'static str,
    (min, max): (u32, u32),
) -> Result<u32, PredictionError> {
    let raw = field(form, name)?;
    let value: u32 = raw.parse().map_err(|_| PredictionError::InvalidInput {
        field: name,
        value: raw.to_string(),
    })?;
    if !(min..=max).contains(&value) {
        return Err(PredictionError::OutOfRange {
            field: name,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

/// Read a submitted form. Slider bounds are enforced here; category values
/// are passed through for the model to judge.
pub fn parse_request(form: &HashMap<String, String>) -> Result<PredictionRequest, PredictionError> {
    Ok(PredictionRequest {
        property_type: field(form, "property_type")?.to_string(),
        bedrooms: bounded(form, "bedrooms", BEDROOMS_RANGE)?,
        bathrooms: bounded(form, "bathrooms", BATHROOMS_RANGE)?,
        size: bounded(form, "size", SIZE_RANGE)?,
        location: field(form, "location")?.to_string(),
    })
}
