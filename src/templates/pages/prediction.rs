use crate::domain::PredictionResult;
use crate::model::ModelError;
use crate::pages::Page;
use crate::templates::components::inline_error;
use crate::templates::desktop_layout;
use crate::views::prediction::PredictionForm;
use maud::{html, Markup};

pub type PredictionOutcome = Result<PredictionResult, ModelError>;

fn slider(name: &str, label: &str, (min, max): (u32, u32), value: u32) -> Markup {
    html! {
        label for=(name) { (label) }
        div class="slider" {
            input type="range" id=(name) name=(name) min=(min) max=(max) step="1" value=(value)
                oninput="this.nextElementSibling.value = this.value";
            output for=(name) { (value) }
        }
    }
}

/// Inline result shown under the Predict button.
pub fn prediction_result(outcome: &PredictionOutcome) -> Markup {
    match outcome {
        Ok(price) => html! {
            div class="success" { "Predicted Rental Price: " (price) }
        },
        Err(err) => inline_error(&format!("Prediction failed: {err}")),
    }
}

pub fn prediction_page(form: &PredictionForm, outcome: Option<&PredictionOutcome>) -> Markup {
    let values = &form.values;
    desktop_layout(
        Page::PropertyValuePrediction,
        html! {
            p { "Enter the details of the property to predict its rental price:" }

            form class="prediction-form"
                method="post"
                action="/predict"
                hx-post="/predict"
                hx-target="#prediction-result"
                hx-swap="innerHTML"
            {
                label for="property_type" { "Type of Property" }
                select id="property_type" name="property_type" {
                    @for t in &form.property_types {
                        option value=(t) selected[*t == values.property_type] { (t) }
                    }
                }

                (slider("bedrooms", "Number of Bedrooms", form.bedrooms, values.bedrooms))
                (slider("bathrooms", "Number of Bathrooms", form.bathrooms, values.bathrooms))
                (slider("size", "Size (sqft)", form.size, values.size))

                label for="location" { "Location" }
                select id="location" name="location" {
                    @for loc in &form.locations {
                        option value=(loc) selected[*loc == values.location] { (loc) }
                    }
                }

                button type="submit" class="primary" { "Predict" }
            }

            div id="prediction-result" {
                @if let Some(outcome) = outcome {
                    (prediction_result(outcome))
                }
            }
        },
    )
}
