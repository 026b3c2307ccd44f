// model/forest.rs
use crate::domain::{PredictionRequest, PredictionResult};
use crate::model::{ModelLoadError, PredictionError, Regressor};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const KIND: &str = "random_forest_regressor";

/// Encoded columns ahead of the one-hot blocks: bedrooms, bathrooms, size.
const NUMERIC_FEATURES: usize = 3;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// `x[feature] <= threshold` goes left.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

/// Serialized random-forest regressor.
///
/// The feature vector is `[bedrooms, bathrooms, size]` followed by a
/// one-hot block for `property_types` and another for `locations`, in the
/// order the artifact lists them.
#[derive(Debug, Clone, Deserialize)]
pub struct RandomForest {
    pub kind: String,
    pub property_types: Vec<String>,
    pub locations: Vec<String>,
    pub trees: Vec<Tree>,
}

impl RandomForest {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelLoadError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| ModelLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_slice(&bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, ModelLoadError> {
        let forest: RandomForest = serde_json::from_slice(bytes)?;
        forest.validate()?;
        Ok(forest)
    }

    fn width(&self) -> usize {
        NUMERIC_FEATURES + self.property_types.len() + self.locations.len()
    }

    /// Children must point forward so traversal always terminates.
    fn validate(&self) -> Result<(), ModelLoadError> {
        let incompatible = |msg: String| Err(ModelLoadError::Incompatible(msg));

        if self.kind != KIND {
            return incompatible(format!("expected {KIND}, found {:?}", self.kind));
        }
        if self.trees.is_empty() {
            return incompatible("forest has no trees".into());
        }

        let width = self.width();
        for (t, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return incompatible(format!("tree {t} has no nodes"));
            }
            for (i, node) in tree.nodes.iter().enumerate() {
                match *node {
                    Node::Split {
                        feature,
                        threshold,
                        left,
                        right,
                    } => {
                        if feature >= width {
                            return incompatible(format!(
                                "tree {t} node {i}: feature {feature} outside {width} inputs"
                            ));
                        }
                        if !threshold.is_finite() {
                            return incompatible(format!("tree {t} node {i}: bad threshold"));
                        }
                        for child in [left, right] {
                            if child <= i || child >= tree.nodes.len() {
                                return incompatible(format!(
                                    "tree {t} node {i}: child {child} out of order"
                                ));
                            }
                        }
                    }
                    Node::Leaf { value } if !value.is_finite() => {
                        return incompatible(format!("tree {t} node {i}: non-finite leaf"));
                    }
                    Node::Leaf { .. } => {}
                }
            }
        }
        Ok(())
    }

    fn one_hot(
        domain: &[String],
        field: &'static str,
        value: &str,
    ) -> Result<usize, PredictionError> {
        domain
            .iter()
            .position(|c| c == value)
            .ok_or_else(|| PredictionError::UnknownCategory {
                field,
                value: value.to_string(),
            })
    }

    pub fn encode(&self, request: &PredictionRequest) -> Result<Vec<f64>, PredictionError> {
        let t = Self::one_hot(&self.property_types, "property type", &request.property_type)?;
        let l = Self::one_hot(&self.locations, "location", &request.location)?;

        let mut x = vec![0.0; self.width()];
        x[0] = request.bedrooms as f64;
        x[1] = request.bathrooms as f64;
        x[2] = request.size as f64;
        x[NUMERIC_FEATURES + t] = 1.0;
        x[NUMERIC_FEATURES + self.property_types.len() + l] = 1.0;
        Ok(x)
    }
}

impl Tree {
    fn predict(&self, x: &[f64]) -> f64 {
        let mut i = 0;
        loop {
            match self.nodes[i] {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => i = if x[feature] <= threshold { left } else { right },
                Node::Leaf { value } => return value,
            }
        }
    }
}

impl Regressor for RandomForest {
    fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, PredictionError> {
        let x = self.encode(request)?;
        let sum: f64 = self.trees.iter().map(|t| t.predict(&x)).sum();
        let mean = sum / self.trees.len() as f64;
        PredictionResult::new(mean).ok_or(PredictionError::InvalidOutput(mean))
    }

    fn name(&self) -> &str {
        &self.kind
    }
}
