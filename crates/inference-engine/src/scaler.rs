//! Feature Scaling

use crate::artifact::load_json;
use crate::InferenceError;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Scales a feature matrix into the space the model was fitted in
pub trait Scaler: Send + Sync {
    /// Number of input columns
    fn n_features(&self) -> usize;

    /// Column names the scaler was fitted on, when the artifact records them
    fn feature_names(&self) -> Option<&[String]>;

    /// Transform a matrix; output has the same shape as the input
    fn transform(&self, features: &Array2<f64>) -> Result<Array2<f64>, InferenceError>;
}

/// On-disk form of a fitted standard scaler
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerArtifact {
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Zero-mean, unit-variance scaler: `(x - mean) / scale`
#[derive(Debug, Clone)]
pub struct StandardScaler {
    feature_names: Option<Vec<String>>,
    mean: Array1<f64>,
    scale: Array1<f64>,
}

impl StandardScaler {
    /// Create a scaler from fitted statistics.
    ///
    /// Zero scales are replaced with 1 so constant columns pass through
    /// centred but unscaled.
    pub fn new(
        mean: Vec<f64>,
        scale: Vec<f64>,
        feature_names: Option<Vec<String>>,
    ) -> Result<Self, InferenceError> {
        if mean.len() != scale.len() {
            return Err(InferenceError::InvalidInputShape {
                expected: format!("{} scale values", mean.len()),
                actual: scale.len().to_string(),
            });
        }
        if let Some(names) = &feature_names {
            if names.len() != mean.len() {
                return Err(InferenceError::InvalidInputShape {
                    expected: format!("{} feature names", mean.len()),
                    actual: names.len().to_string(),
                });
            }
        }

        let scale = scale
            .into_iter()
            .map(|s| if s == 0.0 { 1.0 } else { s })
            .collect::<Vec<_>>();

        Ok(Self {
            feature_names,
            mean: Array1::from(mean),
            scale: Array1::from(scale),
        })
    }

    /// Build from a deserialized artifact
    pub fn from_artifact(artifact: ScalerArtifact) -> Result<Self, InferenceError> {
        Self::new(artifact.mean, artifact.scale, artifact.feature_names)
    }

    /// Load a scaler artifact from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InferenceError> {
        let scaler = Self::from_artifact(load_json(path)?)?;
        info!("Standard scaler ready: {} features", scaler.n_features());
        Ok(scaler)
    }
}

impl Scaler for StandardScaler {
    fn n_features(&self) -> usize {
        self.mean.len()
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    fn transform(&self, features: &Array2<f64>) -> Result<Array2<f64>, InferenceError> {
        if features.ncols() != self.n_features() {
            return Err(InferenceError::InvalidInputShape {
                expected: format!("(n, {})", self.n_features()),
                actual: format!("{:?}", features.dim()),
            });
        }

        Ok((features - &self.mean) / &self.scale)
    }
}
