//! Regression Models

use crate::artifact::load_json;
use crate::InferenceError;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Pre-trained regressor producing one value per input row
pub trait RegressionModel: Send + Sync {
    /// Number of input columns
    fn n_features(&self) -> usize;

    /// Predict one value per row of an already-scaled matrix
    fn predict(&self, features: &Array2<f64>) -> Result<Array1<f64>, InferenceError>;
}

/// On-disk form of a fitted linear regression
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegressionArtifact {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

/// Ordinary least squares model: `X · coefficients + intercept`
#[derive(Debug, Clone)]
pub struct LinearRegression {
    coefficients: Array1<f64>,
    intercept: f64,
}

impl LinearRegression {
    /// Create a model from fitted parameters
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients: Array1::from(coefficients),
            intercept,
        }
    }

    /// Load a model artifact from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InferenceError> {
        let artifact: LinearRegressionArtifact = load_json(path)?;
        if !artifact.intercept.is_finite() || artifact.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(InferenceError::InferenceFailed(
                "model parameters contain non-finite values".to_string(),
            ));
        }

        let model = Self::new(artifact.coefficients, artifact.intercept);
        info!("Linear regression ready: {} features", model.n_features());
        Ok(model)
    }

    /// Fitted intercept
    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl RegressionModel for LinearRegression {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict(&self, features: &Array2<f64>) -> Result<Array1<f64>, InferenceError> {
        if features.ncols() != self.n_features() {
            return Err(InferenceError::InvalidInputShape {
                expected: format!("(n, {})", self.n_features()),
                actual: format!("{:?}", features.dim()),
            });
        }

        Ok(features.dot(&self.coefficients) + self.intercept)
    }
}
