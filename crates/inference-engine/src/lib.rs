//! Charges Inference Engine
//!
//! Loads the pre-trained scaler and regression model once and runs the
//! encode -> align -> scale -> predict pipeline for a single input.

mod artifact;
mod model;
mod pipeline;
mod scaler;

pub use artifact::load_json;
pub use model::{LinearRegression, LinearRegressionArtifact, RegressionModel};
pub use pipeline::{PredictionOutcome, PredictionPipeline};
pub use scaler::{Scaler, ScalerArtifact, StandardScaler};

use thiserror::Error;

/// Errors during artifact loading or inference
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Failed to load artifact {path}: {reason}")]
    ArtifactLoad { path: String, reason: String },
    #[error("Invalid input shape: expected {expected}, got {actual}")]
    InvalidInputShape { expected: String, actual: String },
    #[error("Artifact width mismatch: scaler expects {scaler} features, model expects {model}")]
    SchemaMismatch { scaler: usize, model: usize },
    #[error("Scaler records no feature names and has {actual} columns, training schema has {expected}")]
    UnnamedSchemaWidth { expected: usize, actual: usize },
    #[error("Model returned no prediction")]
    EmptyPrediction,
    #[error("Inference failed: {0}")]
    InferenceFailed(String),
}

/// The single user-facing failure of a prediction request
#[derive(Debug, Error)]
#[error("Error during prediction: {source}")]
pub struct PredictionFailure {
    #[from]
    source: InferenceError,
}

impl PredictionFailure {
    /// Underlying cause
    pub fn cause(&self) -> &InferenceError {
        &self.source
    }
}
