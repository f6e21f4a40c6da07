//! Prediction Pipeline

use crate::model::{LinearRegression, RegressionModel};
use crate::scaler::{Scaler, StandardScaler};
use crate::{InferenceError, PredictionFailure};
use feature_engine::{
    EncodedFeatureVector, FeatureEncoder, FeatureSchema, RawInput, FEATURE_DIMENSION,
};
use ndarray::Array2;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, warn};

/// Result of a successful prediction
#[derive(Debug, Clone, Serialize)]
pub struct PredictionOutcome {
    /// Predicted charges
    pub charges: f64,
    /// The encoded record that was fed to the scaler
    pub processed_input: EncodedFeatureVector,
    /// Pipeline latency in microseconds
    pub latency_us: u64,
}

/// Encode -> align -> scale -> predict, over artifacts loaded once.
///
/// Immutable after construction; share it behind an `Arc`.
pub struct PredictionPipeline {
    encoder: FeatureEncoder,
    schema: FeatureSchema,
    scaler: Box<dyn Scaler>,
    model: Box<dyn RegressionModel>,
}

impl PredictionPipeline {
    /// Assemble a pipeline from loaded artifacts.
    ///
    /// Rows are aligned to the scaler's recorded column names when it has
    /// them, otherwise to the training schema, which the scaler must then
    /// match in width.
    pub fn new(
        scaler: Box<dyn Scaler>,
        model: Box<dyn RegressionModel>,
    ) -> Result<Self, InferenceError> {
        if scaler.n_features() != model.n_features() {
            return Err(InferenceError::SchemaMismatch {
                scaler: scaler.n_features(),
                model: model.n_features(),
            });
        }

        let schema = match scaler.feature_names() {
            Some(names) => FeatureSchema::new(names.to_vec()),
            None if scaler.n_features() == FEATURE_DIMENSION => FeatureSchema::default(),
            None => {
                return Err(InferenceError::UnnamedSchemaWidth {
                    expected: FEATURE_DIMENSION,
                    actual: scaler.n_features(),
                })
            }
        };
        if !schema.is_training_schema() {
            warn!(
                "Scaler columns differ from the training schema, unmatched columns will be 0: {:?}",
                schema.columns()
            );
        }

        Ok(Self {
            encoder: FeatureEncoder::new(),
            schema,
            scaler,
            model,
        })
    }

    /// Load a standard scaler and linear model from JSON artifacts
    pub fn load(
        model_path: impl AsRef<Path>,
        scaler_path: impl AsRef<Path>,
    ) -> Result<Self, InferenceError> {
        let scaler = StandardScaler::load(scaler_path)?;
        let model = LinearRegression::load(model_path)?;
        let pipeline = Self::new(Box::new(scaler), Box::new(model))?;

        info!("Prediction pipeline loaded with {} columns", pipeline.schema.len());
        Ok(pipeline)
    }

    /// Columns rows are aligned to before scaling
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Run the full pipeline for one input
    pub fn predict(&self, input: &RawInput) -> Result<PredictionOutcome, PredictionFailure> {
        let start = std::time::Instant::now();

        let processed_input = self.encoder.encode(input);
        let charges = self.score(&processed_input)?;

        let latency_us = start.elapsed().as_micros() as u64;
        debug!("Predicted charges {:.2} in {}us", charges, latency_us);

        Ok(PredictionOutcome {
            charges,
            processed_input,
            latency_us,
        })
    }

    fn score(&self, encoded: &EncodedFeatureVector) -> Result<f64, InferenceError> {
        let row = self.schema.align(encoded.named_values());
        let matrix = Array2::from_shape_vec((1, row.len()), row).map_err(|e| {
            InferenceError::InvalidInputShape {
                expected: format!("(1, {})", self.schema.len()),
                actual: e.to_string(),
            }
        })?;

        let scaled = self.scaler.transform(&matrix)?;
        let predictions = self.model.predict(&scaled)?;

        let charges = predictions.get(0).copied().ok_or(InferenceError::EmptyPrediction)?;
        if !charges.is_finite() {
            return Err(InferenceError::InferenceFailed(format!(
                "model produced non-finite value {}",
                charges
            )));
        }
        Ok(charges)
    }
}
