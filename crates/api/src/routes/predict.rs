//! Prediction Route

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use feature_engine::{EncodedFeatureVector, RawInput};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::format::format_currency;
use crate::AppState;

/// Response for the predict endpoint
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// Predicted charges
    pub charges: f64,
    /// Charges rendered as currency
    pub formatted: String,
    /// Encoded record fed to the model, keyed by training column name
    pub processed_input: EncodedFeatureVector,
}

/// Validate, encode, scale and score one input
pub async fn predict(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RawInput>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(input) = payload?;
    state.validator.validate(&input).into_result()?;

    match state.pipeline.predict(&input) {
        Ok(outcome) => {
            metrics::counter!("predictions_total").increment(1);
            info!(
                "Predicted charges {:.2} (latency={}us)",
                outcome.charges, outcome.latency_us
            );

            Ok(Json(PredictResponse {
                charges: outcome.charges,
                formatted: format_currency(outcome.charges),
                processed_input: outcome.processed_input,
            }))
        }
        Err(failure) => {
            metrics::counter!("prediction_failures_total").increment(1);
            warn!("{}", failure);
            Err(failure.into())
        }
    }
}
