//! Schema Route

use axum::{extract::State, Json};
use feature_engine::{RawInput, Region, Sex, Smoker};
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;

/// Inclusive numeric range accepted for an input field
#[derive(Debug, Serialize)]
pub struct NumericDomain<T> {
    pub min: T,
    pub max: T,
}

/// Accepted values for every raw input field
#[derive(Debug, Serialize)]
pub struct InputDomains {
    pub age: NumericDomain<u32>,
    pub sex: Vec<&'static str>,
    pub bmi: NumericDomain<f64>,
    pub children: NumericDomain<u32>,
    pub smoker: Vec<&'static str>,
    pub region: Vec<&'static str>,
}

/// Response for the schema endpoint
#[derive(Debug, Serialize)]
pub struct SchemaResponse {
    /// Columns the encoded record is aligned to, in order
    pub feature_columns: Vec<String>,
    pub inputs: InputDomains,
    /// Values a form should start from
    pub defaults: RawInput,
}

/// Describe the input form and the model's column layout
pub async fn get_schema(State(state): State<Arc<AppState>>) -> Json<SchemaResponse> {
    let ranges = state.validator.config();

    Json(SchemaResponse {
        feature_columns: state.pipeline.schema().columns().to_vec(),
        inputs: InputDomains {
            age: NumericDomain {
                min: ranges.age_range.0,
                max: ranges.age_range.1,
            },
            sex: Sex::ALL.iter().map(Sex::as_str).collect(),
            bmi: NumericDomain {
                min: ranges.bmi_range.0,
                max: ranges.bmi_range.1,
            },
            children: NumericDomain {
                min: ranges.children_range.0,
                max: ranges.children_range.1,
            },
            smoker: Smoker::ALL.iter().map(Smoker::as_str).collect(),
            region: Region::ALL.iter().map(Region::as_str).collect(),
        },
        defaults: RawInput::default(),
    })
}
