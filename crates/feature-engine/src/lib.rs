//! Feature Engineering Engine
//!
//! Maps raw policyholder input onto the fixed, ordered feature layout the
//! charges model was trained on.

mod encoder;
mod input;
mod schema;

pub use encoder::{BmiCategory, EncodedFeatureVector, FeatureEncoder};
pub use input::{RawInput, Region, Sex, Smoker};
pub use schema::{FeatureSchema, FEATURE_COLUMNS, FEATURE_DIMENSION};
