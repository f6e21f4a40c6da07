//! Feature Vector Encoding

use crate::input::{RawInput, Region, Sex, Smoker};
use crate::schema::{FEATURE_COLUMNS, FEATURE_DIMENSION};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// BMI band used by the training pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    /// Reference band, no indicator column
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Underweight below this value
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Overweight from this value
    pub const OVERWEIGHT_FROM: f64 = 25.0;
    /// Obese from this value
    pub const OBESE_FROM: f64 = 30.0;

    /// Classify a BMI value. Bands are half-open and disjoint.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < Self::UNDERWEIGHT_BELOW {
            BmiCategory::Underweight
        } else if bmi < Self::OVERWEIGHT_FROM {
            BmiCategory::Normal
        } else if bmi < Self::OBESE_FROM {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

/// Encoded feature vector in training column order.
///
/// Serializes with the exact column names the model was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EncodedFeatureVector {
    pub age: u32,
    pub is_female: u8,
    pub bmi: f64,
    pub children: u32,
    pub is_smoker: u8,
    pub region_northwest: u8,
    pub region_southeast: u8,
    pub region_southwest: u8,
    #[serde(rename = "bmi_category_Obese")]
    pub bmi_category_obese: u8,
    #[serde(rename = "bmi_category_Overweight")]
    pub bmi_category_overweight: u8,
    #[serde(rename = "bmi_category_Underweight")]
    pub bmi_category_underweight: u8,
}

impl EncodedFeatureVector {
    /// Values as a numeric row, in `FEATURE_COLUMNS` order
    pub fn values(&self) -> [f64; FEATURE_DIMENSION] {
        [
            self.age as f64,
            self.is_female as f64,
            self.bmi,
            self.children as f64,
            self.is_smoker as f64,
            self.region_northwest as f64,
            self.region_southeast as f64,
            self.region_southwest as f64,
            self.bmi_category_obese as f64,
            self.bmi_category_overweight as f64,
            self.bmi_category_underweight as f64,
        ]
    }

    /// Column name and value pairs, in `FEATURE_COLUMNS` order
    pub fn named_values(&self) -> [(&'static str, f64); FEATURE_DIMENSION] {
        let values = self.values();
        std::array::from_fn(|i| (FEATURE_COLUMNS[i], values[i]))
    }

    /// BMI band implied by the one-hot columns
    pub fn bmi_category(&self) -> BmiCategory {
        if self.bmi_category_underweight == 1 {
            BmiCategory::Underweight
        } else if self.bmi_category_overweight == 1 {
            BmiCategory::Overweight
        } else if self.bmi_category_obese == 1 {
            BmiCategory::Obese
        } else {
            BmiCategory::Normal
        }
    }
}

/// Stateless encoder from raw input to the training feature layout.
///
/// Reference categories (male, northeast, normal BMI) have no column and
/// are encoded as all-zero indicators within their group.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureEncoder;

impl FeatureEncoder {
    /// Create a new encoder
    pub fn new() -> Self {
        Self
    }

    /// Encode one raw input record
    pub fn encode(&self, input: &RawInput) -> EncodedFeatureVector {
        let bmi_category = BmiCategory::from_bmi(input.bmi);

        let encoded = EncodedFeatureVector {
            age: input.age,
            is_female: indicator(input.sex == Sex::Female),
            bmi: input.bmi,
            children: input.children,
            is_smoker: indicator(input.smoker == Smoker::Yes),
            region_northwest: indicator(input.region == Region::Northwest),
            region_southeast: indicator(input.region == Region::Southeast),
            region_southwest: indicator(input.region == Region::Southwest),
            bmi_category_obese: indicator(bmi_category == BmiCategory::Obese),
            bmi_category_overweight: indicator(bmi_category == BmiCategory::Overweight),
            bmi_category_underweight: indicator(bmi_category == BmiCategory::Underweight),
        };

        debug!("Encoded input: {:?}", encoded);
        encoded
    }
}

fn indicator(flag: bool) -> u8 {
    u8::from(flag)
}
