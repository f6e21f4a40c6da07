//! Validator for Range Checking

use crate::error::ValidationError;
use feature_engine::RawInput;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Age valid range (years)
    pub age_range: (u32, u32),
    /// BMI valid range (kg/m²)
    pub bmi_range: (f64, f64),
    /// Children valid range
    pub children_range: (u32, u32),
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            age_range: (18, 100),
            bmi_range: (10.0, 50.0),
            children_range: (0, 5),
        }
    }
}

/// Result of validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether all values are valid
    pub valid: bool,
    /// List of validation errors
    pub errors: Vec<ValidationError>,
    /// Number of fields validated
    pub fields_checked: usize,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid(fields_checked: usize) -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            fields_checked,
        }
    }

    /// Create an invalid result with errors
    pub fn invalid(errors: Vec<ValidationError>, fields_checked: usize) -> Self {
        Self {
            valid: false,
            errors,
            fields_checked,
        }
    }

    /// First error, if any
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Validator for raw policyholder input
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Number of numeric fields checked per input
    const NUMERIC_FIELDS: usize = 3;

    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Configured ranges
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a single value against a range
    pub fn validate_range(
        &self,
        field: &'static str,
        value: f64,
        range: (f64, f64),
    ) -> Result<(), ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite { field });
        }
        if value < range.0 || value > range.1 {
            Err(ValidationError::OutOfRange {
                field,
                value,
                min: range.0,
                max: range.1,
            })
        } else {
            Ok(())
        }
    }

    /// Validate age
    pub fn validate_age(&self, age: u32) -> Result<(), ValidationError> {
        let (min, max) = self.config.age_range;
        self.validate_range("age", age as f64, (min as f64, max as f64))
    }

    /// Validate BMI
    pub fn validate_bmi(&self, bmi: f64) -> Result<(), ValidationError> {
        self.validate_range("bmi", bmi, self.config.bmi_range)
    }

    /// Validate number of children
    pub fn validate_children(&self, children: u32) -> Result<(), ValidationError> {
        let (min, max) = self.config.children_range;
        self.validate_range("children", children as f64, (min as f64, max as f64))
    }

    /// Validate every numeric field of an input, collecting all errors.
    ///
    /// Categorical fields are closed enums and need no check here.
    pub fn validate(&self, input: &RawInput) -> ValidationResult {
        let errors: Vec<ValidationError> = [
            self.validate_age(input.age),
            self.validate_bmi(input.bmi),
            self.validate_children(input.children),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        if errors.is_empty() {
            ValidationResult::valid(Self::NUMERIC_FIELDS)
        } else {
            debug!("Input rejected with {} error(s): {:?}", errors.len(), errors);
            ValidationResult::invalid(errors, Self::NUMERIC_FIELDS)
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_age_range() {
        let validator = Validator::default();
        assert!(validator.validate_age(18).is_ok());
        assert!(validator.validate_age(100).is_ok());
        assert!(validator.validate_age(17).is_err());
        assert!(validator.validate_age(101).is_err());
    }

    #[test]
    fn test_bmi_range() {
        let validator = Validator::default();
        assert!(validator.validate_bmi(10.0).is_ok());
        assert!(validator.validate_bmi(50.0).is_ok());
        assert!(validator.validate_bmi(9.99).is_err());
        assert!(validator.validate_bmi(50.01).is_err());
    }

    #[test]
    fn test_bmi_not_finite() {
        let validator = Validator::default();
        assert_eq!(
            validator.validate_bmi(f64::NAN),
            Err(ValidationError::NotFinite { field: "bmi" })
        );
        assert!(validator.validate_bmi(f64::INFINITY).is_err());
    }

    #[test]
    fn test_children_range() {
        let validator = Validator::default();
        assert!(validator.validate_children(0).is_ok());
        assert!(validator.validate_children(5).is_ok());
        assert!(validator.validate_children(6).is_err());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let validator = Validator::default();
        let input = RawInput {
            age: 12,
            bmi: 60.0,
            children: 9,
            ..Default::default()
        };

        let result = validator.validate(&input);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 3);
        assert_eq!(result.fields_checked, 3);
    }

    #[test]
    fn test_default_input_is_valid() {
        let result = Validator::default().validate(&RawInput::default());
        assert!(result.valid);
        assert!(result.into_result().is_ok());
    }

    #[test]
    fn test_error_message() {
        let err = Validator::default().validate_age(120).unwrap_err();
        assert_eq!(err.to_string(), "age value 120 is out of range [18, 100]");
    }

    proptest! {
        #[test]
        fn prop_in_domain_inputs_pass(age in 18u32..=100, bmi in 10.0f64..=50.0, children in 0u32..=5) {
            let input = RawInput { age, bmi, children, ..Default::default() };
            prop_assert!(Validator::default().validate(&input).valid);
        }
    }
}
