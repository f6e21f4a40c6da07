//! Training-time Feature Schema

use tracing::debug;

/// Number of columns the model was trained on
pub const FEATURE_DIMENSION: usize = 11;

/// Column names in the order the scaler and model expect them
pub const FEATURE_COLUMNS: [&str; FEATURE_DIMENSION] = [
    "age",
    "is_female",
    "bmi",
    "children",
    "is_smoker",
    "region_northwest",
    "region_southeast",
    "region_southwest",
    "bmi_category_Obese",
    "bmi_category_Overweight",
    "bmi_category_Underweight",
];

/// Ordered column list used to align named records into model rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    columns: Vec<String>,
}

impl Default for FeatureSchema {
    fn default() -> Self {
        Self::new(FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect())
    }
}

impl FeatureSchema {
    /// Create a schema from an explicit column list
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Column names in order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Whether this is exactly the training schema
    pub fn is_training_schema(&self) -> bool {
        self.columns.iter().map(String::as_str).eq(FEATURE_COLUMNS)
    }

    /// Re-index a named record onto this schema.
    ///
    /// Columns missing from the record are filled with 0; record entries
    /// with no matching column are dropped.
    pub fn align<'a, I>(&self, record: I) -> Vec<f64>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut row = vec![0.0; self.columns.len()];
        let mut matched = 0;

        for (name, value) in record {
            if let Some(idx) = self.columns.iter().position(|c| c == name) {
                row[idx] = value;
                matched += 1;
            }
        }

        if matched < self.columns.len() {
            debug!(
                "Aligned record filled {} of {} columns with 0",
                self.columns.len() - matched,
                self.columns.len()
            );
        }

        row
    }
}
