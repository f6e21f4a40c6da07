//! Raw Policyholder Input

use serde::{Deserialize, Serialize};

/// Biological sex as collected by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Choices in the order the form offers them
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

/// Smoker flag as collected by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Smoker {
    Yes,
    No,
}

impl Smoker {
    /// Choices in the order the form offers them
    pub const ALL: [Smoker; 2] = [Smoker::Yes, Smoker::No];

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Smoker::Yes => "yes",
            Smoker::No => "no",
        }
    }
}

/// US residential region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Northeast,
    Northwest,
    Southeast,
    Southwest,
}

impl Region {
    /// Choices in the order the form offers them
    pub const ALL: [Region; 4] = [
        Region::Northeast,
        Region::Northwest,
        Region::Southeast,
        Region::Southwest,
    ];

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Northeast => "northeast",
            Region::Northwest => "northwest",
            Region::Southeast => "southeast",
            Region::Southwest => "southwest",
        }
    }
}

/// One prediction request worth of raw input.
///
/// Range checks live in the `input-validator` crate; the encoder assumes
/// they already passed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    /// Age in years, [18, 100]
    pub age: u32,
    pub sex: Sex,
    /// Body mass index, [10.0, 50.0]
    pub bmi: f64,
    /// Number of dependent children, [0, 5]
    pub children: u32,
    pub smoker: Smoker,
    pub region: Region,
}

impl Default for RawInput {
    /// Form defaults: slider midpoints as configured and the first option
    /// of every choice.
    fn default() -> Self {
        Self {
            age: 30,
            sex: Sex::Male,
            bmi: 25.0,
            children: 0,
            smoker: Smoker::Yes,
            region: Region::Northeast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_deserialize_lowercase() {
        let input: RawInput = serde_json::from_str(
            r#"{"age":30,"sex":"female","bmi":32.0,"children":2,"smoker":"yes","region":"southeast"}"#,
        )
        .unwrap();

        assert_eq!(input.sex, Sex::Female);
        assert_eq!(input.smoker, Smoker::Yes);
        assert_eq!(input.region, Region::Southeast);
    }

    #[test]
    fn test_unknown_region_rejected() {
        let result: Result<RawInput, _> = serde_json::from_str(
            r#"{"age":30,"sex":"male","bmi":25.0,"children":0,"smoker":"no","region":"midwest"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_as_str_matches_serde() {
        for region in Region::ALL {
            let json = serde_json::to_string(&region).unwrap();
            assert_eq!(json, format!("\"{}\"", region.as_str()));
        }
    }
}
