//! Artifact Loading

use crate::InferenceError;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Load a JSON-serialized artifact from disk
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, InferenceError> {
    let path = path.as_ref();
    let load_error = |reason: String| InferenceError::ArtifactLoad {
        path: path.display().to_string(),
        reason,
    };

    let file = File::open(path).map_err(|e| load_error(e.to_string()))?;
    let artifact = serde_json::from_reader(BufReader::new(file)).map_err(|e| load_error(e.to_string()))?;

    info!("Loaded artifact from {}", path.display());
    Ok(artifact)
}
