//! Application Configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for overrides, e.g. `PREDICTOR_SERVER__BIND_ADDR`
pub const ENV_PREFIX: &str = "PREDICTOR";

/// Environment variable naming the config file
pub const CONFIG_PATH_ENV: &str = "PREDICTOR_CONFIG";

/// Config file used when `PREDICTOR_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "predictor.toml";

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub artifacts: ArtifactConfig,
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Locations of the pre-trained artifacts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactConfig {
    /// Fitted regression model (JSON)
    pub model_path: PathBuf,
    /// Fitted feature scaler (JSON)
    pub scaler_path: PathBuf,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("model.json"),
            scaler_path: PathBuf::from("scaler.json"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Load configuration from an optional TOML file layered under
/// `PREDICTOR_*` environment variables
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, config::ConfigError> {
    load_config_with_env(path, environment())
}

/// `PREDICTOR_` prefix, `__` between nested keys
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

fn load_config_with_env<P: AsRef<Path>>(
    path: P,
    env: config::Environment,
) -> Result<AppConfig, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path.as_ref()).required(false))
        .add_source(env)
        .build()?;

    settings.try_deserialize()
}

/// Config file path from `PREDICTOR_CONFIG`, or the default
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.artifacts.model_path, PathBuf::from("model.json"));
        assert_eq!(config.artifacts.scaler_path, PathBuf::from("scaler.json"));
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config =
            load_config_with_env("/nonexistent/predictor.toml", env_vars(&[])).unwrap();
        assert_eq!(config.artifacts.model_path, PathBuf::from("model.json"));
    }

    fn env_vars(vars: &[(&str, &str)]) -> config::Environment {
        let map = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<config::Map<String, String>>();
        environment().source(Some(map))
    }

    #[test]
    fn test_env_overrides_nested_keys() {
        let env = env_vars(&[
            ("PREDICTOR_SERVER__BIND_ADDR", "127.0.0.1:9999"),
            ("PREDICTOR_ARTIFACTS__SCALER_PATH", "/srv/models/scaler.json"),
            ("OTHER_SERVER__BIND_ADDR", "10.0.0.1:1"),
        ]);

        let config = load_config_with_env("/nonexistent/predictor.toml", env).unwrap();
        assert_eq!(config.server.bind_addr, "127.0.0.1:9999");
        assert_eq!(
            config.artifacts.scaler_path,
            PathBuf::from("/srv/models/scaler.json")
        );
        assert_eq!(config.artifacts.model_path, PathBuf::from("model.json"));
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"").unwrap();

        let env = env_vars(&[("PREDICTOR_LOGGING__LEVEL", "warn")]);
        let config = load_config_with_env(file.path(), env).unwrap();
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[artifacts]\nmodel_path = \"/srv/models/charges.json\"").unwrap();
        writeln!(file, "[logging]\njson = true").unwrap();

        let config = load_config_with_env(file.path(), env_vars(&[])).unwrap();
        assert_eq!(
            config.artifacts.model_path,
            PathBuf::from("/srv/models/charges.json")
        );
        assert_eq!(config.artifacts.scaler_path, PathBuf::from("scaler.json"));
        assert!(config.logging.json);
        assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
    }
}
