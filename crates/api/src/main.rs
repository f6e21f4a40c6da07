//! Insurance Charges Predictor - Main Entry Point

use api::{init_logging, load_config, run_server};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config(api::config::config_path())?;
    init_logging(&config.logging).map_err(|e| anyhow::anyhow!(e))?;

    info!("=== Insurance Charges Predictor v{} ===", env!("CARGO_PKG_VERSION"));
    info!(
        "Artifacts: model={}, scaler={}",
        config.artifacts.model_path.display(),
        config.artifacts.scaler_path.display()
    );

    run_server(config).await
}
