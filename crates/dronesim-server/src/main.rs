//! Drone simulator service entry point.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `dronesim-config.yaml` (or `DRONESIM_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Build the drone state and sensor simulator
//! 4. Serve the HTTP API until `Ctrl-C`

use std::sync::Arc;

use dronesim_core::DroneSimConfig;
use dronesim_server::{serve, bind_listener, AppState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the server fails to
/// bind or serve.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env = |key: &str| std::env::var(key).ok();
    let path = DroneSimConfig::resolve_path(env);
    let loaded = DroneSimConfig::load_or_default(&path, env)?;
    let config = loaded.config;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("dronesim-server starting");
    if loaded.from_file {
        info!(path = %loaded.path.display(), "Configuration loaded");
    } else {
        warn!(path = %loaded.path.display(), "Config file not found, using defaults");
    }
    info!(
        host = config.server.host,
        port = config.server.port,
        initial_battery = config.drone.initial_battery,
        low_battery_threshold = config.drone.low_battery_threshold,
        seeded = config.sensors.seed.is_some(),
        "Drone initialized"
    );

    let state = Arc::new(AppState::from_config(&config));
    let listener = bind_listener(&config.server).await?;
    serve(listener, state).await?;

    Ok(())
}
