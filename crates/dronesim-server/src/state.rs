//! Shared application state for the HTTP API.
//!
//! [`AppState`] owns the one drone and the sensor simulator for the
//! lifetime of the process. Nothing is persisted.

use dronesim_core::{DroneOperations, DroneSimConfig, SensorSimulator};
use tokio::sync::{Mutex, RwLock};

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor. Write handlers hold the `operations` write guard for the
/// whole mutate-then-snapshot sequence.
#[derive(Debug)]
pub struct AppState {
    /// The drone and its operation handlers.
    pub operations: RwLock<DroneOperations>,
    /// The obstacle and weather sensor simulator.
    pub sensors: Mutex<SensorSimulator>,
}

impl AppState {
    /// Create application state from explicit parts.
    pub fn new(operations: DroneOperations, sensors: SensorSimulator) -> Self {
        Self {
            operations: RwLock::new(operations),
            sensors: Mutex::new(sensors),
        }
    }

    /// Create application state from loaded configuration.
    pub fn from_config(config: &DroneSimConfig) -> Self {
        Self::new(
            config.build_operations(),
            SensorSimulator::from_seed(config.sensors.seed),
        )
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&DroneSimConfig::default())
    }
}
