//! REST API endpoint handlers.
//!
//! Control handlers apply one mutation and answer with the full
//! [`Snapshot`]. Absent or `null` numeric fields default to 0; values
//! are never range-checked.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Static index page |
//! | `GET` | `/status` | Current snapshot |
//! | `POST` | `/position` | Set `{x, y}` |
//! | `POST` | `/altitude` | Set `{altitude}` |
//! | `POST` | `/speed` | Set `{speed}` |
//! | `POST` | `/direction` | Set `{direction}` |
//! | `POST` | `/battery/consume` | Drain `{consumption}` |
//! | `GET` | `/battery` | Snapshot, or alert below 20 |
//! | `GET` | `/simulate_obstacle` | Distance, or alert below 10 |
//! | `GET` | `/simulate_weather` | Wind speed and category |

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::Uri;
use axum::response::Html;
use axum::Json;
use dronesim_core::sensors::assess_obstacle;
use dronesim_types::{DronePayload, ObstacleReport, Snapshot, WeatherReading};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::state::AppState;

/// The dashboard served at `GET /`.
const INDEX_HTML: &str = include_str!("../static/index.html");

// ---------------------------------------------------------------------------
// Request body structs
// ---------------------------------------------------------------------------

/// Request body for `POST /position`.
#[derive(Debug, Default, serde::Deserialize)]
pub struct PositionRequest {
    /// Target x coordinate.
    #[serde(default)]
    pub x: Option<f64>,
    /// Target y coordinate.
    #[serde(default)]
    pub y: Option<f64>,
}

/// Request body for `POST /altitude`.
#[derive(Debug, Default, serde::Deserialize)]
pub struct AltitudeRequest {
    /// Target altitude.
    #[serde(default)]
    pub altitude: Option<f64>,
}

/// Request body for `POST /speed`.
#[derive(Debug, Default, serde::Deserialize)]
pub struct SpeedRequest {
    /// Target speed.
    #[serde(default)]
    pub speed: Option<f64>,
}

/// Request body for `POST /direction`.
#[derive(Debug, Default, serde::Deserialize)]
pub struct DirectionRequest {
    /// Target heading in degrees.
    #[serde(default)]
    pub direction: Option<f64>,
}

/// Request body for `POST /battery/consume`.
#[derive(Debug, Default, serde::Deserialize)]
pub struct ConsumeRequest {
    /// Battery units to drain.
    #[serde(default)]
    pub consumption: Option<i64>,
}

// ---------------------------------------------------------------------------
// GET / -- static index page
// ---------------------------------------------------------------------------

/// Serve the static dashboard page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

// ---------------------------------------------------------------------------
// Drone state
// ---------------------------------------------------------------------------

/// Return the current snapshot.
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<Snapshot> {
    let ops = state.operations.read().await;
    Json(ops.status())
}

/// Move the drone to `{x, y}`.
pub async fn update_position(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PositionRequest>, JsonRejection>,
) -> Result<Json<Snapshot>, ApiError> {
    let Json(req) = body?;
    let mut ops = state.operations.write().await;
    Ok(Json(ops.adjust_position(
        req.x.unwrap_or_default(),
        req.y.unwrap_or_default(),
    )))
}

/// Set the altitude.
pub async fn update_altitude(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AltitudeRequest>, JsonRejection>,
) -> Result<Json<Snapshot>, ApiError> {
    let Json(req) = body?;
    let mut ops = state.operations.write().await;
    Ok(Json(ops.adjust_altitude(req.altitude.unwrap_or_default())))
}

/// Set the speed.
pub async fn update_speed(
    State(state): State<Arc<AppState>>,
    body: Result<Json<SpeedRequest>, JsonRejection>,
) -> Result<Json<Snapshot>, ApiError> {
    let Json(req) = body?;
    let mut ops = state.operations.write().await;
    Ok(Json(ops.adjust_speed(req.speed.unwrap_or_default())))
}

/// Set the heading.
pub async fn update_direction(
    State(state): State<Arc<AppState>>,
    body: Result<Json<DirectionRequest>, JsonRejection>,
) -> Result<Json<Snapshot>, ApiError> {
    let Json(req) = body?;
    let mut ops = state.operations.write().await;
    Ok(Json(ops.adjust_direction(req.direction.unwrap_or_default())))
}

/// Drain battery by `{consumption}` units.
pub async fn consume_battery(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ConsumeRequest>, JsonRejection>,
) -> Result<Json<Snapshot>, ApiError> {
    let Json(req) = body?;
    let mut ops = state.operations.write().await;
    Ok(Json(ops.consume_battery(req.consumption.unwrap_or_default())))
}

/// Check the battery: snapshot, or the low-battery alert.
pub async fn check_battery(State(state): State<Arc<AppState>>) -> Json<DronePayload> {
    let ops = state.operations.read().await;
    Json(ops.monitor_battery())
}

// ---------------------------------------------------------------------------
// Sensors
// ---------------------------------------------------------------------------

/// Sample the obstacle sensor.
pub async fn simulate_obstacle(State(state): State<Arc<AppState>>) -> Json<ObstacleReport> {
    let distance = state.sensors.lock().await.simulate_obstacle();
    let report = assess_obstacle(distance);
    if let ObstacleReport::Alert(_) = report {
        warn!(distance, "obstacle within alert distance");
    }
    Json(report)
}

/// Sample the weather sensor.
pub async fn simulate_weather(State(state): State<Arc<AppState>>) -> Json<WeatherReading> {
    let reading = state.sensors.lock().await.simulate_weather();
    Json(reading)
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

/// Answer unknown routes with a structured 404.
pub async fn not_found(uri: Uri) -> ApiError {
    info!(%uri, "unknown route");
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
