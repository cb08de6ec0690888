//! Axum router construction for the drone control API.
//!
//! Assembles all routes into a single [`Router`] with CORS and request
//! tracing enabled.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- static index page
/// - `GET /status` -- current snapshot
/// - `POST /position`, `/altitude`, `/speed`, `/direction` -- setters
/// - `POST /battery/consume` -- battery drain
/// - `GET /battery` -- snapshot or low-battery alert
/// - `GET /simulate_obstacle`, `/simulate_weather` -- sensor samples
///
/// Unknown paths get a JSON 404. CORS allows any origin so the page can
/// be served from elsewhere during development.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Index page
        .route("/", get(handlers::index))
        // Drone state
        .route("/status", get(handlers::get_status))
        .route("/position", post(handlers::update_position))
        .route("/altitude", post(handlers::update_altitude))
        .route("/speed", post(handlers::update_speed))
        .route("/direction", post(handlers::update_direction))
        .route("/battery", get(handlers::check_battery))
        .route("/battery/consume", post(handlers::consume_battery))
        // Sensors
        .route("/simulate_obstacle", get(handlers::simulate_obstacle))
        .route("/simulate_weather", get(handlers::simulate_weather))
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
