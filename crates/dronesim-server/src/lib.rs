//! HTTP control API for the drone simulator.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Control endpoints** that apply one mutation to the drone and
//!   answer with the full state snapshot (`/position`, `/altitude`,
//!   `/speed`, `/direction`, `/battery/consume`)
//! - **Read endpoints** for the current state and the low-battery check
//!   (`/status`, `/battery`)
//! - **Sensor endpoints** returning fresh random samples
//!   (`/simulate_obstacle`, `/simulate_weather`)
//! - **Static index page** (`GET /`)
//!
//! # Architecture
//!
//! The drone state is owned by [`AppState`] and injected into every
//! handler through Axum's `State` extractor. Writes go through a single
//! `RwLock`, so each response reflects exactly the mutation that produced
//! it. The sensor simulator sits behind its own lock and never touches
//! drone state.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{bind_listener, serve, ServerError};
pub use state::AppState;
