//! Core logic for the drone simulator service.
//!
//! The pieces compose linearly: [`drone::DroneState`] holds the mutable
//! attributes, [`presenter`] projects them into wire payloads, and
//! [`operations::DroneOperations`] applies one mutation per call and
//! answers with the updated view. [`sensors::SensorSimulator`] is
//! independent of drone state and draws from a pluggable
//! [`sensors::RandomSource`].
//!
//! Nothing here is synchronized. The server crate owns a single
//! [`operations::DroneOperations`] behind a lock and injects it into
//! request handlers.

pub mod config;
pub mod drone;
pub mod operations;
pub mod presenter;
pub mod sensors;

pub use config::{ConfigError, DroneSimConfig, LoadedConfig};
pub use drone::DroneState;
pub use operations::DroneOperations;
pub use sensors::{RandomSource, RngSource, ScriptedSource, SensorSimulator};
