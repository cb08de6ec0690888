//! Shared type definitions for the drone simulator service.
//!
//! Everything in this crate crosses the HTTP boundary as JSON. The
//! core crate produces these values; the server crate serializes them.
//!
//! - [`payload`] -- drone snapshots, alert payloads, and the union of the two
//! - [`sensors`] -- obstacle and weather readings

pub mod payload;
pub mod sensors;

pub use payload::{Alert, DronePayload, Snapshot};
pub use sensors::{ObstacleReading, ObstacleReport, Weather, WeatherReading};
