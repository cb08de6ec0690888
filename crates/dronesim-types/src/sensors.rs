//! Readings produced by the simulated obstacle and weather sensors.

use serde::{Deserialize, Serialize};

use crate::payload::Alert;

/// Weather category reported by the weather sensor.
///
/// Serialized by variant name (`"Clear"`, `"Cloudy"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weather {
    /// No cloud cover.
    Clear,
    /// Overcast.
    Cloudy,
    /// Storm conditions.
    Stormy,
    /// Rain.
    Rainy,
}

impl Weather {
    /// Every category, in sampling order.
    pub const ALL: [Self; 4] = [Self::Clear, Self::Cloudy, Self::Stormy, Self::Rainy];
}

/// One weather sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Wind speed in `[0, 20]`.
    pub wind_speed: f64,
    /// Weather category.
    pub weather: Weather,
}

/// Raw obstacle distance, returned when no alert is raised.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleReading {
    /// Distance to the obstacle in meters.
    pub obstacle_distance: f64,
}

/// Outcome of an obstacle sample after the proximity policy is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObstacleReport {
    /// Obstacle far enough away to report the raw distance.
    Clear(ObstacleReading),
    /// Obstacle too close; the distance is embedded in the message.
    Alert(Alert),
}
