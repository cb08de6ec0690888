//! Drone state projections returned by the control endpoints.

use serde::{Deserialize, Serialize};

/// Point-in-time projection of every drone state field.
///
/// `position` serializes as a two-element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Altitude, unclamped.
    pub altitude: f64,
    /// Speed, unvalidated (may be negative).
    pub speed: f64,
    /// Horizontal position as `(x, y)`.
    pub position: (f64, f64),
    /// Battery level. Starts at 100 and is never clamped.
    pub battery: i64,
    /// Heading in degrees, unnormalized.
    pub direction: f64,
}

/// Single-field alert body substituted for a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Human-readable alert text.
    pub alert: String,
}

impl Alert {
    /// Wrap a message in an alert payload.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            alert: message.into(),
        }
    }
}

/// Response of an operation that may alert instead of reporting state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DronePayload {
    /// Full drone snapshot.
    Snapshot(Snapshot),
    /// Alert replacing the snapshot.
    Alert(Alert),
}

impl DronePayload {
    /// Returns `true` if this payload is an alert.
    pub const fn is_alert(&self) -> bool {
        matches!(self, Self::Alert(_))
    }
}
