//! Projection of drone state into response payloads.

use dronesim_types::{Alert, Snapshot};

use crate::drone::DroneState;

/// Snapshot every field of `state`. Read-only.
pub const fn show_status(state: &DroneState) -> Snapshot {
    Snapshot {
        altitude: state.altitude(),
        speed: state.speed(),
        position: state.position(),
        battery: state.check_battery(),
        direction: state.direction(),
    }
}

/// Wrap `message` in an alert payload.
pub fn display_alert(message: impl Into<String>) -> Alert {
    Alert::new(message)
}
