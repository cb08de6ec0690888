//! Operation handlers: one mutation per call, then the updated view.
//!
//! Every write operation applies exactly one [`DroneState`] setter and
//! returns the full [`Snapshot`], never a partial result.
//! [`DroneOperations::monitor_battery`] is the only operation that can
//! answer with an alert instead.
//!
//! There is no state machine. Each call depends only on the current
//! state; a drone below the battery threshold re-alerts on every check
//! and never transitions to a "returned to base" state.

use dronesim_types::{DronePayload, Snapshot};
use tracing::{debug, warn};

use crate::drone::DroneState;
use crate::presenter;

/// Battery level strictly below which [`DroneOperations::monitor_battery`] alerts.
pub const LOW_BATTERY_THRESHOLD: i64 = 20;

/// Alert text returned when the battery is low.
pub const LOW_BATTERY_ALERT: &str = "Battery low! Returning to base.";

/// Owns the drone state and applies operations to it.
#[derive(Debug, Clone, PartialEq)]
pub struct DroneOperations {
    state: DroneState,
    low_battery_threshold: i64,
}

impl DroneOperations {
    /// Wrap `state` with the given low-battery threshold.
    pub const fn new(state: DroneState, low_battery_threshold: i64) -> Self {
        Self {
            state,
            low_battery_threshold,
        }
    }

    /// Read-only access to the underlying state.
    pub const fn state(&self) -> &DroneState {
        &self.state
    }

    /// Current snapshot without mutation.
    pub const fn status(&self) -> Snapshot {
        presenter::show_status(&self.state)
    }

    /// Move to `(x, y)` and return the snapshot.
    pub fn adjust_position(&mut self, x: f64, y: f64) -> Snapshot {
        self.state.update_position(x, y);
        debug!(x, y, "position updated");
        self.status()
    }

    /// Set altitude and return the snapshot.
    pub fn adjust_altitude(&mut self, altitude: f64) -> Snapshot {
        self.state.change_altitude(altitude);
        debug!(altitude, "altitude updated");
        self.status()
    }

    /// Set speed and return the snapshot.
    pub fn adjust_speed(&mut self, speed: f64) -> Snapshot {
        self.state.update_speed(speed);
        debug!(speed, "speed updated");
        self.status()
    }

    /// Set heading and return the snapshot.
    pub fn adjust_direction(&mut self, direction: f64) -> Snapshot {
        self.state.change_direction(direction);
        debug!(direction, "direction updated");
        self.status()
    }

    /// Drain `consumption` units of battery and return the snapshot.
    pub fn consume_battery(&mut self, consumption: i64) -> Snapshot {
        self.state.consume_battery(consumption);
        debug!(
            consumption,
            battery = self.state.check_battery(),
            "battery consumed"
        );
        self.status()
    }

    /// Check the battery.
    ///
    /// Returns the fixed low-battery alert when the level is strictly
    /// below the threshold, otherwise the full snapshot.
    pub fn monitor_battery(&self) -> DronePayload {
        let battery = self.state.check_battery();
        if battery < self.low_battery_threshold {
            warn!(battery, threshold = self.low_battery_threshold, "battery low");
            return DronePayload::Alert(presenter::display_alert(LOW_BATTERY_ALERT));
        }
        DronePayload::Snapshot(self.status())
    }
}

impl Default for DroneOperations {
    fn default() -> Self {
        Self::new(DroneState::new(), LOW_BATTERY_THRESHOLD)
    }
}
