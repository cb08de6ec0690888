//! Mutable drone state.
//!
//! [`DroneState`] accepts any numeric input verbatim. There is no
//! clamping and no validation: battery can go negative, direction can
//! exceed 360, and speed can be negative.

/// Battery level of a freshly initialized drone.
pub const DEFAULT_BATTERY: i64 = 100;

/// The five mutable attributes of the simulated drone.
#[derive(Debug, Clone, PartialEq)]
pub struct DroneState {
    altitude: f64,
    speed: f64,
    position: (f64, f64),
    battery: i64,
    direction: f64,
}

impl DroneState {
    /// Drone at the origin, grounded, stationary, fully charged.
    pub const fn new() -> Self {
        Self::with_battery(DEFAULT_BATTERY)
    }

    /// Drone at the origin with the given starting battery level.
    pub const fn with_battery(battery: i64) -> Self {
        Self {
            altitude: 0.0,
            speed: 0.0,
            position: (0.0, 0.0),
            battery,
            direction: 0.0,
        }
    }

    /// Move the drone to `(x, y)`.
    pub const fn update_position(&mut self, x: f64, y: f64) {
        self.position = (x, y);
    }

    /// Set the flight altitude.
    pub const fn change_altitude(&mut self, altitude: f64) {
        self.altitude = altitude;
    }

    /// Set the speed.
    pub const fn update_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    /// Set the heading in degrees.
    pub const fn change_direction(&mut self, direction: f64) {
        self.direction = direction;
    }

    /// Lower the battery by `consumption`. Negative consumption charges it.
    ///
    /// The result is not clamped to `0..=100`; it only saturates at the
    /// limits of `i64`.
    pub const fn consume_battery(&mut self, consumption: i64) {
        self.battery = self.battery.saturating_sub(consumption);
    }

    /// Current battery level.
    pub const fn check_battery(&self) -> i64 {
        self.battery
    }

    /// Current altitude.
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Current speed.
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Current `(x, y)` position.
    pub const fn position(&self) -> (f64, f64) {
        self.position
    }

    /// Current heading in degrees.
    pub const fn direction(&self) -> f64 {
        self.direction
    }
}

impl Default for DroneState {
    fn default() -> Self {
        Self::new()
    }
}
