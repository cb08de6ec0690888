//! Simulated obstacle and weather sensors.
//!
//! Each sample is drawn fresh from a [`RandomSource`]. Production code
//! uses [`RngSource`] over a `rand` generator; tests inject a
//! [`ScriptedSource`] to get deterministic sequences. Samples are
//! independent of drone state and of each other.

use std::collections::VecDeque;

use dronesim_types::{Alert, ObstacleReading, ObstacleReport, Weather, WeatherReading};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Upper bound of the obstacle distance range, in meters.
pub const MAX_OBSTACLE_DISTANCE: f64 = 50.0;

/// Obstacles strictly closer than this raise an alert.
pub const OBSTACLE_ALERT_DISTANCE: f64 = 10.0;

/// Upper bound of the wind speed range.
pub const MAX_WIND_SPEED: f64 = 20.0;

/// Source of randomness for the sensor simulator.
pub trait RandomSource: Send {
    /// Sample a real number in `[low, high]`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Pick an index in `0..len`. Returns 0 when `len` is 0.
    fn choose_index(&mut self, len: usize) -> usize;
}

/// [`RandomSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wrap an existing generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Seeded generator when `seed` is set, OS entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::new(rng)
    }
}

impl<R: Rng + Send> RandomSource for RngSource<R> {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.rng.random_range(low..=high)
    }

    fn choose_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}

/// [`RandomSource`] that replays queued values.
///
/// `uniform` pops the next queued real verbatim (falling back to `low`
/// once the queue is empty); `choose_index` pops the next queued index
/// modulo `len` (falling back to 0).
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    reals: VecDeque<f64>,
    indices: VecDeque<usize>,
}

impl ScriptedSource {
    /// Build a source from the reals and indices to replay, in order.
    pub fn new(reals: impl IntoIterator<Item = f64>, indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            reals: reals.into_iter().collect(),
            indices: indices.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedSource {
    fn uniform(&mut self, low: f64, _high: f64) -> f64 {
        self.reals.pop_front().unwrap_or(low)
    }

    fn choose_index(&mut self, len: usize) -> usize {
        self.indices
            .pop_front()
            .and_then(|idx| idx.checked_rem(len))
            .unwrap_or(0)
    }
}

/// Produces obstacle and weather samples.
pub struct SensorSimulator {
    source: Box<dyn RandomSource>,
}

impl SensorSimulator {
    /// Simulator drawing from `source`.
    pub fn new(source: impl RandomSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// Simulator seeded from `seed`, or from OS entropy when absent.
    pub fn from_seed(seed: Option<u64>) -> Self {
        Self::new(RngSource::from_seed(seed))
    }

    /// Distance to the nearest obstacle, uniform in `[0, 50]`.
    pub fn simulate_obstacle(&mut self) -> f64 {
        self.source.uniform(0.0, MAX_OBSTACLE_DISTANCE)
    }

    /// Wind speed uniform in `[0, 20]` with a uniformly chosen category.
    pub fn simulate_weather(&mut self) -> WeatherReading {
        let wind_speed = self.source.uniform(0.0, MAX_WIND_SPEED);
        let idx = self.source.choose_index(Weather::ALL.len());
        let weather = Weather::ALL.get(idx).copied().unwrap_or(Weather::Clear);
        WeatherReading {
            wind_speed,
            weather,
        }
    }
}

impl std::fmt::Debug for SensorSimulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SensorSimulator").finish_non_exhaustive()
    }
}

/// Apply the proximity policy to a sampled distance.
///
/// Below [`OBSTACLE_ALERT_DISTANCE`] the distance is reported inside an
/// alert message. No course adjustment actually happens. The distance is
/// printed with its `Debug` form, so whole numbers keep a trailing `.0`.
pub fn assess_obstacle(distance: f64) -> ObstacleReport {
    if distance < OBSTACLE_ALERT_DISTANCE {
        return ObstacleReport::Alert(Alert::new(format!(
            "Obstacle detected {distance:?} meters away! Adjusting course..."
        )));
    }
    ObstacleReport::Clear(ObstacleReading {
        obstacle_distance: distance,
    })
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::panic)]
mod tests {
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn obstacle_samples_stay_in_range() {
        let mut sim = SensorSimulator::new(RngSource::new(SmallRng::seed_from_u64(42)));
        for _ in 0..1000 {
            let d = sim.simulate_obstacle();
            assert!((0.0..=MAX_OBSTACLE_DISTANCE).contains(&d), "out of range: {d}");
        }
    }

    #[test]
    fn weather_samples_stay_in_range() {
        let mut sim = SensorSimulator::new(RngSource::new(SmallRng::seed_from_u64(7)));
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            let reading = sim.simulate_weather();
            assert!((0.0..=MAX_WIND_SPEED).contains(&reading.wind_speed));
            seen.insert(reading.weather);
        }
        assert_eq!(seen.len(), Weather::ALL.len());
    }

    #[test]
    fn seeded_simulators_agree() {
        let mut a = SensorSimulator::from_seed(Some(99));
        let mut b = SensorSimulator::from_seed(Some(99));
        for _ in 0..20 {
            assert_eq!(a.simulate_obstacle(), b.simulate_obstacle());
            assert_eq!(a.simulate_weather(), b.simulate_weather());
        }
    }

    #[test]
    fn scripted_source_replays_values() {
        let mut sim = SensorSimulator::new(ScriptedSource::new([4.5, 12.0], [2]));
        assert_eq!(sim.simulate_obstacle(), 4.5);
        let reading = sim.simulate_weather();
        assert_eq!(reading.wind_speed, 12.0);
        assert_eq!(reading.weather, Weather::Stormy);
    }

    #[test]
    fn scripted_index_wraps() {
        let mut source = ScriptedSource::new([], [6]);
        assert_eq!(source.choose_index(4), 2);
        assert_eq!(source.choose_index(4), 0);
    }

    #[test]
    fn close_obstacle_alerts_with_distance() {
        match assess_obstacle(3.25) {
            ObstacleReport::Alert(alert) => assert_eq!(
                alert.alert,
                "Obstacle detected 3.25 meters away! Adjusting course..."
            ),
            ObstacleReport::Clear(reading) => panic!("expected alert, got {reading:?}"),
        }
    }

    #[test]
    fn whole_number_distance_keeps_decimal_point() {
        assert_eq!(
            assess_obstacle(5.0),
            ObstacleReport::Alert(Alert::new(
                "Obstacle detected 5.0 meters away! Adjusting course..."
            ))
        );
        assert_eq!(
            assess_obstacle(0.0),
            ObstacleReport::Alert(Alert::new(
                "Obstacle detected 0.0 meters away! Adjusting course..."
            ))
        );
    }

    #[test]
    fn alert_boundary_is_strict() {
        assert_eq!(
            assess_obstacle(OBSTACLE_ALERT_DISTANCE),
            ObstacleReport::Clear(ObstacleReading {
                obstacle_distance: OBSTACLE_ALERT_DISTANCE
            })
        );
        assert!(matches!(assess_obstacle(9.999), ObstacleReport::Alert(_)));
    }
}
