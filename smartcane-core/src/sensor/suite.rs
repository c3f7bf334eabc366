//! The set of sensors sampled each cycle

use super::snapshot::{finite, SensorSnapshot};
use crate::traits::{EnvironmentSensor, LightSensor, MotionSensor, RangeFinder};

/// Anything that can produce a complete snapshot
///
/// The loop controller only sees this trait, so it can be driven by
/// scripted readings in tests.
pub trait SensorSuite {
    /// Startup self test; failure is reported but never fatal
    fn self_test(&mut self) -> bool;

    /// Read every channel once, in a fixed order
    fn sample(&mut self) -> SensorSnapshot;
}

/// Concrete sensor set: ranger, climate, motion and light
pub struct Sensors<R, E, M, L> {
    pub ranger: R,
    pub environment: E,
    pub motion: M,
    pub light: L,
}

impl<R, E, M, L> Sensors<R, E, M, L>
where
    R: RangeFinder,
    E: EnvironmentSensor,
    M: MotionSensor,
    L: LightSensor,
{
    /// Bundle the four sensor adapters
    pub fn new(ranger: R, environment: E, motion: M, light: L) -> Self {
        Self {
            ranger,
            environment,
            motion,
            light,
        }
    }
}

impl<R, E, M, L> SensorSuite for Sensors<R, E, M, L>
where
    R: RangeFinder,
    E: EnvironmentSensor,
    M: MotionSensor,
    L: LightSensor,
{
    fn self_test(&mut self) -> bool {
        self.motion.initialize().is_ok() && self.motion.test_connection()
    }

    fn sample(&mut self) -> SensorSnapshot {
        // Non-positive distances are not readings
        let distance_cm = self
            .ranger
            .measure_distance()
            .ok()
            .filter(|d| *d > 0.0);

        SensorSnapshot {
            distance_cm: finite(distance_cm),
            temperature_c: finite(self.environment.read_temperature().ok()),
            humidity_pct: finite(self.environment.read_humidity().ok()),
            light_level: self.light.read_light_level().ok(),
            acceleration: self.motion.read_acceleration().ok(),
        }
    }
}
