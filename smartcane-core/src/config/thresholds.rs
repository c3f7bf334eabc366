//! Alert thresholds
//!
//! Static safe bands for every sensor channel.

/// Obstacle alert fires below this distance (cm)
pub const OBSTACLE_DISTANCE_CM: f32 = 30.0;
/// Lowest safe ambient temperature (°C)
pub const TEMPERATURE_MIN_C: f32 = 0.0;
/// Highest safe ambient temperature (°C)
pub const TEMPERATURE_MAX_C: f32 = 45.0;
/// Lowest comfortable relative humidity (%)
pub const HUMIDITY_MIN_PCT: f32 = 30.0;
/// Highest comfortable relative humidity (%)
pub const HUMIDITY_MAX_PCT: f32 = 60.0;
/// Light alert fires below this 10-bit reading
pub const LIGHT_FLOOR: u16 = 400;
/// Motion alert fires above this sum of absolute raw axis readings
pub const MOTION_CEILING: u32 = 15_000;

/// Thresholds used by the alert evaluator
///
/// All comparisons are strict, so a reading sitting exactly on a bound
/// never raises an alert.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Thresholds {
    /// Obstacle when `0 < distance < obstacle_distance_cm`
    pub obstacle_distance_cm: f32,
    /// Temperature alert below this value
    pub temperature_min_c: f32,
    /// Temperature alert above this value
    pub temperature_max_c: f32,
    /// Humidity alert below this value
    pub humidity_min_pct: f32,
    /// Humidity alert above this value
    pub humidity_max_pct: f32,
    /// Light alert below this value (0-1023 scale)
    pub light_floor: u16,
    /// Motion alert above this Manhattan magnitude
    pub motion_ceiling: u32,
}

impl Thresholds {
    /// Factory thresholds
    pub const DEFAULT: Self = Self {
        obstacle_distance_cm: OBSTACLE_DISTANCE_CM,
        temperature_min_c: TEMPERATURE_MIN_C,
        temperature_max_c: TEMPERATURE_MAX_C,
        humidity_min_pct: HUMIDITY_MIN_PCT,
        humidity_max_pct: HUMIDITY_MAX_PCT,
        light_floor: LIGHT_FLOOR,
        motion_ceiling: MOTION_CEILING,
    };
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}
