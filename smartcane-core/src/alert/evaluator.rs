//! Alert evaluator
//!
//! Pure mapping from one snapshot and the manual flag to a set of alert
//! reasons. Every rule is evaluated on every cycle; there is no precedence
//! between them. A missing reading never raises its channel's alert.

use super::reasons::AlertReasons;
use crate::config::Thresholds;
use crate::sensor::SensorSnapshot;

/// Evaluate all six alert rules
pub fn evaluate(snapshot: &SensorSnapshot, manual: bool, thresholds: &Thresholds) -> AlertReasons {
    AlertReasons {
        manual,
        obstacle: obstacle_alert(snapshot.distance_cm, thresholds),
        temperature: temperature_alert(snapshot.temperature_c, thresholds),
        light: light_alert(snapshot.light_level, thresholds),
        humidity: humidity_alert(snapshot.humidity_pct, thresholds),
        motion: motion_alert(snapshot.acceleration_magnitude(), thresholds),
    }
}

/// `0 < distance < obstacle_distance_cm`
///
/// Zero and negative distances are "no reading", not an obstacle at the
/// sensor face.
pub fn obstacle_alert(distance_cm: Option<f32>, thresholds: &Thresholds) -> bool {
    distance_cm.is_some_and(|d| d > 0.0 && d < thresholds.obstacle_distance_cm)
}

/// `temperature < min || temperature > max`, NaN short-circuits to false
pub fn temperature_alert(temperature_c: Option<f32>, thresholds: &Thresholds) -> bool {
    match temperature_c {
        Some(t) if !t.is_nan() => {
            t < thresholds.temperature_min_c || t > thresholds.temperature_max_c
        }
        _ => false,
    }
}

/// `humidity < min || humidity > max`
pub fn humidity_alert(humidity_pct: Option<f32>, thresholds: &Thresholds) -> bool {
    match humidity_pct {
        Some(h) if !h.is_nan() => h < thresholds.humidity_min_pct || h > thresholds.humidity_max_pct,
        _ => false,
    }
}

/// `light < floor`
pub fn light_alert(light_level: Option<u16>, thresholds: &Thresholds) -> bool {
    light_level.is_some_and(|l| l < thresholds.light_floor)
}

/// `|x| + |y| + |z| > ceiling`
pub fn motion_alert(magnitude: Option<u32>, thresholds: &Thresholds) -> bool {
    magnitude.is_some_and(|m| m > thresholds.motion_ceiling)
}
