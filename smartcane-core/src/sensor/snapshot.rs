//! Per-iteration sensor snapshot

/// Raw signed accelerometer reading, one value per axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Acceleration {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl Acceleration {
    /// Create a reading from raw axis values
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Manhattan magnitude `|x| + |y| + |z|`
    ///
    /// Not a physical unit; only meaningful against the motion threshold.
    pub fn magnitude(&self) -> u32 {
        u32::from(self.x.unsigned_abs())
            + u32::from(self.y.unsigned_abs())
            + u32::from(self.z.unsigned_abs())
    }
}

/// One reading from every sensor channel
///
/// A channel that failed to produce a usable value this cycle is `None`.
/// `None` suppresses that channel's alert for the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorSnapshot {
    /// Ambient temperature (°C)
    pub temperature_c: Option<f32>,
    /// Relative humidity (%)
    pub humidity_pct: Option<f32>,
    /// Distance to the nearest obstacle (cm)
    pub distance_cm: Option<f32>,
    /// Ambient light level (0-1023)
    pub light_level: Option<u16>,
    /// Raw accelerometer reading
    pub acceleration: Option<Acceleration>,
}

impl SensorSnapshot {
    /// Acceleration magnitude, if the accelerometer produced a reading
    pub fn acceleration_magnitude(&self) -> Option<u32> {
        self.acceleration.map(|a| a.magnitude())
    }
}

/// Keep a floating point reading only if it is a usable number
pub(crate) fn finite(value: Option<f32>) -> Option<f32> {
    value.filter(|v| v.is_finite())
}
