//! Sensor traits

use crate::sensor::Acceleration;

/// Errors that can occur while taking a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// The sensor did not answer within its timing window
    Timeout,
    /// The sensor answered with data that is not a usable number
    /// (checksum mismatch, NaN, out-of-range encoding)
    InvalidReading,
    /// Pin, bus or converter failure
    Bus,
}

/// Ultrasonic time-of-flight ranger
pub trait RangeFinder {
    /// Measure the distance to the nearest echo in centimeters
    ///
    /// Blocks for at most the echo timeout. A missing echo is
    /// `Err(SensorError::Timeout)`, never a zero or negative distance.
    fn measure_distance(&mut self) -> Result<f32, SensorError>;
}

/// Temperature and relative humidity sensor
pub trait EnvironmentSensor {
    /// Read the ambient temperature in degrees Celsius
    fn read_temperature(&mut self) -> Result<f32, SensorError>;

    /// Read the relative humidity in percent
    fn read_humidity(&mut self) -> Result<f32, SensorError>;
}

/// Three-axis accelerometer
pub trait MotionSensor {
    /// Bring the device out of reset and configure its ranges
    fn initialize(&mut self) -> Result<(), SensorError> {
        Ok(())
    }

    /// One-shot connectivity check performed at startup
    fn test_connection(&mut self) -> bool;

    /// Read raw signed per-axis acceleration
    fn read_acceleration(&mut self) -> Result<Acceleration, SensorError>;
}

/// Ambient light sensor on a single analog channel
pub trait LightSensor {
    /// Read the instantaneous light level on a 0-1023 scale
    ///
    /// No averaging or filtering is applied.
    fn read_light_level(&mut self) -> Result<u16, SensorError>;
}
