//! Sensor readings
//!
//! A [`SensorSnapshot`] is taken fresh every evaluation cycle and
//! discarded afterwards; no history is kept.

pub mod snapshot;
pub mod suite;

pub use snapshot::{Acceleration, SensorSnapshot};
pub use suite::{SensorSuite, Sensors};
