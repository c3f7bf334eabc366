//! Hardware abstraction traits
//!
//! These traits define the interface between the monitoring logic
//! and hardware-specific driver implementations.

pub mod display;
pub mod output;
pub mod sensor;

pub use display::{AlertDisplay, DisplayError};
pub use output::{AlertIndicator, ManualTrigger};
pub use sensor::{EnvironmentSensor, LightSensor, MotionSensor, RangeFinder, SensorError};
