//! Indicator and input drivers

pub mod button;
pub mod indicator;

pub use button::ActiveLowButton;
pub use indicator::GpioIndicator;
