//! Smart Cane Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits that `embedded-hal`
//! does not already cover. Chip-specific crates implement them so the
//! monitor loop and drivers can run against real hardware or host fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (smartcane-firmware)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  smartcane-core / smartcane-drivers     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  smartcane-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!           ┌───────────────────┐
//!           │ smartcane-hal-    │
//!           │     rp2040        │
//!           └───────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`clock::Clock`], [`clock::Timebase`] - Monotonic time and blocking delays
//! - [`adc::AnalogInput`] - Single analog channel
//! - [`tone::ToneOutput`] - Square-wave tone generator for a buzzer
//!
//! Digital pins, I2C and delays come straight from `embedded-hal` 1.0.

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod clock;
pub mod tone;

// Re-export key traits at crate root for convenience
pub use adc::{AdcError, AnalogInput};
pub use clock::{Clock, Timebase};
pub use tone::ToneOutput;
