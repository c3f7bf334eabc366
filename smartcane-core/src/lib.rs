//! Board-agnostic core logic for the smart cane firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (ranging, climate, motion, light, outputs)
//! - Per-iteration sensor snapshot
//! - Alert evaluation against static thresholds
//! - Alert presentation sequence (indicator, tone, display, report, dwell)
//! - Monitor loop controller and its state machine
//! - Compile-time configuration

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod alert;
pub mod config;
pub mod monitor;
pub mod sensor;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;
