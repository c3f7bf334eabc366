//! RP2040-specific HAL for the smart cane firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `smartcane-hal` traits, plus board-level helpers:
//!
//! - Monotonic clock and blocking delays (`embassy-time`)
//! - Blocking ADC channel
//! - PWM square-wave tone for the buzzer
//! - Blocking UART diagnostic console

#![no_std]

pub mod adc;
pub mod clock;
pub mod console;
pub mod tone;

pub use adc::AdcInput;
pub use clock::EmbassyClock;
pub use console::SerialConsole;
pub use tone::PwmTone;
