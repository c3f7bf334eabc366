//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in smartcane-core for the cane's components:
//!
//! - Ultrasonic ranger (HC-SR04)
//! - Temperature/humidity sensor (DHT11, DHT22)
//! - Accelerometer (MPU6050)
//! - Light sensor (photoresistor on an ADC channel)
//! - Outputs (indicator LED, manual alert button)
//! - Display (SSD1306 128x64 OLED)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod environment;
pub mod light;
pub mod motion;
pub mod output;
pub mod ranging;

#[cfg(test)]
pub(crate) mod testing;
