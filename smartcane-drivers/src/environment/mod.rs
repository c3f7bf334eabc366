//! Temperature and humidity sensing

pub mod dht;

pub use dht::{Dht, DhtKind, DhtReading};
