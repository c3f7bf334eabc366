//! Alert display
//!
//! Screens are laid out with `embedded-graphics` on any binary-color draw
//! target; [`OledDisplay`] puts them on an SSD1306 panel.

pub mod oled;
pub mod render;

pub use oled::OledDisplay;
pub use render::draw_screen;
