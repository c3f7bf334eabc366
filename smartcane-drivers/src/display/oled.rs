//! SSD1306 128x64 OLED
//!
//! Frames are composed in the driver's RAM buffer and sent in one flush,
//! so the panel never shows a half-drawn screen.

use smartcane_core::alert::Screen;
use smartcane_core::traits::{AlertDisplay, DisplayError};
use ssd1306::mode::{BufferedGraphicsMode, DisplayConfig};
use ssd1306::prelude::{DisplayRotation, DisplaySize128x64, WriteOnlyDataCommand};
use ssd1306::Ssd1306;

use super::render::draw_screen;

type Panel<DI> = Ssd1306<DI, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// SSD1306 alert display
pub struct OledDisplay<DI> {
    panel: Panel<DI>,
}

impl<DI: WriteOnlyDataCommand> OledDisplay<DI> {
    /// Wrap a display interface, e.g. `ssd1306::I2CDisplayInterface::new(i2c)`
    pub fn new(interface: DI) -> Self {
        let panel = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        Self { panel }
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.panel.flush().map_err(|_| DisplayError::Interface)
    }
}

impl<DI: WriteOnlyDataCommand> AlertDisplay for OledDisplay<DI> {
    fn init(&mut self) -> Result<(), DisplayError> {
        self.panel.init().map_err(|_| DisplayError::InitFailed)?;
        self.blank()
    }

    fn show(&mut self, screen: &Screen) -> Result<(), DisplayError> {
        self.panel.clear_buffer();
        draw_screen(&mut self.panel, screen).map_err(|_| DisplayError::Interface)?;
        self.flush()
    }

    fn blank(&mut self) -> Result<(), DisplayError> {
        self.panel.clear_buffer();
        self.flush()
    }
}
