//! Screen content
//!
//! The panel is 128x64 pixels, which fits a header, a rule and four data
//! lines of 21 characters in a 6x10 font. Screens are built here and drawn
//! by the display driver.

use core::fmt::Write;

use heapless::{String, Vec};

use crate::sensor::SensorSnapshot;

/// Characters per line (128 px / 6 px glyphs)
pub const LINE_WIDTH: usize = 21;
/// Text lines below the header
pub const MAX_LINES: usize = 4;

/// Shown in place of a reading that is missing this cycle
const MISSING: &str = "--";

/// A screen buffer for the alert display
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Screen {
    /// Title line
    header: String<LINE_WIDTH>,
    /// Whether a horizontal rule separates header and body
    rule: bool,
    /// Body lines
    lines: Vec<String<LINE_WIDTH>, MAX_LINES>,
}

impl Screen {
    /// Create an empty screen
    pub const fn new() -> Self {
        Self {
            header: String::new(),
            rule: false,
            lines: Vec::new(),
        }
    }

    /// Startup splash
    pub fn welcome() -> Self {
        let mut screen = Self::new();
        screen.set_header("SMART CANE");
        screen.push_line("Starting...");
        screen
    }

    /// Alert summary: header, rule, and four readings
    ///
    /// Acceleration is left off the panel; it only appears in the
    /// diagnostic report.
    pub fn alert(snapshot: &SensorSnapshot) -> Self {
        let mut screen = Self::new();
        screen.set_header("!! ALERT !!");
        screen.rule = true;

        let mut line: String<LINE_WIDTH> = String::new();

        match snapshot.temperature_c {
            Some(t) => {
                let _ = write!(line, "Temp: {:.1} C", t);
            }
            None => {
                let _ = write!(line, "Temp: {}", MISSING);
            }
        }
        screen.push_line(&line);

        line.clear();
        match snapshot.humidity_pct {
            Some(h) => {
                let _ = write!(line, "Humidity: {:.1} %", h);
            }
            None => {
                let _ = write!(line, "Humidity: {}", MISSING);
            }
        }
        screen.push_line(&line);

        line.clear();
        match snapshot.distance_cm {
            Some(d) => {
                let _ = write!(line, "Distance: {:.1} cm", d);
            }
            None => {
                let _ = write!(line, "Distance: {}", MISSING);
            }
        }
        screen.push_line(&line);

        line.clear();
        match snapshot.light_level {
            Some(l) => {
                let _ = write!(line, "Light: {}", l);
            }
            None => {
                let _ = write!(line, "Light: {}", MISSING);
            }
        }
        screen.push_line(&line);

        screen
    }

    /// Set the header, truncated to the line width
    pub fn set_header(&mut self, text: &str) {
        self.header.clear();
        let _ = self.header.push_str(truncate(text));
    }

    /// Append a body line, ignored once the screen is full
    pub fn push_line(&mut self, text: &str) {
        let mut line = String::new();
        let _ = line.push_str(truncate(text));
        let _ = self.lines.push(line);
    }

    /// Get the header text
    pub fn header(&self) -> &str {
        self.header.as_str()
    }

    /// Check whether a rule is drawn under the header
    pub fn has_rule(&self) -> bool {
        self.rule
    }

    /// Body lines in display order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|l| l.as_str())
    }

    /// Get a body line
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(|l| l.as_str())
    }
}

/// Cut text to the panel width on a character boundary
fn truncate(text: &str) -> &str {
    match text.char_indices().nth(LINE_WIDTH) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
