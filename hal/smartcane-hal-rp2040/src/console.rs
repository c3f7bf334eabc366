//! Diagnostic serial console
//!
//! Blocking UART transmitter used as the text sink for boot and alert
//! reports.

use core::fmt;

use embassy_rp::uart::{Blocking, UartTx};

/// Write-only serial console
pub struct SerialConsole<'d> {
    tx: UartTx<'d, Blocking>,
}

impl<'d> SerialConsole<'d> {
    pub fn new(tx: UartTx<'d, Blocking>) -> Self {
        Self { tx }
    }
}

impl fmt::Write for SerialConsole<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        // Terminals expect CRLF
        for (i, line) in s.split('\n').enumerate() {
            if i > 0 {
                self.tx.blocking_write(b"\r\n").map_err(|_| fmt::Error)?;
            }
            self.tx
                .blocking_write(line.as_bytes())
                .map_err(|_| fmt::Error)?;
        }
        Ok(())
    }
}
