//! Console port - line-oriented text output
//!
//! The station reports status and readings as text lines without knowing
//! the transport (UART, USB CDC, semihosting, a test buffer...)

/// Line terminator used on the console
pub const LINE_ENDING: &str = "\r\n";

/// Error type for console operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsoleError {
    /// The transmitter reported an error
    WriteFailed,
    /// The receiver reported an error (overrun, framing, break)
    ReadFailed,
}

impl core::fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConsoleError::WriteFailed => f.write_str("console write failed"),
            ConsoleError::ReadFailed => f.write_str("console read failed"),
        }
    }
}

/// Port for text output
pub trait ConsolePort {
    /// Write text as-is
    fn write_text(&mut self, text: &str) -> Result<(), ConsoleError>;

    /// Write text followed by [`LINE_ENDING`]
    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.write_text(text)?;
        self.write_text(LINE_ENDING)
    }
}
