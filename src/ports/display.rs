//! Display port - pixel display for the latest reading

use crate::domain::{Alerts, ClimateReading};

/// Error type for display operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Controller did not accept the init sequence
    InitFailed,
    /// Drawing into the frame buffer failed
    DrawFailed,
    /// Sending the frame buffer to the panel failed
    FlushFailed,
}

impl core::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            DisplayError::InitFailed => "display init failed",
            DisplayError::DrawFailed => "display draw failed",
            DisplayError::FlushFailed => "display flush failed",
        };
        f.write_str(msg)
    }
}

/// Port for showing readings on a display
pub trait DisplayPort {
    /// Power the display up and blank it
    fn initialize(&mut self) -> Result<(), DisplayError>;

    /// Replace the screen contents with a reading and its alerts
    fn show(&mut self, reading: &ClimateReading, alerts: Alerts) -> Result<(), DisplayError>;
}
