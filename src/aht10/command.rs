//! AHT10 command set
//!
//! Every command is a fixed 3-byte frame: opcode followed by two argument
//! bytes. The values are device protocol constants.

/// Default 7-bit I2C address of the AHT10
pub const DEFAULT_ADDRESS: u8 = 0x38;

/// Settle time after a soft reset, in milliseconds
pub const RESET_SETTLE_MS: u32 = 20;

/// Conversion time after a measurement trigger, in milliseconds
pub const MEASUREMENT_TIME_MS: u32 = 80;

/// Size of the measurement reply in bytes
pub const REPLY_LEN: usize = 6;

/// Commands understood by the sensor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Restart the sensor without power cycling (0xBA)
    SoftReset,
    /// Load the factory calibration (0xE1 0x08 0x00)
    Calibrate,
    /// Start a humidity/temperature conversion (0xAC 0x33 0x00)
    TriggerMeasurement,
}

impl Command {
    /// Opcode byte
    pub const fn opcode(self) -> u8 {
        match self {
            Command::SoftReset => 0xBA,
            Command::Calibrate => 0xE1,
            Command::TriggerMeasurement => 0xAC,
        }
    }

    /// Complete frame as written on the bus
    pub const fn bytes(self) -> [u8; 3] {
        match self {
            Command::SoftReset => [0xBA, 0x00, 0x00],
            Command::Calibrate => [0xE1, 0x08, 0x00],
            Command::TriggerMeasurement => [0xAC, 0x33, 0x00],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_are_bit_exact() {
        assert_eq!(Command::SoftReset.bytes(), [0xBA, 0x00, 0x00]);
        assert_eq!(Command::Calibrate.bytes(), [0xE1, 0x08, 0x00]);
        assert_eq!(Command::TriggerMeasurement.bytes(), [0xAC, 0x33, 0x00]);
    }

    #[test]
    fn test_opcode_leads_frame() {
        for cmd in [Command::SoftReset, Command::Calibrate, Command::TriggerMeasurement] {
            assert_eq!(cmd.bytes()[0], cmd.opcode());
        }
    }
}
