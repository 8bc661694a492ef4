//! Measurement reply decoding
//!
//! ```text
//! byte   0        1        2        3        4        5
//!     [status] [H19..12] [H11..4] [H3..0|T19..16] [T15..8] [T7..0]
//! ```

use super::command::REPLY_LEN;
use crate::domain::RawSample;

/// Busy bit of the status byte
const STATUS_BUSY: u8 = 0x80;

/// Calibration-enabled bit of the status byte
const STATUS_CALIBRATED: u8 = 0x08;

/// The 6-byte reply read after a measurement
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawReply(pub [u8; REPLY_LEN]);

impl RawReply {
    /// Wrap a reply buffer
    pub const fn new(bytes: [u8; REPLY_LEN]) -> Self {
        Self(bytes)
    }

    /// Status byte. Not used for decoding, kept for diagnostics.
    pub const fn status(&self) -> u8 {
        self.0[0]
    }

    /// Busy flag as reported in the status byte
    pub const fn is_busy(&self) -> bool {
        self.status() & STATUS_BUSY != 0
    }

    /// Calibration flag as reported in the status byte
    pub const fn reports_calibrated(&self) -> bool {
        self.status() & STATUS_CALIBRATED != 0
    }

    /// 20-bit humidity magnitude
    pub const fn raw_humidity(&self) -> u32 {
        let b = &self.0;
        ((b[1] as u32) << 12) | ((b[2] as u32) << 4) | ((b[3] as u32 >> 4) & 0x0F)
    }

    /// 20-bit temperature magnitude
    pub const fn raw_temperature(&self) -> u32 {
        let b = &self.0;
        (((b[3] as u32) & 0x0F) << 16) | ((b[4] as u32) << 8) | b[5] as u32
    }

    /// Decode both magnitudes
    pub const fn decode(&self) -> RawSample {
        RawSample {
            humidity: self.raw_humidity(),
            temperature: self.raw_temperature(),
        }
    }

    /// Build a reply from two 20-bit magnitudes and a status byte.
    ///
    /// Bits above the 20th are dropped.
    pub const fn pack(status: u8, humidity: u32, temperature: u32) -> Self {
        Self([
            status,
            (humidity >> 12) as u8,
            (humidity >> 4) as u8,
            (((humidity & 0x0F) << 4) as u8) | ((temperature >> 16) & 0x0F) as u8,
            (temperature >> 8) as u8,
            temperature as u8,
        ])
    }
}

impl From<[u8; REPLY_LEN]> for RawReply {
    fn from(bytes: [u8; REPLY_LEN]) -> Self {
        Self(bytes)
    }
}
