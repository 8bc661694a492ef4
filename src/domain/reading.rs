//! Climate reading domain entities
//!
//! This module defines the values produced by one acquisition cycle. It has
//! no knowledge of how they were read or where they are displayed.

use super::conversion::{humidity_percent, temperature_celsius, RAW_MASK};

/// Raw 20-bit magnitudes decoded from a single sensor reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    /// Raw relative humidity magnitude (20 bits)
    pub humidity: u32,
    /// Raw temperature magnitude (20 bits)
    pub temperature: u32,
}

impl RawSample {
    /// Create a raw sample, keeping only the 20 significant bits of each field
    pub const fn new(humidity: u32, temperature: u32) -> Self {
        Self {
            humidity: humidity & RAW_MASK,
            temperature: temperature & RAW_MASK,
        }
    }

    /// Convert both magnitudes to physical units
    pub fn to_reading(&self) -> ClimateReading {
        ClimateReading::new(
            temperature_celsius(self.temperature),
            humidity_percent(self.humidity),
        )
    }
}

/// A calibrated climate reading.
///
/// Both values always come from the same sensor reply.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClimateReading {
    /// Temperature in Celsius
    pub temperature_c: f32,
    /// Relative humidity in percent
    pub humidity_pct: f32,
}

impl ClimateReading {
    /// Create a new reading
    pub const fn new(temperature_c: f32, humidity_pct: f32) -> Self {
        Self {
            temperature_c,
            humidity_pct,
        }
    }
}

impl From<RawSample> for ClimateReading {
    fn from(raw: RawSample) -> Self {
        raw.to_reading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_masks_to_twenty_bits() {
        let raw = RawSample::new(0xFFF_FFFF, 0x10_0001);
        assert_eq!(raw.humidity, 0xF_FFFF);
        assert_eq!(raw.temperature, 0x1);
    }

    #[test]
    fn test_to_reading() {
        let reading: ClimateReading = RawSample::new(1 << 19, 1 << 18).into();
        assert_eq!(reading.humidity_pct, 50.0);
        assert_eq!(reading.temperature_c, 0.0);
    }
}
