//! Station configuration

use crate::aht10::DEFAULT_ADDRESS;
use crate::domain::AlertThresholds;

/// Default I2C address of the SSD1306 panel
pub const DISPLAY_ADDRESS: u8 = 0x3C;

/// Error type for configuration validation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// UART baud rate is zero
    ZeroBaudRate,
    /// Read interval is zero
    ZeroInterval,
    /// An I2C address is outside the 7-bit range
    InvalidAddress,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ConfigError::ZeroBaudRate => "uart baud rate must be non-zero",
            ConfigError::ZeroInterval => "read interval must be non-zero",
            ConfigError::InvalidAddress => "i2c address must fit in 7 bits",
        };
        f.write_str(msg)
    }
}

/// Configuration for the climate station
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StationConfig {
    /// Time between two measurement cycles (milliseconds)
    pub read_interval_ms: u64,
    /// Wait before talking to the sensor after power-up (milliseconds)
    pub startup_delay_ms: u32,
    /// Console UART baud rate
    pub uart_baud: u32,
    /// I2C bus frequency for sensor and display (Hz)
    pub i2c_frequency_hz: u32,
    /// 7-bit address of the AHT10
    pub sensor_address: u8,
    /// 7-bit address of the SSD1306
    pub display_address: u8,
    /// Alert thresholds shown on the display
    pub thresholds: AlertThresholds,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            read_interval_ms: 1000,
            startup_delay_ms: 1000,
            uart_baud: 115_200,
            i2c_frequency_hz: 100_000,
            sensor_address: DEFAULT_ADDRESS,
            display_address: DISPLAY_ADDRESS,
            thresholds: AlertThresholds::DEFAULT,
        }
    }
}

impl StationConfig {
    /// Create config for fast sampling.
    ///
    /// Each cycle still spends 80 ms in the sensor conversion.
    pub const fn high_frequency() -> Self {
        Self {
            read_interval_ms: 200,
            startup_delay_ms: 1000,
            uart_baud: 115_200,
            i2c_frequency_hz: 400_000,
            sensor_address: DEFAULT_ADDRESS,
            display_address: DISPLAY_ADDRESS,
            thresholds: AlertThresholds::DEFAULT,
        }
    }

    /// Create config for low-power operation
    pub const fn low_power() -> Self {
        Self {
            read_interval_ms: 60_000,
            startup_delay_ms: 1000,
            uart_baud: 115_200,
            i2c_frequency_hz: 100_000,
            sensor_address: DEFAULT_ADDRESS,
            display_address: DISPLAY_ADDRESS,
            thresholds: AlertThresholds::DEFAULT,
        }
    }

    /// Check values that would leave the station unable to run
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.uart_baud == 0 {
            return Err(ConfigError::ZeroBaudRate);
        }
        if self.read_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.sensor_address > 0x7F || self.display_address > 0x7F {
            return Err(ConfigError::InvalidAddress);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = StationConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.sensor_address, 0x38);
        assert_eq!(config.display_address, 0x3C);
        assert_eq!(config.uart_baud, 115_200);
    }

    #[test]
    fn test_presets_are_valid() {
        assert_eq!(StationConfig::high_frequency().validate(), Ok(()));
        assert_eq!(StationConfig::low_power().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_baud() {
        let config = StationConfig {
            uart_baud: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroBaudRate));
    }

    #[test]
    fn test_rejects_zero_interval() {
        let config = StationConfig {
            read_interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroInterval));
    }

    #[test]
    fn test_rejects_out_of_range_address() {
        let config = StationConfig {
            display_address: 0xF0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidAddress));
    }
}
