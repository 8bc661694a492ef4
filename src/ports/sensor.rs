//! Sensor port - abstraction for reading climate data
//!
//! This trait allows the station to read the sensor without knowing the
//! specific hardware implementation (AHT10 on I2C, mock, etc.)

use crate::domain::{ClimateReading, RawSample};

/// Error type for sensor operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sensor did not respond during initialization
    NotDetected,
    /// Sensor not initialized (or reset since)
    NotInitialized,
    /// Failed to read from sensor
    ReadFailed,
}

impl core::fmt::Display for SensorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            SensorError::NotDetected => "sensor not detected",
            SensorError::NotInitialized => "sensor not initialized",
            SensorError::ReadFailed => "sensor read failed",
        };
        f.write_str(msg)
    }
}

/// Port for reading the climate sensor
///
/// Calls block until the bus transaction and the device's conversion time
/// have completed.
///
/// # Example Implementation
///
/// ```ignore
/// struct Aht10Sensor<I, D> {
///     session: Aht10<I>,
///     delay: D,
/// }
///
/// impl<I: I2c, D: DelayNs> SensorPort for Aht10Sensor<I, D> {
///     fn initialize(&mut self) -> Result<(), SensorError> {
///         self.session.initialize(&mut self.delay).map_err(|_| SensorError::NotDetected)
///     }
///
///     fn read(&mut self) -> Result<ClimateReading, SensorError> {
///         self.session.sample(&mut self.delay).map_err(|_| SensorError::ReadFailed)
///     }
/// }
/// ```
pub trait SensorPort {
    /// Bring the sensor into a state where `read` returns valid data
    fn initialize(&mut self) -> Result<(), SensorError>;

    /// Take one measurement
    fn read(&mut self) -> Result<ClimateReading, SensorError>;

    /// Get the last raw sample (for diagnostics)
    ///
    /// Returns `None` if the sensor doesn't expose raw values.
    fn last_raw_value(&self) -> Option<RawSample> {
        None
    }
}
