//! AHT10 sensor adapter
//!
//! This adapter implements the SensorPort trait on top of the blocking
//! [`Aht10`] session, owning the delay provider the session needs for the
//! device's settle and conversion times.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{Error as _, I2c};

use crate::aht10::{Aht10, Error};
use crate::domain::{ClimateReading, RawSample};
use crate::ports::sensor::{SensorError, SensorPort};

/// AHT10 adapter implementing SensorPort
pub struct Aht10Sensor<I, D> {
    session: Aht10<I>,
    delay: D,
}

impl<I: I2c, D: DelayNs> Aht10Sensor<I, D> {
    /// Create an adapter for a sensor at the default address
    ///
    /// The sensor is not initialized until `initialize()` is called.
    pub fn new(i2c: I, delay: D) -> Self {
        Self {
            session: Aht10::new(i2c),
            delay,
        }
    }

    /// Create an adapter for a sensor at a custom address
    pub fn with_address(i2c: I, address: u8, delay: D) -> Self {
        Self {
            session: Aht10::with_address(i2c, address),
            delay,
        }
    }

    /// Access the underlying session
    pub fn session(&self) -> &Aht10<I> {
        &self.session
    }

    /// Release the I2C bus and the delay provider
    pub fn release(self) -> (I, D) {
        (self.session.release(), self.delay)
    }
}

impl<I: I2c, D: DelayNs> SensorPort for Aht10Sensor<I, D> {
    fn initialize(&mut self) -> Result<(), SensorError> {
        self.session.initialize(&mut self.delay).map_err(|e| match e {
            Error::I2c(bus) => {
                warn!("AHT10: no answer at {=u8:#x}: {:?}", self.session.address(), bus.kind());
                SensorError::NotDetected
            }
            Error::NotCalibrated => SensorError::NotInitialized,
        })
    }

    fn read(&mut self) -> Result<ClimateReading, SensorError> {
        self.session.sample(&mut self.delay).map_err(|e| match e {
            Error::I2c(bus) => {
                warn!("AHT10: measurement failed: {:?}", bus.kind());
                SensorError::ReadFailed
            }
            Error::NotCalibrated => SensorError::NotInitialized,
        })
    }

    fn last_raw_value(&self) -> Option<RawSample> {
        self.session.last_raw()
    }
}
