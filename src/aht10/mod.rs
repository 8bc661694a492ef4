//! AHT10 humidity/temperature sensor session
//!
//! Blocking driver for the AHT10 over any `embedded_hal` 1.0 I2C bus.
//!
//! ```text
//!   initialize():  SoftReset ─► wait 20 ms ─► Calibrate
//!
//!   sample():      TriggerMeasurement ─► wait 80 ms ─► read 6 bytes ─► decode
//! ```
//!
//! The delays are minimums required by the device; the delay provider is
//! passed per call so the session itself only owns the bus.
//!
//! ```ignore
//! let mut sensor = Aht10::new(i2c);
//! sensor.initialize(&mut delay)?;
//! let reading = sensor.sample(&mut delay)?;
//! ```

pub mod command;
pub mod reply;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::domain::{humidity_percent, temperature_celsius, ClimateReading, RawSample};

pub use command::{Command, DEFAULT_ADDRESS, MEASUREMENT_TIME_MS, REPLY_LEN, RESET_SETTLE_MS};
pub use reply::RawReply;

/// Driver errors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// I2C bus error (NACK, arbitration loss, absent device)
    I2c(E),
    /// A measurement was requested before the calibration command went out
    NotCalibrated,
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C bus error: {:?}", e),
            Error::NotCalibrated => f.write_str("sensor not calibrated"),
        }
    }
}

/// An AHT10 sensor on the I2C bus `I`.
pub struct Aht10<I> {
    i2c: I,
    address: u8,
    calibrated: bool,
    last_raw: Option<RawSample>,
}

impl<I: I2c> Aht10<I> {
    /// Bind a session to the bus at [`DEFAULT_ADDRESS`].
    ///
    /// No bus traffic happens until [`initialize`](Self::initialize).
    pub fn new(i2c: I) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Bind a session to the bus at a custom address
    pub fn with_address(i2c: I, address: u8) -> Self {
        Self {
            i2c,
            address,
            calibrated: false,
            last_raw: None,
        }
    }

    /// Reset the device and load its calibration.
    ///
    /// Takes at least [`RESET_SETTLE_MS`]. On error the session stays
    /// uncalibrated and `sample` refuses to run.
    pub fn initialize(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<I::Error>> {
        self.last_raw = None;
        self.reset(delay)?;
        self.send(Command::Calibrate)?;
        self.calibrated = true;
        debug!("aht10: calibrated at {=u8:#x}", self.address);
        Ok(())
    }

    /// Soft-reset the device and wait for it to settle.
    ///
    /// The device forgets its calibration, so [`initialize`](Self::initialize)
    /// must run again before sampling.
    pub fn reset(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<I::Error>> {
        self.calibrated = false;
        self.send(Command::SoftReset)?;
        delay.delay_ms(RESET_SETTLE_MS);
        Ok(())
    }

    /// Run one measurement cycle and return the calibrated values.
    ///
    /// Takes at least [`MEASUREMENT_TIME_MS`]. Both raw fields are replaced
    /// together, and only when the read succeeds.
    pub fn sample(&mut self, delay: &mut impl DelayNs) -> Result<ClimateReading, Error<I::Error>> {
        if !self.calibrated {
            return Err(Error::NotCalibrated);
        }

        self.send(Command::TriggerMeasurement)?;
        delay.delay_ms(MEASUREMENT_TIME_MS);

        let reply = self.read_reply()?;
        let raw = reply.decode();
        trace!(
            "aht10: status={=u8:#x} rh_raw={=u32} t_raw={=u32}",
            reply.status(),
            raw.humidity,
            raw.temperature
        );

        self.last_raw = Some(raw);
        Ok(raw.to_reading())
    }

    /// Temperature of the last successful sample in °C
    pub fn temperature_celsius(&self) -> Option<f32> {
        self.last_raw.map(|raw| temperature_celsius(raw.temperature))
    }

    /// Relative humidity of the last successful sample in %
    pub fn relative_humidity(&self) -> Option<f32> {
        self.last_raw.map(|raw| humidity_percent(raw.humidity))
    }

    /// Raw magnitudes of the last successful sample
    pub fn last_raw(&self) -> Option<RawSample> {
        self.last_raw
    }

    /// Whether the calibration command has been issued since the last reset
    pub fn is_calibrated(&self) -> bool {
        self.calibrated
    }

    /// Device address in use
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the underlying I2C bus
    pub fn release(self) -> I {
        self.i2c
    }

    fn send(&mut self, command: Command) -> Result<(), Error<I::Error>> {
        self.i2c
            .write(self.address, &command.bytes())
            .map_err(Error::I2c)
    }

    fn read_reply(&mut self) -> Result<RawReply, Error<I::Error>> {
        let mut buf = [0u8; REPLY_LEN];
        self.i2c.read(self.address, &mut buf).map_err(Error::I2c)?;
        Ok(RawReply::new(buf))
    }
}
