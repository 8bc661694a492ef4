//! UART console adapter
//!
//! This adapter implements the ConsolePort trait on top of any
//! non-blocking `embedded_hal_nb` serial port, and adds the polling
//! receive helpers used for simple interactive input.

use core::fmt::Write as _;

use embedded_hal::delay::DelayNs;
use embedded_hal_nb::serial::{Read, Write};

use crate::ports::console::{ConsoleError, ConsolePort, LINE_ENDING};

/// Wait between two attempts to push a byte into a full transmitter (µs)
const TX_RETRY_US: u32 = 10;

/// Interval between two receive polls (µs)
const RX_POLL_US: u32 = 1_000;

/// `read_text` gives up after this long without a byte (µs)
const RX_IDLE_TIMEOUT_US: u32 = 20_000;

/// Serial console over a UART
pub struct UartConsole<S, D> {
    serial: S,
    delay: D,
    /// Byte consumed by `has_data` and not yet handed out
    pending: Option<u8>,
}

impl<S, D> UartConsole<S, D>
where
    S: Read<u8> + Write<u8>,
    D: DelayNs,
{
    /// Create a console over an already configured serial port
    pub fn new(serial: S, delay: D) -> Self {
        Self {
            serial,
            delay,
            pending: None,
        }
    }

    /// Send one byte, waiting while the transmitter is full
    pub fn send_char(&mut self, byte: u8) -> Result<(), ConsoleError> {
        loop {
            match self.serial.write(byte) {
                Ok(()) => return Ok(()),
                Err(nb::Error::WouldBlock) => self.delay.delay_us(TX_RETRY_US),
                Err(nb::Error::Other(_)) => return Err(ConsoleError::WriteFailed),
            }
        }
    }

    /// Send a string byte by byte
    pub fn send_text(&mut self, text: &str) -> Result<(), ConsoleError> {
        for byte in text.bytes() {
            self.send_char(byte)?;
        }
        Ok(())
    }

    /// Send a string followed by `\r\n`
    pub fn send_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.send_text(text)?;
        self.send_text(LINE_ENDING)
    }

    /// Send a number in its shortest decimal form (`23.5`, `100`, `-0.25`)
    pub fn send_value(&mut self, value: f32) -> Result<(), ConsoleError> {
        let mut text = heapless::String::<32>::new();
        write!(text, "{}", value).map_err(|_| ConsoleError::WriteFailed)?;
        self.send_text(&text)
    }

    /// Block until the transmitter has sent everything
    pub fn flush(&mut self) -> Result<(), ConsoleError> {
        nb::block!(self.serial.flush()).map_err(|_| ConsoleError::WriteFailed)
    }

    /// Take one received byte if there is one
    pub fn read_char(&mut self) -> Result<Option<u8>, ConsoleError> {
        if let Some(byte) = self.pending.take() {
            return Ok(Some(byte));
        }
        match self.serial.read() {
            Ok(byte) => Ok(Some(byte)),
            Err(nb::Error::WouldBlock) => Ok(None),
            Err(nb::Error::Other(_)) => Err(ConsoleError::ReadFailed),
        }
    }

    /// Whether a received byte is waiting.
    ///
    /// The probed byte stays queued for the next `read_char`.
    pub fn has_data(&mut self) -> Result<bool, ConsoleError> {
        if self.pending.is_some() {
            return Ok(true);
        }
        self.pending = self.read_char()?;
        Ok(self.pending.is_some())
    }

    /// Read text into `buf` until `delimiter`, a full buffer, or an idle
    /// gap of 20 ms.
    ///
    /// `\r` is dropped and the delimiter is not stored. Returns the number of
    /// bytes written to `buf`, 0 when nothing arrived.
    pub fn read_text(&mut self, buf: &mut [u8], delimiter: u8) -> Result<usize, ConsoleError> {
        let mut len = 0;
        let mut idle_us = 0;

        while len < buf.len() {
            let Some(byte) = self.read_char()? else {
                if idle_us >= RX_IDLE_TIMEOUT_US {
                    break;
                }
                self.delay.delay_us(RX_POLL_US);
                idle_us += RX_POLL_US;
                continue;
            };

            idle_us = 0;
            if byte == delimiter {
                break;
            }
            if byte == b'\r' {
                continue;
            }
            buf[len] = byte;
            len += 1;
        }

        Ok(len)
    }

    /// Discard everything already received. Returns the number of bytes dropped.
    pub fn clear_input(&mut self) -> Result<usize, ConsoleError> {
        let mut dropped = 0;
        while self.read_char()?.is_some() {
            dropped += 1;
        }
        if dropped > 0 {
            trace!("uart: dropped {=usize} bytes", dropped);
        }
        Ok(dropped)
    }

    /// Release the serial port and the delay provider
    pub fn release(self) -> (S, D) {
        (self.serial, self.delay)
    }
}

impl<S, D> ConsolePort for UartConsole<S, D>
where
    S: Read<u8> + Write<u8>,
    D: DelayNs,
{
    fn write_text(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.send_text(text)
    }

    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.send_line(text)
    }
}
