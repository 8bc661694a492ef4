//! Ports (interfaces) defining the boundaries of the application
//!
//! Ports are traits that define how the station interacts with hardware.
//! They keep the control loop independent of specific implementations.
//!
//! # Hexagonal Architecture
//!
//! - **SensorPort**: How we read climate data (AHT10 on I2C, mock)
//! - **ConsolePort**: How we print text lines (UART, mock)
//! - **DisplayPort**: How we show the latest reading (SSD1306, mock)

pub mod console;
pub mod display;
pub mod sensor;

pub use console::{ConsoleError, ConsolePort, LINE_ENDING};
pub use display::{DisplayError, DisplayPort};
pub use sensor::{SensorError, SensorPort};
