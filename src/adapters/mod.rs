//! Adapters - concrete implementations of ports
//!
//! Adapters connect the station to the outside world by implementing
//! the port traits. Each adapter knows how to work with a specific
//! device or peripheral.
//!
//! # Available Adapters
//!
//! - **aht10_sensor**: AHT10 temperature/humidity sensor via I2C
//! - **uart_console**: text console over a UART
//! - **oled_display**: SSD1306 128x64 OLED via I2C

pub mod aht10_sensor;
pub mod oled_display;
pub mod uart_console;

pub use aht10_sensor::Aht10Sensor;
pub use oled_display::OledDisplay;
pub use uart_console::UartConsole;
