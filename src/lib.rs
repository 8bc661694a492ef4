//! RP2040 Climate Station Library
//!
//! This library provides a hexagonal architecture for an AHT10
//! temperature/humidity station that reports over a UART and an SSD1306 OLED.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Domain Layer                                 │
//! │  - RawSample / ClimateReading                                    │
//! │  - 20-bit raw to °C / %RH conversion                            │
//! │  - AlertThresholds                                               │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Ports (Traits)                               │
//! │  - SensorPort: read climate data                                │
//! │  - ConsolePort: text lines                                      │
//! │  - DisplayPort: show the latest reading                         │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Adapters                                     │
//! │  - Aht10Sensor: AHT10 session on I2C                            │
//! │  - UartConsole: embedded-hal-nb serial                          │
//! │  - OledDisplay: SSD1306 buffered graphics                       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The [`station::Station`] drives one cycle at a time; the firmware decides
//! how long to sleep between cycles.
//!
//! # Features
//!
//! - `defmt`: log through defmt
//! - `rp2040`: firmware dependencies (embassy-rp, executor, RTT logging)
//! - `std`: host-side tools (`climate_monitor`)

#![cfg_attr(not(any(test, feature = "std")), no_std)]

// Must come first so the logging macros are visible in every module
mod fmt;

// ============================================================================
// Sensor driver
// ============================================================================

pub mod aht10;

pub use aht10::{Aht10, Command, RawReply};

// ============================================================================
// Hexagonal Architecture
// ============================================================================

/// Domain layer - pure measurement logic
pub mod domain;

/// Ports - traits defining boundaries
pub mod ports;

/// Adapters - concrete implementations
pub mod adapters;

pub mod config;
pub mod station;

// ============================================================================
// Protocol (shared between host and device)
// ============================================================================

pub mod report;

// Re-export key domain types
pub use domain::{AlertThresholds, Alerts, ClimateReading, RawSample};

// Re-export key port traits
pub use ports::{ConsolePort, DisplayPort, SensorPort};

// Re-export adapters
pub use adapters::{Aht10Sensor, OledDisplay, UartConsole};

pub use config::StationConfig;
pub use report::{ReadingStats, ReportLine};
pub use station::{CycleOutcome, Station};
