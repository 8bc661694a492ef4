//! Domain layer - pure logic independent of hardware
//!
//! This module contains the climate reading entities, the raw-to-physical
//! conversion service and the alert rules.

pub mod alert;
pub mod conversion;
pub mod reading;

pub use alert::{AlertThresholds, Alerts};
pub use conversion::{humidity_percent, temperature_celsius};
pub use reading::{ClimateReading, RawSample};
