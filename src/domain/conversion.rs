//! Raw-to-physical conversion domain service
//!
//! The AHT10 reports both quantities as unsigned 20-bit magnitudes that map
//! linearly onto the device's full measurement span:
//!
//! - `humidity = raw * 100 / 2^20` (% RH)
//! - `temperature = raw * 200 / 2^20 - 50` (°C)

/// Full scale of a raw magnitude (`2^20`)
pub const RAW_FULL_SCALE: u32 = 1 << 20;

/// Mask selecting the 20 significant bits of a raw magnitude
pub const RAW_MASK: u32 = RAW_FULL_SCALE - 1;

/// Span of the humidity scale in % RH
pub const HUMIDITY_SPAN_PCT: f32 = 100.0;

/// Span of the temperature scale in °C
pub const TEMPERATURE_SPAN_C: f32 = 200.0;

/// Temperature at raw magnitude zero
pub const TEMPERATURE_OFFSET_C: f32 = -50.0;

/// Convert a raw humidity magnitude to relative humidity in percent.
///
/// The formula is applied as-is: magnitudes wider than 20 bits are not
/// clamped and yield values above 100 %.
#[inline]
pub fn humidity_percent(raw: u32) -> f32 {
    fraction(raw) * HUMIDITY_SPAN_PCT
}

/// Convert a raw temperature magnitude to degrees Celsius.
#[inline]
pub fn temperature_celsius(raw: u32) -> f32 {
    fraction(raw) * TEMPERATURE_SPAN_C + TEMPERATURE_OFFSET_C
}

/// `raw / 2^20`. Exact for any 24-bit magnitude, so the top of the
/// range never rounds up to the full span.
#[inline]
fn fraction(raw: u32) -> f32 {
    raw as f32 / RAW_FULL_SCALE as f32
}
