//! Text report protocol shared between the station and the host monitor
//!
//! The station prints one line per event on its console:
//!
//! ```text
//! Initializing sensor...
//! AHT10 initialized successfully!
//! Display initialized.
//! Temperature: 23.41°C	Humidity: 41.07%
//! Reading not available from AHT10.
//! ```
//!
//! Lines end with `\r\n`. The host side classifies them with
//! [`ReportLine::parse`].

use core::fmt::Write;

use crate::domain::ClimateReading;

/// Capacity of a formatted report line
pub const MAX_LINE_LEN: usize = 64;

/// A formatted report line
pub type Line = heapless::String<MAX_LINE_LEN>;

/// Printed before the sensor is initialized
pub const STATUS_INITIALIZING: &str = "Initializing sensor...";

/// Printed once the sensor accepted its calibration
pub const STATUS_SENSOR_READY: &str = "AHT10 initialized successfully!";

/// Printed when the sensor could not be initialized
pub const STATUS_SENSOR_FAILED: &str = "AHT10 initialization failed!";

/// Printed once the display is up
pub const STATUS_DISPLAY_READY: &str = "Display initialized.";

/// Printed when a cycle produced no reading
pub const UNAVAILABLE: &str = "Reading not available from AHT10.";

const TEMPERATURE_LABEL: &str = "Temperature: ";
const FIELD_SEPARATOR: &str = "°C\tHumidity: ";
const HUMIDITY_UNIT: char = '%';

/// Largest magnitude printed in a report line
pub const MAX_REPORTED_MAGNITUDE: f32 = 1_000_000.0;

/// Format a reading as a report line.
///
/// Both values are printed with two decimals. Values beyond
/// ±[`MAX_REPORTED_MAGNITUDE`] (never produced by the sensor) are clamped so
/// the line always fits in a [`Line`] and parses back.
pub fn format_reading(reading: &ClimateReading) -> Line {
    let temperature = clamp_reported(reading.temperature_c);
    let humidity = clamp_reported(reading.humidity_pct);

    let mut line = Line::new();
    // Cannot overflow: two clamped values plus the fixed text stay under MAX_LINE_LEN
    let _ = write!(
        line,
        "{}{:.2}{}{:.2}{}",
        TEMPERATURE_LABEL, temperature, FIELD_SEPARATOR, humidity, HUMIDITY_UNIT
    );
    line
}

fn clamp_reported(value: f32) -> f32 {
    value.clamp(-MAX_REPORTED_MAGNITUDE, MAX_REPORTED_MAGNITUDE)
}

/// Error returned when a reading line is malformed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReportParseError {
    /// The separator between temperature and humidity is missing
    MissingSeparator,
    /// The humidity unit is missing
    MissingUnit,
    /// A value is not a number
    InvalidNumber,
}

impl core::fmt::Display for ReportParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ReportParseError::MissingSeparator => "missing temperature/humidity separator",
            ReportParseError::MissingUnit => "missing humidity unit",
            ReportParseError::InvalidNumber => "invalid number",
        };
        f.write_str(msg)
    }
}

/// A line received from the station
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReportLine<'a> {
    /// A measurement
    Reading(ClimateReading),
    /// The cycle produced no measurement
    Unavailable,
    /// Any other text (startup messages, noise)
    Status(&'a str),
}

impl<'a> ReportLine<'a> {
    /// Classify a received line. Trailing `\r`/`\n` are ignored.
    pub fn parse(line: &'a str) -> Result<Self, ReportParseError> {
        let line = line.trim_end_matches(['\r', '\n']);

        if line == UNAVAILABLE {
            return Ok(ReportLine::Unavailable);
        }

        let Some(rest) = line.strip_prefix(TEMPERATURE_LABEL) else {
            return Ok(ReportLine::Status(line));
        };

        let (temperature, humidity) = rest
            .split_once(FIELD_SEPARATOR)
            .ok_or(ReportParseError::MissingSeparator)?;
        let humidity = humidity
            .strip_suffix(HUMIDITY_UNIT)
            .ok_or(ReportParseError::MissingUnit)?;

        let temperature_c = temperature
            .trim()
            .parse::<f32>()
            .map_err(|_| ReportParseError::InvalidNumber)?;
        let humidity_pct = humidity
            .trim()
            .parse::<f32>()
            .map_err(|_| ReportParseError::InvalidNumber)?;

        Ok(ReportLine::Reading(ClimateReading::new(temperature_c, humidity_pct)))
    }
}

/// Running statistics over received readings
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ReadingStats {
    count: u32,
    unavailable: u32,
    temperature_min: f32,
    temperature_max: f32,
    temperature_sum: f64,
    humidity_min: f32,
    humidity_max: f32,
    humidity_sum: f64,
}

impl ReadingStats {
    /// Empty statistics
    pub const fn new() -> Self {
        Self {
            count: 0,
            unavailable: 0,
            temperature_min: 0.0,
            temperature_max: 0.0,
            temperature_sum: 0.0,
            humidity_min: 0.0,
            humidity_max: 0.0,
            humidity_sum: 0.0,
        }
    }

    /// Add a reading
    pub fn record(&mut self, reading: &ClimateReading) {
        if self.count == 0 {
            self.temperature_min = reading.temperature_c;
            self.temperature_max = reading.temperature_c;
            self.humidity_min = reading.humidity_pct;
            self.humidity_max = reading.humidity_pct;
        } else {
            self.temperature_min = self.temperature_min.min(reading.temperature_c);
            self.temperature_max = self.temperature_max.max(reading.temperature_c);
            self.humidity_min = self.humidity_min.min(reading.humidity_pct);
            self.humidity_max = self.humidity_max.max(reading.humidity_pct);
        }
        self.temperature_sum += reading.temperature_c as f64;
        self.humidity_sum += reading.humidity_pct as f64;
        self.count += 1;
    }

    /// Count a cycle that produced no reading
    pub fn record_unavailable(&mut self) {
        self.unavailable += 1;
    }

    /// Classify a received line and update the statistics with it.
    ///
    /// Status lines and malformed readings leave the statistics untouched.
    pub fn ingest<'a>(&mut self, line: &'a str) -> Result<ReportLine<'a>, ReportParseError> {
        let parsed = ReportLine::parse(line)?;
        match parsed {
            ReportLine::Reading(reading) => self.record(&reading),
            ReportLine::Unavailable => self.record_unavailable(),
            ReportLine::Status(_) => {}
        }
        Ok(parsed)
    }

    /// Number of readings recorded
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Number of cycles without a reading
    pub fn unavailable(&self) -> u32 {
        self.unavailable
    }

    /// Lowest and highest temperature seen
    pub fn temperature_range(&self) -> Option<(f32, f32)> {
        (self.count > 0).then_some((self.temperature_min, self.temperature_max))
    }

    /// Lowest and highest humidity seen
    pub fn humidity_range(&self) -> Option<(f32, f32)> {
        (self.count > 0).then_some((self.humidity_min, self.humidity_max))
    }

    /// Mean temperature
    pub fn mean_temperature(&self) -> Option<f32> {
        (self.count > 0).then(|| (self.temperature_sum / self.count as f64) as f32)
    }

    /// Mean humidity
    pub fn mean_humidity(&self) -> Option<f32> {
        (self.count > 0).then(|| (self.humidity_sum / self.count as f64) as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_reading() {
        let line = format_reading(&ClimateReading::new(23.414, 41.066));
        assert_eq!(line.as_str(), "Temperature: 23.41°C\tHumidity: 41.07%");
    }

    #[test]
    fn test_format_extremes_fit() {
        let line = format_reading(&ClimateReading::new(-50.0, 159.99));
        assert_eq!(line.as_str(), "Temperature: -50.00°C\tHumidity: 159.99%");
    }

    #[test]
    fn test_format_clamps_out_of_range_values() {
        let line = format_reading(&ClimateReading::new(f32::MAX, f32::NEG_INFINITY));
        assert_eq!(
            line.as_str(),
            "Temperature: 1000000.00°C\tHumidity: -1000000.00%"
        );
        assert_eq!(
            ReportLine::parse(&line),
            Ok(ReportLine::Reading(ClimateReading::new(
                MAX_REPORTED_MAGNITUDE,
                -MAX_REPORTED_MAGNITUDE
            )))
        );
    }

    #[test]
    fn test_parse_formatted_reading() {
        let reading = ClimateReading::new(-3.25, 87.5);
        let line = format_reading(&reading);
        assert_eq!(ReportLine::parse(&line), Ok(ReportLine::Reading(reading)));
    }

    #[test]
    fn test_parse_strips_line_ending() {
        let parsed = ReportLine::parse("Temperature: 21.00°C\tHumidity: 50.50%\r\n");
        assert_eq!(parsed, Ok(ReportLine::Reading(ClimateReading::new(21.0, 50.5))));
    }

    #[test]
    fn test_parse_unavailable_and_status() {
        assert_eq!(ReportLine::parse("Reading not available from AHT10.\r\n"), Ok(ReportLine::Unavailable));
        assert_eq!(
            ReportLine::parse("Display initialized.\r"),
            Ok(ReportLine::Status(STATUS_DISPLAY_READY))
        );
    }

    #[test]
    fn test_parse_malformed_reading() {
        assert_eq!(
            ReportLine::parse("Temperature: 21.00 Humidity: 50.50%"),
            Err(ReportParseError::MissingSeparator)
        );
        assert_eq!(
            ReportLine::parse("Temperature: 21.00°C\tHumidity: 50.50"),
            Err(ReportParseError::MissingUnit)
        );
        assert_eq!(
            ReportLine::parse("Temperature: abc°C\tHumidity: 50.50%"),
            Err(ReportParseError::InvalidNumber)
        );
    }

    #[test]
    fn test_ingest_session() {
        let received = [
            "Initializing sensor...\r\n",
            "AHT10 initialized successfully!\r\n",
            "Display initialized.\r\n",
            "Temperature: 21.00°C\tHumidity: 40.00%\r\n",
            "Reading not available from AHT10.\r\n",
            "Temperature: 2x.00°C\tHumidity: 40.00%\r\n",
            "Temperature: 23.00°C\tHumidity: 60.00%\r\n",
        ];

        let mut stats = ReadingStats::new();
        let outcomes: Vec<_> = received.iter().map(|line| stats.ingest(line)).collect();

        assert_eq!(outcomes[0], Ok(ReportLine::Status(STATUS_INITIALIZING)));
        assert_eq!(outcomes[2], Ok(ReportLine::Status(STATUS_DISPLAY_READY)));
        assert_eq!(outcomes[4], Ok(ReportLine::Unavailable));
        assert_eq!(outcomes[5], Err(ReportParseError::InvalidNumber));
        assert_eq!(
            outcomes[6],
            Ok(ReportLine::Reading(ClimateReading::new(23.0, 60.0)))
        );

        assert_eq!(stats.count(), 2);
        assert_eq!(stats.unavailable(), 1);
        assert_eq!(stats.temperature_range(), Some((21.0, 23.0)));
        assert_eq!(stats.mean_humidity(), Some(50.0));
    }

    #[test]
    fn test_stats() {
        let mut stats = ReadingStats::new();
        assert_eq!(stats.temperature_range(), None);
        assert_eq!(stats.mean_humidity(), None);

        stats.record(&ClimateReading::new(20.0, 40.0));
        stats.record(&ClimateReading::new(24.0, 60.0));
        stats.record(&ClimateReading::new(22.0, 50.0));
        stats.record_unavailable();

        assert_eq!(stats.count(), 3);
        assert_eq!(stats.unavailable(), 1);
        assert_eq!(stats.temperature_range(), Some((20.0, 24.0)));
        assert_eq!(stats.humidity_range(), Some((40.0, 60.0)));
        assert_eq!(stats.mean_temperature(), Some(22.0));
        assert_eq!(stats.mean_humidity(), Some(50.0));
    }
}
