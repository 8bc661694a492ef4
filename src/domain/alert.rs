//! Climate alert evaluation
//!
//! Flags readings that should be highlighted to the user. The default
//! thresholds are high humidity above 70 % RH and low temperature below 20 °C.

use super::reading::ClimateReading;

/// Alert thresholds. Both comparisons are strict.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlertThresholds {
    /// Humidity above this value raises [`Alerts::high_humidity`]
    pub high_humidity_pct: f32,
    /// Temperature below this value raises [`Alerts::low_temperature`]
    pub low_temperature_c: f32,
}

impl AlertThresholds {
    /// Thresholds used by the station unless configured otherwise
    pub const DEFAULT: Self = Self {
        high_humidity_pct: 70.0,
        low_temperature_c: 20.0,
    };

    /// Create thresholds with custom values
    pub const fn new(high_humidity_pct: f32, low_temperature_c: f32) -> Self {
        Self {
            high_humidity_pct,
            low_temperature_c,
        }
    }

    /// Evaluate a reading against these thresholds
    pub fn evaluate(&self, reading: &ClimateReading) -> Alerts {
        Alerts {
            high_humidity: reading.humidity_pct > self.high_humidity_pct,
            low_temperature: reading.temperature_c < self.low_temperature_c,
        }
    }
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Alerts raised for a single reading
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Alerts {
    pub high_humidity: bool,
    pub low_temperature: bool,
}

impl Alerts {
    /// No alert raised
    pub const NONE: Self = Self {
        high_humidity: false,
        low_temperature: false,
    };

    /// True if any alert is raised
    pub const fn any(&self) -> bool {
        self.high_humidity || self.low_temperature
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_alerts_in_comfort_zone() {
        let alerts = AlertThresholds::DEFAULT.evaluate(&ClimateReading::new(22.0, 45.0));
        assert_eq!(alerts, Alerts::NONE);
        assert!(!alerts.any());
    }

    #[test]
    fn test_thresholds_are_strict() {
        let alerts = AlertThresholds::DEFAULT.evaluate(&ClimateReading::new(20.0, 70.0));
        assert_eq!(alerts, Alerts::NONE);
    }

    #[test]
    fn test_both_alerts() {
        let alerts = AlertThresholds::DEFAULT.evaluate(&ClimateReading::new(19.9, 70.1));
        assert!(alerts.high_humidity);
        assert!(alerts.low_temperature);
        assert!(alerts.any());
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = AlertThresholds::new(50.0, 10.0);
        let alerts = thresholds.evaluate(&ClimateReading::new(15.0, 55.0));
        assert!(alerts.high_humidity);
        assert!(!alerts.low_temperature);
    }
}
