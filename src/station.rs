//! Climate station - the measurement cycle
//!
//! The station ties one sensor, one console and one display together:
//!
//! ```text
//!   start():  wait ─► "Initializing sensor..." ─► sensor.initialize()
//!                 ─► "AHT10 initialized successfully!" ─► display.initialize()
//!
//!   cycle():  sensor.read() ─► report line on console ─► alerts ─► display
//! ```
//!
//! Only the sensor is required. A console or display that fails is logged
//! and the cycle goes on.

use embedded_hal::delay::DelayNs;

use crate::config::StationConfig;
use crate::domain::ClimateReading;
use crate::ports::{ConsolePort, DisplayPort, SensorError, SensorPort};
use crate::report::{
    format_reading, STATUS_DISPLAY_READY, STATUS_INITIALIZING, STATUS_SENSOR_FAILED,
    STATUS_SENSOR_READY, UNAVAILABLE,
};

/// Result of one measurement cycle
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleOutcome {
    /// A reading was taken and published
    Reported(ClimateReading),
    /// The sensor gave no reading
    Unavailable(SensorError),
}

/// Climate station service
pub struct Station<S, C, D> {
    sensor: S,
    console: C,
    display: D,
    config: StationConfig,
    display_ready: bool,
}

impl<S, C, D> Station<S, C, D>
where
    S: SensorPort,
    C: ConsolePort,
    D: DisplayPort,
{
    pub fn new(sensor: S, console: C, display: D, config: StationConfig) -> Self {
        Self {
            sensor,
            console,
            display,
            config,
            display_ready: false,
        }
    }

    /// Bring the peripherals up.
    ///
    /// Waits `startup_delay_ms` first so the sensor is powered. Returns the
    /// sensor error if the sensor cannot be initialized; the station must not
    /// run cycles in that case.
    pub fn start(&mut self, delay: &mut impl DelayNs) -> Result<(), SensorError> {
        delay.delay_ms(self.config.startup_delay_ms);

        self.say(STATUS_INITIALIZING);
        if let Err(e) = self.sensor.initialize() {
            error!("station: sensor init failed: {:?}", e);
            self.say(STATUS_SENSOR_FAILED);
            return Err(e);
        }
        self.say(STATUS_SENSOR_READY);

        match self.display.initialize() {
            Ok(()) => {
                self.display_ready = true;
                self.say(STATUS_DISPLAY_READY);
            }
            Err(e) => warn!("station: display unavailable: {:?}", e),
        }

        info!("station: started");
        Ok(())
    }

    /// Take one reading and publish it
    pub fn cycle(&mut self) -> CycleOutcome {
        let reading = match self.sensor.read() {
            Ok(reading) => reading,
            Err(e) => {
                warn!("station: no reading: {:?}", e);
                self.say(UNAVAILABLE);
                return CycleOutcome::Unavailable(e);
            }
        };

        let line = format_reading(&reading);
        self.say(&line);

        if self.display_ready {
            let alerts = self.config.thresholds.evaluate(&reading);
            if let Err(e) = self.display.show(&reading, alerts) {
                warn!("station: display update failed: {:?}", e);
            }
        }

        CycleOutcome::Reported(reading)
    }

    pub fn config(&self) -> &StationConfig {
        &self.config
    }

    /// Whether the display came up in `start`
    pub fn display_ready(&self) -> bool {
        self.display_ready
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    /// Take the station apart
    pub fn release(self) -> (S, C, D) {
        (self.sensor, self.console, self.display)
    }

    fn say(&mut self, line: &str) {
        if let Err(e) = self.console.write_line(line) {
            warn!("station: console write failed: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::Alerts;
    use crate::ports::{ConsoleError, DisplayError};
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct ScriptedSensor {
        init: Option<SensorError>,
        readings: VecDeque<Result<ClimateReading, SensorError>>,
    }

    impl SensorPort for ScriptedSensor {
        fn initialize(&mut self) -> Result<(), SensorError> {
            match self.init {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }

        fn read(&mut self) -> Result<ClimateReading, SensorError> {
            self.readings.pop_front().unwrap_or(Err(SensorError::ReadFailed))
        }
    }

    #[derive(Default)]
    struct TextConsole {
        output: String,
        broken: bool,
    }

    impl TextConsole {
        fn lines(&self) -> Vec<&str> {
            self.output.split_terminator("\r\n").collect()
        }
    }

    impl ConsolePort for TextConsole {
        fn write_text(&mut self, text: &str) -> Result<(), ConsoleError> {
            if self.broken {
                return Err(ConsoleError::WriteFailed);
            }
            self.output.push_str(text);
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingDisplay {
        init_error: Option<DisplayError>,
        show_error: Option<DisplayError>,
        shown: Vec<(ClimateReading, Alerts)>,
    }

    impl DisplayPort for RecordingDisplay {
        fn initialize(&mut self) -> Result<(), DisplayError> {
            match self.init_error {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }

        fn show(&mut self, reading: &ClimateReading, alerts: Alerts) -> Result<(), DisplayError> {
            self.shown.push((*reading, alerts));
            match self.show_error {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }
    }

    type TestStation = Station<ScriptedSensor, TextConsole, RecordingDisplay>;

    fn station(sensor: ScriptedSensor, display: RecordingDisplay) -> TestStation {
        Station::new(sensor, TextConsole::default(), display, StationConfig::default())
    }

    fn sensor_with(readings: &[Result<ClimateReading, SensorError>]) -> ScriptedSensor {
        ScriptedSensor {
            init: None,
            readings: readings.iter().copied().collect(),
        }
    }

    #[test]
    fn test_start_messages() {
        let mut station = station(ScriptedSensor::default(), RecordingDisplay::default());
        station.start(&mut NoopDelay::new()).unwrap();

        assert!(station.display_ready());
        let (_, console, _) = station.release();
        assert_eq!(
            console.lines(),
            [
                "Initializing sensor...",
                "AHT10 initialized successfully!",
                "Display initialized.",
            ]
        );
    }

    #[test]
    fn test_start_aborts_without_sensor() {
        let sensor = ScriptedSensor {
            init: Some(SensorError::NotDetected),
            ..Default::default()
        };
        let mut station = station(sensor, RecordingDisplay::default());

        assert_eq!(station.start(&mut NoopDelay::new()), Err(SensorError::NotDetected));
        assert!(!station.display_ready());
        let (_, console, _) = station.release();
        assert_eq!(
            console.lines(),
            ["Initializing sensor...", "AHT10 initialization failed!"]
        );
    }

    #[test]
    fn test_cycle_reports_and_shows() {
        let reading = ClimateReading::new(18.5, 72.25);
        let mut station = station(sensor_with(&[Ok(reading)]), RecordingDisplay::default());
        station.start(&mut NoopDelay::new()).unwrap();

        assert_eq!(station.cycle(), CycleOutcome::Reported(reading));

        let (_, console, display) = station.release();
        assert_eq!(
            console.lines().last(),
            Some(&"Temperature: 18.50°C\tHumidity: 72.25%")
        );
        let expected_alerts = Alerts {
            high_humidity: true,
            low_temperature: true,
        };
        assert_eq!(display.shown, [(reading, expected_alerts)]);
    }

    #[test]
    fn test_cycle_unavailable() {
        let mut station = station(
            sensor_with(&[Err(SensorError::ReadFailed)]),
            RecordingDisplay::default(),
        );
        station.start(&mut NoopDelay::new()).unwrap();

        assert_eq!(station.cycle(), CycleOutcome::Unavailable(SensorError::ReadFailed));

        let (_, console, display) = station.release();
        assert_eq!(console.lines().last(), Some(&"Reading not available from AHT10."));
        assert!(display.shown.is_empty());
    }

    #[test]
    fn test_runs_without_display() {
        let reading = ClimateReading::new(22.0, 45.0);
        let display = RecordingDisplay {
            init_error: Some(DisplayError::InitFailed),
            ..Default::default()
        };
        let mut station = station(sensor_with(&[Ok(reading)]), display);
        station.start(&mut NoopDelay::new()).unwrap();

        assert!(!station.display_ready());
        assert_eq!(station.cycle(), CycleOutcome::Reported(reading));

        let (_, console, display) = station.release();
        assert!(!console.lines().contains(&"Display initialized."));
        assert!(display.shown.is_empty());
    }

    #[test]
    fn test_display_and_console_errors_are_not_fatal() {
        let readings = [
            Ok(ClimateReading::new(22.0, 45.0)),
            Ok(ClimateReading::new(22.5, 46.0)),
        ];
        let display = RecordingDisplay {
            show_error: Some(DisplayError::FlushFailed),
            ..Default::default()
        };
        let mut station = station(sensor_with(&readings), display);
        station.start(&mut NoopDelay::new()).unwrap();

        assert!(matches!(station.cycle(), CycleOutcome::Reported(_)));
        station.console.broken = true;
        assert!(matches!(station.cycle(), CycleOutcome::Reported(_)));

        let (_, _, display) = station.release();
        assert_eq!(display.shown.len(), 2);
    }
}
