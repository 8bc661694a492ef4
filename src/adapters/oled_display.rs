//! SSD1306 OLED display adapter
//!
//! This adapter implements the DisplayPort trait for an SSD1306 panel in
//! buffered graphics mode. Layout on a 128x64 panel, FONT_6X10:
//!
//! ```text
//!  y=10  Temp: 23.41 C
//!  y=20  Hum: 41.07 %
//!  y=30  Alert: High humidity!     (humidity above threshold)
//!  y=40  Alert: Low temp!          (temperature below threshold)
//! ```

use core::fmt::Write as _;

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::Ssd1306;

use crate::domain::{Alerts, ClimateReading};
use crate::ports::display::{DisplayError, DisplayPort};

/// Capacity of one screen line
pub const SCREEN_LINE_LEN: usize = 24;

/// Maximum number of lines on screen
pub const MAX_SCREEN_LINES: usize = 4;

const TEMPERATURE_Y: i32 = 10;
const HUMIDITY_Y: i32 = 20;
const HUMIDITY_ALERT_Y: i32 = 30;
const TEMPERATURE_ALERT_Y: i32 = 40;

const HIGH_HUMIDITY_TEXT: &str = "Alert: High humidity!";
const LOW_TEMPERATURE_TEXT: &str = "Alert: Low temp!";

/// One line of text and its vertical position
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenLine {
    /// Top of the line in pixels
    pub y: i32,
    pub text: heapless::String<SCREEN_LINE_LEN>,
}

impl ScreenLine {
    fn new(y: i32) -> Self {
        Self {
            y,
            text: heapless::String::new(),
        }
    }
}

/// Lines shown for a reading
pub fn screen_lines(
    reading: &ClimateReading,
    alerts: Alerts,
) -> heapless::Vec<ScreenLine, MAX_SCREEN_LINES> {
    let mut lines = heapless::Vec::new();

    let mut temperature = ScreenLine::new(TEMPERATURE_Y);
    let _ = write!(temperature.text, "Temp: {:.2} C", reading.temperature_c);
    let _ = lines.push(temperature);

    let mut humidity = ScreenLine::new(HUMIDITY_Y);
    let _ = write!(humidity.text, "Hum: {:.2} %", reading.humidity_pct);
    let _ = lines.push(humidity);

    if alerts.high_humidity {
        let mut line = ScreenLine::new(HUMIDITY_ALERT_Y);
        let _ = line.text.push_str(HIGH_HUMIDITY_TEXT);
        let _ = lines.push(line);
    }
    if alerts.low_temperature {
        let mut line = ScreenLine::new(TEMPERATURE_ALERT_Y);
        let _ = line.text.push_str(LOW_TEMPERATURE_TEXT);
        let _ = lines.push(line);
    }

    lines
}

/// Draw the lines for a reading onto any monochrome target
pub fn render<D>(target: &mut D, reading: &ClimateReading, alerts: Alerts) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    for line in screen_lines(reading, alerts) {
        Text::with_baseline(&line.text, Point::new(0, line.y), style, Baseline::Top).draw(target)?;
    }
    Ok(())
}

/// SSD1306 adapter implementing DisplayPort
pub struct OledDisplay<DI, SIZE: DisplaySize> {
    display: Ssd1306<DI, SIZE, BufferedGraphicsMode<SIZE>>,
}

impl<DI, SIZE> OledDisplay<DI, SIZE>
where
    DI: WriteOnlyDataCommand,
    SIZE: DisplaySize,
{
    /// Wrap a display already in buffered graphics mode
    pub fn new(display: Ssd1306<DI, SIZE, BufferedGraphicsMode<SIZE>>) -> Self {
        Self { display }
    }

    pub fn release(self) -> Ssd1306<DI, SIZE, BufferedGraphicsMode<SIZE>> {
        self.display
    }
}

impl<DI, SIZE> DisplayPort for OledDisplay<DI, SIZE>
where
    DI: WriteOnlyDataCommand,
    SIZE: DisplaySize,
{
    fn initialize(&mut self) -> Result<(), DisplayError> {
        self.display.init().map_err(|_| DisplayError::InitFailed)?;
        self.display
            .set_display_on(true)
            .map_err(|_| DisplayError::InitFailed)?;
        self.display.clear_buffer();
        self.display.flush().map_err(|_| DisplayError::FlushFailed)
    }

    fn show(&mut self, reading: &ClimateReading, alerts: Alerts) -> Result<(), DisplayError> {
        self.display.clear_buffer();
        render(&mut self.display, reading, alerts).map_err(|_| DisplayError::DrawFailed)?;
        self.display.flush().map_err(|_| DisplayError::FlushFailed)
    }
}
