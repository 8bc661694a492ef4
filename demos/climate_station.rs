//! AHT10 Climate Station on the RP2040
//!
//! Reads the AHT10 once per second, prints each reading on UART1 and shows
//! it on a 128x64 SSD1306 OLED with high-humidity and low-temperature alerts.
//!
//! # Wiring
//!
//! ```text
//!   AHT10    SDA ─ GP0   SCL ─ GP1    (I2C0, 100 kHz, 0x38)
//!   SSD1306  SDA ─ GP14  SCL ─ GP15   (I2C1, 100 kHz, 0x3C)
//!   UART1    TX  ─ GP8   RX  ─ GP9    (115200 8N1)
//! ```
//!
//! Build and flash with:
//!
//! ```text
//! cargo run --release --example climate_station --features rp2040 --target thumbv6m-none-eabi
//! ```

#![no_std]
#![no_main]

use defmt::*;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::uart::{self, Uart};
use embassy_time::{Delay, Duration, Timer};
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};
use {defmt_rtt as _, panic_probe as _};

use rp_climate::adapters::{Aht10Sensor, OledDisplay, UartConsole};
use rp_climate::config::StationConfig;
use rp_climate::station::{CycleOutcome, Station};

// ============================================================================
// Station Configuration
// ============================================================================

const CONFIG: StationConfig = StationConfig {
    read_interval_ms: 1000,
    startup_delay_ms: 1000,
    uart_baud: 115_200,
    i2c_frequency_hz: 100_000,
    sensor_address: rp_climate::aht10::DEFAULT_ADDRESS,
    display_address: rp_climate::config::DISPLAY_ADDRESS,
    thresholds: rp_climate::AlertThresholds::DEFAULT,
};

// ============================================================================
// Main Entry Point
// ============================================================================

#[embassy_executor::main]
async fn main(_spawner: embassy_executor::Spawner) {
    info!("=== AHT10 Climate Station ===");

    if let Err(e) = CONFIG.validate() {
        error!("Invalid configuration: {:?}", e);
        return;
    }

    let p = embassy_rp::init(Default::default());

    // ========================================================================
    // Peripherals
    // ========================================================================

    let mut uart_config = uart::Config::default();
    uart_config.baudrate = CONFIG.uart_baud;
    let uart = Uart::new_blocking(p.UART1, p.PIN_8, p.PIN_9, uart_config);
    let console = UartConsole::new(uart, Delay);
    info!("UART1 ready at {} baud", CONFIG.uart_baud);

    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = CONFIG.i2c_frequency_hz;

    let sensor_bus = I2c::new_blocking(p.I2C0, p.PIN_1, p.PIN_0, i2c_config.clone());
    let sensor = Aht10Sensor::with_address(sensor_bus, CONFIG.sensor_address, Delay);
    info!("Sensor adapter created (AHT10 on I2C0)");

    let display_bus = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);
    let interface = I2CDisplayInterface::new_custom_address(display_bus, CONFIG.display_address);
    let oled = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    let display = OledDisplay::new(oled);
    info!("Display adapter created (SSD1306 on I2C1)");

    // ========================================================================
    // Startup
    // ========================================================================

    let mut station = Station::new(sensor, console, display, CONFIG);

    if let Err(e) = station.start(&mut Delay) {
        error!("Startup aborted: {:?}", e);
        return;
    }

    // ========================================================================
    // Measurement Loop
    // ========================================================================

    let interval = Duration::from_millis(CONFIG.read_interval_ms);
    loop {
        match station.cycle() {
            CycleOutcome::Reported(reading) => {
                debug!("{} C, {} %", reading.temperature_c, reading.humidity_pct)
            }
            CycleOutcome::Unavailable(e) => warn!("Cycle without reading: {:?}", e),
        }
        Timer::after(interval).await;
    }
}
