//! Climate Station Host Monitor
//!
//! This binary runs on your PC, listens to the station's UART through a
//! USB serial adapter and prints every reading with running statistics.
//!
//! ## Usage
//!
//! ```bash
//! # List available serial ports
//! cargo run --features std --bin climate_monitor -- --list-ports
//!
//! # Connect to the first USB serial adapter found
//! cargo run --features std --bin climate_monitor
//!
//! # Connect to a specific port and baud rate
//! cargo run --features std --bin climate_monitor -- --port /dev/ttyUSB0 --baud 115200
//! ```

use std::io::{self, BufRead, BufReader, Write};
use std::time::Duration;

use rp_climate::report::{ReadingStats, ReportLine};

/// Baud rate of the station's console
const DEFAULT_BAUD: u32 = 115_200;

/// Raspberry Pi vendor ID (Debug Probe, Pico running a USB-UART bridge)
const RASPBERRY_PI_VID: u16 = 0x2e8a;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    // Parse arguments
    if args.contains(&"--list-ports".to_string()) {
        list_ports();
        return Ok(());
    }

    let port_name = match option_value(&args, "--port") {
        Some(name) => Some(name.to_string()),
        None => find_usb_serial_port(),
    };

    let port_name = match port_name {
        Some(name) => name,
        None => {
            eprintln!("Error: No USB serial adapter found");
            eprintln!("Use --list-ports to see available ports");
            eprintln!("Or specify port with --port <PORT>");
            return Err("No device found".into());
        }
    };

    let baud = match option_value(&args, "--baud") {
        Some(value) => value
            .parse::<u32>()
            .map_err(|_| format!("Invalid baud rate: {}", value))?,
        None => DEFAULT_BAUD,
    };
    if baud == 0 {
        return Err("Baud rate must be non-zero".into());
    }

    // On Windows, COM ports >= 10 need the \\.\COMxx format
    #[cfg(target_os = "windows")]
    let port_name = if port_name.starts_with("COM") && !port_name.starts_with(r"\\") {
        format!(r"\\.\{}", port_name)
    } else {
        port_name
    };

    print!("Connecting to {} at {} baud...", port_name, baud);
    io::stdout().flush()?;

    let port = serialport::new(&port_name, baud)
        .timeout(Duration::from_millis(2000))
        .flow_control(serialport::FlowControl::None)
        .open()?;

    println!(" opened!");
    println!("Waiting for readings (Ctrl+C to quit)\n");

    monitor(BufReader::new(port))
}

/// Read report lines forever and print them
fn monitor<R: BufRead>(mut reader: R) -> Result<(), Box<dyn std::error::Error>> {
    let mut stats = ReadingStats::new();
    let mut raw = Vec::new();

    loop {
        match reader.read_until(b'\n', &mut raw) {
            Ok(0) => {
                println!("Port closed");
                return Ok(());
            }
            Ok(_) => {}
            // A quiet line between cycles; keep whatever was already received
            Err(e) if e.kind() == io::ErrorKind::TimedOut => continue,
            Err(e) => return Err(e.into()),
        }

        let text = String::from_utf8_lossy(&raw).into_owned();
        raw.clear();

        handle_line(&text, &mut stats);
    }
}

fn handle_line(text: &str, stats: &mut ReadingStats) {
    match stats.ingest(text) {
        Ok(ReportLine::Reading(reading)) => println!(
            "#{:<5} {:>7.2} °C  {:>6.2} %RH   {}",
            stats.count(),
            reading.temperature_c,
            reading.humidity_pct,
            summary(stats)
        ),
        Ok(ReportLine::Unavailable) => {
            println!("        (no reading, {} missed so far)", stats.unavailable())
        }
        Ok(ReportLine::Status(status)) => {
            if !status.trim().is_empty() {
                println!("[device] {}", status);
            }
        }
        Err(e) => eprintln!("Malformed reading ({}): {:?}", e, text.trim_end()),
    }
}

fn summary(stats: &ReadingStats) -> String {
    match (
        stats.temperature_range(),
        stats.mean_temperature(),
        stats.humidity_range(),
        stats.mean_humidity(),
    ) {
        (Some((t_min, t_max)), Some(t_mean), Some((h_min, h_max)), Some(h_mean)) => format!(
            "T min/avg/max {:.2}/{:.2}/{:.2}  RH min/avg/max {:.2}/{:.2}/{:.2}",
            t_min, t_mean, t_max, h_min, h_mean, h_max
        ),
        _ => String::new(),
    }
}

fn option_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    let idx = args.iter().position(|a| a == flag)?;
    args.get(idx + 1).map(String::as_str)
}

/// Print every serial port, marking the one used when `--port` is omitted
fn list_ports() {
    let ports = match serialport::available_ports() {
        Ok(ports) => ports,
        Err(e) => {
            eprintln!("Error listing ports: {}", e);
            return;
        }
    };

    println!("Available serial ports:");
    if ports.is_empty() {
        println!("  (none)");
        return;
    }

    let auto = pick_usb_serial_port(&ports);
    for port in &ports {
        let marker = if auto == Some(port.port_name.as_str()) { '*' } else { ' ' };
        println!("{} {} - {}", marker, port.port_name, describe_port(&port.port_type));
    }
    if auto.is_some() {
        println!("\n* selected automatically when --port is not given");
    }
}

fn describe_port(port_type: &serialport::SerialPortType) -> String {
    match port_type {
        serialport::SerialPortType::UsbPort(info) => {
            let mut text = format!("USB {:04x}:{:04x}", info.vid, info.pid);
            if info.vid == RASPBERRY_PI_VID {
                text.push_str(" (Raspberry Pi)");
            }
            for detail in [&info.manufacturer, &info.product].into_iter().flatten() {
                text.push_str(", ");
                text.push_str(detail);
            }
            text
        }
        serialport::SerialPortType::BluetoothPort => "Bluetooth (not a UART bridge)".into(),
        serialport::SerialPortType::PciPort => "PCI".into(),
        serialport::SerialPortType::Unknown => "unknown".into(),
    }
}

fn find_usb_serial_port() -> Option<String> {
    let ports = serialport::available_ports().ok()?;
    pick_usb_serial_port(&ports).map(str::to_string)
}

/// Prefer a Raspberry Pi probe, else take the first USB serial adapter
fn pick_usb_serial_port(ports: &[serialport::SerialPortInfo]) -> Option<&str> {
    fn usb_vid(port: &serialport::SerialPortInfo) -> Option<u16> {
        match &port.port_type {
            serialport::SerialPortType::UsbPort(info) => Some(info.vid),
            _ => None,
        }
    }

    ports
        .iter()
        .find(|port| usb_vid(port) == Some(RASPBERRY_PI_VID))
        .or_else(|| ports.iter().find(|port| usb_vid(port).is_some()))
        .map(|port| port.port_name.as_str())
}
