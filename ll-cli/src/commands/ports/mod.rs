use anyhow::{Context, Result};
use ll_client::available_ports;
use serialport::SerialPortType;

use crate::messages::{print_error, print_success};

pub fn handle_ports() -> Result<()> {
    let ports = available_ports().context("Failed to list serial ports")?;

    if ports.is_empty() {
        print_error(
            "No serial ports found",
            &["Check that the strip controller is plugged in"],
        );
        return Ok(());
    }

    for port in &ports {
        let details = match &port.port_type {
            SerialPortType::UsbPort(usb) => format!(
                "USB {:04x}:{:04x} {}",
                usb.vid,
                usb.pid,
                usb.product.as_deref().unwrap_or("")
            ),
            SerialPortType::BluetoothPort => "Bluetooth".to_string(),
            SerialPortType::PciPort => "PCI".to_string(),
            SerialPortType::Unknown => "unknown".to_string(),
        };
        println!("{}  {}", port.port_name, details.trim_end());
    }

    print_success(
        &format!("Found {} serial port(s)", ports.len()),
        &["ledlink stream --device <path>"],
    );
    Ok(())
}
