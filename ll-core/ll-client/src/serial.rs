//! Serial device access

use crate::config::LinkConfig;
use crate::error::LinkError;
use crate::link::FrameLink;
use log::info;
use serialport::{SerialPort, SerialPortInfo};

/// A frame link over a real serial device
pub type SerialLink = FrameLink<Box<dyn SerialPort>>;

/// Open the configured device.
///
/// The device stays open for as long as the returned link lives.
pub fn open_serial(config: &LinkConfig) -> Result<SerialLink, LinkError> {
    let port = serialport::new(config.device.as_str(), config.baud_rate)
        .timeout(config.timeout())
        .open()?;
    info!("Opened {} @ {} baud", config.device, config.baud_rate);
    Ok(FrameLink::new(port))
}

/// List serial ports visible to this machine
pub fn available_ports() -> Result<Vec<SerialPortInfo>, LinkError> {
    Ok(serialport::available_ports()?)
}
