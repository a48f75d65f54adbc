//! Link and streaming configuration
//!
//! Every field has a default, so a JSON config file only needs the values it
//! changes:
//!
//! ```json
//! { "device": "/dev/ttyACM0", "format": "half", "strip_length": 32 }
//! ```

use crate::error::LinkError;
use ll_model::PackFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_DEVICE: &str = "/dev/tty.usbmodemfa141";
pub const DEFAULT_BAUD_RATE: u32 = 115_200;
pub const DEFAULT_STRIP_LENGTH: usize = 64;
/// Minimum delay between frames for error-free receipt at 115200 baud
pub const DEFAULT_DELAY_MS: u64 = 13;
pub const DEFAULT_TRIALS: u32 = 1000;
pub const DEFAULT_READY_TOKEN: &str = "READY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Serial device path
    pub device: String,
    pub baud_rate: u32,
    /// Read timeout; a read that times out ends the echo loop
    pub timeout_ms: u64,
    /// Number of LEDs on the strip
    pub strip_length: usize,
    pub format: PackFormat,
    /// Pause after each frame
    pub delay_ms: u64,
    /// Frames to send in one run
    pub trials: u32,
    /// Line prefix the firmware prints once it is listening
    pub ready_token: String,
    /// How long to wait for the ready line; 0 skips the handshake
    pub ready_timeout_ms: u64,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            device: DEFAULT_DEVICE.to_string(),
            baud_rate: DEFAULT_BAUD_RATE,
            timeout_ms: 100,
            strip_length: DEFAULT_STRIP_LENGTH,
            format: PackFormat::Full,
            delay_ms: DEFAULT_DELAY_MS,
            trials: DEFAULT_TRIALS,
            ready_token: DEFAULT_READY_TOKEN.to_string(),
            ready_timeout_ms: 5_000,
        }
    }
}

impl LinkConfig {
    /// Load a JSON config file
    pub fn load(path: &Path) -> Result<Self, LinkError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| LinkError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
            .map_err(|e| LinkError::Config(format!("{}: {e}", path.display())))
    }

    pub fn from_json(text: &str) -> Result<Self, LinkError> {
        serde_json::from_str(text).map_err(|e| LinkError::Config(e.to_string()))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn ready_timeout(&self) -> Option<Duration> {
        (self.ready_timeout_ms > 0).then(|| Duration::from_millis(self.ready_timeout_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            LinkConfig::from_json(r#"{ "device": "/dev/ttyACM0", "format": "half" }"#).unwrap();
        assert_eq!(config.device, "/dev/ttyACM0");
        assert_eq!(config.format, PackFormat::Half);
        assert_eq!(config.baud_rate, DEFAULT_BAUD_RATE);
        assert_eq!(config.delay(), Duration::from_millis(13));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "strip_length": 32, "ready_timeout_ms": 0 }}"#).unwrap();

        let config = LinkConfig::load(file.path()).unwrap();
        assert_eq!(config.strip_length, 32);
        assert_eq!(config.ready_timeout(), None);
    }

    #[test]
    fn test_bad_json_is_config_error() {
        let err = LinkConfig::from_json("{ \"baud_rate\": \"fast\" }").unwrap_err();
        assert!(matches!(err, LinkError::Config(_)));
    }
}
