//! Error types for ll-client

use core::fmt;
use ll_model::FrameError;

/// Error talking to the strip controller
#[derive(Debug)]
pub enum LinkError {
    /// Reading or writing the port failed
    Io(std::io::Error),
    /// The serial device could not be opened or configured
    #[cfg(feature = "serial")]
    Serial(serialport::Error),
    /// No ready line arrived before the deadline
    NotReady { token: String, waited_ms: u64 },
    /// A frame could not be built
    Frame(FrameError),
    /// Configuration could not be loaded
    Config(String),
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "serial")]
            LinkError::Serial(e) => write!(f, "Serial port error: {e}"),
            LinkError::NotReady { token, waited_ms } => {
                write!(f, "Device did not send '{token}' within {waited_ms}ms")
            }
            LinkError::Frame(e) => write!(f, "Frame error: {e}"),
            LinkError::Config(msg) => write!(f, "Config error: {msg}"),
        }
    }
}

impl std::error::Error for LinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LinkError::Io(e) => Some(e),
            #[cfg(feature = "serial")]
            LinkError::Serial(e) => Some(e),
            LinkError::Frame(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LinkError {
    fn from(e: std::io::Error) -> Self {
        LinkError::Io(e)
    }
}

#[cfg(feature = "serial")]
impl From<serialport::Error> for LinkError {
    fn from(e: serialport::Error) -> Self {
        LinkError::Serial(e)
    }
}

impl From<FrameError> for LinkError {
    fn from(e: FrameError) -> Self {
        LinkError::Frame(e)
    }
}
