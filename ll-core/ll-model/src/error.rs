//! Error types for ll-model

use alloc::string::String;
use core::fmt;

/// Error unpacking color bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackError {
    /// Full precision data whose length is not a multiple of 3
    TrailingBytes { len: usize },
    /// Half precision data that does not match the expected LED count
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackError::TrailingBytes { len } => {
                write!(f, "Color data length {len} is not a multiple of 3")
            }
            PackError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "Packed color data has {actual} bytes, expected {expected}"
                )
            }
        }
    }
}

impl core::error::Error for PackError {}

/// Error building or parsing a frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Key is empty, non-ASCII, or contains `=` or a line break
    InvalidKey(String),
    /// Frame has no `=` separating key and payload
    MissingSeparator,
    /// Frame is not terminated by a newline
    Unterminated,
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::InvalidKey(key) => write!(f, "Invalid frame key: {key:?}"),
            FrameError::MissingSeparator => write!(f, "Frame has no '=' separator"),
            FrameError::Unterminated => write!(f, "Frame is not newline-terminated"),
        }
    }
}

impl core::error::Error for FrameError {}
