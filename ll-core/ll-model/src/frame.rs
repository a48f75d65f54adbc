//! `KEY=<payload>\n` frames
//!
//! The payload is raw binary. Receivers know how many payload bytes to expect
//! from their strip length and precision, so a payload byte equal to `\n` does
//! not end the frame early.

use crate::color::Color;
use crate::error::FrameError;
use crate::pack::PackFormat;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Key used for color frames
pub const COLORS_KEY: &str = "COLORS";

/// A single keyed message for the strip firmware
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    key: String,
    payload: Vec<u8>,
}

impl Frame {
    /// The key must be non-empty ASCII without `=` or a newline
    pub fn new(key: &str, payload: Vec<u8>) -> Result<Self, FrameError> {
        let valid = !key.is_empty()
            && key
                .bytes()
                .all(|b| b.is_ascii() && b != b'=' && b != b'\n');
        if !valid {
            return Err(FrameError::InvalidKey(key.to_string()));
        }
        Ok(Self {
            key: key.to_string(),
            payload,
        })
    }

    /// Build a `COLORS` frame from a strip's colors
    pub fn colors<'a, I>(format: PackFormat, colors: I) -> Self
    where
        I: IntoIterator<Item = &'a Color>,
        I::IntoIter: ExactSizeIterator,
    {
        Self {
            key: COLORS_KEY.to_string(),
            payload: format.pack(colors),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn encoded_len(&self) -> usize {
        self.key.len() + 1 + self.payload.len() + 1
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.encode_into(&mut out);
        out
    }

    pub fn encode_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.key.as_bytes());
        out.push(b'=');
        out.extend_from_slice(&self.payload);
        out.push(b'\n');
    }

    /// Parse one encoded frame, including its trailing newline.
    ///
    /// The key ends at the first `=`; everything up to the final byte is payload.
    pub fn decode(bytes: &[u8]) -> Result<Self, FrameError> {
        let body = bytes.strip_suffix(b"\n").ok_or(FrameError::Unterminated)?;
        let split = body
            .iter()
            .position(|&b| b == b'=')
            .ok_or(FrameError::MissingSeparator)?;
        let key = core::str::from_utf8(&body[..split])
            .map_err(|_| FrameError::InvalidKey(String::from_utf8_lossy(&body[..split]).into()))?;
        Self::new(key, body[split + 1..].to_vec())
    }
}
