//! RGB color triple

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

/// A single LED color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::new(0xFF, 0xFF, 0xFF);
    pub const CYAN: Color = Color::new(0x00, 0xFF, 0xFF);
    pub const MAGENTA: Color = Color::new(0xFF, 0x00, 0xFF);
    pub const YELLOW: Color = Color::new(0xFF, 0xFF, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels in wire order (R, G, B)
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub const fn from_channels(channels: [u8; 3]) -> Self {
        Self::new(channels[0], channels[1], channels[2])
    }

    /// Per-channel saturating addition
    pub const fn saturating_add(self, other: Color) -> Self {
        Self::new(
            self.r.saturating_add(other.r),
            self.g.saturating_add(other.g),
            self.b.saturating_add(other.b),
        )
    }
}

impl From<[u8; 3]> for Color {
    fn from(channels: [u8; 3]) -> Self {
        Self::from_channels(channels)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Parses `#RRGGBB`, `RRGGBB` or `r,g,b` (decimal)
impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.contains(',') {
            let mut channels = [0u8; 3];
            let mut parts = s.split(',');
            for channel in channels.iter_mut() {
                let part = parts.next().ok_or_else(|| ParseColorError(s.into()))?;
                *channel = part
                    .trim()
                    .parse()
                    .map_err(|_| ParseColorError(s.into()))?;
            }
            if parts.next().is_some() {
                return Err(ParseColorError(s.into()));
            }
            return Ok(Color::from_channels(channels));
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError(s.into()));
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| ParseColorError(s.into()))?;
        Ok(Color::new((value >> 16) as u8, (value >> 8) as u8, value as u8))
    }
}

/// Error returned when a color string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(pub String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid color '{}': expected #RRGGBB or r,g,b",
            self.0
        )
    }
}

impl core::error::Error for ParseColorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_and_decimal() {
        assert_eq!("#FF8000".parse::<Color>().unwrap(), Color::new(255, 128, 0));
        assert_eq!("00ff00".parse::<Color>().unwrap(), Color::new(0, 255, 0));
        assert_eq!("1, 2,3".parse::<Color>().unwrap(), Color::new(1, 2, 3));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("256,0,0".parse::<Color>().is_err());
        assert!("1,2".parse::<Color>().is_err());
        assert!("1,2,3,4".parse::<Color>().is_err());
        assert!("#12345".parse::<Color>().is_err());
        assert!("zzzzzz".parse::<Color>().is_err());
    }

    #[test]
    fn test_saturating_add() {
        let a = Color::new(200, 10, 0);
        let b = Color::new(100, 10, 0);
        assert_eq!(a.saturating_add(b), Color::new(255, 20, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(alloc::format!("{}", Color::MAGENTA), "#FF00FF");
    }
}
