//! Color packing for the serial link
//!
//! Two wire formats:
//! - [`PackFormat::Full`]: 3 bytes per LED, channels in R, G, B order
//! - [`PackFormat::Half`]: 4 bits per channel, two channels per byte
//!
//! The half precision layout matches what the strip firmware unpacks. The
//! channel stream is flattened (R0 G0 B0 R1 ...) and walked in pairs: the
//! first channel of a pair becomes the low nibble, the second the high
//! nibble. An odd final channel leaves a byte whose high nibble is zero.

use crate::color::Color;
use crate::error::PackError;
use alloc::vec;
use alloc::vec::Vec;

/// Number of bytes per LED at full precision
pub const BYTES_PER_LED: usize = 3;

/// Wire encoding of a frame's colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackFormat {
    /// 8 bits per channel
    #[default]
    Full,
    /// 4 bits per channel
    Half,
}

impl PackFormat {
    /// Encoded size of `leds` colors
    pub fn encoded_len(self, leds: usize) -> usize {
        match self {
            PackFormat::Full => BYTES_PER_LED * leds,
            PackFormat::Half => (BYTES_PER_LED * leds).div_ceil(2),
        }
    }

    pub fn pack<'a, I>(self, colors: I) -> Vec<u8>
    where
        I: IntoIterator<Item = &'a Color>,
        I::IntoIter: ExactSizeIterator,
    {
        match self {
            PackFormat::Full => pack_colors(colors),
            PackFormat::Half => pack_colors_halved(colors),
        }
    }

    pub fn unpack(self, bytes: &[u8], leds: usize) -> Result<Vec<Color>, PackError> {
        match self {
            PackFormat::Full => {
                let colors = unpack_colors(bytes)?;
                if colors.len() != leds {
                    return Err(PackError::LengthMismatch {
                        expected: self.encoded_len(leds),
                        actual: bytes.len(),
                    });
                }
                Ok(colors)
            }
            PackFormat::Half => unpack_colors_halved(bytes, leds),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PackFormat::Full => "full",
            PackFormat::Half => "half",
        }
    }
}

impl core::fmt::Display for PackFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concatenate the raw channel bytes of every color
pub fn pack_colors<'a, I>(colors: I) -> Vec<u8>
where
    I: IntoIterator<Item = &'a Color>,
{
    colors.into_iter().flat_map(|c| c.channels()).collect()
}

/// Pack two channels per byte at 4 bits each
pub fn pack_colors_halved<'a, I>(colors: I) -> Vec<u8>
where
    I: IntoIterator<Item = &'a Color>,
    I::IntoIter: ExactSizeIterator,
{
    let colors = colors.into_iter();
    let mut bytes = vec![0xFF; PackFormat::Half.encoded_len(colors.len())];

    let mut upper = false;
    let mut index = 0;
    for channel in colors.flat_map(|c| c.channels()) {
        let nibble = channel >> 4;
        if upper {
            bytes[index] |= nibble << 4;
            index += 1;
        } else {
            bytes[index] = nibble;
        }
        upper = !upper;
    }

    bytes
}

/// Inverse of [`pack_colors`]
pub fn unpack_colors(bytes: &[u8]) -> Result<Vec<Color>, PackError> {
    if bytes.len() % BYTES_PER_LED != 0 {
        return Err(PackError::TrailingBytes { len: bytes.len() });
    }
    Ok(bytes
        .chunks_exact(BYTES_PER_LED)
        .map(|c| Color::new(c[0], c[1], c[2]))
        .collect())
}

/// Expand half precision data back to `leds` colors.
///
/// Each nibble `n` becomes `n * 0x11`, so 0x0 and 0xF map to 0x00 and 0xFF.
pub fn unpack_colors_halved(bytes: &[u8], leds: usize) -> Result<Vec<Color>, PackError> {
    let expected = PackFormat::Half.encoded_len(leds);
    if bytes.len() != expected {
        return Err(PackError::LengthMismatch {
            expected,
            actual: bytes.len(),
        });
    }

    let channels: Vec<u8> = bytes
        .iter()
        .flat_map(|b| [b & 0x0F, b >> 4])
        .take(BYTES_PER_LED * leds)
        .map(|n| n * 0x11)
        .collect();

    Ok(channels
        .chunks_exact(BYTES_PER_LED)
        .map(|c| Color::new(c[0], c[1], c[2]))
        .collect())
}
