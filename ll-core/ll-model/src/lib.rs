//! Data model for streaming LED strip frames.
//!
//! This crate is no_std-compatible and holds everything that crosses the wire:
//! - [`Color`] and the fixed-length [`ColorBuffer`] ring
//! - Full and half precision packing ([`pack`])
//! - `KEY=<payload>` frame formatting ([`Frame`])

#![no_std]

extern crate alloc;

pub mod buffer;
pub mod color;
pub mod error;
pub mod frame;
pub mod pack;

pub use buffer::ColorBuffer;
pub use color::Color;
pub use error::{FrameError, PackError};
pub use frame::Frame;
pub use pack::{PackFormat, pack_colors, pack_colors_halved, unpack_colors, unpack_colors_halved};
