//! Frame generation for LED strips.
//!
//! - [`ColorGenerator`]: rolling per-LED colors (gradient wave, random, rotating)
//! - [`Pattern`]: animations that compose into a shared [`ColorBuffer`]
//! - [`Interval`]: millisecond interval timer for pacing animations

#![no_std]

extern crate alloc;

pub mod error;
pub mod generator;
pub mod interval;
pub mod pattern;

pub use error::GeneratorError;
pub use generator::{ColorGenerator, Scheme};
pub use interval::Interval;
pub use ll_model::{Color, ColorBuffer};
pub use pattern::{Pattern, PatternState, SolidPattern, WavePattern, render};
