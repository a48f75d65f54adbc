//! Error types for ll-engine

use alloc::string::String;
use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// A generator needs at least one LED
    EmptyStrip,
    /// Unknown scheme name
    UnknownScheme(String),
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::EmptyStrip => write!(f, "Strip length must be at least 1"),
            GeneratorError::UnknownScheme(name) => write!(
                f,
                "Unknown scheme '{name}' (expected gradient, random or rotate)"
            ),
        }
    }
}

impl core::error::Error for GeneratorError {}
