pub mod args;
pub mod handler;

pub use args::PatternsArgs;
pub use handler::{handle_patterns, run_patterns};
