pub mod args;
pub mod handler;

pub use args::StreamArgs;
pub use handler::{handle_stream, run_stream};
