//! Serial link to an LED strip controller.
//!
//! Frames go out as `KEY=<payload>\n` followed by a flush; anything the
//! firmware echoes back is read line by line until the port goes quiet.
//!
//! - [`FrameLink`]: framing, echo draining and the ready handshake over any
//!   `Read + Write` port
//! - [`serial`]: opening real serial devices (feature `serial`)
//! - [`FakePort`]: scripted in-memory port for tests and dry runs

pub mod config;
pub mod error;
pub mod fake;
pub mod link;

#[cfg(feature = "serial")]
pub mod serial;

pub use config::LinkConfig;
pub use error::LinkError;
pub use fake::FakePort;
pub use link::FrameLink;

#[cfg(feature = "serial")]
pub use serial::{SerialLink, available_ports, open_serial};
