//! Frame exchange over a byte port

use crate::error::LinkError;
use ll_model::Frame;
use log::{debug, info, trace};
use std::io::{ErrorKind, Read, Write};
use std::time::{Duration, Instant};

/// Sends frames and reads echoed lines over any `Read + Write` port.
///
/// A read that times out (or returns no data) means the device has nothing
/// more to say; that is what ends the echo loop. The port is closed when the
/// link is dropped.
pub struct FrameLink<P> {
    port: P,
    /// Bytes read but not yet returned as a line
    read_buffer: Vec<u8>,
    frames_sent: u64,
}

impl<P: Read + Write> FrameLink<P> {
    pub fn new(port: P) -> Self {
        Self {
            port,
            read_buffer: Vec::new(),
            frames_sent: 0,
        }
    }

    /// Write one frame and flush it
    pub fn send_frame(&mut self, frame: &Frame) -> Result<(), LinkError> {
        let bytes = frame.encode();
        self.port.write_all(&bytes)?;
        self.port.flush()?;
        self.frames_sent += 1;
        trace!(
            "Sent frame #{} {}= ({} bytes)",
            self.frames_sent,
            frame.key(),
            frame.payload().len()
        );
        Ok(())
    }

    /// Read one line, including its newline.
    ///
    /// Returns whatever was buffered if the port goes quiet before a newline,
    /// and `None` if nothing at all was read.
    pub fn read_line(&mut self) -> Result<Option<String>, LinkError> {
        loop {
            if let Some(pos) = self.read_buffer.iter().position(|&b| b == b'\n') {
                let line: Vec<u8> = self.read_buffer.drain(..=pos).collect();
                return Ok(Some(String::from_utf8_lossy(&line).into_owned()));
            }

            let mut chunk = [0u8; 64];
            match self.port.read(&mut chunk) {
                Ok(0) => return Ok(self.take_partial()),
                Ok(n) => self.read_buffer.extend_from_slice(&chunk[..n]),
                Err(e) if matches!(e.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock) => {
                    return Ok(self.take_partial());
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn take_partial(&mut self) -> Option<String> {
        if self.read_buffer.is_empty() {
            None
        } else {
            let line = std::mem::take(&mut self.read_buffer);
            Some(String::from_utf8_lossy(&line).into_owned())
        }
    }

    /// Copy echoed lines to `out` until the port goes quiet, then flush `out`.
    ///
    /// Returns the number of lines copied.
    pub fn drain_echoes<W: Write>(&mut self, out: &mut W) -> Result<usize, LinkError> {
        let mut lines = 0;
        while let Some(line) = self.read_line()? {
            out.write_all(line.as_bytes())?;
            lines += 1;
        }
        out.flush()?;
        Ok(lines)
    }

    /// Send a frame, then drain whatever the device echoes
    pub fn exchange<W: Write>(&mut self, frame: &Frame, out: &mut W) -> Result<usize, LinkError> {
        self.send_frame(frame)?;
        self.drain_echoes(out)
    }

    /// Read lines until one starts with `token`.
    ///
    /// Lines before the ready line are logged and discarded.
    pub fn wait_for_ready(&mut self, token: &str, timeout: Duration) -> Result<(), LinkError> {
        let start = Instant::now();
        loop {
            if let Some(line) = self.read_line()? {
                let line = line.trim();
                if line.starts_with(token) {
                    info!("Device ready after {:.2}s", start.elapsed().as_secs_f64());
                    return Ok(());
                }
                debug!("Skipping line while waiting for {token}: {line}");
            }
            if start.elapsed() >= timeout {
                return Err(LinkError::NotReady {
                    token: token.to_string(),
                    waited_ms: start.elapsed().as_millis() as u64,
                });
            }
        }
    }
}

impl<P> FrameLink<P> {
    pub fn frames_sent(&self) -> u64 {
        self.frames_sent
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn into_inner(self) -> P {
        self.port
    }

    /// Drop the port, closing the device
    pub fn close(self) {
        debug!("Closing link after {} frames", self.frames_sent);
        drop(self.port);
    }
}
