//! Fake serial port for testing and development
//!
//! Reads come from a queue of scripted chunks; an empty queue, or an explicit
//! timeout marker, reads as `ErrorKind::TimedOut` just like a quiet serial
//! device. Writes are recorded and split at every flush, so each sent frame
//! can be inspected on its own.

use std::collections::VecDeque;
use std::io::{self, ErrorKind, Read, Write};

#[derive(Debug)]
enum ReadStep {
    Data(Vec<u8>),
    Timeout,
    Fail(ErrorKind),
}

#[derive(Debug, Default)]
pub struct FakePort {
    /// Scripted input
    input: VecDeque<ReadStep>,
    /// Bytes written since the last flush
    pending: Vec<u8>,
    /// One entry per flush
    flushed: Vec<Vec<u8>>,
    /// Lines queued after every flush, imitating a firmware echo
    reply: Option<String>,
    /// Every write fails with this kind once set
    write_error: Option<ErrorKind>,
}

impl FakePort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue bytes to be returned by `read()`
    pub fn queue_input(&mut self, bytes: &[u8]) {
        self.input.push_back(ReadStep::Data(bytes.to_vec()));
    }

    pub fn queue_line(&mut self, line: &str) {
        self.queue_input(format!("{line}\n").as_bytes());
    }

    /// Queue one timed-out read
    pub fn queue_timeout(&mut self) {
        self.input.push_back(ReadStep::Timeout);
    }

    /// Queue one read that fails with `kind`
    pub fn queue_error(&mut self, kind: ErrorKind) {
        self.input.push_back(ReadStep::Fail(kind));
    }

    /// Make every following write fail with `kind`, as an unplugged device would
    pub fn fail_writes(&mut self, kind: ErrorKind) {
        self.write_error = Some(kind);
    }

    /// After every flush, queue `line` followed by a timeout
    pub fn with_reply(mut self, line: &str) -> Self {
        self.reply = Some(line.to_string());
        self
    }

    /// Everything written and flushed, one entry per flush
    pub fn flushed(&self) -> &[Vec<u8>] {
        &self.flushed
    }

    /// Bytes written but not yet flushed
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }
}

impl Read for FakePort {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.input.front_mut() {
            Some(ReadStep::Data(chunk)) => {
                let n = buf.len().min(chunk.len());
                buf[..n].copy_from_slice(&chunk[..n]);
                chunk.drain(..n);
                if chunk.is_empty() {
                    self.input.pop_front();
                }
                Ok(n)
            }
            Some(ReadStep::Timeout) => {
                self.input.pop_front();
                Err(io::Error::new(ErrorKind::TimedOut, "fake timeout"))
            }
            Some(ReadStep::Fail(kind)) => {
                let kind = *kind;
                self.input.pop_front();
                Err(io::Error::new(kind, "fake read failure"))
            }
            None => Err(io::Error::new(ErrorKind::TimedOut, "fake timeout")),
        }
    }
}

impl Write for FakePort {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(kind) = self.write_error {
            return Err(io::Error::new(kind, "fake write failure"));
        }
        self.pending.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.pending.is_empty() {
            self.flushed.push(std::mem::take(&mut self.pending));
        }
        if let Some(reply) = self.reply.clone() {
            self.queue_line(&reply);
            self.queue_timeout();
        }
        Ok(())
    }
}
