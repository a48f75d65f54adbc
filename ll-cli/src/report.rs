//! Timing summary for a streaming run

use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunReport {
    /// Frames sent
    pub trials: u32,
    pub elapsed: Duration,
}

impl RunReport {
    pub fn updates_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.trials as f64 / secs
        } else {
            0.0
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Elapsed per {}: {:.2}",
            self.trials,
            self.elapsed.as_secs_f64()
        )?;
        write!(f, "Updates per second: {:.2}", self.updates_per_second())
    }
}
