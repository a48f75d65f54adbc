//! Millisecond interval timer
//!
//! Works on a free-running `u32` millisecond counter, so elapsed time is
//! computed with wrapping arithmetic and survives the counter rolling over.
//! Expiry is latched until [`Interval::clear_expired`] is called.

/// Repeating interval with a latched expiry flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    interval_ms: u32,
    last_expired_ms: u32,
    expired: bool,
}

impl Interval {
    pub fn new(interval_ms: u32, now_ms: u32) -> Self {
        Self {
            interval_ms,
            last_expired_ms: now_ms,
            expired: false,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Check the clock and latch expiry if a full interval has passed.
    ///
    /// The next expiry keeps the current phase: overshoot past the interval
    /// is carried into the next period instead of being lost.
    pub fn update(&mut self, now_ms: u32) -> bool {
        let elapsed = now_ms.wrapping_sub(self.last_expired_ms);
        if elapsed > self.interval_ms {
            let overshoot = elapsed.checked_rem(self.interval_ms).unwrap_or(0);
            self.last_expired_ms = now_ms.wrapping_sub(overshoot);
            self.expired = true;
        }
        self.expired
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn clear_expired(&mut self) {
        self.expired = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_after_interval() {
        let mut interval = Interval::new(100, 1_000);
        assert!(!interval.update(1_050));
        assert!(!interval.update(1_100));
        assert!(interval.update(1_101));
        assert!(interval.is_expired());
    }

    #[test]
    fn test_expiry_is_latched_until_cleared() {
        let mut interval = Interval::new(10, 0);
        assert!(interval.update(11));
        assert!(interval.update(12));
        interval.clear_expired();
        assert!(!interval.is_expired());
        assert!(!interval.update(12));
    }

    #[test]
    fn test_keeps_phase() {
        let mut interval = Interval::new(100, 0);
        // 250ms late: next period started at 200
        assert!(interval.update(250));
        interval.clear_expired();
        assert!(!interval.update(300));
        assert!(interval.update(301));
    }

    #[test]
    fn test_counter_rollover() {
        let start = u32::MAX - 20;
        let mut interval = Interval::new(50, start);
        assert!(!interval.update(start.wrapping_add(40)));
        assert!(interval.update(start.wrapping_add(60)));
    }

    #[test]
    fn test_zero_interval_expires_on_any_progress() {
        let mut interval = Interval::new(0, 5);
        assert!(!interval.update(5));
        assert!(interval.update(6));
    }
}
