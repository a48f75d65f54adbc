//! Animated patterns composed into a shared frame buffer
//!
//! A pattern owns a [`PatternState`] and marks it changed whenever its
//! animation advances. [`Pattern::apply`] draws the pattern and clears the
//! flag, so a frame only needs re-rendering when some pattern reports
//! [`Pattern::is_changed`].

pub mod solid;
pub mod wave;

pub use solid::SolidPattern;
pub use wave::WavePattern;

use ll_model::{Color, ColorBuffer};

/// Change tracking shared by every pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternState {
    changed: bool,
}

impl PatternState {
    /// New patterns start changed so their first frame is drawn
    pub fn new() -> Self {
        Self { changed: true }
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn set_changed(&mut self) {
        self.changed = true;
    }

    pub fn clear_changed(&mut self) {
        self.changed = false;
    }
}

impl Default for PatternState {
    fn default() -> Self {
        Self::new()
    }
}

/// An animation that can draw itself into a frame
pub trait Pattern {
    fn state(&self) -> &PatternState;

    fn state_mut(&mut self) -> &mut PatternState;

    /// Draw the current state into `buffer`, usually by adding colors
    fn render_into(&mut self, buffer: &mut ColorBuffer);

    /// Draw into `buffer` and clear the changed flag
    fn apply(&mut self, buffer: &mut ColorBuffer) {
        self.render_into(buffer);
        self.state_mut().clear_changed();
    }

    /// Whether this pattern needs the frame re-rendered
    fn is_changed(&self) -> bool {
        self.state().is_changed()
    }
}

/// Re-render `buffer` from `patterns` if any of them changed.
///
/// The buffer is cleared to black and every pattern is applied in order, so
/// later patterns add on top of earlier ones. Returns false and leaves the
/// buffer alone when nothing changed.
pub fn render(patterns: &mut [&mut dyn Pattern], buffer: &mut ColorBuffer) -> bool {
    if !patterns.iter().any(|p| p.is_changed()) {
        return false;
    }

    buffer.fill(Color::BLACK);
    for pattern in patterns.iter_mut() {
        pattern.apply(buffer);
    }
    log::trace!("Rendered {} patterns", patterns.len());
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    /// Counts how often it was drawn
    struct CountingPattern {
        state: PatternState,
        renders: usize,
    }

    impl Pattern for CountingPattern {
        fn state(&self) -> &PatternState {
            &self.state
        }

        fn state_mut(&mut self) -> &mut PatternState {
            &mut self.state
        }

        fn render_into(&mut self, _buffer: &mut ColorBuffer) {
            self.renders += 1;
        }
    }

    #[test]
    fn test_apply_clears_changed() {
        let mut pattern = CountingPattern {
            state: PatternState::new(),
            renders: 0,
        };
        let mut buffer = ColorBuffer::new(1);
        assert!(pattern.is_changed());
        pattern.apply(&mut buffer);
        assert!(!pattern.is_changed());

        // Applying an unchanged pattern still leaves it cleared
        pattern.apply(&mut buffer);
        assert!(!pattern.is_changed());
        assert_eq!(pattern.renders, 2);
    }

    #[test]
    fn test_render_composes_in_order() {
        let mut red = SolidPattern::new(Color::new(100, 0, 0));
        let mut orange = SolidPattern::new(Color::new(200, 10, 0));
        let mut buffer = ColorBuffer::filled(2, Color::WHITE);

        assert!(render(&mut [&mut red, &mut orange], &mut buffer));
        assert_eq!(buffer.to_vec(), vec![Color::new(255, 10, 0); 2]);
        assert!(!red.is_changed());
        assert!(!orange.is_changed());
    }

    #[test]
    fn test_render_skips_when_unchanged() {
        let mut solid = SolidPattern::new(Color::new(1, 2, 3));
        let mut buffer = ColorBuffer::new(2);
        assert!(render(&mut [&mut solid], &mut buffer));

        buffer.set(0, Color::WHITE);
        assert!(!render(&mut [&mut solid], &mut buffer));
        assert_eq!(buffer.get(0), Some(Color::WHITE));
    }
}
