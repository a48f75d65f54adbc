//! Constant color pattern

use super::{Pattern, PatternState};
use ll_model::{Color, ColorBuffer};

/// Adds one color to every LED
#[derive(Debug, Clone)]
pub struct SolidPattern {
    state: PatternState,
    color: Color,
}

impl SolidPattern {
    pub fn new(color: Color) -> Self {
        Self {
            state: PatternState::new(),
            color,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        if color != self.color {
            self.color = color;
            self.state.set_changed();
        }
    }
}

impl Pattern for SolidPattern {
    fn state(&self) -> &PatternState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PatternState {
        &mut self.state
    }

    fn render_into(&mut self, buffer: &mut ColorBuffer) {
        for index in 0..buffer.len() {
            if let Some(led) = buffer.get_mut(index) {
                *led = led.saturating_add(self.color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_color_marks_changed() {
        let mut pattern = SolidPattern::new(Color::BLACK);
        pattern.apply(&mut ColorBuffer::new(1));
        assert!(!pattern.is_changed());

        pattern.set_color(Color::BLACK);
        assert!(!pattern.is_changed());

        pattern.set_color(Color::CYAN);
        assert!(pattern.is_changed());
    }
}
