//! Traveling gradient wave backed by a [`ColorGenerator`]

use super::{Pattern, PatternState};
use crate::generator::ColorGenerator;
use ll_model::ColorBuffer;

#[derive(Debug, Clone)]
pub struct WavePattern {
    state: PatternState,
    generator: ColorGenerator,
}

impl WavePattern {
    pub fn new(generator: ColorGenerator) -> Self {
        Self {
            state: PatternState::new(),
            generator,
        }
    }

    /// Move the wave one LED down the strip
    pub fn advance(&mut self) {
        self.generator.update();
        self.state.set_changed();
    }

    pub fn generator(&self) -> &ColorGenerator {
        &self.generator
    }
}

impl Pattern for WavePattern {
    fn state(&self) -> &PatternState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PatternState {
        &mut self.state
    }

    /// Adds the wave onto `buffer`; extra LEDs on either side are left alone
    fn render_into(&mut self, buffer: &mut ColorBuffer) {
        for (index, color) in self.generator.color_bytes().iter().enumerate() {
            if let Some(led) = buffer.get_mut(index) {
                *led = led.saturating_add(*color);
            }
        }
    }
}
