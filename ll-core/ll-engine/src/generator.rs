//! Rolling color generator
//!
//! Every [`ColorGenerator::update`] shifts the strip back by one LED and puts
//! a new color at the front. With the gradient scheme the new color comes from
//! three phase-shifted sinusoids, so successive updates push a traveling color
//! wave down the strip.

use crate::error::GeneratorError;
use core::f64::consts::{FRAC_PI_2, PI};
use core::fmt;
use core::str::FromStr;
use ll_model::{Color, ColorBuffer};

/// Phase advance per gradient update
pub const DEFAULT_STEP: f64 = PI / 25.0;

/// Seed used when the caller does not supply one
pub const DEFAULT_SEED: u64 = 0x5EED_1ED5;

/// Phase offsets for R, G and B
const CHANNEL_OFFSETS: [f64; 3] = [FRAC_PI_2, 0.0, -FRAC_PI_2];

/// How the next front color is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    /// Sinusoidal gradient driven by the phase counter
    #[default]
    Gradient,
    /// Uniformly random channels
    Random,
    /// The dropped last color comes back in at the front
    Rotate,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Gradient => "gradient",
            Scheme::Random => "random",
            Scheme::Rotate => "rotate",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gradient" => Ok(Scheme::Gradient),
            "random" => Ok(Scheme::Random),
            "rotate" => Ok(Scheme::Rotate),
            other => Err(GeneratorError::UnknownScheme(other.into())),
        }
    }
}

/// Gradient color at phase `t`
pub fn gradient_color(t: f64) -> Color {
    let [r, g, b] = CHANNEL_OFFSETS.map(|offset| {
        // `as` saturates, and sin never exceeds 1.0
        (255.0 * (0.5 * (1.0 + libm::sin(t + offset)))) as u8
    });
    Color::new(r, g, b)
}

/// Produces one frame of colors per update
#[derive(Debug, Clone)]
pub struct ColorGenerator {
    colors: ColorBuffer,
    /// Phase counter
    t: f64,
    step: f64,
    scheme: Scheme,
    rng: fastrand::Rng,
}

impl ColorGenerator {
    /// Create a generator for `num_leds` LEDs, all black, using the gradient scheme
    pub fn new(num_leds: usize) -> Result<Self, GeneratorError> {
        if num_leds == 0 {
            return Err(GeneratorError::EmptyStrip);
        }
        Ok(Self {
            colors: ColorBuffer::new(num_leds),
            t: 0.0,
            step: DEFAULT_STEP,
            scheme: Scheme::default(),
            rng: fastrand::Rng::with_seed(DEFAULT_SEED),
        })
    }

    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Seed the random scheme
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = fastrand::Rng::with_seed(seed);
        self
    }

    /// Paint the static cyan / magenta / yellow scheme onto the first LEDs
    pub fn with_cym_seed(mut self) -> Self {
        let seed = [Color::YELLOW, Color::MAGENTA, Color::CYAN];
        for (index, color) in seed.into_iter().enumerate() {
            self.colors.set(index, color);
        }
        self
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn phase(&self) -> f64 {
        self.t
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Drop the last color and insert the next one at the front
    pub fn update(&mut self) {
        match self.scheme {
            Scheme::Gradient => {
                let next = self.next_in_gradient();
                self.colors.push_front(next);
            }
            Scheme::Random => {
                let next = self.next_random();
                self.colors.push_front(next);
            }
            Scheme::Rotate => self.colors.rotate_front(),
        }
    }

    /// Advance the phase and return the gradient color there
    pub fn next_in_gradient(&mut self) -> Color {
        self.t += self.step;
        gradient_color(self.t)
    }

    fn next_random(&mut self) -> Color {
        Color::new(self.rng.u8(..), self.rng.u8(..), self.rng.u8(..))
    }

    /// Current frame
    pub fn color_bytes(&self) -> &ColorBuffer {
        &self.colors
    }
}
