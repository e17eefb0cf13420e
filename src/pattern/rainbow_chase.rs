use super::Pattern;
use crate::colors::{self, Hsv};
use crate::config::RAINBOW_HUE_STEP;
use crate::ring::{LedStrip, LightRing};

/// Runs a single lit LED around the ring, one position per tick, and shifts
/// its hue by [`RAINBOW_HUE_STEP`] after every full revolution.
///
/// The previous LED is always switched off before the next one is switched
/// on, so exactly one LED is lit after every tick, including the tick that
/// wraps back to LED 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RainbowChase {
    lit: usize,
    hue: u8,
}

impl RainbowChase {
    /// Creates a chase starting at LED 0 with hue 0.
    pub const fn new() -> Self {
        Self { lit: 0, hue: 0 }
    }

    /// Returns the index of the lit LED.
    pub fn lit_index(&self) -> usize {
        self.lit
    }

    /// Returns the hue of the lit LED.
    pub fn hue(&self) -> u8 {
        self.hue
    }
}

impl Pattern for RainbowChase {
    fn initialize<S: LedStrip, const N: usize>(&mut self, ring: &mut LightRing<S, N>) {
        self.lit = 0;
        self.hue = 0;
        ring.clear();
    }

    fn advance<S: LedStrip, const N: usize>(&mut self, ring: &mut LightRing<S, N>) {
        if N == 0 {
            return;
        }

        let previous = self.lit;
        self.lit += 1;
        if self.lit >= N {
            self.lit = 0;
            self.hue = self.hue.wrapping_add(RAINBOW_HUE_STEP);
        }

        ring.set_led_wrapping(previous, colors::OFF);
        ring.set_led_wrapping(self.lit, Hsv::new(self.hue, 255, 255));
    }
}
