use super::Pattern;
use crate::colors::{self, Hsv};
use crate::ring::{LedStrip, LightRing};

/// Number of ticks in one pulse period.
pub const PULSE_FRAMES: usize = 120;

/// Value channel per tick over one pulse period: dark pause, eased rise,
/// plateau at full, eased fall back to dark.
pub const PULSE_ENVELOPE: [u8; PULSE_FRAMES] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
    0, 0, 1, 3, 8, 15, 27, 43, 65, 92, 127, 162, 189, 211, 227, 239, 246, 251, 253, 254, //
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, //
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, //
    255, 254, 253, 251, 246, 239, 227, 211, 189, 162, 127, 92, 65, 43, 27, 15, 8, 3, 1, 0, //
];

/// Breathes a single hue in and out, one envelope period every
/// [`PULSE_FRAMES`] ticks.
///
/// Only hue and saturation of the base color are kept; the value channel is
/// driven by [`PULSE_ENVELOPE`], scaled by the pulse level. An endless pulse
/// repeats forever. A pulse limited to `n` cycles finishes dark after
/// `n * PULSE_FRAMES` ticks and ignores further ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    color: Hsv,
    level: u8,
    cycles: Option<u16>,
    completed: u16,
    frame: usize,
}

impl Pulse {
    /// Creates an endless full-level pulse around the hue and saturation of
    /// `color`.
    pub fn new(color: impl Into<Hsv>) -> Self {
        Self {
            color: color.into().with_value(0),
            level: u8::MAX,
            cycles: None,
            completed: 0,
            frame: 0,
        }
    }

    /// Caps the envelope peak at `level`.
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    /// Stops the pulse after `cycles` envelope periods.
    pub fn with_cycles(mut self, cycles: u16) -> Self {
        self.cycles = Some(cycles);
        self
    }

    /// Returns the color drawn by the last call.
    pub fn color(&self) -> Hsv {
        self.color
    }

    /// Returns the envelope peak.
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Returns the number of periods before the pulse stops, if limited.
    pub fn cycles(&self) -> Option<u16> {
        self.cycles
    }

    /// Returns the envelope index the next tick will draw.
    pub fn frame(&self) -> usize {
        self.frame
    }
}

impl Pattern for Pulse {
    fn initialize<S: LedStrip, const N: usize>(&mut self, ring: &mut LightRing<S, N>) {
        self.color.value = 0;
        self.frame = 0;
        self.completed = 0;
        ring.fill_color(self.color);
    }

    fn advance<S: LedStrip, const N: usize>(&mut self, ring: &mut LightRing<S, N>) {
        if self.is_finished() {
            return;
        }

        let peak = self.color.with_value(PULSE_ENVELOPE[self.frame]);
        self.color = colors::scale_value(peak, self.level);
        self.frame = (self.frame + 1) % PULSE_FRAMES;
        if self.frame == 0 {
            self.completed = self.completed.saturating_add(1);
        }
        ring.fill_color(self.color);
    }

    fn is_finished(&self) -> bool {
        self.cycles.is_some_and(|cycles| self.completed >= cycles)
    }
}
