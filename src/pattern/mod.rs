//! Tick-driven animation patterns.
//!
//! Every pattern is a small state machine driven by two calls: `initialize`
//! when it becomes active and `advance` once per tick while it stays active.
//! Timing is counted in ticks, never measured, so a slower or jittery tick
//! driver only changes the perceived speed.
//!
//! The set of patterns is closed: [`LightPattern`] holds any of them without
//! heap allocation and dispatches to the right one.

mod color_cycle;
mod pulse;
mod rainbow_chase;
mod solid;
mod sparkle;

pub use color_cycle::{ColorCycle, ColorCycleBuilder};
pub use pulse::{PULSE_ENVELOPE, PULSE_FRAMES, Pulse};
pub use rainbow_chase::RainbowChase;
pub use solid::Solid;
pub use sparkle::Sparkle;

use crate::ring::{LedStrip, LightRing};

/// Shared behavior of all patterns.
///
/// The ring is only borrowed for the duration of a call; patterns never keep
/// a reference to it.
pub trait Pattern {
    /// Resets progression to the start and draws the first frame.
    ///
    /// Called exactly once each time the pattern becomes active, before any
    /// call to [`advance`](Self::advance).
    fn initialize<S: LedStrip, const N: usize>(&mut self, ring: &mut LightRing<S, N>);

    /// Performs one tick of progression and redraws as needed.
    fn advance<S: LedStrip, const N: usize>(&mut self, ring: &mut LightRing<S, N>);

    /// Returns `true` once a pattern with a fixed length has played out.
    ///
    /// A finished pattern leaves the ring dark and ignores further ticks.
    /// Endless patterns never finish.
    fn is_finished(&self) -> bool {
        false
    }
}

/// Any of the built-in patterns.
#[derive(Debug, Clone)]
pub enum LightPattern {
    /// Constant color
    Solid(Solid),
    /// Single color breathing through a brightness envelope
    Pulse(Pulse),
    /// Sequence of timed colors
    ColorCycle(ColorCycle),
    /// Single lit LED running around the ring
    RainbowChase(RainbowChase),
    /// Two colors sparkling over a dim blend
    Sparkle(Sparkle),
}

impl Pattern for LightPattern {
    fn initialize<S: LedStrip, const N: usize>(&mut self, ring: &mut LightRing<S, N>) {
        match self {
            Self::Solid(pattern) => pattern.initialize(ring),
            Self::Pulse(pattern) => pattern.initialize(ring),
            Self::ColorCycle(pattern) => pattern.initialize(ring),
            Self::RainbowChase(pattern) => pattern.initialize(ring),
            Self::Sparkle(pattern) => pattern.initialize(ring),
        }
    }

    fn advance<S: LedStrip, const N: usize>(&mut self, ring: &mut LightRing<S, N>) {
        match self {
            Self::Solid(pattern) => pattern.advance(ring),
            Self::Pulse(pattern) => pattern.advance(ring),
            Self::ColorCycle(pattern) => pattern.advance(ring),
            Self::RainbowChase(pattern) => pattern.advance(ring),
            Self::Sparkle(pattern) => pattern.advance(ring),
        }
    }

    fn is_finished(&self) -> bool {
        match self {
            Self::Solid(pattern) => pattern.is_finished(),
            Self::Pulse(pattern) => pattern.is_finished(),
            Self::ColorCycle(pattern) => pattern.is_finished(),
            Self::RainbowChase(pattern) => pattern.is_finished(),
            Self::Sparkle(pattern) => pattern.is_finished(),
        }
    }
}

impl From<Solid> for LightPattern {
    fn from(pattern: Solid) -> Self {
        Self::Solid(pattern)
    }
}

impl From<Pulse> for LightPattern {
    fn from(pattern: Pulse) -> Self {
        Self::Pulse(pattern)
    }
}

impl From<ColorCycle> for LightPattern {
    fn from(pattern: ColorCycle) -> Self {
        Self::ColorCycle(pattern)
    }
}

impl From<RainbowChase> for LightPattern {
    fn from(pattern: RainbowChase) -> Self {
        Self::RainbowChase(pattern)
    }
}

impl From<Sparkle> for LightPattern {
    fn from(pattern: Sparkle) -> Self {
        Self::Sparkle(pattern)
    }
}
