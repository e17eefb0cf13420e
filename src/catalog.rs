//! The fixed set of pre-built patterns, one per [`PatternId`].

use crate::colors::{self, Hsv};
use crate::config::{RED_ORANGE_PHASE_TICKS, REFILL_PULSE_LEVEL, REMINDER_LEVELS, SPARKLE_TICKS};
use crate::pattern::{ColorCycle, LightPattern, Pulse, RainbowChase, Solid, Sparkle};
use crate::types::{ColorPhase, PatternId};

/// One pattern instance per [`PatternId`], built once at startup.
///
/// Instances are reused across activations; each one resets its own
/// progression in `initialize`. The id-to-instance mapping cannot change
/// after construction.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    patterns: [LightPattern; PatternId::COUNT],
}

impl PatternCatalog {
    /// Builds the catalog with every preset.
    pub fn new() -> Self {
        Self {
            patterns: PatternId::ALL.map(preset),
        }
    }

    /// Returns the pattern for an identifier.
    pub fn get(&self, id: PatternId) -> &LightPattern {
        &self.patterns[id.index()]
    }

    pub(crate) fn get_mut(&mut self, id: PatternId) -> &mut LightPattern {
        &mut self.patterns[id.index()]
    }

    /// Iterates over every identifier and its pattern.
    pub fn iter(&self) -> impl Iterator<Item = (PatternId, &LightPattern)> {
        PatternId::ALL.into_iter().zip(self.patterns.iter())
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::new()
    }
}

const RED_ORANGE: [ColorPhase; 2] = [
    ColorPhase::new(colors::RED, RED_ORANGE_PHASE_TICKS),
    ColorPhase::new(colors::ORANGE, RED_ORANGE_PHASE_TICKS),
];

fn preset(id: PatternId) -> LightPattern {
    match id {
        PatternId::Off => solid(colors::OFF),
        PatternId::SolidWhite => solid(colors::WHITE),
        PatternId::SolidRed => solid(colors::RED),
        PatternId::SolidGreen => solid(colors::GREEN),
        PatternId::SolidLime => solid(colors::LIME),
        PatternId::SolidBlue => solid(colors::BLUE),
        PatternId::PulseWhite => pulse(colors::WHITE),
        PatternId::PulseRed => pulse(colors::RED),
        PatternId::PulseGreen => pulse(colors::GREEN),
        PatternId::PulseLime => pulse(colors::LIME),
        PatternId::PulseBlue => pulse(colors::BLUE),
        PatternId::CycleRedOrange => match ColorCycle::from_phases(&RED_ORANGE) {
            Ok(cycle) => cycle.into(),
            // Two phases always fit; keep the catalog total regardless.
            Err(_) => solid(colors::RED),
        },
        PatternId::RainbowChase => RainbowChase::new().into(),
        PatternId::BootPulseBlue => once(colors::BLUE, u8::MAX),
        PatternId::TaredPulseGreen => once(colors::GREEN, u8::MAX),
        PatternId::RefillPulse => once(colors::BLUE, REFILL_PULSE_LEVEL),
        PatternId::Reminder1 => once(colors::RED, REMINDER_LEVELS[0]),
        PatternId::Reminder2 => once(colors::RED, REMINDER_LEVELS[1]),
        PatternId::Reminder3 => once(colors::RED, REMINDER_LEVELS[2]),
        PatternId::Reminder4 => once(colors::RED, REMINDER_LEVELS[3]),
        PatternId::DrinkSparkle => Sparkle::new(colors::GREEN, colors::BLUE, SPARKLE_TICKS).into(),
    }
}

fn solid(color: Hsv) -> LightPattern {
    Solid::new(color).into()
}

fn pulse(color: Hsv) -> LightPattern {
    Pulse::new(color).into()
}

/// A single breath peaking at `level`.
fn once(color: Hsv, level: u8) -> LightPattern {
    Pulse::new(color).with_level(level).with_cycles(1).into()
}
