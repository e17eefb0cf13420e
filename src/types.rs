//! Core types shared by patterns, the catalog and the manager.

use crate::colors::Hsv;

/// Animation time, counted in calls to `advance`.
pub type Ticks = u16;

/// Identifier of a pre-built pattern in the catalog.
///
/// The discriminants are the numbers used on the wire by the command layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PatternId {
    /// All LEDs off.
    Off = 0,
    /// Constant white.
    SolidWhite,
    /// Constant red. Also shown while the scale cannot be tared.
    SolidRed,
    /// Constant green.
    SolidGreen,
    /// Constant lime.
    SolidLime,
    /// Constant blue.
    SolidBlue,
    /// White breathing without end.
    PulseWhite,
    /// Red breathing without end.
    PulseRed,
    /// Green breathing without end.
    PulseGreen,
    /// Lime breathing without end.
    PulseLime,
    /// Blue breathing without end.
    PulseBlue,
    /// Alternates red and orange.
    CycleRedOrange,
    /// Single lit LED running around the ring, shifting hue every revolution.
    RainbowChase,
    /// One blue breath at startup.
    BootPulseBlue,
    /// One green breath once the empty scale is tared.
    TaredPulseGreen,
    /// One dim blue breath when the bottle is refilled.
    RefillPulse,
    /// First drink reminder, a faint red breath.
    Reminder1,
    /// Second drink reminder.
    Reminder2,
    /// Third drink reminder.
    Reminder3,
    /// Last drink reminder, a full red breath.
    Reminder4,
    /// Green and blue sparkle after a drink.
    DrinkSparkle,
}

impl PatternId {
    /// Number of patterns in the catalog.
    pub const COUNT: usize = 21;

    /// Every identifier, in discriminant order.
    pub const ALL: [PatternId; Self::COUNT] = [
        PatternId::Off,
        PatternId::SolidWhite,
        PatternId::SolidRed,
        PatternId::SolidGreen,
        PatternId::SolidLime,
        PatternId::SolidBlue,
        PatternId::PulseWhite,
        PatternId::PulseRed,
        PatternId::PulseGreen,
        PatternId::PulseLime,
        PatternId::PulseBlue,
        PatternId::CycleRedOrange,
        PatternId::RainbowChase,
        PatternId::BootPulseBlue,
        PatternId::TaredPulseGreen,
        PatternId::RefillPulse,
        PatternId::Reminder1,
        PatternId::Reminder2,
        PatternId::Reminder3,
        PatternId::Reminder4,
        PatternId::DrinkSparkle,
    ];

    /// Returns the catalog slot for this identifier.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl From<PatternId> for u8 {
    fn from(id: PatternId) -> Self {
        id as u8
    }
}

impl TryFrom<u8> for PatternId {
    type Error = UnknownPattern;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        PatternId::ALL
            .get(raw as usize)
            .copied()
            .ok_or(UnknownPattern(raw))
    }
}

/// A pattern number that does not name any catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownPattern(pub u8);

impl core::fmt::Display for UnknownPattern {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown pattern {}", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownPattern {}

/// One step of a color cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorPhase {
    /// Color shown for the whole phase.
    pub color: Hsv,

    /// Ticks the phase stays visible. Zero behaves like one.
    pub ticks: Ticks,
}

impl ColorPhase {
    /// Creates a new phase.
    #[inline]
    pub const fn new(color: Hsv, ticks: Ticks) -> Self {
        Self { color, ticks }
    }
}

/// Color cycle validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleError {
    /// No phases provided.
    Empty,

    /// Phase capacity exceeded.
    CapacityExceeded,
}

impl core::fmt::Display for CycleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CycleError::Empty => write!(f, "color cycle must have at least one phase"),
            CycleError::CapacityExceeded => write!(f, "color cycle phase capacity exceeded"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CycleError {}
