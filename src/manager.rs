//! Pattern selection and per-tick driving of the LED ring.
//!
//! Provides [`PatternManager`], which owns the ring and the pattern catalog,
//! tracks the active pattern and is the single entry point for the tick
//! driver and the command layer.

use crate::catalog::PatternCatalog;
use crate::command::LightAction;
use crate::pattern::{LightPattern, Pattern};
use crate::ring::{LedStrip, LightRing};
use crate::types::PatternId;

/// The current state of a pattern manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ManagerState {
    /// No pattern selected yet. Ticks are rejected.
    Idle,
    /// The given pattern is advanced on every tick.
    Active(PatternId),
}

/// Errors that can occur during manager operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ManagerError {
    /// The number does not name a catalog pattern. The active pattern is unchanged.
    UnknownPattern(u8),
    /// A tick arrived before any pattern was selected.
    NoActivePattern,
}

impl core::fmt::Display for ManagerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ManagerError::UnknownPattern(raw) => {
                write!(f, "unknown pattern {}", raw)
            }
            ManagerError::NoActivePattern => {
                write!(f, "no pattern selected")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ManagerError {}

/// Drives a [`LightRing`] through the catalog patterns.
///
/// All mutating operations take `&mut self`; callers that select patterns
/// from a different context than the tick driver must serialize access (a
/// mutex or a single owning task).
///
/// # Type Parameters
/// * `S` - Physical strip implementation
/// * `N` - Number of LEDs on the ring
pub struct PatternManager<S: LedStrip, const N: usize> {
    ring: LightRing<S, N>,
    catalog: PatternCatalog,
    state: ManagerState,
}

impl<S: LedStrip, const N: usize> PatternManager<S, N> {
    /// Creates an idle manager around the ring.
    pub fn new(ring: LightRing<S, N>) -> Self {
        Self {
            ring,
            catalog: PatternCatalog::new(),
            state: ManagerState::Idle,
        }
    }

    /// Handles a light action from the command layer.
    pub fn handle_action(&mut self, action: LightAction) -> Result<(), ManagerError> {
        match action {
            LightAction::SetBrightness(level) => {
                self.set_brightness(level);
                Ok(())
            }
            LightAction::SetPattern(raw) => self.set_pattern(raw).map(|_| ()),
        }
    }

    /// Selects a pattern by its wire number.
    ///
    /// # Errors
    /// `UnknownPattern` if `raw` names no catalog entry; the active pattern
    /// keeps running untouched.
    pub fn set_pattern(&mut self, raw: u8) -> Result<PatternId, ManagerError> {
        let id = PatternId::try_from(raw).map_err(|_| {
            #[cfg(feature = "defmt")]
            defmt::warn!("rejected unknown pattern {=u8}", raw);
            ManagerError::UnknownPattern(raw)
        })?;

        self.select(id);
        Ok(id)
    }

    /// Makes `id` the active pattern and initializes it.
    ///
    /// Reselecting the active pattern restarts it from the beginning.
    pub fn select(&mut self, id: PatternId) {
        #[cfg(feature = "defmt")]
        defmt::debug!("pattern {} selected", id);

        self.state = ManagerState::Active(id);
        self.catalog.get_mut(id).initialize(&mut self.ring);
    }

    /// Sets the global brightness for subsequent writes.
    pub fn set_brightness(&mut self, level: u8) {
        #[cfg(feature = "defmt")]
        defmt::debug!("brightness set to {=u8}", level);

        self.ring.set_brightness(level);
    }

    /// Advances the active pattern by one tick and flushes the ring if needed.
    ///
    /// # Errors
    /// `NoActivePattern` if no pattern was selected yet; nothing is drawn.
    pub fn advance_frame(&mut self) -> Result<(), ManagerError> {
        let ManagerState::Active(id) = self.state else {
            return Err(ManagerError::NoActivePattern);
        };

        self.catalog.get_mut(id).advance(&mut self.ring);
        self.ring.update();
        Ok(())
    }

    /// Returns the current state of the manager.
    pub fn state(&self) -> ManagerState {
        self.state
    }

    /// Returns the active pattern, if any.
    pub fn active_pattern(&self) -> Option<PatternId> {
        match self.state {
            ManagerState::Active(id) => Some(id),
            ManagerState::Idle => None,
        }
    }

    /// Returns `true` once the active pattern has played out.
    ///
    /// Endless patterns and an idle manager never report finished.
    pub fn pattern_finished(&self) -> bool {
        self.active_pattern()
            .is_some_and(|id| self.catalog.get(id).is_finished())
    }

    /// Returns the catalog instance for an identifier.
    pub fn pattern(&self, id: PatternId) -> &LightPattern {
        self.catalog.get(id)
    }

    /// Returns a reference to the ring.
    pub fn ring(&self) -> &LightRing<S, N> {
        &self.ring
    }

    /// Returns a mutable reference to the ring.
    pub fn ring_mut(&mut self) -> &mut LightRing<S, N> {
        &mut self.ring
    }
}
