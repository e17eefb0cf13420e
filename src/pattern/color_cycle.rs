use super::Pattern;
use crate::colors::Hsv;
use crate::config::MAX_PHASES;
use crate::ring::{LedStrip, LightRing};
use crate::types::{ColorPhase, CycleError, Ticks};
use heapless::Vec;

/// Steps through a fixed list of colors, holding each for its own number of
/// ticks, and starts over after the last one.
///
/// A phase of `n` ticks is visible for exactly `n` ticks counting the tick it
/// was drawn on (zero is treated as one). With phases `[(red, 2), (off, 1)]`
/// the ring shows red, red, off, red, ...
#[derive(Debug, Clone)]
pub struct ColorCycle {
    phases: Vec<ColorPhase, MAX_PHASES>,
    phase: usize,
    elapsed: Ticks,
}

impl ColorCycle {
    /// Creates a new color cycle builder.
    pub fn builder() -> ColorCycleBuilder {
        ColorCycleBuilder::new()
    }

    /// Builds a cycle from a fixed list of phases.
    ///
    /// # Errors
    /// * `Empty` - No phases given
    /// * `CapacityExceeded` - More than `MAX_PHASES` phases given
    pub fn from_phases(phases: &[ColorPhase]) -> Result<Self, CycleError> {
        let phases = Vec::from_slice(phases).map_err(|_| CycleError::CapacityExceeded)?;
        ColorCycleBuilder { phases }.build()
    }

    /// Returns the number of phases.
    pub fn phase_count(&self) -> usize {
        self.phases.len()
    }

    /// Returns the index of the phase currently shown.
    pub fn phase_index(&self) -> usize {
        self.phase
    }

    /// Returns the phase currently shown.
    pub fn current_phase(&self) -> ColorPhase {
        self.phases[self.phase]
    }

    /// Returns a reference to the phase at the given index.
    pub fn get_phase(&self, index: usize) -> Option<&ColorPhase> {
        self.phases.get(index)
    }
}

impl Pattern for ColorCycle {
    fn initialize<S: LedStrip, const N: usize>(&mut self, ring: &mut LightRing<S, N>) {
        self.phase = 0;
        self.elapsed = 0;
        ring.fill_color(self.phases[0].color);
    }

    fn advance<S: LedStrip, const N: usize>(&mut self, ring: &mut LightRing<S, N>) {
        self.elapsed = self.elapsed.saturating_add(1);
        if self.elapsed >= self.phases[self.phase].ticks {
            self.elapsed = 0;
            self.phase = (self.phase + 1) % self.phases.len();
            ring.fill_color(self.phases[self.phase].color);
        }
    }
}

/// Builder for constructing validated color cycles.
#[derive(Debug, Default)]
pub struct ColorCycleBuilder {
    phases: Vec<ColorPhase, MAX_PHASES>,
}

impl ColorCycleBuilder {
    /// Creates a new empty builder.
    pub fn new() -> Self {
        Self { phases: Vec::new() }
    }

    /// Appends a phase.
    ///
    /// # Errors
    /// `CapacityExceeded` if the cycle already holds `MAX_PHASES` phases.
    pub fn phase(mut self, color: impl Into<Hsv>, ticks: Ticks) -> Result<Self, CycleError> {
        self.phases
            .push(ColorPhase::new(color.into(), ticks))
            .map_err(|_| CycleError::CapacityExceeded)?;
        Ok(self)
    }

    /// Builds and validates the cycle.
    ///
    /// # Errors
    /// `Empty` if no phase was added.
    pub fn build(self) -> Result<ColorCycle, CycleError> {
        if self.phases.is_empty() {
            return Err(CycleError::Empty);
        }

        Ok(ColorCycle {
            phases: self.phases,
            phase: 0,
            elapsed: 0,
        })
    }
}
