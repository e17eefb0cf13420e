use super::HydrationTracker;
use crate::config::{
    BOOT_BRIGHTNESS, EMPTY_CHECK_PERIOD_MS, EMPTY_SCALE_MAX_RAW, FRAME_PERIOD_MS,
    NAU7802_COUNTS_PER_GRAM, SCALE_ERROR_PATTERN, STABILITY_SAMPLES,
};
use crate::manager::{ManagerError, PatternManager};
use crate::ring::{LedStrip, LightRing};
use crate::scale::{LoadCell, Scale};
use crate::time::{Interval, TimeInstant, TimeSource};
use crate::types::PatternId;

/// Startup progress of a [`HydrationHelper`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stage {
    /// The boot pulse is playing.
    Greeting,
    /// Waiting for the scale to be emptied so it can be tared.
    WaitingForEmpty,
    /// The tare confirmation pulse is playing.
    Tared,
    /// Weights are tracked and answered with light cues.
    Monitoring,
}

/// Standalone hydration helper: scale, tracker and ring without a network.
///
/// Boots into a blue pulse, then waits for an empty scale, tares it and
/// confirms with a green pulse. From there every stable weight goes through
/// the [`HydrationTracker`] and the pattern it asks for is shown.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `S` - Physical strip implementation
/// * `C` - Load cell implementation
/// * `T` - Time source implementation
/// * `N` - Number of LEDs on the ring
pub struct HydrationHelper<'t, I, S, C, T, const N: usize>
where
    I: TimeInstant,
    S: LedStrip,
    C: LoadCell,
    T: TimeSource<I>,
{
    manager: PatternManager<S, N>,
    scale: Scale<C, STABILITY_SAMPLES>,
    tracker: HydrationTracker<I>,
    time_source: &'t T,
    stage: Stage,
    frame_interval: Interval<I>,
    empty_check_interval: Interval<I>,
}

impl<'t, I, S, C, T, const N: usize> HydrationHelper<'t, I, S, C, T, N>
where
    I: TimeInstant,
    S: LedStrip,
    C: LoadCell,
    T: TimeSource<I>,
{
    /// Starts the boot pulse. The scale stays untared until it is empty.
    pub fn boot(strip: S, cell: C, time_source: &'t T) -> Self {
        let mut manager = PatternManager::new(LightRing::new(strip));
        manager.set_brightness(BOOT_BRIGHTNESS);
        manager.select(PatternId::BootPulseBlue);

        #[cfg(feature = "defmt")]
        defmt::info!("hydration helper booted");

        Self {
            manager,
            scale: Scale::new(cell, NAU7802_COUNTS_PER_GRAM),
            tracker: HydrationTracker::new(time_source.now()),
            time_source,
            stage: Stage::Greeting,
            frame_interval: Interval::from_millis(FRAME_PERIOD_MS),
            empty_check_interval: Interval::from_millis(EMPTY_CHECK_PERIOD_MS),
        }
    }

    /// Runs whatever work is due.
    ///
    /// # Errors
    /// Only when the manager has no active pattern, which cannot happen
    /// after [`boot`](Self::boot).
    pub fn poll(&mut self) -> Result<(), ManagerError> {
        let now = self.time_source.now();

        match self.stage {
            Stage::Greeting => {
                if self.manager.pattern_finished() {
                    self.stage = Stage::WaitingForEmpty;
                }
            }
            Stage::WaitingForEmpty => {
                if self.empty_check_interval.poll(now) {
                    self.check_empty();
                }
            }
            Stage::Tared => {
                if self.manager.pattern_finished() {
                    #[cfg(feature = "defmt")]
                    defmt::info!("monitoring");
                    self.stage = Stage::Monitoring;
                }
            }
            Stage::Monitoring => self.monitor(now),
        }

        if self.frame_interval.poll(now) {
            self.manager.advance_frame()?;
        }

        Ok(())
    }

    fn check_empty(&mut self) {
        let raw = self.scale.read_raw();
        if raw > EMPTY_SCALE_MAX_RAW {
            #[cfg(feature = "defmt")]
            defmt::warn!("scale not empty ({=i32}), remove weight to tare", raw);

            if self.manager.active_pattern() != Some(SCALE_ERROR_PATTERN) {
                self.manager.select(SCALE_ERROR_PATTERN);
            }
            return;
        }

        self.scale.tare();
        self.manager.select(PatternId::TaredPulseGreen);
        self.stage = Stage::Tared;
    }

    fn monitor(&mut self, now: I) {
        if self.scale.take_sample() {
            let cue = self
                .scale
                .stable_weight()
                .and_then(|weight| self.tracker.update(round_grams(weight), now));
            if let Some(id) = cue {
                self.manager.select(id);
            }
        }

        if self.tracker.should_tare(now) {
            self.scale.tare();
            self.tracker.report_tare(now);
        }
    }

    /// Returns the startup stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns a reference to the pattern manager.
    pub fn manager(&self) -> &PatternManager<S, N> {
        &self.manager
    }

    /// Returns a reference to the tracker.
    pub fn tracker(&self) -> &HydrationTracker<I> {
        &self.tracker
    }

    /// Returns a reference to the scale.
    pub fn scale(&self) -> &Scale<C, STABILITY_SAMPLES> {
        &self.scale
    }

    /// Returns a mutable reference to the scale.
    pub fn scale_mut(&mut self) -> &mut Scale<C, STABILITY_SAMPLES> {
        &mut self.scale
    }
}

/// Rounds to the nearest gram, halves away from zero.
fn round_grams(weight: f32) -> i32 {
    if weight >= 0.0 {
        (weight + 0.5) as i32
    } else {
        (weight - 0.5) as i32
    }
}
