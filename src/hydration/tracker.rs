use crate::config::{
    FIRST_REMINDER_MS, GRAM_DELTA_HYSTERESIS, IDLE_AFTER_MS, NEAR_ZERO_GRAMS, REMINDER_INTERVAL_MS,
    TARE_DELAY_MS,
};
use crate::time::{TimeDuration, TimeInstant};
use crate::types::PatternId;

/// Reminder patterns, from the faintest to the brightest.
pub const REMINDERS: [PatternId; 4] = [
    PatternId::Reminder1,
    PatternId::Reminder2,
    PatternId::Reminder3,
    PatternId::Reminder4,
];

/// Turns stable weight readings into drinking events and light cues.
///
/// Weights are whole grams relative to the tared empty scale. The tracker
/// remembers the weight of the bottle after the last refill or drink and
/// compares every new reading against it:
///
/// * a rise of at least `GRAM_DELTA_HYSTERESIS` is a refill
/// * a drop of more than `GRAM_DELTA_HYSTERESIS` is a drink
/// * anything in between is noise
///
/// A reading at or below `NEAR_ZERO_GRAMS` means the bottle was lifted off.
/// Lifting it asks for a tare so the zero point follows drift.
///
/// # Type Parameters
/// * `I` - Time instant type
#[derive(Debug, Clone, Copy)]
pub struct HydrationTracker<I: TimeInstant> {
    current: i32,
    last_water: i32,
    total_consumed: u32,
    last_consumption: I,
    last_reminder: Option<I>,
    reminder_level: u8,
    idle: bool,
    pending_tare: bool,
    last_tare: Option<I>,
}

impl<I: TimeInstant> HydrationTracker<I> {
    /// Creates a tracker for an empty scale. The reminder clock starts at `now`.
    pub fn new(now: I) -> Self {
        Self {
            current: 0,
            last_water: 0,
            total_consumed: 0,
            last_consumption: now,
            last_reminder: None,
            reminder_level: 0,
            idle: false,
            pending_tare: false,
            last_tare: None,
        }
    }

    /// Feeds one stable reading taken at `now`.
    ///
    /// Returns the pattern to show in response, if any. `PatternId::Off`
    /// means the helper went idle.
    pub fn update(&mut self, grams: i32, now: I) -> Option<PatternId> {
        let previous = self.current;
        self.current = grams;

        if grams <= NEAR_ZERO_GRAMS {
            if previous > NEAR_ZERO_GRAMS {
                self.pending_tare = true;
                return None;
            }
            return self.reminder_or_idle(now);
        }

        self.pending_tare = false;
        self.last_tare = None;

        if grams >= self.last_water.saturating_add(GRAM_DELTA_HYSTERESIS) {
            #[cfg(feature = "defmt")]
            defmt::info!("refilled to {=i32} g", grams);

            self.last_water = grams;
            self.idle = false;
            return self.reminder_or_idle(now).or(Some(PatternId::RefillPulse));
        }

        let drunk = self.last_water.saturating_sub(grams);
        if drunk > GRAM_DELTA_HYSTERESIS {
            self.total_consumed = self.total_consumed.saturating_add(drunk as u32);

            #[cfg(feature = "defmt")]
            defmt::info!("drank {=i32} g, {=u32} g total", drunk, self.total_consumed);

            self.last_water = grams;
            self.last_consumption = now;
            self.reminder_level = 0;
            self.last_reminder = None;
            self.idle = false;
            return Some(PatternId::DrinkSparkle);
        }

        self.reminder_or_idle(now)
    }

    fn reminder_or_idle(&mut self, now: I) -> Option<PatternId> {
        if self.idle {
            return None;
        }

        let since = now.duration_since(self.last_consumption).as_millis();
        if since >= IDLE_AFTER_MS && self.current <= NEAR_ZERO_GRAMS {
            #[cfg(feature = "defmt")]
            defmt::info!("idle");

            self.idle = true;
            return Some(PatternId::Off);
        }

        if since <= FIRST_REMINDER_MS {
            return None;
        }

        let due = self.last_reminder.is_none_or(|last| {
            now.duration_since(last).as_millis() >= REMINDER_INTERVAL_MS
        });
        if !due {
            return None;
        }

        self.reminder_level = (self.reminder_level + 1).min(REMINDERS.len() as u8);
        self.last_reminder = Some(now);

        #[cfg(feature = "defmt")]
        defmt::debug!("reminder level {=u8}", self.reminder_level);

        Some(REMINDERS[self.reminder_level as usize - 1])
    }

    /// Returns true if the scale should be tared now.
    ///
    /// A tare is wanted after the bottle was lifted off, and repeats at most
    /// every `TARE_DELAY_MS` while the scale stays empty.
    pub fn should_tare(&self, now: I) -> bool {
        self.pending_tare
            && self
                .last_tare
                .is_none_or(|last| now.duration_since(last).as_millis() > TARE_DELAY_MS)
    }

    /// Records a tare performed at `now`.
    pub fn report_tare(&mut self, now: I) {
        self.last_tare = Some(now);
    }

    /// Returns the grams drunk since boot.
    pub fn total_consumed(&self) -> u32 {
        self.total_consumed
    }

    /// Returns the last reading.
    pub fn current_weight(&self) -> i32 {
        self.current
    }

    /// Returns the bottle weight after the last refill or drink.
    pub fn last_water_weight(&self) -> i32 {
        self.last_water
    }

    /// Returns how many reminders were given since the last drink, capped
    /// at the number of reminder patterns.
    pub fn reminder_level(&self) -> u8 {
        self.reminder_level
    }

    /// Returns true while the lights are off for lack of activity.
    pub fn is_idle(&self) -> bool {
        self.idle
    }

    /// Returns true while a tare is wanted.
    pub fn pending_tare(&self) -> bool {
        self.pending_tare
    }
}
