//! Compile-time configuration of the device.

use crate::types::{PatternId, Ticks};

/// LEDs on the ring.
pub const NUM_LEDS: usize = 42;

/// Global brightness set during boot.
pub const BOOT_BRIGHTNESS: u8 = 128;

/// Pattern shown from boot until the network comes up.
pub const BOOT_PATTERN: PatternId = PatternId::PulseWhite;

/// Pattern shown while the network link is up.
pub const ONLINE_PATTERN: PatternId = PatternId::SolidWhite;

/// Pattern shown while the scale refuses to tare.
pub const SCALE_ERROR_PATTERN: PatternId = PatternId::SolidRed;

/// Animation tick period (40 Hz).
pub const FRAME_PERIOD_MS: u64 = 25;

/// Load cell sampling period.
pub const SAMPLE_PERIOD_MS: u64 = 100;

/// Weight publishing period.
pub const REPORT_PERIOD_MS: u64 = 500;

/// Samples averaged into one weight reading.
pub const SCALE_WINDOW: usize = 5;

/// Raw load cell counts per gram.
pub const SCALE_COUNTS_PER_GRAM: f32 = 692_250.0 / 1_430.0;

/// Readings averaged when taring.
pub const TARE_READINGS: u32 = 10;

/// A tare offset above this means the scale was loaded when tared.
pub const MAX_TARE_OFFSET: i32 = 700_000;

/// Oldest-sample deviation from the window mean above which a reading is discarded.
pub const OUTLIER_TOLERANCE_GRAMS: f32 = 1.0;

/// Maximum phases in a color cycle.
pub const MAX_PHASES: usize = 8;

/// Hue shift per revolution of the rainbow chase.
pub const RAINBOW_HUE_STEP: u8 = 10;

/// Ticks per phase of the red/orange cycle (1 s at 40 Hz).
pub const RED_ORANGE_PHASE_TICKS: Ticks = 40;

// ============================================================================
// Standalone hydration helper
// ============================================================================

/// Raw load cell counts per gram of the NAU7802 amplifier.
pub const NAU7802_COUNTS_PER_GRAM: f32 = 324_400.0 / 377.0;

/// Consecutive samples that must agree before a weight is reported.
pub const STABILITY_SAMPLES: usize = 4;

/// Largest raw spread between those samples that still counts as stable.
pub const STABILITY_LIMIT_RAW: i32 = 500;

/// A raw reading above this at startup means something is on the scale.
pub const EMPTY_SCALE_MAX_RAW: i32 = 500_000;

/// How often the startup sequence checks whether the scale was emptied.
pub const EMPTY_CHECK_PERIOD_MS: u64 = 1_000;

/// Weights at or below this count as an empty scale.
pub const NEAR_ZERO_GRAMS: i32 = 5;

/// Smallest change in grams treated as a refill or a drink.
pub const GRAM_DELTA_HYSTERESIS: i32 = 5;

/// Time without drinking before the first reminder.
pub const FIRST_REMINDER_MS: u64 = 20 * 60_000;

/// Time between escalating reminders.
pub const REMINDER_INTERVAL_MS: u64 = 5 * 60_000;

/// Time without drinking after which an empty scale turns the lights off.
pub const IDLE_AFTER_MS: u64 = 60 * 60_000;

/// Minimum time between two automatic tares.
pub const TARE_DELAY_MS: u64 = 120_000;

/// Brightness level of the refill pulse.
pub const REFILL_PULSE_LEVEL: u8 = 64;

/// Brightness level of each reminder, from the first to the last.
pub const REMINDER_LEVELS: [u8; 4] = [64, 128, 191, 255];

/// Length of the drink sparkle (3 s at 40 Hz).
pub const SPARKLE_TICKS: Ticks = 120;

/// Brightness level of the background between sparkles.
pub const SPARKLE_DIM_LEVEL: u8 = 38;

/// LEDs per repeat of the sparkle arrangement.
pub const SPARKLE_STRIDE: usize = 4;
