#![no_std]
#![no_main]

use core::cell::Cell;

use cortex_m_rt::entry;
use hydration_lights::config::NUM_LEDS;
use hydration_lights::{
    Firmware, LoadCell, Publisher, SmartLedsStrip, TimeDuration, TimeInstant, TimeSource,
};
use panic_halt as _;
use smart_leds::{RGB8, SmartLedsWrite};

// ============================================================================
// Minimal Time Types
// ============================================================================

/// Minimal 32-bit millisecond duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration32(u32);

impl TimeDuration for Duration32 {
    fn as_millis(&self) -> u64 {
        self.0 as u64
    }

    fn from_millis(millis: u64) -> Self {
        Duration32(millis as u32)
    }
}

/// Minimal 32-bit millisecond instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant32(u32);

impl TimeInstant for Instant32 {
    type Duration = Duration32;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        Duration32(self.0.wrapping_sub(earlier.0))
    }
}

/// Counts one millisecond per poll
pub struct MinimalTimeSource {
    millis: Cell<u32>,
}

impl TimeSource<Instant32> for MinimalTimeSource {
    fn now(&self) -> Instant32 {
        let now = self.millis.get();
        self.millis.set(now.wrapping_add(1));
        Instant32(now)
    }
}

// ============================================================================
// Minimal Peripherals
// ============================================================================

/// Driver that discards every frame
pub struct MinimalDriver;

impl SmartLedsWrite for MinimalDriver {
    type Error = ();
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        for pixel in iterator {
            core::hint::black_box(pixel.into());
        }
        Ok(())
    }
}

/// Load cell that always reads an empty scale
pub struct MinimalLoadCell;

impl LoadCell for MinimalLoadCell {
    fn is_ready(&mut self) -> bool {
        true
    }

    fn read(&mut self) -> i32 {
        core::hint::black_box(0)
    }
}

/// Publisher that drops every message
pub struct MinimalPublisher;

impl Publisher for MinimalPublisher {
    fn publish(&mut self, topic: &str, payload: &str) {
        core::hint::black_box((topic, payload));
    }
}

#[entry]
fn main() -> ! {
    let clock = MinimalTimeSource {
        millis: Cell::new(0),
    };
    let strip = SmartLedsStrip::<_, NUM_LEDS>::new(MinimalDriver);

    let mut device: Firmware<'_, _, _, _, _, _, NUM_LEDS> =
        Firmware::boot(strip, MinimalLoadCell, MinimalPublisher, &clock);
    device.on_network_up();
    let _ = device.handle_message("hydration-helper/pattern", b"12");

    loop {
        let _ = device.poll();
    }
}
