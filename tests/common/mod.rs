//! Shared test infrastructure for hydration-lights integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use hydration_lights::{
    Hsv, LedStrip, LightRing, LoadCell, Publisher, Rgb, TimeDuration, TimeInstant, TimeSource,
    colors,
};
use std::cell::Cell;
use std::collections::VecDeque;

// ============================================================================
// Mock Strip
// ============================================================================

/// Mock strip that records every flush and clear
#[derive(Default)]
pub struct MockStrip {
    frames: Vec<Vec<Rgb>>,
    clears: usize,
}

impl MockStrip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flush_count(&self) -> usize {
        self.frames.len()
    }

    pub fn clear_count(&self) -> usize {
        self.clears
    }

    pub fn last_frame(&self) -> Option<&[Rgb]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl LedStrip for MockStrip {
    fn write(&mut self, colors: &[Rgb]) {
        self.frames.push(colors.to_vec());
    }

    fn clear(&mut self) {
        self.clears += 1;
    }
}

pub type TestRing<const N: usize> = LightRing<MockStrip, N>;

pub fn ring<const N: usize>() -> TestRing<N> {
    LightRing::new(MockStrip::new())
}

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn now_millis(&self) -> u64 {
        self.current_time.get().0
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Load Cell
// ============================================================================

/// Mock load cell returning queued readings, then repeating a resting value
pub struct MockLoadCell {
    queued: VecDeque<i32>,
    resting: i32,
    ready: bool,
    reads: usize,
}

impl MockLoadCell {
    pub fn resting_at(resting: i32) -> Self {
        Self {
            queued: VecDeque::new(),
            resting,
            ready: true,
            reads: 0,
        }
    }

    pub fn set_resting(&mut self, resting: i32) {
        self.resting = resting;
    }

    pub fn queue(&mut self, readings: &[i32]) {
        self.queued.extend(readings.iter().copied());
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl LoadCell for MockLoadCell {
    fn is_ready(&mut self) -> bool {
        self.ready
    }

    fn read(&mut self) -> i32 {
        self.reads += 1;
        self.queued.pop_front().unwrap_or(self.resting)
    }
}

// ============================================================================
// Mock Publisher
// ============================================================================

/// Mock publisher that records every message
#[derive(Default)]
pub struct MockPublisher {
    messages: Vec<(String, String)>,
}

impl MockPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[(String, String)] {
        &self.messages
    }
}

impl Publisher for MockPublisher {
    fn publish(&mut self, topic: &str, payload: &str) {
        self.messages.push((topic.to_string(), payload.to_string()));
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// What a color looks like in the buffer after brightness adjustment
pub fn adjusted(color: Hsv, brightness: u8) -> Rgb {
    colors::to_rgb(colors::scale_value(color, brightness))
}

pub fn black() -> Rgb {
    Rgb::new(0, 0, 0)
}

/// Number of LEDs in the buffer that are not black
pub fn lit_count<const N: usize>(ring: &TestRing<N>) -> usize {
    ring.leds().iter().filter(|&&led| led != black()).count()
}
