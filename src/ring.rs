//! Buffered LED ring with global brightness and flush debouncing.
//!
//! Provides [`LightRing`], which owns the per-LED color buffer for a fixed
//! number of addressable LEDs, and the [`LedStrip`] trait for the physical
//! layer underneath it.

use crate::colors::{self, Hsv, Rgb};

/// Trait for abstracting the physical LED strip.
///
/// Implement this for your strip driver (bit-banged, RMT, SPI, ...). Both
/// operations are fire-and-forget: handle hardware errors internally.
pub trait LedStrip {
    /// Pushes the given colors to the strip now.
    fn write(&mut self, colors: &[Rgb]);

    /// Turns every LED on the strip off now.
    fn clear(&mut self);
}

/// Errors that can occur during ring operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RingError {
    /// LED index is past the end of the ring.
    IndexOutOfRange {
        /// The rejected index
        index: usize,
        /// Number of LEDs on the ring
        len: usize,
    },
}

impl core::fmt::Display for RingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RingError::IndexOutOfRange { index, len } => {
                write!(f, "LED index {} out of range for ring of {} LEDs", index, len)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RingError {}

/// A ring of `N` addressable LEDs.
///
/// Every buffered write is scaled by the global brightness once, at write
/// time. Changing the brightness does not touch pixels already in the buffer;
/// they pick it up the next time they are written.
///
/// # Type Parameters
/// * `S` - Physical strip implementation
/// * `N` - Number of LEDs on the ring
pub struct LightRing<S: LedStrip, const N: usize> {
    strip: S,
    leds: [Rgb; N],
    brightness: u8,
    dirty: bool,
}

impl<S: LedStrip, const N: usize> LightRing<S, N> {
    /// Creates a ring with all LEDs off and full brightness.
    ///
    /// The buffer starts dirty so the first [`update`](Self::update) pushes
    /// a known frame to the strip.
    pub fn new(strip: S) -> Self {
        Self {
            strip,
            leds: [colors::to_rgb(colors::OFF); N],
            brightness: u8::MAX,
            dirty: true,
        }
    }

    /// Sets the global brightness applied to subsequent writes.
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Returns the global brightness.
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Turns every LED off through the strip's own clear primitive.
    ///
    /// Bypasses the brightness path. The buffer is zeroed to match the strip,
    /// so nothing is left to flush.
    pub fn clear(&mut self) {
        self.leds = [colors::to_rgb(colors::OFF); N];
        self.strip.clear();
        self.dirty = false;
    }

    /// Sets a single LED.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index >= N`; the buffer is left untouched.
    pub fn set_led(&mut self, index: usize, color: impl Into<Hsv>) -> Result<(), RingError> {
        if index >= N {
            return Err(RingError::IndexOutOfRange { index, len: N });
        }

        self.leds[index] = self.adjust(color.into());
        self.dirty = true;
        Ok(())
    }

    /// Sets the LED at `index % N`; does nothing on a ring without LEDs.
    ///
    /// Patterns compute their own positions, so this write cannot fail.
    pub(crate) fn set_led_wrapping(&mut self, index: usize, color: Hsv) {
        if N == 0 {
            return;
        }

        self.leds[index % N] = self.adjust(color);
        self.dirty = true;
    }

    /// Sets every LED to the same color.
    ///
    /// RGB input is converted to HSV first, since brightness only scales the
    /// value channel.
    pub fn fill_color(&mut self, color: impl Into<Hsv>) {
        let adjusted = self.adjust(color.into());
        self.leds = [adjusted; N];
        self.dirty = true;
    }

    /// Returns the number of LEDs on the ring.
    pub const fn num_leds(&self) -> usize {
        N
    }

    /// Flushes the buffer to the strip if anything changed since the last flush.
    pub fn update(&mut self) {
        if self.dirty {
            self.strip.write(&self.leds);
            self.dirty = false;
        }
    }

    /// Returns true if the buffer holds changes not yet pushed to the strip.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the buffered colors, brightness already applied.
    pub fn leds(&self) -> &[Rgb; N] {
        &self.leds
    }

    /// Returns the buffered color of one LED.
    pub fn led(&self, index: usize) -> Option<Rgb> {
        self.leds.get(index).copied()
    }

    /// Returns a reference to the strip.
    pub fn strip(&self) -> &S {
        &self.strip
    }

    /// Returns a mutable reference to the strip.
    pub fn strip_mut(&mut self) -> &mut S {
        &mut self.strip
    }

    fn adjust(&self, color: Hsv) -> Rgb {
        colors::to_rgb(colors::scale_value(color, self.brightness))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{RED, WHITE};

    #[derive(Default)]
    struct CountingStrip {
        writes: usize,
        clears: usize,
    }

    impl LedStrip for CountingStrip {
        fn write(&mut self, _colors: &[Rgb]) {
            self.writes += 1;
        }

        fn clear(&mut self) {
            self.clears += 1;
        }
    }

    #[test]
    fn new_ring_is_off_and_dirty() {
        let ring = LightRing::<_, 4>::new(CountingStrip::default());
        assert!(ring.is_dirty());
        assert_eq!(ring.brightness(), 255);
        assert!(ring.leds().iter().all(|led| *led == Rgb::new(0, 0, 0)));
    }

    #[test]
    fn set_led_rejects_out_of_range_index() {
        let mut ring = LightRing::<_, 4>::new(CountingStrip::default());
        ring.update();

        let result = ring.set_led(4, RED);
        assert_eq!(result, Err(RingError::IndexOutOfRange { index: 4, len: 4 }));
        assert!(!ring.is_dirty());
    }

    #[test]
    fn clear_talks_to_strip_directly() {
        let mut ring = LightRing::<_, 4>::new(CountingStrip::default());
        ring.fill_color(WHITE);

        ring.clear();
        assert_eq!(ring.strip().clears, 1);
        assert_eq!(ring.strip().writes, 0);
        assert!(!ring.is_dirty());

        ring.update();
        assert_eq!(ring.strip().writes, 0);
    }

    #[test]
    fn wrapping_write_folds_index_into_ring() {
        let mut ring = LightRing::<_, 4>::new(CountingStrip::default());
        ring.update();

        ring.set_led_wrapping(6, RED);
        assert!(ring.is_dirty());
        assert_eq!(ring.led(2), Some(Rgb::new(255, 0, 0)));
        assert_eq!(ring.leds().iter().filter(|led| **led != Rgb::new(0, 0, 0)).count(), 1);
    }

    #[test]
    fn wrapping_write_on_empty_ring_is_a_no_op() {
        let mut ring = LightRing::<_, 0>::new(CountingStrip::default());
        ring.update();

        ring.set_led_wrapping(3, RED);
        assert!(!ring.is_dirty());
    }

    #[test]
    fn brightness_is_not_retroactive() {
        let mut ring = LightRing::<_, 2>::new(CountingStrip::default());
        ring.fill_color(WHITE);
        ring.set_brightness(0);

        assert_eq!(ring.led(0), Some(Rgb::new(255, 255, 255)));

        ring.set_led(1, WHITE).unwrap();
        assert_eq!(ring.led(0), Some(Rgb::new(255, 255, 255)));
        assert_eq!(ring.led(1), Some(Rgb::new(0, 0, 0)));
    }
}
