//! [`LedStrip`] adapter for `smart-leds` drivers.

use crate::colors::Rgb;
use crate::ring::LedStrip;
use smart_leds::{RGB8, SmartLedsWrite};

/// Drives a ring through any [`SmartLedsWrite`] implementation (WS2812 over
/// SPI, RMT, PIO, ...).
///
/// Driver errors are dropped: a failed frame is simply replaced by the next
/// one.
///
/// # Type Parameters
/// * `W` - The smart-leds driver
/// * `N` - Number of LEDs on the strip, used by [`LedStrip::clear`]
pub struct SmartLedsStrip<W, const N: usize> {
    driver: W,
}

impl<W, const N: usize> SmartLedsStrip<W, N>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    /// Wraps a driver.
    pub fn new(driver: W) -> Self {
        Self { driver }
    }

    /// Returns the wrapped driver.
    pub fn into_inner(self) -> W {
        self.driver
    }

    fn push<I>(&mut self, pixels: I)
    where
        I: IntoIterator<Item = RGB8>,
    {
        if self.driver.write(pixels).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("LED strip write failed");
        }
    }
}

impl<W, const N: usize> LedStrip for SmartLedsStrip<W, N>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    fn write(&mut self, colors: &[Rgb]) {
        self.push(colors.iter().map(|c| RGB8::new(c.red, c.green, c.blue)));
    }

    fn clear(&mut self) {
        self.push(core::iter::repeat_n(RGB8::default(), N));
    }
}
