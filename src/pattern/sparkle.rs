use super::Pattern;
use crate::colors::{self, Hsv, Rgb};
use crate::config::{SPARKLE_DIM_LEVEL, SPARKLE_STRIDE};
use crate::ring::{LedStrip, LightRing};
use crate::types::Ticks;

/// Interleaves two colors over a dim blend of both and shifts the whole
/// arrangement by one LED per tick.
///
/// Within every run of [`SPARKLE_STRIDE`] LEDs the first position shows the
/// first color, the middle position the second color and the rest the dim
/// blend. After `duration` ticks, counting the frame drawn by `initialize`,
/// the ring goes dark and the sparkle is finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sparkle {
    first: Hsv,
    second: Hsv,
    dim: Hsv,
    duration: Ticks,
    frame: Ticks,
    finished: bool,
}

impl Sparkle {
    /// Creates a sparkle of two colors lasting `duration` ticks.
    pub fn new(first: impl Into<Hsv>, second: impl Into<Hsv>, duration: Ticks) -> Self {
        let (first, second) = (first.into(), second.into());
        Self {
            first,
            second,
            dim: blend(first, second),
            duration,
            frame: 0,
            finished: false,
        }
    }

    /// Returns the two sparkle colors.
    pub fn colors(&self) -> (Hsv, Hsv) {
        (self.first, self.second)
    }

    /// Returns the background color between the sparkles.
    pub fn dim(&self) -> Hsv {
        self.dim
    }

    /// Returns the number of ticks drawn so far.
    pub fn frame(&self) -> Ticks {
        self.frame
    }

    fn draw<S: LedStrip, const N: usize>(&self, ring: &mut LightRing<S, N>) {
        for index in 0..N {
            let color = match (index + self.frame as usize) % SPARKLE_STRIDE {
                0 => self.first,
                position if position == SPARKLE_STRIDE / 2 => self.second,
                _ => self.dim,
            };
            ring.set_led_wrapping(index, color);
        }
    }
}

impl Pattern for Sparkle {
    fn initialize<S: LedStrip, const N: usize>(&mut self, ring: &mut LightRing<S, N>) {
        self.frame = 0;
        self.finished = false;
        self.draw(ring);
    }

    fn advance<S: LedStrip, const N: usize>(&mut self, ring: &mut LightRing<S, N>) {
        if self.finished {
            return;
        }

        self.frame = self.frame.saturating_add(1);
        if self.frame >= self.duration {
            self.finished = true;
            ring.fill_color(colors::OFF);
        } else {
            self.draw(ring);
        }
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Channel-wise average of both colors at [`SPARKLE_DIM_LEVEL`].
fn blend(first: Hsv, second: Hsv) -> Hsv {
    let (a, b) = (colors::to_rgb(first), colors::to_rgb(second));
    let mid = Rgb::new(
        average(a.red, b.red),
        average(a.green, b.green),
        average(a.blue, b.blue),
    );
    colors::scale_value(colors::to_hsv(mid), SPARKLE_DIM_LEVEL)
}

fn average(a: u8, b: u8) -> u8 {
    ((a as u16 + b as u16) / 2) as u8
}
