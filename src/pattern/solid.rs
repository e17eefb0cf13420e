use super::Pattern;
use crate::colors::Hsv;
use crate::ring::{LedStrip, LightRing};

/// Fills the ring with one color and leaves it there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solid {
    color: Hsv,
}

impl Solid {
    /// Creates a solid pattern. RGB input is converted to HSV once, here.
    pub fn new(color: impl Into<Hsv>) -> Self {
        Self {
            color: color.into(),
        }
    }

    /// Returns the base color.
    pub fn color(&self) -> Hsv {
        self.color
    }
}

impl Pattern for Solid {
    fn initialize<S: LedStrip, const N: usize>(&mut self, ring: &mut LightRing<S, N>) {
        ring.fill_color(self.color);
    }

    fn advance<S: LedStrip, const N: usize>(&mut self, _ring: &mut LightRing<S, N>) {}
}
