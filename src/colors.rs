//! 8-bit color model used by the ring and all patterns.
//!
//! Patterns think in [`Hsv`] because only the value channel carries
//! brightness; the strip consumes [`Rgb`]. Hue is a 256-step wheel
//! (0 = red, 85 = green, 170 = blue) rather than degrees.
//!
//! HSV to RGB goes through `smart_leds::hsv::hsv2rgb`, the same integer
//! conversion the strip drivers use. `to_rgb` is lossy in the HSV direction
//! (many HSV triples share one RGB triple), but `to_hsv` always picks a
//! preimage when one exists, so `to_rgb(to_hsv(to_rgb(c))) == to_rgb(c)`.

use palette::Srgb;
use smart_leds::hsv::{self, hsv2rgb};

/// 8-bit RGB color as pushed to the strip.
pub type Rgb = Srgb<u8>;

/// 8-bit hue/saturation/value color.
///
/// Field-for-field the same as `smart_leds::hsv::Hsv`, with the comparison,
/// hashing and formatting traits the pattern state needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsv {
    /// Position on the color wheel, 0-255.
    pub hue: u8,
    /// 0 = grey, 255 = fully saturated.
    pub saturation: u8,
    /// 0 = off, 255 = full brightness.
    pub value: u8,
}

impl Hsv {
    /// Creates a new HSV color.
    #[inline]
    pub const fn new(hue: u8, saturation: u8, value: u8) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Returns the same hue and saturation with a different value channel.
    #[inline]
    pub const fn with_value(self, value: u8) -> Self {
        Self { value, ..self }
    }

    /// Returns true if this color renders as black.
    #[inline]
    pub const fn is_off(&self) -> bool {
        self.value == 0
    }
}

/// Hue of [`RED`].
pub const HUE_RED: u8 = 0;
/// Hue of [`ORANGE`].
pub const HUE_ORANGE: u8 = 32;
/// Hue of [`LIME`], a yellowish green.
pub const HUE_LIME: u8 = 90;
/// Hue of [`GREEN`], slightly towards cyan.
pub const HUE_GREEN: u8 = 115;
/// Hue of [`BLUE`], slightly towards cyan.
pub const HUE_BLUE: u8 = 160;

/// All channels dark.
pub const OFF: Hsv = Hsv::new(0, 0, 0);
/// Unsaturated, full value.
pub const WHITE: Hsv = Hsv::new(0, 0, 255);
/// Fully saturated red.
pub const RED: Hsv = Hsv::new(HUE_RED, 255, 255);
/// Fully saturated orange.
pub const ORANGE: Hsv = Hsv::new(HUE_ORANGE, 255, 255);
/// Fully saturated lime.
pub const LIME: Hsv = Hsv::new(HUE_LIME, 255, 255);
/// Fully saturated green.
pub const GREEN: Hsv = Hsv::new(HUE_GREEN, 255, 255);
/// Fully saturated blue.
pub const BLUE: Hsv = Hsv::new(HUE_BLUE, 255, 255);

/// Converts HSV to RGB with `smart_leds::hsv::hsv2rgb`.
///
/// The brightest channel always equals `value`.
#[inline]
pub fn to_rgb(color: Hsv) -> Rgb {
    let rgb = hsv2rgb(color.into());
    Rgb::new(rgb.r, rgb.g, rgb.b)
}

/// Converts RGB to HSV.
///
/// Searches for an HSV color that [`to_rgb`] renders as exactly `rgb`, so
/// anything [`to_rgb`] can produce is recovered. Value is the brightest
/// channel. Only saturations that reproduce the dimmest channel are tried,
/// lowest first, and within those the lowest hue with the smallest channel
/// error wins. Greys report hue 0.
pub fn to_hsv(rgb: Rgb) -> Hsv {
    let max = rgb.red.max(rgb.green).max(rgb.blue);
    let min = rgb.red.min(rgb.green).min(rgb.blue);

    if max == 0 {
        return OFF;
    }
    if max == min {
        return Hsv::new(0, 0, max);
    }

    let mut best = Hsv::new(0, 0, max);
    let mut best_error = u32::MAX;
    // The dimmest channel depends on saturation and value only.
    let saturations =
        (0..=u8::MAX).filter(|&saturation| dimmest(Hsv::new(0, saturation, max)) == min);
    for saturation in saturations {
        for hue in 0..=u8::MAX {
            let candidate = Hsv::new(hue, saturation, max);
            let error = channel_error(to_rgb(candidate), rgb);
            if error == 0 {
                return candidate;
            }
            if error < best_error {
                best = candidate;
                best_error = error;
            }
        }
    }
    best
}

fn dimmest(color: Hsv) -> u8 {
    let rgb = to_rgb(color);
    rgb.red.min(rgb.green).min(rgb.blue)
}

fn channel_error(a: Rgb, b: Rgb) -> u32 {
    a.red.abs_diff(b.red) as u32 + a.green.abs_diff(b.green) as u32 + a.blue.abs_diff(b.blue) as u32
}

/// Scales the value channel by `brightness / 255`, rounding to nearest.
#[inline]
pub fn scale_value(hsv: Hsv, brightness: u8) -> Hsv {
    let scaled = (hsv.value as u32 * brightness as u32 * 2 + 255) / 510;
    hsv.with_value(scaled.min(255) as u8)
}

impl From<Hsv> for hsv::Hsv {
    fn from(color: Hsv) -> Self {
        hsv::Hsv {
            hue: color.hue,
            sat: color.saturation,
            val: color.value,
        }
    }
}

impl From<hsv::Hsv> for Hsv {
    fn from(color: hsv::Hsv) -> Self {
        Hsv::new(color.hue, color.sat, color.val)
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        to_rgb(hsv)
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        to_hsv(rgb)
    }
}

impl From<Hsv> for palette::Hsv {
    fn from(hsv: Hsv) -> Self {
        Self::new(
            hsv.hue as f32 * 360.0 / 256.0,
            hsv.saturation as f32 / 255.0,
            hsv.value as f32 / 255.0,
        )
    }
}

impl From<palette::Hsv> for Hsv {
    /// Quantizes a floating point HSV color (hue in degrees) onto the 8-bit wheel.
    fn from(hsv: palette::Hsv) -> Self {
        let degrees = hsv.hue.into_positive_degrees();
        let hue = (degrees * 256.0 / 360.0 + 0.5) as u32 % 256;
        Hsv::new(
            hue as u8,
            unit_to_u8(hsv.saturation),
            unit_to_u8(hsv.value),
        )
    }
}

#[inline]
fn unit_to_u8(unit: f32) -> u8 {
    (unit.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}
