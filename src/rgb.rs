//! Model a color in the sRGB color space with 8-bit channels.

use crate::color::Component;

/// The gamma-encoded channel value below which the sRGB transfer curve is
/// linear. This is the constant the WCAG 2.1 relative luminance formula is
/// defined with; the whole crate uses it so that contrast ratios match the
/// published test vectors.
const SRGB_LINEAR_THRESHOLD: Component = 0.03928;

const SRGB_LINEAR_SLOPE: Component = 12.92;
const SRGB_GAMMA_OFFSET: Component = 0.055;
const SRGB_GAMMA_SCALE: Component = 1.055;
const SRGB_GAMMA_EXPONENT: Component = 2.4;

/// A color specified in the sRGB color space. Each channel is an integer in
/// [0, 255]; out-of-range channel values are unrepresentable by
/// construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// The red component of the color.
    pub red: u8,
    /// The green component of the color.
    pub green: u8,
    /// The blue component of the color.
    pub blue: u8,
}

impl Rgb {
    /// Create a new color with RGB (red, green, blue) components.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Return the channels as floats in [0, 1].
    pub fn to_float(&self) -> [Component; 3] {
        [
            self.red as Component / 255.0,
            self.green as Component / 255.0,
            self.blue as Component / 255.0,
        ]
    }

    /// Convert this color from gamma encoded to linear light.
    pub fn to_linear_light(&self) -> [Component; 3] {
        self.to_float().map(to_linear_light)
    }

    /// Build a color from linear-light components, gamma encoding and
    /// rounding each channel. Components outside [0, 1] are clamped to the
    /// sRGB gamut before rounding.
    pub(crate) fn from_linear_light(components: [Component; 3]) -> Self {
        let [red, green, blue] = components
            .map(to_gamma_encoded)
            .map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8);
        Self::new(red, green, blue)
    }
}

fn to_linear_light(value: Component) -> Component {
    if value <= SRGB_LINEAR_THRESHOLD {
        value / SRGB_LINEAR_SLOPE
    } else {
        ((value + SRGB_GAMMA_OFFSET) / SRGB_GAMMA_SCALE).powf(SRGB_GAMMA_EXPONENT)
    }
}

fn to_gamma_encoded(value: Component) -> Component {
    if value <= SRGB_LINEAR_THRESHOLD / SRGB_LINEAR_SLOPE {
        value * SRGB_LINEAR_SLOPE
    } else {
        SRGB_GAMMA_SCALE * value.powf(1.0 / SRGB_GAMMA_EXPONENT) - SRGB_GAMMA_OFFSET
    }
}
