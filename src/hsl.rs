//! Model a color with the HSL notation in the sRGB color space.

use crate::color::Component;

/// A color specified with the HSL notation in the sRGB color space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// The hue component of the color, in degrees in [0, 360). Achromatic
    /// colors carry a hue of 0.
    pub hue: Component,
    /// The saturation component of the color, as a percentage in [0, 100].
    pub saturation: Component,
    /// The lightness component of the color, as a percentage in [0, 100].
    pub lightness: Component,
}

impl Hsl {
    /// Create a new color with HSL (hue, saturation, lightness) components.
    pub const fn new(hue: Component, saturation: Component, lightness: Component) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Return a copy of this color with its lightness shifted by the given
    /// number of percentage points, clamped to [0, 100].
    pub fn nudge_lightness(&self, amount: Component) -> Self {
        Self {
            lightness: (self.lightness + amount).clamp(0.0, 100.0),
            ..*self
        }
    }
}
