//! Model a color with the HSV notation in the sRGB color space.

use crate::color::Component;

/// A color specified with the HSV notation in the sRGB color space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    /// The hue component of the color, in degrees in [0, 360). Achromatic
    /// colors carry a hue of 0.
    pub hue: Component,
    /// The saturation component of the color, as a percentage in [0, 100].
    pub saturation: Component,
    /// The value component of the color, as a percentage in [0, 100].
    pub value: Component,
}

impl Hsv {
    /// Create a new color with HSV (hue, saturation, value) components.
    pub const fn new(hue: Component, saturation: Component, value: Component) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }
}
