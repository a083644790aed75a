//! Model a color in the CIE-XYZ color space with a D65 white point.

use crate::color::Component;
use crate::math::{transform, transform_3x3, Transform};

/// The D65 reference white point.
#[allow(clippy::excessive_precision)]
pub const D65_WHITE_POINT: [Component; 3] = [0.9504559270516716, 1.0, 1.0890577507598784];

/// A color in the CIE-XYZ color space, relative to the D65 white point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Xyz {
    /// The X component of the color.
    pub x: Component,
    /// The Y component of the color.
    pub y: Component,
    /// The Z component of the color.
    pub z: Component,
}

impl Xyz {
    /// Create a new CIE-XYZ color.
    pub const fn new(x: Component, y: Component, z: Component) -> Self {
        Self { x, y, z }
    }

    /// Convert linear-light sRGB components to CIE-XYZ.
    pub fn from_linear_srgb(components: [Component; 3]) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.4123907992659595,  0.21263900587151036, 0.01933081871559185,
            0.35758433938387796, 0.7151686787677559,  0.11919477979462599,
            0.1804807884018343,  0.07219231536073371, 0.9505321522496606,
        );

        let [x, y, z] = transform(&TO_XYZ, components);
        Self::new(x, y, z)
    }

    /// Convert this color to linear-light sRGB components.
    pub fn to_linear_srgb(&self) -> [Component; 3] {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             3.2409699419045213, -0.9692436362808798,  0.05563007969699361,
            -1.5373831775700935,  1.8759675015077206, -0.20397695888897657,
            -0.4986107602930033,  0.04155505740717561, 1.0569715142428786,
        );

        transform(&FROM_XYZ, [self.x, self.y, self.z])
    }
}
