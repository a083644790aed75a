//! Model a color in the CIE-Lab color space.

use crate::color::Component;
use crate::xyz::{Xyz, D65_WHITE_POINT};

const KAPPA: Component = 24389.0 / 27.0;
const EPSILON: Component = 216.0 / 24389.0;

/// A color in the CIE-Lab color space, relative to the D65 white point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lab {
    /// The lightness component, in [0, 100] for colors inside the sRGB
    /// gamut.
    pub lightness: Component,
    /// The a (green-red) component.
    pub a: Component,
    /// The b (blue-yellow) component.
    pub b: Component,
}

impl Lab {
    /// Create a new CIE-Lab color.
    pub const fn new(lightness: Component, a: Component, b: Component) -> Self {
        Self { lightness, a, b }
    }

    /// The Euclidean distance to another Lab color (the CIE76 delta E).
    /// Symmetric, zero only for identical colors; differences below 10 read
    /// as perceptually similar, above 50 as clearly distinct.
    pub fn difference(&self, other: &Self) -> Component {
        let dl = other.lightness - self.lightness;
        let da = other.a - self.a;
        let db = other.b - self.b;
        (dl * dl + da * da + db * db).sqrt()
    }

    /// The distance from the neutral (a = b = 0) axis.
    pub fn chroma(&self) -> Component {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    /// Convert this color to CIE-XYZ.
    pub fn to_xyz(&self) -> Xyz {
        let f1 = (self.lightness + 16.0) / 116.0;
        let f0 = f1 + self.a / 500.0;
        let f2 = f1 - self.b / 200.0;

        let f0_cubed = f0 * f0 * f0;
        let x = if f0_cubed > EPSILON {
            f0_cubed
        } else {
            (116.0 * f0 - 16.0) / KAPPA
        };

        let y = if self.lightness > KAPPA * EPSILON {
            let v = (self.lightness + 16.0) / 116.0;
            v * v * v
        } else {
            self.lightness / KAPPA
        };

        let f2_cubed = f2 * f2 * f2;
        let z = if f2_cubed > EPSILON {
            f2_cubed
        } else {
            (116.0 * f2 - 16.0) / KAPPA
        };

        Xyz::new(
            x * D65_WHITE_POINT[0],
            y * D65_WHITE_POINT[1],
            z * D65_WHITE_POINT[2],
        )
    }
}

impl From<Xyz> for Lab {
    fn from(value: Xyz) -> Self {
        let adapted = [
            value.x / D65_WHITE_POINT[0],
            value.y / D65_WHITE_POINT[1],
            value.z / D65_WHITE_POINT[2],
        ];

        let [f0, f1, f2] = adapted.map(|v| {
            if v > EPSILON {
                v.cbrt()
            } else {
                (KAPPA * v + 16.0) / 116.0
            }
        });

        let lightness = 116.0 * f1 - 16.0;
        let a = 500.0 * (f0 - f1);
        let b = 200.0 * (f1 - f2);

        Lab::new(lightness, a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn neutral_axis_has_zero_chroma() {
        let gray = Lab::new(53.0, 0.0, 0.0);
        assert_eq!(gray.chroma(), 0.0);
        assert_eq!(gray.difference(&gray), 0.0);
    }

    #[test]
    fn difference_is_symmetric() {
        let a = Lab::new(50.0, 20.0, -30.0);
        let b = Lab::new(70.0, -10.0, 45.0);
        assert_component_eq!(a.difference(&b), b.difference(&a));
    }

    #[test]
    fn xyz_round_trips_through_lab() {
        let xyz = Xyz::new(0.318634, 0.239006, 0.041637);
        let back = Lab::from(xyz).to_xyz();
        assert_component_eq!(back.x, xyz.x);
        assert_component_eq!(back.y, xyz.y);
        assert_component_eq!(back.z, xyz.z);
    }

    #[test]
    fn white_is_lightness_100() {
        let lab = Lab::from(Xyz::new(
            D65_WHITE_POINT[0],
            D65_WHITE_POINT[1],
            D65_WHITE_POINT[2],
        ));
        assert_component_eq!(lab.lightness, 100.0);
        assert_component_eq!(lab.a, 0.0);
        assert_component_eq!(lab.b, 0.0);
    }
}
