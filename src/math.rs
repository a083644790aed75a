//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};

use crate::color::Component;

/// A transformation matrix used for 3-component color space conversions.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a [`Transform`] from the 9 coefficients of a 3x3 matrix, given in
/// column-major order.
#[rustfmt::skip]
pub const fn transform_3x3(
    m11: Component, m12: Component, m13: Component,
    m21: Component, m22: Component, m23: Component,
    m31: Component, m32: Component, m33: Component,
) -> Transform {
    Transform3D::new(
        m11, m12, m13, 0.0,
        m21, m22, m23, 0.0,
        m31, m32, m33, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, [x, y, z]: [Component; 3]) -> [Component; 3] {
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    [x, y, z]
}

/// Normalize a hue angle in degrees into the range [0, 360).
pub fn normalize_hue(hue: Component) -> Component {
    hue.rem_euclid(360.0)
}

/// True if the value is close enough to zero to be treated as zero.
pub fn almost_zero(value: Component) -> bool {
    value.abs() < 1.0e-7
}
