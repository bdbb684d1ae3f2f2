//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};

use crate::color::{Component, Components};

/// A 3x3 color transform stored in a [`Transform3D`].
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a [`Transform`] from the 9 values of a 3x3 matrix, given column by
/// column.
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Vector { x, y, z, .. } =
        transform.transform_vector3d(Vector::new(components.0, components.1, components.2));
    Components(x, y, z)
}

/// Invert a 3x3 color transform. A singular matrix falls back to the
/// identity.
pub fn inverse(transform: &Transform) -> Transform {
    transform.inverse().unwrap_or_else(Transform::identity)
}

/// The Bradford cone response matrix used for chromatic adaptation.
///
/// Lam, K.M. (1985). Metamerism and Colour Constancy.
#[rustfmt::skip]
pub const BRADFORD: Transform = transform_3x3(
     0.8951, -0.7502,  0.0389,
     0.2664,  1.7135, -0.0685,
    -0.1614,  0.0367,  1.0296,
);

/// Build the Bradford chromatic adaptation transform taking tristimulus
/// values referenced to `src_white` into values referenced to `dst_white`.
pub fn adaptation(src_white: Components, dst_white: Components) -> Transform {
    let src_cone = transform(&BRADFORD, src_white);
    let dst_cone = transform(&BRADFORD, dst_white);

    let scale = transform_3x3(
        dst_cone.0 / src_cone.0,
        0.0,
        0.0,
        0.0,
        dst_cone.1 / src_cone.1,
        0.0,
        0.0,
        0.0,
        dst_cone.2 / src_cone.2,
    );

    BRADFORD.then(&scale).then(&inverse(&BRADFORD))
}

/// Normalize a hue angle into the [0, 360) degree range.
pub fn normalize_hue(hue: Component) -> Component {
    hue.rem_euclid(360.0)
}

/// True when a value is close enough to zero to be treated as zero.
pub fn almost_zero(value: Component) -> bool {
    value.abs() < 1.0e-7
}

#[cfg(test)]
mod tests {
    use super::*;

    const D65: Components = Components(0.95047, 1.0, 1.08883);
    const D50: Components = Components(0.96422, 1.0, 0.82521);

    #[test]
    fn adaptation_maps_source_white_to_destination_white() {
        let d65_to_d50 = adaptation(D65, D50);
        let white = transform(&d65_to_d50, D65);

        approx::assert_abs_diff_eq!(white.0, D50.0, epsilon = 1.0e-6);
        approx::assert_abs_diff_eq!(white.1, D50.1, epsilon = 1.0e-6);
        approx::assert_abs_diff_eq!(white.2, D50.2, epsilon = 1.0e-6);
    }

    #[test]
    fn adaptation_round_trips() {
        let there = adaptation(D65, D50);
        let back = adaptation(D50, D65);

        let source = Components(0.3, 0.4, 0.5);
        let result = transform(&back, transform(&there, source));

        approx::assert_abs_diff_eq!(result.0, source.0, epsilon = 1.0e-9);
        approx::assert_abs_diff_eq!(result.1, source.1, epsilon = 1.0e-9);
        approx::assert_abs_diff_eq!(result.2, source.2, epsilon = 1.0e-9);
    }

    #[test]
    fn normalize_hue_wraps_into_range() {
        assert_eq!(normalize_hue(370.0), 10.0);
        assert_eq!(normalize_hue(-30.0), 330.0);
        assert_eq!(normalize_hue(0.0), 0.0);
    }
}
