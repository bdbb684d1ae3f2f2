//! Model a color in the CIE-XYZ color space, the second hub representation.

use crate::color::{Component, Components};
use crate::models::Rgb;
use crate::primaries;

/// The D65 reference white on the 0..=100 tristimulus scale used by the XYZ
/// hub, derived from the (0.3127, 0.3290) chromaticity.
#[allow(clippy::excessive_precision)]
pub(crate) const D65_WHITE: Components =
    Components(95.04559270516716, 100.0, 108.90577507598784);

polychrome_macros::gen_space! {
    /// A color in the CIE-XYZ color space with a D65 reference white, on
    /// the 0..=100 scale.
    pub struct Xyz {
        /// The X tristimulus value.
        pub x: Component,
        /// The Y tristimulus value.
        pub y: Component,
        /// The Z tristimulus value.
        pub z: Component,
    }
}

impl Xyz {
    /// Convert this color to the sRGB hub representation.
    pub fn to_rgb(&self) -> Rgb {
        primaries::SRGB.from_xyz(self)
    }
}

polychrome_macros::gen_space! {
    /// A color in the CIE xyY chromaticity form.
    pub struct Xyy {
        /// The x chromaticity coordinate.
        pub x: Component,
        /// The y chromaticity coordinate.
        pub y: Component,
        /// The Y luminance.
        pub luminance: Component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn white_round_trips_through_rgb() {
        let white = Xyz::new(D65_WHITE.0, D65_WHITE.1, D65_WHITE.2);
        let rgb = white.to_rgb();

        assert_component_eq!(rgb.red, 255.0, 1.0e-6);
        assert_component_eq!(rgb.green, 255.0, 1.0e-6);
        assert_component_eq!(rgb.blue, 255.0, 1.0e-6);
    }

    #[test]
    fn srgb_red_tristimulus() {
        let xyz = Rgb::new(255.0, 0.0, 0.0).to_xyz();

        assert_component_eq!(xyz.x, 41.239, 1.0e-2);
        assert_component_eq!(xyz.y, 21.264, 1.0e-2);
        assert_component_eq!(xyz.z, 1.933, 1.0e-2);
    }
}
