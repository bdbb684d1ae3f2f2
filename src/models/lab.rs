//! Models for the CIE L\*a\*b\* color space and its cylindrical LCH form.

use crate::color::{Component, Components};
use crate::math::{almost_zero, normalize_hue};
use crate::models::xyz::{Xyz, D65_WHITE};

pub(crate) const KAPPA: Component = 24389.0 / 27.0;
pub(crate) const EPSILON: Component = 216.0 / 24389.0;

polychrome_macros::gen_space! {
    /// A color specified in the CIE L\*a\*b\* color space.
    pub struct Lab {
        /// The L\* lightness component.
        pub luminance: Component,
        /// The a\* component, green to red.
        pub a: Component,
        /// The b\* component, blue to yellow.
        pub b: Component,
    }
}

impl From<Xyz> for Lab {
    fn from(value: Xyz) -> Self {
        let scaled = Components(
            value.x / D65_WHITE.0,
            value.y / D65_WHITE.1,
            value.z / D65_WHITE.2,
        );

        let Components(f0, f1, f2) = scaled.map(|v| {
            if v > EPSILON {
                v.cbrt()
            } else {
                (KAPPA * v + 16.0) / 116.0
            }
        });

        let luminance = 116.0 * f1 - 16.0;
        let a = 500.0 * (f0 - f1);
        let b = 200.0 * (f1 - f2);

        Lab::new(luminance, a, b)
    }
}

impl Lab {
    /// Convert this color back to the CIE-XYZ hub.
    pub fn to_xyz(&self) -> Xyz {
        let (luminance, a, b) = (self.luminance, self.a, self.b);

        let f1 = (luminance + 16.0) / 116.0;
        let f0 = f1 + a / 500.0;
        let f2 = f1 - b / 200.0;

        let f0_cubed = f0 * f0 * f0;
        let x = if f0_cubed > EPSILON {
            f0_cubed
        } else {
            (116.0 * f0 - 16.0) / KAPPA
        };

        let y = if luminance > KAPPA * EPSILON {
            let v = (luminance + 16.0) / 116.0;
            v * v * v
        } else {
            luminance / KAPPA
        };

        let f2_cubed = f2 * f2 * f2;
        let z = if f2_cubed > EPSILON {
            f2_cubed
        } else {
            (116.0 * f2 - 16.0) / KAPPA
        };

        Xyz::new(x * D65_WHITE.0, y * D65_WHITE.1, z * D65_WHITE.2)
    }

    /// Convert this orthogonal rectangular model into its cylindrical polar
    /// form.
    pub fn to_polar(&self) -> Lch {
        let chroma = (self.a * self.a + self.b * self.b).sqrt();
        let hue = if almost_zero(chroma) {
            0.0
        } else {
            normalize_hue(self.b.atan2(self.a).to_degrees())
        };

        Lch::new(self.luminance, chroma, hue)
    }
}

polychrome_macros::gen_space! {
    /// A color specified in the cylindrical polar LCH form, of either the
    /// L\*a\*b\* or the L\*u\*v\* space.
    pub struct Lch {
        /// The lightness component.
        pub lightness: Component,
        /// The chroma component.
        pub chroma: Component,
        /// The hue component, in degrees.
        pub hue: Component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::models::Rgb;

    #[test]
    fn srgb_red_in_lab() {
        let lab = Lab::from(Rgb::new(255.0, 0.0, 0.0).to_xyz());

        assert_component_eq!(lab.luminance, 53.24, 0.05);
        assert_component_eq!(lab.a, 80.09, 0.05);
        assert_component_eq!(lab.b, 67.20, 0.05);
    }

    #[test]
    fn lab_round_trips_through_xyz() {
        let source = Lab::new(56.63, 39.24, 57.55);
        let back = Lab::from(source.to_xyz());

        assert_component_eq!(back.luminance, source.luminance);
        assert_component_eq!(back.a, source.a);
        assert_component_eq!(back.b, source.b);
    }

    #[test]
    fn polar_form_of_red() {
        let lch = Lab::from(Rgb::new(255.0, 0.0, 0.0).to_xyz()).to_polar();

        assert_component_eq!(lch.lightness, 53.24, 0.05);
        assert_component_eq!(lch.chroma, 104.55, 0.05);
        assert_component_eq!(lch.hue, 40.0, 0.05);
    }

    #[test]
    fn achromatic_colors_have_zero_hue() {
        let lch = Lab::new(50.0, 0.0, 0.0).to_polar();
        assert_eq!(lch.hue, 0.0);
        assert_eq!(lch.chroma, 0.0);
    }
}
