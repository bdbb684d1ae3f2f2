//! Model for the CIE L\*u\*v\* color space.

use crate::color::Component;
use crate::math::{almost_zero, normalize_hue};
use crate::models::lab::{EPSILON, KAPPA};
use crate::models::xyz::{Xyz, D65_WHITE};
use crate::models::Lch;

/// The u' chromaticity of the D65 reference white.
fn white_u_prime() -> Component {
    4.0 * D65_WHITE.0 / (D65_WHITE.0 + 15.0 * D65_WHITE.1 + 3.0 * D65_WHITE.2)
}

/// The v' chromaticity of the D65 reference white.
fn white_v_prime() -> Component {
    9.0 * D65_WHITE.1 / (D65_WHITE.0 + 15.0 * D65_WHITE.1 + 3.0 * D65_WHITE.2)
}

polychrome_macros::gen_space! {
    /// A color specified in the CIE L\*u\*v\* color space.
    pub struct Luv {
        /// The L\* lightness component.
        pub l: Component,
        /// The u\* chromaticity component.
        pub u: Component,
        /// The v\* chromaticity component.
        pub v: Component,
    }
}

impl From<Xyz> for Luv {
    fn from(value: Xyz) -> Self {
        let denominator = value.x + 15.0 * value.y + 3.0 * value.z;
        let (u_prime, v_prime) = if almost_zero(denominator) {
            (0.0, 0.0)
        } else {
            (4.0 * value.x / denominator, 9.0 * value.y / denominator)
        };

        let y_scaled = value.y / D65_WHITE.1;
        let l = if y_scaled > EPSILON {
            116.0 * y_scaled.cbrt() - 16.0
        } else {
            KAPPA * y_scaled
        };

        let u = 13.0 * l * (u_prime - white_u_prime());
        let v = 13.0 * l * (v_prime - white_v_prime());

        Luv::new(l, u, v)
    }
}

impl Luv {
    /// Convert this color back to the CIE-XYZ hub.
    pub fn to_xyz(&self) -> Xyz {
        if almost_zero(self.l) {
            return Xyz::new(0.0, 0.0, 0.0);
        }

        let y = if self.l > KAPPA * EPSILON {
            let v = (self.l + 16.0) / 116.0;
            v * v * v * D65_WHITE.1
        } else {
            self.l / KAPPA * D65_WHITE.1
        };

        let u_prime = self.u / (13.0 * self.l) + white_u_prime();
        let v_prime = self.v / (13.0 * self.l) + white_v_prime();

        if almost_zero(v_prime) {
            return Xyz::new(0.0, y, 0.0);
        }

        let x = y * 9.0 * u_prime / (4.0 * v_prime);
        let z = y * (12.0 - 3.0 * u_prime - 20.0 * v_prime) / (4.0 * v_prime);

        Xyz::new(x, y, z)
    }

    /// Convert this orthogonal rectangular model into its cylindrical polar
    /// form.
    pub fn to_polar(&self) -> Lch {
        let chroma = (self.u * self.u + self.v * self.v).sqrt();
        let hue = if almost_zero(chroma) {
            0.0
        } else {
            normalize_hue(self.v.atan2(self.u).to_degrees())
        };

        Lch::new(self.l, chroma, hue)
    }
}
