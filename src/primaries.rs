//! RGB working space definitions: primary and white chromaticities plus the
//! transfer function for every supported RGB encoding. RGB↔XYZ matrices are
//! derived from the chromaticities (columns scaled so that white maps onto
//! the reference white) instead of being keyed in as tables.

use crate::color::{Component, Components};
use crate::math::{adaptation, inverse, transform, transform_3x3};
use crate::models::lab::{EPSILON, KAPPA};
use crate::models::{Channels, Rgb, Xyz};

/// A CIE (x, y) chromaticity coordinate pair.
pub type Chromaticity = (Component, Component);

/// D65 white point chromaticity (daylight, ~6500K).
pub const D65_XY: Chromaticity = (0.3127, 0.3290);

/// D50 white point chromaticity (~5000K).
pub const D50_XY: Chromaticity = (0.34567, 0.35850);

/// Illuminant C white point chromaticity (NTSC).
pub const C_XY: Chromaticity = (0.31006, 0.31616);

/// Illuminant E, the equal-energy white point (CIE RGB).
pub const E_XY: Chromaticity = (1.0 / 3.0, 1.0 / 3.0);

/// Convert an (x, y) chromaticity to an XYZ tristimulus value with Y = 1.
fn xy_to_xyz((x, y): Chromaticity) -> Components {
    if y == 0.0 {
        Components(0.0, 0.0, 0.0)
    } else {
        Components(x / y, 1.0, (1.0 - x - y) / y)
    }
}

/// The transfer function relating encoded channel values to linear light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transfer {
    /// A plain power curve with the given gamma.
    Gamma(Component),
    /// The piecewise sRGB curve.
    Srgb,
    /// The L\* curve used by ECI RGB v2.
    LStar,
}

impl Transfer {
    /// Decode a gamma-encoded channel (0..=1 scale) to linear light.
    fn to_linear_light(&self, value: Component) -> Component {
        match self {
            Transfer::Gamma(gamma) => value.signum() * value.abs().powf(*gamma),
            Transfer::Srgb => {
                let abs = value.abs();
                if abs < 0.04045 {
                    value / 12.92
                } else {
                    value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
                }
            }
            Transfer::LStar => {
                let lightness = value * 100.0;
                if lightness > KAPPA * EPSILON {
                    let f = (lightness + 16.0) / 116.0;
                    f * f * f
                } else {
                    lightness / KAPPA
                }
            }
        }
    }

    /// Encode a linear-light channel (0..=1 scale) with this transfer.
    fn to_gamma_encoded(&self, value: Component) -> Component {
        match self {
            Transfer::Gamma(gamma) => value.signum() * value.abs().powf(1.0 / *gamma),
            Transfer::Srgb => {
                let abs = value.abs();
                if abs > 0.0031308 {
                    value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
                } else {
                    12.92 * value
                }
            }
            Transfer::LStar => {
                let lightness = if value > EPSILON {
                    116.0 * value.cbrt() - 16.0
                } else {
                    KAPPA * value
                };
                lightness / 100.0
            }
        }
    }
}

/// An RGB working space: the chromaticities of its three primaries, its
/// reference white and its transfer function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RgbSpace {
    /// Red, green and blue primary chromaticities.
    pub primaries: [Chromaticity; 3],
    /// Reference white chromaticity.
    pub white: Chromaticity,
    /// The transfer function of the encoding.
    pub transfer: Transfer,
}

impl RgbSpace {
    /// The reference white as an XYZ tristimulus value with Y = 1.
    pub fn white_xyz(&self) -> Components {
        xy_to_xyz(self.white)
    }

    /// Derive the linear-RGB to XYZ matrix for this space, relative to its
    /// native white.
    fn to_xyz_matrix(&self) -> crate::math::Transform {
        let red = xy_to_xyz(self.primaries[0]);
        let green = xy_to_xyz(self.primaries[1]);
        let blue = xy_to_xyz(self.primaries[2]);

        #[rustfmt::skip]
        let unscaled = transform_3x3(
            red.0,   red.1,   red.2,
            green.0, green.1, green.2,
            blue.0,  blue.1,  blue.2,
        );

        // Solve for the column scales that map (1, 1, 1) onto white.
        let scale = transform(&inverse(&unscaled), self.white_xyz());

        #[rustfmt::skip]
        let scaled = transform_3x3(
            red.0 * scale.0,   red.1 * scale.0,   red.2 * scale.0,
            green.0 * scale.1, green.1 * scale.1, green.2 * scale.1,
            blue.0 * scale.2,  blue.1 * scale.2,  blue.2 * scale.2,
        );

        scaled
    }

    /// Convert encoded channels (0..=255) in this space to the D65 XYZ hub
    /// (0..=100 scale), adapting the white point when the space is not D65
    /// referenced.
    pub fn to_xyz(&self, rgb: &Rgb) -> Xyz {
        let linear = rgb
            .to_components()
            .map(|v| self.transfer.to_linear_light(v / 255.0));

        let mut xyz = transform(&self.to_xyz_matrix(), linear);

        if self.white != D65_XY {
            xyz = transform(&adaptation(self.white_xyz(), xy_to_xyz(D65_XY)), xyz);
        }

        Xyz::new(xyz.0 * 100.0, xyz.1 * 100.0, xyz.2 * 100.0)
    }

    /// Convert a D65 XYZ hub value (0..=100 scale) to encoded channels
    /// (0..=255) in this space.
    pub fn from_xyz(&self, xyz: &Xyz) -> Rgb {
        let mut scaled = Components(xyz.x / 100.0, xyz.y / 100.0, xyz.z / 100.0);

        if self.white != D65_XY {
            scaled = transform(&adaptation(xy_to_xyz(D65_XY), self.white_xyz()), scaled);
        }

        let linear = transform(&inverse(&self.to_xyz_matrix()), scaled);
        let Components(red, green, blue) =
            linear.map(|v| self.transfer.to_gamma_encoded(v) * 255.0);

        Rgb::new(red, green, blue)
    }
}

/// sRGB.
pub const SRGB: RgbSpace = RgbSpace {
    primaries: [(0.6400, 0.3300), (0.3000, 0.6000), (0.1500, 0.0600)],
    white: D65_XY,
    transfer: Transfer::Srgb,
};

/// Adobe RGB (1998).
pub const ADOBE_98: RgbSpace = RgbSpace {
    primaries: [(0.6400, 0.3300), (0.2100, 0.7100), (0.1500, 0.0600)],
    white: D65_XY,
    transfer: Transfer::Gamma(563.0 / 256.0),
};

/// Apple RGB.
pub const APPLE: RgbSpace = RgbSpace {
    primaries: [(0.6250, 0.3400), (0.2800, 0.5950), (0.1550, 0.0700)],
    white: D65_XY,
    transfer: Transfer::Gamma(1.8),
};

/// Best RGB.
pub const BEST: RgbSpace = RgbSpace {
    primaries: [(0.7347, 0.2653), (0.2150, 0.7750), (0.1300, 0.0350)],
    white: D50_XY,
    transfer: Transfer::Gamma(2.2),
};

/// Beta RGB.
pub const BETA: RgbSpace = RgbSpace {
    primaries: [(0.6888, 0.3112), (0.1986, 0.7551), (0.1265, 0.0352)],
    white: D50_XY,
    transfer: Transfer::Gamma(2.2),
};

/// Bruce RGB.
pub const BRUCE: RgbSpace = RgbSpace {
    primaries: [(0.6400, 0.3300), (0.2800, 0.6500), (0.1500, 0.0600)],
    white: D65_XY,
    transfer: Transfer::Gamma(2.2),
};

/// CIE RGB.
pub const CIE: RgbSpace = RgbSpace {
    primaries: [(0.7350, 0.2650), (0.2740, 0.7170), (0.1670, 0.0090)],
    white: E_XY,
    transfer: Transfer::Gamma(2.2),
};

/// ColorMatch RGB.
pub const COLOR_MATCH: RgbSpace = RgbSpace {
    primaries: [(0.6300, 0.3400), (0.2950, 0.6050), (0.1500, 0.0750)],
    white: D50_XY,
    transfer: Transfer::Gamma(1.8),
};

/// Don RGB 4.
pub const DON_4: RgbSpace = RgbSpace {
    primaries: [(0.6960, 0.3000), (0.2150, 0.7650), (0.1300, 0.0350)],
    white: D50_XY,
    transfer: Transfer::Gamma(2.2),
};

/// ECI RGB v2.
pub const ECI_V2: RgbSpace = RgbSpace {
    primaries: [(0.6700, 0.3300), (0.2100, 0.7100), (0.1400, 0.0800)],
    white: D50_XY,
    transfer: Transfer::LStar,
};

/// Ekta Space PS5.
pub const ETKA_PS5: RgbSpace = RgbSpace {
    primaries: [(0.6950, 0.3050), (0.2600, 0.7000), (0.1100, 0.0050)],
    white: D50_XY,
    transfer: Transfer::Gamma(2.2),
};

/// NTSC RGB.
pub const NTSC: RgbSpace = RgbSpace {
    primaries: [(0.6700, 0.3300), (0.2100, 0.7100), (0.1400, 0.0800)],
    white: C_XY,
    transfer: Transfer::Gamma(2.2),
};

/// PAL/SECAM RGB.
pub const PAL_SECAM: RgbSpace = RgbSpace {
    primaries: [(0.6400, 0.3300), (0.2900, 0.6000), (0.1500, 0.0600)],
    white: D65_XY,
    transfer: Transfer::Gamma(2.2),
};

/// ProPhoto RGB.
pub const PRO_PHOTO: RgbSpace = RgbSpace {
    primaries: [(0.7347, 0.2653), (0.1596, 0.8404), (0.0366, 0.0001)],
    white: D50_XY,
    transfer: Transfer::Gamma(1.8),
};

/// SMPTE-C RGB.
pub const SMPTE_C: RgbSpace = RgbSpace {
    primaries: [(0.6300, 0.3400), (0.3100, 0.5950), (0.1550, 0.0700)],
    white: D65_XY,
    transfer: Transfer::Gamma(2.2),
};

/// Wide Gamut RGB.
pub const WIDE_GAMUT: RgbSpace = RgbSpace {
    primaries: [(0.7350, 0.2650), (0.1150, 0.8260), (0.1570, 0.0180)],
    white: D50_XY,
    transfer: Transfer::Gamma(2.2),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    const ALL: &[RgbSpace] = &[
        SRGB, ADOBE_98, APPLE, BEST, BETA, BRUCE, CIE, COLOR_MATCH, DON_4, ECI_V2, ETKA_PS5,
        NTSC, PAL_SECAM, PRO_PHOTO, SMPTE_C, WIDE_GAMUT,
    ];

    #[test]
    fn white_maps_to_the_hub_white_in_every_space() {
        for space in ALL {
            let xyz = space.to_xyz(&Rgb::new(255.0, 255.0, 255.0));

            assert_component_eq!(xyz.x, 95.0456, 1.0e-3);
            assert_component_eq!(xyz.y, 100.0, 1.0e-3);
            assert_component_eq!(xyz.z, 108.9058, 1.0e-3);
        }
    }

    #[test]
    fn channels_round_trip_through_the_hub_in_every_space() {
        for space in ALL {
            let source = Rgb::new(210.0, 105.0, 30.0);
            let back = space.from_xyz(&space.to_xyz(&source));

            assert_component_eq!(back.red, source.red, 1.0e-6);
            assert_component_eq!(back.green, source.green, 1.0e-6);
            assert_component_eq!(back.blue, source.blue, 1.0e-6);
        }
    }

    #[test]
    fn srgb_matrix_matches_the_published_transform() {
        let matrix = SRGB.to_xyz_matrix();
        let red = transform(&matrix, Components(1.0, 0.0, 0.0));

        assert_component_eq!(red.0, 0.4124, 1.0e-3);
        assert_component_eq!(red.1, 0.2126, 1.0e-3);
        assert_component_eq!(red.2, 0.0193, 1.0e-3);
    }
}
