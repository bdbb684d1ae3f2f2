//! The conversion registry: one directed edge per derivable output space,
//! each edge declaring the hub representation it consumes.

use crate::color::{ColorValue, Space};
use crate::error::ColorError;
use crate::models::{Cmyk, Hcg, Hsl, Hsv, Hwb, Lab, Luv, Rgb, Xyz};
use crate::primaries;

/// A directed edge of the conversion graph: a pure function deriving one
/// output space from the hub named by the variant.
///
/// The graph is two-hop-bounded by construction: an edge can only consume a
/// hub value, never another leaf output, so expansion terminates in one pass
/// regardless of iteration order.
#[derive(Clone, Copy, Debug)]
pub enum Converter {
    /// Derive the output from the sRGB hub.
    FromRgb(fn(&Rgb) -> ColorValue),
    /// Derive the output from the XYZ hub.
    FromXyz(fn(&Xyz) -> ColorValue),
}

impl Converter {
    /// The hub space this edge consumes.
    pub fn from(&self) -> Space {
        match self {
            Converter::FromRgb(_) => Space::Rgb,
            Converter::FromXyz(_) => Space::Xyz,
        }
    }
}

/// Look up the registry edge for an output space.
///
/// Spaces the graph cannot derive (checker-only notations such as `ryb` or
/// the luma/chroma signal family) fail with [`ColorError::UnknownSpace`];
/// the resolver treats that as locally recoverable and skips the entry.
pub fn edge(space: Space) -> Result<Converter, ColorError> {
    use Converter::{FromRgb, FromXyz};

    Ok(match space {
        Space::Rgb => FromXyz(|xyz| ColorValue::Rgb(xyz.to_rgb())),
        Space::Xyz => FromRgb(|rgb| ColorValue::Xyz(rgb.to_xyz())),
        Space::Rgb01 => FromRgb(|rgb| ColorValue::Rgb01(rgb.to_rgb01())),
        Space::WebSafe => FromRgb(|rgb| ColorValue::WebSafe(rgb.is_web_safe())),
        Space::Hex => FromRgb(|rgb| ColorValue::Hex(rgb.to_hex())),
        Space::Ansi16 => FromRgb(|rgb| ColorValue::Ansi(rgb.to_ansi16())),
        Space::Ansi256 => FromRgb(|rgb| ColorValue::Ansi(rgb.to_ansi256())),
        Space::Cmyk => FromRgb(|rgb| ColorValue::Cmyk(Cmyk::from(*rgb))),
        Space::Hcg => FromRgb(|rgb| ColorValue::Hcg(Hcg::from(*rgb))),
        Space::Hsl => FromRgb(|rgb| ColorValue::Hsl(Hsl::from(*rgb))),
        Space::Hsv => FromRgb(|rgb| ColorValue::Hsv(Hsv::from(*rgb))),
        Space::Hwb => FromRgb(|rgb| ColorValue::Hwb(Hwb::from(*rgb))),
        Space::Lab => FromXyz(|xyz| ColorValue::Lab(Lab::from(*xyz))),
        Space::Luv => FromXyz(|xyz| ColorValue::Luv(Luv::from(*xyz))),
        Space::LchAb => FromRgb(|rgb| ColorValue::Lch(Lab::from(rgb.to_xyz()).to_polar())),
        Space::LchUv => FromRgb(|rgb| ColorValue::Lch(Luv::from(rgb.to_xyz()).to_polar())),
        Space::Adobe98Rgb => FromXyz(|xyz| ColorValue::Rgb(primaries::ADOBE_98.from_xyz(xyz))),
        Space::AppleRgb => FromXyz(|xyz| ColorValue::Rgb(primaries::APPLE.from_xyz(xyz))),
        Space::BestRgb => FromXyz(|xyz| ColorValue::Rgb(primaries::BEST.from_xyz(xyz))),
        Space::BetaRgb => FromXyz(|xyz| ColorValue::Rgb(primaries::BETA.from_xyz(xyz))),
        Space::BruceRgb => FromXyz(|xyz| ColorValue::Rgb(primaries::BRUCE.from_xyz(xyz))),
        Space::CieRgb => FromXyz(|xyz| ColorValue::Rgb(primaries::CIE.from_xyz(xyz))),
        Space::ColorMatchRgb => {
            FromXyz(|xyz| ColorValue::Rgb(primaries::COLOR_MATCH.from_xyz(xyz)))
        }
        Space::DonRgb4 => FromXyz(|xyz| ColorValue::Rgb(primaries::DON_4.from_xyz(xyz))),
        Space::EciRgbV2 => FromXyz(|xyz| ColorValue::Rgb(primaries::ECI_V2.from_xyz(xyz))),
        Space::EtkaSpacePs5 => FromXyz(|xyz| ColorValue::Rgb(primaries::ETKA_PS5.from_xyz(xyz))),
        Space::NtscRgb => FromXyz(|xyz| ColorValue::Rgb(primaries::NTSC.from_xyz(xyz))),
        Space::PalSecamRgb => FromXyz(|xyz| ColorValue::Rgb(primaries::PAL_SECAM.from_xyz(xyz))),
        Space::ProPhotoRgb => FromXyz(|xyz| ColorValue::Rgb(primaries::PRO_PHOTO.from_xyz(xyz))),
        Space::SmpteCRgb => FromXyz(|xyz| ColorValue::Rgb(primaries::SMPTE_C.from_xyz(xyz))),
        Space::WideGamutRgb => {
            FromXyz(|xyz| ColorValue::Rgb(primaries::WIDE_GAMUT.from_xyz(xyz)))
        }

        Space::Xyy
        | Space::Ryb
        | Space::Tsl
        | Space::Uvw
        | Space::Lms
        | Space::Hsi
        | Space::Hcl
        | Space::Hcy
        | Space::Cmy
        | Space::Ycbcr
        | Space::Xvycc
        | Space::YcCbcCrc
        | Space::Ycocg
        | Space::Ydbdr
        | Space::Yiq
        | Space::Ypbpr
        | Space::Yuv => return Err(ColorError::UnknownSpace(space)),
    })
}

/// The default set of output spaces a resolution expands into when the
/// caller does not name one. `ryb` and `xyy` have no registry entry and are
/// skipped with a diagnostic, as the original default list does.
pub const DEFAULT_RESOLUTION: &[Space] = &[
    Space::Adobe98Rgb,
    Space::AppleRgb,
    Space::Ansi16,
    Space::Ansi256,
    Space::BestRgb,
    Space::BetaRgb,
    Space::BruceRgb,
    Space::CieRgb,
    Space::ColorMatchRgb,
    Space::Cmyk,
    Space::DonRgb4,
    Space::EciRgbV2,
    Space::EtkaSpacePs5,
    Space::Hcg,
    Space::Hex,
    Space::Hsl,
    Space::Hsv,
    Space::Hwb,
    Space::Lab,
    Space::LchAb,
    Space::LchUv,
    Space::Luv,
    Space::NtscRgb,
    Space::PalSecamRgb,
    Space::ProPhotoRgb,
    Space::Rgb01,
    Space::Rgb,
    Space::Ryb,
    Space::SmpteCRgb,
    Space::WebSafe,
    Space::WideGamutRgb,
    Space::Xyz,
    Space::Xyy,
];
