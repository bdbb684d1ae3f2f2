//! The resolver: derive both hub representations from a checked input, then
//! lazily expand them into the set of wanted output spaces.

use crate::check::{check_and_format, RawColor};
use crate::color::{ColorValue, Space};
use crate::error::ColorError;
use crate::models::{Rgb, Xyz};
use crate::primaries::{self, RgbSpace};
use crate::registry::{edge, Converter, DEFAULT_RESOLUTION};
use std::collections::BTreeMap;

/// The result of one resolution call: an immutable mapping from space to its
/// value, guaranteed to contain the source space and both hubs.
///
/// Wanted spaces with no registry entry are not an error; they are left out
/// of the mapping and recorded in [`ColorBundle::skipped`].
#[derive(Clone, Debug, PartialEq)]
pub struct ColorBundle {
    source: Space,
    rgb: Rgb,
    xyz: Xyz,
    values: BTreeMap<Space, ColorValue>,
    skipped: Vec<Space>,
}

impl ColorBundle {
    /// The space the input color was given in.
    pub fn source(&self) -> Space {
        self.source
    }

    /// The sRGB hub value.
    pub fn rgb(&self) -> &Rgb {
        &self.rgb
    }

    /// The CIE-XYZ hub value.
    pub fn xyz(&self) -> &Xyz {
        &self.xyz
    }

    /// The resolved value for a space, if it is part of the bundle.
    pub fn get(&self, space: Space) -> Option<&ColorValue> {
        self.values.get(&space)
    }

    /// The resolved value for a space, failing with
    /// [`ColorError::UnknownSpace`] when it is not part of the bundle.
    pub fn require(&self, space: Space) -> Result<&ColorValue, ColorError> {
        self.values
            .get(&space)
            .ok_or(ColorError::UnknownSpace(space))
    }

    /// True when the bundle holds a value for the space.
    pub fn contains(&self, space: Space) -> bool {
        self.values.contains_key(&space)
    }

    /// Iterate over every resolved (space, value) pair in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (Space, &ColorValue)> + '_ {
        self.values.iter().map(|(&space, value)| (space, value))
    }

    /// The wanted spaces that were dropped because no conversion is
    /// registered for them.
    pub fn skipped(&self) -> &[Space] {
        &self.skipped
    }
}

/// The working space definition behind an alternate RGB encoding. `rgb`
/// itself is not listed; as a hub it is satisfied trivially.
fn rgb_space(space: Space) -> Option<&'static RgbSpace> {
    Some(match space {
        Space::Adobe98Rgb => &primaries::ADOBE_98,
        Space::AppleRgb => &primaries::APPLE,
        Space::BestRgb => &primaries::BEST,
        Space::BetaRgb => &primaries::BETA,
        Space::BruceRgb => &primaries::BRUCE,
        Space::CieRgb => &primaries::CIE,
        Space::ColorMatchRgb => &primaries::COLOR_MATCH,
        Space::DonRgb4 => &primaries::DON_4,
        Space::EciRgbV2 => &primaries::ECI_V2,
        Space::EtkaSpacePs5 => &primaries::ETKA_PS5,
        Space::NtscRgb => &primaries::NTSC,
        Space::PalSecamRgb => &primaries::PAL_SECAM,
        Space::ProPhotoRgb => &primaries::PRO_PHOTO,
        Space::SmpteCRgb => &primaries::SMPTE_C,
        Space::WideGamutRgb => &primaries::WIDE_GAMUT,
        _ => return None,
    })
}

/// Direct-to-RGB derivation for the RGB-derivable input set (hex, cmyk,
/// hsl, hsv, hwb). Each of these shapes belongs to exactly one space.
fn rgb_from(value: &ColorValue) -> Option<Rgb> {
    Some(match value {
        ColorValue::Hex(hex) => Rgb::from_hex(hex),
        ColorValue::Cmyk(cmyk) => cmyk.to_rgb(),
        ColorValue::Hsl(hsl) => hsl.to_rgb(),
        ColorValue::Hsv(hsv) => hsv.to_rgb(),
        ColorValue::Hwb(hwb) => hwb.to_rgb(),
        _ => return None,
    })
}

/// Direct-to-XYZ derivation for the XYZ-derivable input set (lab, luv and
/// the alternate RGB encodings).
fn xyz_from(space: Space, value: &ColorValue) -> Option<Xyz> {
    match (space, value) {
        (Space::Lab, ColorValue::Lab(lab)) => Some(lab.to_xyz()),
        (Space::Luv, ColorValue::Luv(luv)) => Some(luv.to_xyz()),
        (_, ColorValue::Rgb(rgb)) => rgb_space(space).map(|working| working.to_xyz(rgb)),
        _ => None,
    }
}

/// Check an input color given in `space` and resolve it into a bundle
/// holding both hubs plus every registered space of `wanted`.
///
/// The checker and the hub derivation fail fast; a wanted space with no
/// registry entry is skipped and recorded on the bundle instead of failing
/// the call. Expansion order over `wanted` does not affect the result:
/// every edge consumes a hub value computed up front, never a sibling
/// output.
pub fn resolve(
    space: Space,
    color: impl Into<RawColor>,
    wanted: &[Space],
) -> Result<ColorBundle, ColorError> {
    let color = color.into();
    let value = check_and_format(space, &color)?;

    let (rgb, xyz) = match &value {
        // A hub input satisfies its own hub trivially; only the other one
        // is derived. An XYZ input in particular is never rebuilt from RGB.
        ColorValue::Rgb(rgb) if space == Space::Rgb => (*rgb, rgb.to_xyz()),
        ColorValue::Xyz(xyz) => (xyz.to_rgb(), *xyz),
        _ => {
            if let Some(rgb) = rgb_from(&value) {
                let xyz = rgb.to_xyz();
                (rgb, xyz)
            } else if let Some(xyz) = xyz_from(space, &value) {
                (xyz.to_rgb(), xyz)
            } else {
                return Err(ColorError::UnresolvableHub(space));
            }
        }
    };

    let mut values = BTreeMap::new();
    values.insert(space, value);
    values
        .entry(Space::Rgb)
        .or_insert_with(|| ColorValue::Rgb(rgb));
    values
        .entry(Space::Xyz)
        .or_insert_with(|| ColorValue::Xyz(xyz));

    let mut skipped = Vec::new();
    for &target in wanted {
        if values.contains_key(&target) {
            continue;
        }

        match edge(target) {
            Ok(Converter::FromRgb(convert)) => {
                values.insert(target, convert(&rgb));
            }
            Ok(Converter::FromXyz(convert)) => {
                values.insert(target, convert(&xyz));
            }
            Err(_) => {
                if !skipped.contains(&target) {
                    skipped.push(target);
                }
            }
        }
    }

    Ok(ColorBundle {
        source: space,
        rgb,
        xyz,
        values,
        skipped,
    })
}

/// Resolve into the default set of output spaces.
pub fn resolve_default(space: Space, color: impl Into<RawColor>) -> Result<ColorBundle, ColorError> {
    resolve(space, color, DEFAULT_RESOLUTION)
}
