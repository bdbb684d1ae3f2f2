//! The checker layer: validate a loosely-shaped input color and reshape it
//! into the canonical value of its space.
//!
//! Inputs arrive as ordered channel values (the positional rendition of the
//! shorthand `{r, g, b}` vs. full `{red, green, blue}` field namings) or as
//! a hex string literal. Checkers validate each channel in canonical field
//! order and attribute failures to the field they belong to.

use crate::color::{ColorValue, Component, Components, Space};
use crate::error::ColorError;
use crate::models::{
    Channels, Cmy, Cmyk, Hcl, Hcy, Hsi, Hsl, Hsv, Hwb, Lab, Lch, Lms, Luv, Rgb, Ryb, Tsl, Uvw,
    Xvycc, Xyy, Xyz, YcCbcCrc, Ycbcr, Ycocg, Ydbdr, Yiq, Ypbpr, Yuv,
};
use regex::Regex;
use std::sync::LazyLock;

/// A hex literal with the `#` prefix.
static FULL_HEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^#[0-9A-Fa-f]{6}$|^#[0-9A-Fa-f]{3}$").expect("hex pattern compiles")
});

/// A hex literal without the `#` prefix.
static HEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^[0-9A-Fa-f]{6}$|^[0-9A-Fa-f]{3}$").expect("hex pattern compiles")
});

/// A loosely-shaped input color, not yet validated against any space.
#[derive(Clone, Debug, PartialEq)]
pub enum RawColor {
    /// Channel values in the canonical field order of the source space.
    /// Trailing extras are ignored.
    Channels(Vec<Component>),
    /// A hex string literal, with or without the `#` prefix.
    Hex(String),
}

impl RawColor {
    fn channels(&self) -> Option<&[Component]> {
        match self {
            RawColor::Channels(values) => Some(values),
            RawColor::Hex(_) => None,
        }
    }
}

impl From<[Component; 3]> for RawColor {
    fn from(values: [Component; 3]) -> Self {
        RawColor::Channels(values.to_vec())
    }
}

impl From<[Component; 4]> for RawColor {
    fn from(values: [Component; 4]) -> Self {
        RawColor::Channels(values.to_vec())
    }
}

impl From<(Component, Component, Component)> for RawColor {
    fn from((a, b, c): (Component, Component, Component)) -> Self {
        RawColor::Channels(vec![a, b, c])
    }
}

impl From<(Component, Component, Component, Component)> for RawColor {
    fn from((a, b, c, d): (Component, Component, Component, Component)) -> Self {
        RawColor::Channels(vec![a, b, c, d])
    }
}

impl From<Vec<Component>> for RawColor {
    fn from(values: Vec<Component>) -> Self {
        RawColor::Channels(values)
    }
}

impl From<&str> for RawColor {
    fn from(value: &str) -> Self {
        RawColor::Hex(value.to_string())
    }
}

impl From<String> for RawColor {
    fn from(value: String) -> Self {
        RawColor::Hex(value)
    }
}

/// Validate the three channels of a model positionally and build it.
fn check<T: Channels>(space: Space, color: &RawColor) -> Result<T, ColorError> {
    let channels = color.channels().ok_or(ColorError::InvalidColorData {
        space,
        field: T::FIELDS[0],
    })?;

    let mut values = [0.0; 3];
    for (i, &field) in T::FIELDS.iter().enumerate() {
        values[i] = channels
            .get(i)
            .copied()
            .filter(|v| v.is_finite())
            .ok_or(ColorError::InvalidColorData { space, field })?;
    }

    Ok(T::from_components(Components(values[0], values[1], values[2])))
}

/// Validate the four CMYK channels positionally and build the model.
fn check_cmyk(color: &RawColor) -> Result<Cmyk, ColorError> {
    let space = Space::Cmyk;
    let channels = color.channels().ok_or(ColorError::InvalidColorData {
        space,
        field: Cmyk::FIELDS[0],
    })?;

    let mut values = [0.0; 4];
    for (i, &field) in Cmyk::FIELDS.iter().enumerate() {
        values[i] = channels
            .get(i)
            .copied()
            .filter(|v| v.is_finite())
            .ok_or(ColorError::InvalidColorData { space, field })?;
    }

    Ok(Cmyk::new(values[0], values[1], values[2], values[3]))
}

/// Validate a hex literal and normalize it to uppercase digits without the
/// `#` prefix.
fn check_hex(color: &RawColor) -> Result<String, ColorError> {
    let text = match color {
        RawColor::Hex(text) => text,
        RawColor::Channels(_) => {
            return Err(ColorError::InvalidHex("expected a string literal".into()))
        }
    };

    if FULL_HEX.is_match(text) {
        Ok(text[1..].to_uppercase())
    } else if HEX.is_match(text) {
        Ok(text.to_uppercase())
    } else {
        Err(ColorError::InvalidHex(text.clone()))
    }
}

/// Check a raw color against the expected shape of `space` and return it in
/// the canonical form of that space.
///
/// Dispatch is exhaustive over the closed [`Space`] set: every RGB encoding
/// shares the RGB checker (which also derives the gamut marker), the two LCH
/// notations share the LCH checker, and output-only identifiers with no
/// checker fail with [`ColorError::UnsupportedSpace`].
pub fn check_and_format(space: Space, color: &RawColor) -> Result<ColorValue, ColorError> {
    match space {
        Space::Rgb
        | Space::Rgb01
        | Space::Adobe98Rgb
        | Space::AppleRgb
        | Space::BestRgb
        | Space::BetaRgb
        | Space::BruceRgb
        | Space::CieRgb
        | Space::ColorMatchRgb
        | Space::DonRgb4
        | Space::EciRgbV2
        | Space::EtkaSpacePs5
        | Space::NtscRgb
        | Space::PalSecamRgb
        | Space::ProPhotoRgb
        | Space::SmpteCRgb
        | Space::WideGamutRgb => check::<Rgb>(space, color).map(ColorValue::Rgb),

        Space::LchAb | Space::LchUv => check::<Lch>(space, color).map(ColorValue::Lch),

        Space::Hex => check_hex(color).map(ColorValue::Hex),
        Space::Cmyk => check_cmyk(color).map(ColorValue::Cmyk),

        Space::Xyz => check::<Xyz>(space, color).map(ColorValue::Xyz),
        Space::Xyy => check::<Xyy>(space, color).map(ColorValue::Xyy),
        Space::Lab => check::<Lab>(space, color).map(ColorValue::Lab),
        Space::Luv => check::<Luv>(space, color).map(ColorValue::Luv),
        Space::Hsl => check::<Hsl>(space, color).map(ColorValue::Hsl),
        Space::Hsv => check::<Hsv>(space, color).map(ColorValue::Hsv),
        Space::Hwb => check::<Hwb>(space, color).map(ColorValue::Hwb),
        Space::Hsi => check::<Hsi>(space, color).map(ColorValue::Hsi),
        Space::Hcl => check::<Hcl>(space, color).map(ColorValue::Hcl),
        Space::Hcy => check::<Hcy>(space, color).map(ColorValue::Hcy),
        Space::Cmy => check::<Cmy>(space, color).map(ColorValue::Cmy),
        Space::Ryb => check::<Ryb>(space, color).map(ColorValue::Ryb),
        Space::Tsl => check::<Tsl>(space, color).map(ColorValue::Tsl),
        Space::Uvw => check::<Uvw>(space, color).map(ColorValue::Uvw),
        Space::Lms => check::<Lms>(space, color).map(ColorValue::Lms),
        Space::Ycbcr => check::<Ycbcr>(space, color).map(ColorValue::Ycbcr),
        Space::Xvycc => check::<Xvycc>(space, color).map(ColorValue::Xvycc),
        Space::YcCbcCrc => check::<YcCbcCrc>(space, color).map(ColorValue::YcCbcCrc),
        Space::Ycocg => check::<Ycocg>(space, color).map(ColorValue::Ycocg),
        Space::Ydbdr => check::<Ydbdr>(space, color).map(ColorValue::Ydbdr),
        Space::Yiq => check::<Yiq>(space, color).map(ColorValue::Yiq),
        Space::Ypbpr => check::<Ypbpr>(space, color).map(ColorValue::Ypbpr),
        Space::Yuv => check::<Yuv>(space, color).map(ColorValue::Yuv),

        // Output-only identifiers: derivable from a hub but never checkable
        // as inputs.
        Space::Ansi16 | Space::Ansi256 | Space::Hcg | Space::WebSafe => {
            Err(ColorError::UnsupportedSpace(space.as_str().to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_are_reshaped_positionally() {
        let value = check_and_format(Space::Rgb, &[10.0, 20.0, 30.0].into()).unwrap();
        let rgb = value.as_rgb().unwrap();

        assert_eq!(rgb.red, 10.0);
        assert_eq!(rgb.green, 20.0);
        assert_eq!(rgb.blue, 30.0);
        assert!(rgb.in_gamut);
    }

    #[test]
    fn out_of_gamut_channels_clear_the_marker() {
        let value = check_and_format(Space::Rgb, &[300.0, 20.0, 30.0].into()).unwrap();
        assert!(!value.as_rgb().unwrap().in_gamut);
    }

    #[test]
    fn nan_channels_are_invalid_and_attributed() {
        let err =
            check_and_format(Space::Rgb, &[Component::NAN, 0.0, 0.0].into()).unwrap_err();
        assert_eq!(
            err,
            ColorError::InvalidColorData {
                space: Space::Rgb,
                field: "red",
            }
        );

        let err = check_and_format(Space::Lab, &[50.0, Component::INFINITY, 0.0].into())
            .unwrap_err();
        assert_eq!(
            err,
            ColorError::InvalidColorData {
                space: Space::Lab,
                field: "a",
            }
        );
    }

    #[test]
    fn missing_channels_are_attributed_to_their_field() {
        let err = check_and_format(Space::Hsl, &vec![0.0, 10.0].into()).unwrap_err();
        assert_eq!(
            err,
            ColorError::InvalidColorData {
                space: Space::Hsl,
                field: "lightness",
            }
        );

        let err = check_and_format(Space::Cmyk, &[0.0, 0.0, 0.0].into()).unwrap_err();
        assert_eq!(
            err,
            ColorError::InvalidColorData {
                space: Space::Cmyk,
                field: "key",
            }
        );
    }

    #[test]
    fn tuples_and_vectors_are_accepted_as_channels() {
        let value = check_and_format(Space::Lab, &(53.0, 80.0, 67.0).into()).unwrap();
        assert_eq!(value.as_lab().unwrap().luminance, 53.0);

        let value =
            check_and_format(Space::Cmyk, &(0.0, 100.0, 100.0, 0.0).into()).unwrap();
        assert_eq!(value.as_cmyk().unwrap().magenta, 100.0);
    }

    #[test]
    fn extra_trailing_channels_are_ignored() {
        let value = check_and_format(Space::Hsl, &[120.0, 50.0, 40.0, 1.0].into()).unwrap();
        let hsl = value.as_hsl().unwrap();
        assert_eq!(hsl.hue, 120.0);
        assert_eq!(hsl.lightness, 40.0);
    }

    #[test]
    fn a_string_is_not_numeric_data() {
        let err = check_and_format(Space::Rgb, &"#abc".into()).unwrap_err();
        assert_eq!(
            err,
            ColorError::InvalidColorData {
                space: Space::Rgb,
                field: "red",
            }
        );
    }

    #[test]
    fn hex_literals_are_normalized() {
        let value = check_and_format(Space::Hex, &"#abc".into()).unwrap();
        assert_eq!(value.as_hex().unwrap(), "ABC");

        let value = check_and_format(Space::Hex, &"#1a2b3c".into()).unwrap();
        assert_eq!(value.as_hex().unwrap(), "1A2B3C");

        let value = check_and_format(Space::Hex, &"1A2B3C".into()).unwrap();
        assert_eq!(value.as_hex().unwrap(), "1A2B3C");
    }

    #[test]
    fn malformed_hex_literals_are_rejected() {
        assert!(matches!(
            check_and_format(Space::Hex, &"#12".into()),
            Err(ColorError::InvalidHex(_))
        ));
        assert!(matches!(
            check_and_format(Space::Hex, &"#12345".into()),
            Err(ColorError::InvalidHex(_))
        ));
        assert!(matches!(
            check_and_format(Space::Hex, &"#1234567".into()),
            Err(ColorError::InvalidHex(_))
        ));
        assert!(matches!(
            check_and_format(Space::Hex, &"#GGHHII".into()),
            Err(ColorError::InvalidHex(_))
        ));
    }

    #[test]
    fn both_lch_notations_share_the_lch_checker() {
        for space in [Space::LchAb, Space::LchUv] {
            let value = check_and_format(space, &[53.0, 104.0, 40.0].into()).unwrap();
            assert!(matches!(value, ColorValue::Lch(lch) if lch.lightness == 53.0));
        }
    }

    #[test]
    fn alternate_rgb_encodings_share_the_rgb_checker() {
        let value =
            check_and_format(Space::Adobe98Rgb, &[219.0, 108.0, 42.0].into()).unwrap();
        assert!(matches!(value, ColorValue::Rgb(rgb) if rgb.in_gamut));
    }

    #[test]
    fn output_only_spaces_have_no_checker() {
        for space in [Space::Ansi16, Space::Ansi256, Space::Hcg, Space::WebSafe] {
            let err = check_and_format(space, &[0.0, 0.0, 0.0].into()).unwrap_err();
            assert!(matches!(err, ColorError::UnsupportedSpace(_)));
        }
    }
}
