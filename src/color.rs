//! Core color primitives: the closed set of supported spaces, the generic
//! channel container and the sum type over every canonical value shape.

use crate::error::ColorError;
use crate::models::{
    Cmy, Cmyk, Hcg, Hcl, Hcy, Hsi, Hsl, Hsv, Hwb, Lab, Lch, Lms, Luv, Rgb, Rgb01, Ryb, Tsl, Uvw,
    Xvycc, Xyy, Xyz, YcCbcCrc, Ycbcr, Ycocg, Ydbdr, Yiq, Ypbpr, Yuv,
};
use std::fmt;
use std::str::FromStr;

/// A 64-bit floating point value that all channels are stored as.
pub type Component = f64;

/// Represent the three channels that describe most colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// Identifier for every color space and notation this crate recognizes.
///
/// The set is closed: an identifier outside it cannot be constructed, and
/// parsing an unknown string fails with [`ColorError::UnsupportedSpace`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Space {
    /// The sRGB color space, channels in 0..=255.
    Rgb,
    /// The sRGB color space, channels in 0..=1.
    Rgb01,
    /// Whether a color is one of the 216 web safe colors.
    WebSafe,
    /// Adobe RGB (1998).
    Adobe98Rgb,
    /// Apple RGB.
    AppleRgb,
    /// Best RGB.
    BestRgb,
    /// Beta RGB.
    BetaRgb,
    /// Bruce RGB.
    BruceRgb,
    /// CIE RGB.
    CieRgb,
    /// ColorMatch RGB.
    ColorMatchRgb,
    /// Don RGB 4.
    DonRgb4,
    /// ECI RGB v2.
    EciRgbV2,
    /// Ekta Space PS5.
    EtkaSpacePs5,
    /// NTSC RGB.
    NtscRgb,
    /// PAL/SECAM RGB.
    PalSecamRgb,
    /// ProPhoto RGB.
    ProPhotoRgb,
    /// SMPTE-C RGB.
    SmpteCRgb,
    /// Wide Gamut RGB.
    WideGamutRgb,
    /// CIE 1931 XYZ with a D65 reference white, 0..=100 scale.
    Xyz,
    /// CIE xyY chromaticity form.
    Xyy,
    /// CIE L\*a\*b\*.
    Lab,
    /// CIE LCH(ab), the cylindrical form of L\*a\*b\*.
    LchAb,
    /// CIE LCH(uv), the cylindrical form of L\*u\*v\*.
    LchUv,
    /// CIE L\*u\*v\*.
    Luv,
    /// The HSL (hue, saturation, lightness) notation.
    Hsl,
    /// The HSV (hue, saturation, value) notation.
    Hsv,
    /// The HWB (hue, whiteness, blackness) notation.
    Hwb,
    /// The HCG (hue, chroma, grayness) notation.
    Hcg,
    /// The HSI (hue, saturation, intensity) notation.
    Hsi,
    /// The HCL (hue, chroma, luminance) notation.
    Hcl,
    /// The HCY (hue, chroma, luma) notation.
    Hcy,
    /// The CMY ink model.
    Cmy,
    /// The CMYK ink model.
    Cmyk,
    /// A 3- or 6-digit hexadecimal sRGB literal.
    Hex,
    /// The 16-color ANSI terminal palette.
    Ansi16,
    /// The 256-color ANSI terminal palette.
    Ansi256,
    /// The red-yellow-blue artistic model.
    Ryb,
    /// The TSL (tint, saturation, lightness) model.
    Tsl,
    /// CIE 1964 UVW.
    Uvw,
    /// The LMS cone response model.
    Lms,
    /// ITU-R YCbCr.
    Ycbcr,
    /// The xvYCC extended-gamut YCC encoding.
    Xvycc,
    /// ITU-R BT.2020 constant-luminance YcCbcCrc.
    YcCbcCrc,
    /// The YCoCg transform.
    Ycocg,
    /// SECAM YDbDr.
    Ydbdr,
    /// NTSC YIQ.
    Yiq,
    /// Analog component YPbPr.
    Ypbpr,
    /// PAL YUV.
    Yuv,
}

impl Space {
    /// The canonical snake_case identifier of this space.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Space::Rgb => "rgb",
            Space::Rgb01 => "rgb_0_1",
            Space::WebSafe => "web_safe",
            Space::Adobe98Rgb => "adobe_98_rgb",
            Space::AppleRgb => "apple_rgb",
            Space::BestRgb => "best_rgb",
            Space::BetaRgb => "beta_rgb",
            Space::BruceRgb => "bruce_rgb",
            Space::CieRgb => "cie_rgb",
            Space::ColorMatchRgb => "color_match_rgb",
            Space::DonRgb4 => "don_rgb_4",
            Space::EciRgbV2 => "eci_rgb_v2",
            Space::EtkaSpacePs5 => "etka_space_ps5",
            Space::NtscRgb => "ntsc_rgb",
            Space::PalSecamRgb => "pal_secam_rgb",
            Space::ProPhotoRgb => "pro_photo_rgb",
            Space::SmpteCRgb => "smpte_c_rgb",
            Space::WideGamutRgb => "wide_gamut_rgb",
            Space::Xyz => "xyz",
            Space::Xyy => "xyy",
            Space::Lab => "lab",
            Space::LchAb => "lch_ab",
            Space::LchUv => "lch_uv",
            Space::Luv => "luv",
            Space::Hsl => "hsl",
            Space::Hsv => "hsv",
            Space::Hwb => "hwb",
            Space::Hcg => "hcg",
            Space::Hsi => "hsi",
            Space::Hcl => "hcl",
            Space::Hcy => "hcy",
            Space::Cmy => "cmy",
            Space::Cmyk => "cmyk",
            Space::Hex => "hex",
            Space::Ansi16 => "ansi16",
            Space::Ansi256 => "ansi256",
            Space::Ryb => "ryb",
            Space::Tsl => "tsl",
            Space::Uvw => "uvw",
            Space::Lms => "lms",
            Space::Ycbcr => "ycbcr",
            Space::Xvycc => "xvycc",
            Space::YcCbcCrc => "yccbccrc",
            Space::Ycocg => "ycocg",
            Space::Ydbdr => "ydbdr",
            Space::Yiq => "yiq",
            Space::Ypbpr => "ypbpr",
            Space::Yuv => "yuv",
        }
    }

    /// True for spaces whose values are RGB channel triples: sRGB itself,
    /// the 0..=1 form and every alternate RGB encoding. These all share the
    /// RGB checker.
    pub const fn is_rgb_encoding(&self) -> bool {
        matches!(
            self,
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
                | Space::WideGamutRgb
        )
    }

    /// True for the two cylindrical LCH notations, which share one checker.
    pub const fn is_lch(&self) -> bool {
        matches!(self, Space::LchAb | Space::LchUv)
    }

    /// True for the two hub spaces every other space is derived through.
    pub const fn is_hub(&self) -> bool {
        matches!(self, Space::Rgb | Space::Xyz)
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Space {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "rgb" => Space::Rgb,
            "rgb_0_1" => Space::Rgb01,
            "web_safe" => Space::WebSafe,
            "adobe_98_rgb" => Space::Adobe98Rgb,
            "apple_rgb" => Space::AppleRgb,
            "best_rgb" => Space::BestRgb,
            "beta_rgb" => Space::BetaRgb,
            "bruce_rgb" => Space::BruceRgb,
            "cie_rgb" => Space::CieRgb,
            "color_match_rgb" => Space::ColorMatchRgb,
            "don_rgb_4" => Space::DonRgb4,
            "eci_rgb_v2" => Space::EciRgbV2,
            "etka_space_ps5" => Space::EtkaSpacePs5,
            "ntsc_rgb" => Space::NtscRgb,
            "pal_secam_rgb" => Space::PalSecamRgb,
            "pro_photo_rgb" => Space::ProPhotoRgb,
            "smpte_c_rgb" => Space::SmpteCRgb,
            "wide_gamut_rgb" => Space::WideGamutRgb,
            "xyz" => Space::Xyz,
            "xyy" => Space::Xyy,
            "lab" => Space::Lab,
            "lch_ab" => Space::LchAb,
            "lch_uv" => Space::LchUv,
            "luv" => Space::Luv,
            "hsl" => Space::Hsl,
            "hsv" => Space::Hsv,
            "hwb" => Space::Hwb,
            "hcg" => Space::Hcg,
            "hsi" => Space::Hsi,
            "hcl" => Space::Hcl,
            "hcy" => Space::Hcy,
            "cmy" => Space::Cmy,
            "cmyk" => Space::Cmyk,
            "hex" => Space::Hex,
            "ansi16" => Space::Ansi16,
            "ansi256" => Space::Ansi256,
            "ryb" => Space::Ryb,
            "tsl" => Space::Tsl,
            "uvw" => Space::Uvw,
            "lms" => Space::Lms,
            "ycbcr" => Space::Ycbcr,
            "xvycc" => Space::Xvycc,
            "yccbccrc" => Space::YcCbcCrc,
            "ycocg" => Space::Ycocg,
            "ydbdr" => Space::Ydbdr,
            "yiq" => Space::Yiq,
            "ypbpr" => Space::Ypbpr,
            "yuv" => Space::Yuv,
            _ => return Err(ColorError::UnsupportedSpace(s.to_string())),
        })
    }
}

/// A checked, canonically-shaped color value in one of the supported spaces.
///
/// Variants cover every distinct field shape; spaces that share a shape (the
/// alternate RGB encodings, the two LCH notations, the two ANSI palettes)
/// share a variant and are told apart by the [`Space`] key they are stored
/// under in a bundle.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorValue {
    /// An RGB channel triple with its gamut marker.
    Rgb(Rgb),
    /// An RGB channel triple on the 0..=1 scale.
    Rgb01(Rgb01),
    /// Whether the color is web safe.
    WebSafe(bool),
    /// A CIE XYZ tristimulus value.
    Xyz(Xyz),
    /// A CIE xyY chromaticity value.
    Xyy(Xyy),
    /// A CIE L\*a\*b\* value.
    Lab(Lab),
    /// A cylindrical LCH value (ab or uv, per its bundle key).
    Lch(Lch),
    /// A CIE L\*u\*v\* value.
    Luv(Luv),
    /// An HSL value.
    Hsl(Hsl),
    /// An HSV value.
    Hsv(Hsv),
    /// An HWB value.
    Hwb(Hwb),
    /// An HCG value.
    Hcg(Hcg),
    /// An HSI value.
    Hsi(Hsi),
    /// An HCL value.
    Hcl(Hcl),
    /// An HCY value.
    Hcy(Hcy),
    /// A CMY value.
    Cmy(Cmy),
    /// A CMYK value.
    Cmyk(Cmyk),
    /// An uppercase hex literal without the `#` prefix.
    Hex(String),
    /// An ANSI palette index (16- or 256-color, per its bundle key).
    Ansi(u8),
    /// An RYB value.
    Ryb(Ryb),
    /// A TSL value.
    Tsl(Tsl),
    /// A CIE UVW value.
    Uvw(Uvw),
    /// An LMS cone response value.
    Lms(Lms),
    /// A YCbCr value.
    Ycbcr(Ycbcr),
    /// An xvYCC value.
    Xvycc(Xvycc),
    /// A YcCbcCrc value.
    YcCbcCrc(YcCbcCrc),
    /// A YCoCg value.
    Ycocg(Ycocg),
    /// A YDbDr value.
    Ydbdr(Ydbdr),
    /// A YIQ value.
    Yiq(Yiq),
    /// A YPbPr value.
    Ypbpr(Ypbpr),
    /// A YUV value.
    Yuv(Yuv),
}

impl ColorValue {
    /// The RGB triple, if this value has the RGB shape.
    pub fn as_rgb(&self) -> Option<&Rgb> {
        match self {
            ColorValue::Rgb(rgb) => Some(rgb),
            _ => None,
        }
    }

    /// The XYZ tristimulus value, if this value has the XYZ shape.
    pub fn as_xyz(&self) -> Option<&Xyz> {
        match self {
            ColorValue::Xyz(xyz) => Some(xyz),
            _ => None,
        }
    }

    /// The L\*a\*b\* value, if this value has the Lab shape.
    pub fn as_lab(&self) -> Option<&Lab> {
        match self {
            ColorValue::Lab(lab) => Some(lab),
            _ => None,
        }
    }

    /// The HSL value, if this value has the HSL shape.
    pub fn as_hsl(&self) -> Option<&Hsl> {
        match self {
            ColorValue::Hsl(hsl) => Some(hsl),
            _ => None,
        }
    }

    /// The CMYK value, if this value has the CMYK shape.
    pub fn as_cmyk(&self) -> Option<&Cmyk> {
        match self {
            ColorValue::Cmyk(cmyk) => Some(cmyk),
            _ => None,
        }
    }

    /// The hex literal, if this value has the hex shape.
    pub fn as_hex(&self) -> Option<&str> {
        match self {
            ColorValue::Hex(hex) => Some(hex),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip_through_parsing() {
        const ALL: &[Space] = &[
            Space::Rgb,
            Space::Rgb01,
            Space::WebSafe,
            Space::Adobe98Rgb,
            Space::AppleRgb,
            Space::BestRgb,
            Space::BetaRgb,
            Space::BruceRgb,
            Space::CieRgb,
            Space::ColorMatchRgb,
            Space::DonRgb4,
            Space::EciRgbV2,
            Space::EtkaSpacePs5,
            Space::NtscRgb,
            Space::PalSecamRgb,
            Space::ProPhotoRgb,
            Space::SmpteCRgb,
            Space::WideGamutRgb,
            Space::Xyz,
            Space::Xyy,
            Space::Lab,
            Space::LchAb,
            Space::LchUv,
            Space::Luv,
            Space::Hsl,
            Space::Hsv,
            Space::Hwb,
            Space::Hcg,
            Space::Hsi,
            Space::Hcl,
            Space::Hcy,
            Space::Cmy,
            Space::Cmyk,
            Space::Hex,
            Space::Ansi16,
            Space::Ansi256,
            Space::Ryb,
            Space::Tsl,
            Space::Uvw,
            Space::Lms,
            Space::Ycbcr,
            Space::Xvycc,
            Space::YcCbcCrc,
            Space::Ycocg,
            Space::Ydbdr,
            Space::Yiq,
            Space::Ypbpr,
            Space::Yuv,
        ];

        for &space in ALL {
            assert_eq!(space.as_str().parse::<Space>().unwrap(), space);
        }
    }

    #[test]
    fn unknown_identifiers_are_unsupported() {
        let err = "not_a_space".parse::<Space>().unwrap_err();
        assert!(matches!(err, ColorError::UnsupportedSpace(name) if name == "not_a_space"));
    }

    #[test]
    fn rgb_encodings_share_the_rgb_checker_class() {
        assert!(Space::Rgb.is_rgb_encoding());
        assert!(Space::Rgb01.is_rgb_encoding());
        assert!(Space::EtkaSpacePs5.is_rgb_encoding());
        assert!(Space::WideGamutRgb.is_rgb_encoding());
        assert!(!Space::WebSafe.is_rgb_encoding());
        assert!(!Space::Hsl.is_rgb_encoding());
    }

    #[test]
    fn both_lch_notations_classify_together() {
        assert!(Space::LchAb.is_lch());
        assert!(Space::LchUv.is_lch());
        assert!(!Space::Lab.is_lch());
        assert!(!Space::Hcl.is_lch());
    }

    #[test]
    fn only_rgb_and_xyz_are_hubs() {
        assert!(Space::Rgb.is_hub());
        assert!(Space::Xyz.is_hub());
        assert!(!Space::Lab.is_hub());
        assert!(!Space::Hex.is_hub());
    }
}
