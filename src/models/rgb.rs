//! Model a color in the sRGB color space, channels in 0..=255.

use crate::color::{Component, Components};
use crate::models::{Channels, Xyz};
use crate::primaries;

/// The inclusive channel bounds of the sRGB gamut.
const GAMUT: std::ops::RangeInclusive<Component> = 0.0..=255.0;

/// True when a single channel value lies inside the sRGB gamut bounds.
pub fn gamut_check(value: Component) -> bool {
    GAMUT.contains(&value)
}

/// A color specified in the sRGB color space, with a marker telling whether
/// every channel lies inside the gamut bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    /// The red channel of the color.
    pub red: Component,
    /// The green channel of the color.
    pub green: Component,
    /// The blue channel of the color.
    pub blue: Component,
    /// True iff every channel is in 0..=255.
    pub in_gamut: bool,
}

impl Rgb {
    /// Create a new value in this space from its channel values. The gamut
    /// marker is derived from the channels.
    pub fn new(red: Component, green: Component, blue: Component) -> Self {
        Self {
            red,
            green,
            blue,
            in_gamut: gamut_check(red) && gamut_check(green) && gamut_check(blue),
        }
    }

    /// Convert this color to the CIE XYZ hub representation.
    pub fn to_xyz(&self) -> Xyz {
        primaries::SRGB.to_xyz(self)
    }

    /// Format this color as an uppercase 6-digit hex literal, without the
    /// `#` prefix. Channels are clamped to the gamut bounds first.
    pub fn to_hex(&self) -> String {
        let quantize = |v: Component| v.round().clamp(0.0, 255.0) as u8;
        format!(
            "{:02X}{:02X}{:02X}",
            quantize(self.red),
            quantize(self.green),
            quantize(self.blue)
        )
    }

    /// Parse a checked 3- or 6-digit hex literal (no prefix) back into
    /// channel values. Anything else maps to black.
    pub fn from_hex(hex: &str) -> Self {
        let digits = hex
            .chars()
            .filter_map(|c| c.to_digit(16))
            .map(|d| d as Component)
            .collect::<Vec<_>>();

        match digits.as_slice() {
            // Shorthand digits expand by repetition: `A` -> `AA`.
            [r, g, b] => Self::new(r * 17.0, g * 17.0, b * 17.0),
            [r1, r2, g1, g2, b1, b2] => Self::new(
                r1 * 16.0 + r2,
                g1 * 16.0 + g2,
                b1 * 16.0 + b2,
            ),
            _ => Self::new(0.0, 0.0, 0.0),
        }
    }

    /// The nearest entry of the 16-color ANSI terminal palette.
    pub fn to_ansi16(&self) -> u8 {
        let value = self.red.max(self.green).max(self.blue) / 255.0 * 100.0;
        let value = (value / 50.0).round();

        if value == 0.0 {
            return 30;
        }

        let bit = |v: Component| (v / 255.0).round() as u8;
        let ansi = 30 + ((bit(self.blue) << 2) | (bit(self.green) << 1) | bit(self.red));

        if value == 2.0 {
            ansi + 60
        } else {
            ansi
        }
    }

    /// The nearest entry of the 256-color ANSI terminal palette.
    pub fn to_ansi256(&self) -> u8 {
        let (red, green, blue) = (self.red, self.green, self.blue);

        // The grayscale ramp covers the 24 entries after the 6x6x6 cube.
        if red == green && green == blue {
            if red < 8.0 {
                return 16;
            }
            if red > 248.0 {
                return 231;
            }
            return (((red - 8.0) / 247.0) * 24.0).round() as u8 + 232;
        }

        let level = |v: Component| (v / 255.0 * 5.0).round().clamp(0.0, 5.0) as u8;
        16 + 36 * level(red) + 6 * level(green) + level(blue)
    }

    /// True when every channel is a multiple of 51, i.e. the color belongs
    /// to the 216-color web safe palette.
    pub fn is_web_safe(&self) -> bool {
        self.red % 51.0 == 0.0 && self.green % 51.0 == 0.0 && self.blue % 51.0 == 0.0
    }

    /// Rescale the channels onto the 0..=1 range.
    pub fn to_rgb01(&self) -> Rgb01 {
        Rgb01::new(self.red / 255.0, self.green / 255.0, self.blue / 255.0)
    }
}

impl Channels for Rgb {
    const FIELDS: [&'static str; 3] = ["red", "green", "blue"];

    fn from_components(components: Components) -> Self {
        Self::new(components.0, components.1, components.2)
    }

    fn to_components(&self) -> Components {
        Components(self.red, self.green, self.blue)
    }
}

polychrome_macros::gen_space! {
    /// A color specified in the sRGB color space with channels in 0..=1.
    pub struct Rgb01 {
        /// The red channel of the color.
        pub red: Component,
        /// The green channel of the color.
        pub green: Component,
        /// The blue channel of the color.
        pub blue: Component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gamut_marker_follows_the_channel_bounds() {
        assert!(Rgb::new(0.0, 127.5, 255.0).in_gamut);
        assert!(!Rgb::new(-1.0, 0.0, 0.0).in_gamut);
        assert!(!Rgb::new(0.0, 255.1, 0.0).in_gamut);
    }

    #[test]
    fn hex_round_trip() {
        assert_eq!(Rgb::new(255.0, 0.0, 0.0).to_hex(), "FF0000");
        assert_eq!(Rgb::new(26.0, 43.0, 60.0).to_hex(), "1A2B3C");

        let rgb = Rgb::from_hex("1A2B3C");
        assert_eq!(rgb.red, 26.0);
        assert_eq!(rgb.green, 43.0);
        assert_eq!(rgb.blue, 60.0);
    }

    #[test]
    fn shorthand_hex_expands_by_repetition() {
        let rgb = Rgb::from_hex("ABC");
        assert_eq!(rgb.red, 170.0);
        assert_eq!(rgb.green, 187.0);
        assert_eq!(rgb.blue, 204.0);
    }

    #[test]
    fn ansi16_primaries() {
        assert_eq!(Rgb::new(255.0, 0.0, 0.0).to_ansi16(), 91);
        assert_eq!(Rgb::new(0.0, 0.0, 0.0).to_ansi16(), 30);
        assert_eq!(Rgb::new(128.0, 0.0, 0.0).to_ansi16(), 31);
    }

    #[test]
    fn ansi256_cube_and_ramp() {
        assert_eq!(Rgb::new(255.0, 0.0, 0.0).to_ansi256(), 196);
        assert_eq!(Rgb::new(0.0, 0.0, 0.0).to_ansi256(), 16);
        assert_eq!(Rgb::new(255.0, 255.0, 255.0).to_ansi256(), 231);
        assert_eq!(Rgb::new(128.0, 128.0, 128.0).to_ansi256(), 244);
    }

    #[test]
    fn web_safe_needs_multiples_of_51() {
        assert!(Rgb::new(255.0, 0.0, 102.0).is_web_safe());
        assert!(!Rgb::new(250.0, 0.0, 102.0).is_web_safe());
    }
}
