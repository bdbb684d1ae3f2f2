//! Model a color with the HSL notation in the sRGB color space.

use crate::color::Component;
use crate::math::normalize_hue;
use crate::models::Rgb;

/// Calculate the hue from RGB channels and return it along with the min and
/// max channel values (still on the 0..=255 scale). Achromatic colors get a
/// hue of zero.
pub(crate) fn rgb_to_hue_with_min_max(rgb: &Rgb) -> (Component, Component, Component) {
    let (red, green, blue) = (rgb.red, rgb.green, rgb.blue);

    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);

    let delta = max - min;

    let hue = if delta != 0.0 {
        normalize_hue(
            60.0 * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            },
        )
    } else {
        0.0
    };

    (hue, min, max)
}

polychrome_macros::gen_space! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct Hsl {
        /// The hue component of the color, in degrees.
        pub hue: Component,
        /// The saturation component of the color, in percent.
        pub saturation: Component,
        /// The lightness component of the color, in percent.
        pub lightness: Component,
    }
}

impl From<Rgb> for Hsl {
    fn from(value: Rgb) -> Self {
        let (hue, min, max) = rgb_to_hue_with_min_max(&value);
        let (min, max) = (min / 255.0, max / 255.0);

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation = if delta == 0.0 || lightness == 0.0 || lightness == 1.0 {
            0.0
        } else {
            (max - lightness) / lightness.min(1.0 - lightness)
        };

        Hsl::new(hue, saturation * 100.0, lightness * 100.0)
    }
}

impl Hsl {
    /// Convert this color from the HSL notation back to sRGB channels.
    /// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
    pub fn to_rgb(&self) -> Rgb {
        let saturation = self.saturation / 100.0;
        let lightness = self.lightness / 100.0;

        if saturation <= 0.0 {
            let gray = lightness * 255.0;
            return Rgb::new(gray, gray, gray);
        }

        let hue = normalize_hue(self.hue);

        let f = |n: Component| {
            let k = (n + hue / 30.0) % 12.0;
            let a = saturation * lightness.min(1.0 - lightness);
            (lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)) * 255.0
        };

        Rgb::new(f(0.0), f(8.0), f(4.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn red_is_fully_saturated() {
        let hsl = Hsl::from(Rgb::new(255.0, 0.0, 0.0));
        assert_component_eq!(hsl.hue, 0.0);
        assert_component_eq!(hsl.saturation, 100.0);
        assert_component_eq!(hsl.lightness, 50.0);
    }

    #[test]
    fn orange_round_trips() {
        let source = Rgb::new(210.0, 105.0, 30.0);
        let back = Hsl::from(source).to_rgb();

        assert_component_eq!(back.red, source.red);
        assert_component_eq!(back.green, source.green);
        assert_component_eq!(back.blue, source.blue);
    }

    #[test]
    fn achromatic_colors_have_zero_hue_and_saturation() {
        let hsl = Hsl::from(Rgb::new(128.0, 128.0, 128.0));
        assert_eq!(hsl.hue, 0.0);
        assert_eq!(hsl.saturation, 0.0);

        let back = hsl.to_rgb();
        assert_component_eq!(back.red, 128.0);
    }
}
