//! Model a color with the HWB notation in the sRGB color space.

use crate::color::Component;
use crate::models::hsl::rgb_to_hue_with_min_max;
use crate::models::{Hsl, Rgb};

polychrome_macros::gen_space! {
    /// A color specified with the HWB notation in the sRGB color space.
    pub struct Hwb {
        /// The hue component of the color, in degrees.
        pub hue: Component,
        /// The whiteness component of the color, in percent.
        pub whiteness: Component,
        /// The blackness component of the color, in percent.
        pub blackness: Component,
    }
}

impl From<Rgb> for Hwb {
    fn from(value: Rgb) -> Self {
        let (hue, min, max) = rgb_to_hue_with_min_max(&value);

        let whiteness = min / 255.0;
        let blackness = 1.0 - max / 255.0;

        Hwb::new(hue, whiteness * 100.0, blackness * 100.0)
    }
}

impl Hwb {
    /// Convert this color from the HWB notation back to sRGB channels.
    /// <https://drafts.csswg.org/css-color-4/#hwb-to-rgb>
    pub fn to_rgb(&self) -> Rgb {
        let whiteness = self.whiteness / 100.0;
        let blackness = self.blackness / 100.0;

        if whiteness + blackness >= 1.0 {
            let gray = whiteness / (whiteness + blackness) * 255.0;
            return Rgb::new(gray, gray, gray);
        }

        let rgb = Hsl::new(self.hue, 100.0, 50.0).to_rgb();
        let scale = |v: Component| (v / 255.0) * (1.0 - whiteness - blackness) + whiteness;

        Rgb::new(
            scale(rgb.red) * 255.0,
            scale(rgb.green) * 255.0,
            scale(rgb.blue) * 255.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn red_has_no_whiteness_or_blackness() {
        let hwb = Hwb::from(Rgb::new(255.0, 0.0, 0.0));
        assert_component_eq!(hwb.hue, 0.0);
        assert_component_eq!(hwb.whiteness, 0.0);
        assert_component_eq!(hwb.blackness, 0.0);
    }

    #[test]
    fn hwb_round_trips() {
        // hwb(40deg 30% 40%) = rgb(153, 128, 77)
        let rgb = Hwb::new(40.0, 30.0, 40.0).to_rgb();

        assert_component_eq!(rgb.red, 153.0);
        assert_component_eq!(rgb.green, 127.5, 0.5);
        assert_component_eq!(rgb.blue, 76.5, 0.5);
    }

    #[test]
    fn saturated_whiteness_and_blackness_produce_gray() {
        let rgb = Hwb::new(0.0, 80.0, 80.0).to_rgb();
        assert_component_eq!(rgb.red, 127.5);
        assert_component_eq!(rgb.green, 127.5);
        assert_component_eq!(rgb.blue, 127.5);
    }
}
