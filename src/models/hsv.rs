//! Model a color with the HSV notation in the sRGB color space.

use crate::color::Component;
use crate::math::normalize_hue;
use crate::models::hsl::rgb_to_hue_with_min_max;
use crate::models::Rgb;

polychrome_macros::gen_space! {
    /// A color specified with the HSV notation in the sRGB color space.
    pub struct Hsv {
        /// The hue component of the color, in degrees.
        pub hue: Component,
        /// The saturation component of the color, in percent.
        pub saturation: Component,
        /// The value component of the color, in percent.
        pub value: Component,
    }
}

impl From<Rgb> for Hsv {
    fn from(value: Rgb) -> Self {
        let (hue, min, max) = rgb_to_hue_with_min_max(&value);

        let saturation = if max == 0.0 { 0.0 } else { (max - min) / max };

        Hsv::new(hue, saturation * 100.0, max / 255.0 * 100.0)
    }
}

impl Hsv {
    /// Convert this color from the HSV notation back to sRGB channels.
    pub fn to_rgb(&self) -> Rgb {
        let hue = normalize_hue(self.hue);
        let saturation = self.saturation / 100.0;
        let value = self.value / 100.0;

        let f = |n: Component| {
            let k = (n + hue / 60.0) % 6.0;
            (value - value * saturation * k.min(4.0 - k).clamp(0.0, 1.0)) * 255.0
        };

        Rgb::new(f(5.0), f(3.0), f(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn red_has_full_saturation_and_value() {
        let hsv = Hsv::from(Rgb::new(255.0, 0.0, 0.0));
        assert_component_eq!(hsv.hue, 0.0);
        assert_component_eq!(hsv.saturation, 100.0);
        assert_component_eq!(hsv.value, 100.0);
    }

    #[test]
    fn teal_round_trips() {
        let source = Rgb::new(0.0, 128.0, 128.0);
        let hsv = Hsv::from(source);

        assert_component_eq!(hsv.hue, 180.0);
        assert_component_eq!(hsv.saturation, 100.0);

        let back = hsv.to_rgb();
        assert_component_eq!(back.red, source.red);
        assert_component_eq!(back.green, source.green);
        assert_component_eq!(back.blue, source.blue);
    }

    #[test]
    fn black_has_zero_value() {
        let hsv = Hsv::from(Rgb::new(0.0, 0.0, 0.0));
        assert_eq!(hsv.saturation, 0.0);
        assert_eq!(hsv.value, 0.0);
    }
}
