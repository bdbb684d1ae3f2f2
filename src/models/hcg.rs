//! Model a color with the HCG notation in the sRGB color space.

use crate::color::Component;
use crate::models::hsl::rgb_to_hue_with_min_max;
use crate::models::Rgb;

polychrome_macros::gen_space! {
    /// A color specified with the HCG notation in the sRGB color space.
    pub struct Hcg {
        /// The hue component of the color, in degrees.
        pub hue: Component,
        /// The chroma component of the color, in percent.
        pub chroma: Component,
        /// The grayness component of the color, in percent.
        pub grayness: Component,
    }
}

impl From<Rgb> for Hcg {
    fn from(value: Rgb) -> Self {
        let (hue, min, max) = rgb_to_hue_with_min_max(&value);

        let chroma = (max - min) / 255.0;
        let grayness = if chroma < 1.0 {
            (min / 255.0) / (1.0 - chroma)
        } else {
            0.0
        };

        Hcg::new(hue, chroma * 100.0, grayness * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn red_is_pure_chroma() {
        let hcg = Hcg::from(Rgb::new(255.0, 0.0, 0.0));
        assert_component_eq!(hcg.hue, 0.0);
        assert_component_eq!(hcg.chroma, 100.0);
        assert_component_eq!(hcg.grayness, 0.0);
    }

    #[test]
    fn gray_has_no_chroma() {
        let hcg = Hcg::from(Rgb::new(128.0, 128.0, 128.0));
        assert_component_eq!(hcg.chroma, 0.0);
        assert_component_eq!(hcg.grayness, 128.0 / 255.0 * 100.0);
    }
}
