//! Models for the CMY and CMYK ink representations.

use crate::color::{Component, Components};
use crate::models::{Channels, Rgb};

polychrome_macros::gen_space! {
    /// A color specified in the CMY ink model, components in percent.
    pub struct Cmy {
        /// The cyan component of the color.
        pub cyan: Component,
        /// The magenta component of the color.
        pub magenta: Component,
        /// The yellow component of the color.
        pub yellow: Component,
    }
}

/// A color specified in the CMYK ink model, components in percent. The only
/// four-channel model, so it is written out by hand instead of generated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cmyk {
    /// The cyan component of the color.
    pub cyan: Component,
    /// The magenta component of the color.
    pub magenta: Component,
    /// The yellow component of the color.
    pub yellow: Component,
    /// The key (black) component of the color.
    pub key: Component,
}

impl Cmyk {
    /// Canonical field names in declaration order.
    pub const FIELDS: [&'static str; 4] = ["cyan", "magenta", "yellow", "key"];

    /// Create a new value in this space from its channel values.
    pub fn new(cyan: Component, magenta: Component, yellow: Component, key: Component) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
            key,
        }
    }

    /// Convert this color back to sRGB channels.
    pub fn to_rgb(&self) -> Rgb {
        let key = self.key / 100.0;
        let channel = |v: Component| 255.0 * (1.0 - v / 100.0) * (1.0 - key);

        Rgb::new(channel(self.cyan), channel(self.magenta), channel(self.yellow))
    }
}

impl From<Rgb> for Cmyk {
    fn from(value: Rgb) -> Self {
        let Components(red, green, blue) = value.to_components().map(|v| v / 255.0);

        let key = 1.0 - red.max(green).max(blue);
        if key >= 1.0 {
            return Cmyk::new(0.0, 0.0, 0.0, 100.0);
        }

        let channel = |v: Component| (1.0 - v - key) / (1.0 - key) * 100.0;

        Cmyk::new(channel(red), channel(green), channel(blue), key * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn red_is_pure_magenta_and_yellow() {
        let cmyk = Cmyk::from(Rgb::new(255.0, 0.0, 0.0));
        assert_component_eq!(cmyk.cyan, 0.0);
        assert_component_eq!(cmyk.magenta, 100.0);
        assert_component_eq!(cmyk.yellow, 100.0);
        assert_component_eq!(cmyk.key, 0.0);
    }

    #[test]
    fn black_is_pure_key() {
        let cmyk = Cmyk::from(Rgb::new(0.0, 0.0, 0.0));
        assert_eq!(cmyk.key, 100.0);
        assert_eq!(cmyk.cyan, 0.0);
    }

    #[test]
    fn teal_round_trips() {
        let source = Rgb::new(0.0, 128.0, 128.0);
        let back = Cmyk::from(source).to_rgb();

        assert_component_eq!(back.red, source.red);
        assert_component_eq!(back.green, source.green);
        assert_component_eq!(back.blue, source.blue);
    }
}
