//! Models for spaces the checker layer accepts but the conversion graph
//! does not derive: artistic, cone-response and appearance notations.

use crate::color::Component;

polychrome_macros::gen_space! {
    /// A color specified in the red-yellow-blue artistic model.
    pub struct Ryb {
        /// The red component of the color.
        pub red: Component,
        /// The yellow component of the color.
        pub yellow: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

polychrome_macros::gen_space! {
    /// A color specified in the TSL model.
    pub struct Tsl {
        /// The tint component of the color.
        pub tint: Component,
        /// The saturation component of the color.
        pub saturation: Component,
        /// The lightness component of the color.
        pub lightness: Component,
    }
}

polychrome_macros::gen_space! {
    /// A color specified in the CIE 1964 UVW color space.
    pub struct Uvw {
        /// The U component of the color.
        pub u: Component,
        /// The V component of the color.
        pub v: Component,
        /// The W component of the color.
        pub w: Component,
    }
}

polychrome_macros::gen_space! {
    /// A color specified as LMS cone responses.
    pub struct Lms {
        /// The long-wavelength cone response.
        pub long: Component,
        /// The medium-wavelength cone response.
        pub medium: Component,
        /// The short-wavelength cone response.
        pub short: Component,
    }
}

polychrome_macros::gen_space! {
    /// A color specified with the HSI notation.
    pub struct Hsi {
        /// The hue component of the color, in degrees.
        pub hue: Component,
        /// The saturation component of the color, in percent.
        pub saturation: Component,
        /// The intensity component of the color, in percent.
        pub intensity: Component,
    }
}

polychrome_macros::gen_space! {
    /// A color specified with the HCL notation.
    pub struct Hcl {
        /// The hue component of the color, in degrees.
        pub hue: Component,
        /// The chroma component of the color.
        pub chroma: Component,
        /// The luminance component of the color.
        pub luminance: Component,
    }
}

polychrome_macros::gen_space! {
    /// A color specified with the HCY notation.
    pub struct Hcy {
        /// The hue component of the color, in degrees.
        pub hue: Component,
        /// The chroma component of the color.
        pub chroma: Component,
        /// The luma component of the color.
        pub luminance: Component,
    }
}
