//! Models for the luma/chroma signal encodings. The checker layer validates
//! and reshapes them; none of them participates in the conversion graph.

use crate::color::Component;

polychrome_macros::gen_space! {
    /// A color specified as ITU-R YCbCr.
    pub struct Ycbcr {
        /// The luma component.
        pub y: Component,
        /// The blue-difference chroma component.
        pub cb: Component,
        /// The red-difference chroma component.
        pub cr: Component,
    }
}

polychrome_macros::gen_space! {
    /// A color specified in the xvYCC extended-gamut encoding.
    pub struct Xvycc {
        /// The luma component.
        pub y: Component,
        /// The blue-difference chroma component.
        pub cb: Component,
        /// The red-difference chroma component.
        pub cr: Component,
    }
}

polychrome_macros::gen_space! {
    /// A color specified as BT.2020 constant-luminance YcCbcCrc.
    pub struct YcCbcCrc {
        /// The constant-luminance luma component.
        pub yc: Component,
        /// The blue-difference chroma component.
        pub cbc: Component,
        /// The red-difference chroma component.
        pub crc: Component,
    }
}

polychrome_macros::gen_space! {
    /// A color specified with the YCoCg transform.
    pub struct Ycocg {
        /// The luma component.
        pub y: Component,
        /// The orange chroma component.
        pub co: Component,
        /// The green chroma component.
        pub cg: Component,
    }
}

polychrome_macros::gen_space! {
    /// A color specified as SECAM YDbDr.
    pub struct Ydbdr {
        /// The luma component.
        pub y: Component,
        /// The Db chroma component.
        pub db: Component,
        /// The Dr chroma component.
        pub dr: Component,
    }
}

polychrome_macros::gen_space! {
    /// A color specified as NTSC YIQ.
    pub struct Yiq {
        /// The luma component.
        pub y: Component,
        /// The in-phase chroma component.
        pub i: Component,
        /// The quadrature chroma component.
        pub q: Component,
    }
}

polychrome_macros::gen_space! {
    /// A color specified as analog component YPbPr.
    pub struct Ypbpr {
        /// The luma component.
        pub y: Component,
        /// The blue-difference chroma component.
        pub pb: Component,
        /// The red-difference chroma component.
        pub pr: Component,
    }
}

polychrome_macros::gen_space! {
    /// A color specified as PAL YUV.
    pub struct Yuv {
        /// The luma component.
        pub y: Component,
        /// The U chroma component.
        pub u: Component,
        /// The V chroma component.
        pub v: Component,
    }
}
