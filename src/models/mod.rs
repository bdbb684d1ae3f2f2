//! Per-space color models and the pairwise conversions between them.

use crate::color::Components;

pub mod cmyk;
pub mod hcg;
pub mod hsl;
pub mod hsv;
pub mod hwb;
pub mod lab;
pub mod luv;
pub mod misc;
pub mod rgb;
pub mod xyz;
pub mod ycc;

pub use cmyk::{Cmy, Cmyk};
pub use hcg::Hcg;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use hwb::Hwb;
pub use lab::{Lab, Lch};
pub use luv::Luv;
pub use misc::{Hcl, Hcy, Hsi, Lms, Ryb, Tsl, Uvw};
pub use rgb::{Rgb, Rgb01};
pub use xyz::{Xyy, Xyz};
pub use ycc::{Xvycc, YcCbcCrc, Ycbcr, Ycocg, Ydbdr, Yiq, Ypbpr, Yuv};

/// A trait implemented for color models built from an ordered channel
/// triple. The checker layer uses the canonical field names for positional
/// validation and error attribution.
pub trait Channels: Sized {
    /// Canonical field names in declaration order.
    const FIELDS: [&'static str; 3];

    /// Build the model from generic components, channel by channel.
    fn from_components(components: Components) -> Self;

    /// Convert the model into generic components.
    fn to_components(&self) -> Components;
}
