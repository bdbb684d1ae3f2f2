//! polychrome resolves a color given in any supported space into a coherent
//! bundle of values across many spaces at once.
//!
//! Every conversion is routed through one of two hub representations, sRGB
//! and CIE-XYZ, keeping the conversion graph at depth two: an input is
//! checked, both hubs are derived from it, and each wanted output space is
//! then produced from the hub its registry edge declares.
//!
//! ```rust
//! use polychrome::{resolve, Space};
//!
//! let bundle = resolve(Space::Hex, "#FF0000", &[Space::Hsl, Space::Lab]).unwrap();
//! assert_eq!(bundle.rgb().red, 255.0);
//! ```

#![deny(missing_docs)]

mod check;
mod color;
mod error;
mod math;
pub mod models;
pub mod primaries;
mod registry;
mod resolver;

pub use check::{check_and_format, RawColor};
pub use color::{ColorValue, Component, Components, Space};
pub use error::ColorError;
pub use registry::{edge, Converter, DEFAULT_RESOLUTION};
pub use resolver::{resolve, resolve_default, ColorBundle};
