//! Image processing module
//!
//! Decode, resize and re-encode for the two supported raster formats.

pub mod codec;
pub mod resize;

pub use codec::{decode, encode, DecodedImage, ImageError, ImageKind, JPEG_QUALITY};
pub use resize::{fit_dimensions, fit_within};
