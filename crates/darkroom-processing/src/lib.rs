//! Darkroom processing library
//!
//! Image decode/resize/encode for the upload pipeline, plus validation of
//! client-declared content types.

pub mod image;
pub mod validator;

pub use self::image::{decode, encode, fit_within, DecodedImage, ImageError, ImageKind};
pub use validator::{ImageValidator, ValidationError};
