//! Format sniffing, decode and re-encode.
//!
//! The format is always determined from the byte stream itself, never from
//! the client-declared content type; callers compare the two afterwards.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use thiserror::Error;

/// Fixed quality for lossy re-encoding (0-100 scale).
pub const JPEG_QUALITY: u8 = 90;

/// The closed set of raster formats the pipeline supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
}

impl ImageKind {
    pub fn mime(&self) -> &'static str {
        match self {
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Png => "image/png",
        }
    }

    fn format(&self) -> ImageFormat {
        match self {
            ImageKind::Jpeg => ImageFormat::Jpeg,
            ImageKind::Png => ImageFormat::Png,
        }
    }
}

/// A decoded raster with the format it was sniffed as.
pub struct DecodedImage {
    pub kind: ImageKind,
    pub image: DynamicImage,
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Decode failed: {0}")]
    Decode(String),

    #[error("Encode failed: {0}")]
    Encode(String),
}

/// Decode raw bytes, sniffing the format from the stream.
///
/// Streams that are not recognizable PNG or JPEG fail here, including
/// well-formed images in other formats.
pub fn decode(data: &[u8]) -> Result<DecodedImage, ImageError> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| ImageError::Decode(e.to_string()))?;

    let kind = match reader.format() {
        Some(ImageFormat::Jpeg) => ImageKind::Jpeg,
        Some(ImageFormat::Png) => ImageKind::Png,
        Some(other) => {
            return Err(ImageError::Decode(format!(
                "unsupported image format: {}",
                other.extensions_str().first().unwrap_or(&"unknown")
            )))
        }
        None => return Err(ImageError::Decode("unrecognized image data".to_string())),
    };

    let image = reader
        .decode()
        .map_err(|e| ImageError::Decode(e.to_string()))?;

    Ok(DecodedImage { kind, image })
}

/// Re-serialize a raster in the given format.
///
/// JPEG is encoded at [`JPEG_QUALITY`]; PNG has no quality parameter.
pub fn encode(image: &DynamicImage, kind: ImageKind) -> Result<Vec<u8>, ImageError> {
    let (width, height) = image.dimensions();
    let estimated_size = (width * height * 3) as usize;
    let mut buffer = Vec::with_capacity(estimated_size);
    let mut cursor = Cursor::new(&mut buffer);

    match kind {
        ImageKind::Jpeg => {
            // JPEG has no alpha channel; flatten before encoding.
            let encoder = JpegEncoder::new_with_quality(&mut cursor, JPEG_QUALITY);
            image
                .to_rgb8()
                .write_with_encoder(encoder)
                .map_err(|e| ImageError::Encode(e.to_string()))?;
        }
        ImageKind::Png => {
            image
                .write_to(&mut cursor, kind.format())
                .map_err(|e| ImageError::Encode(e.to_string()))?;
        }
    }

    Ok(buffer)
}
