//! Declared content-type validation.
//!
//! This checks the client-supplied header value only. A positive result is
//! advisory: the decoded byte stream is the authority on the actual format,
//! and callers cross-check the two after decoding.

use crate::image::ImageKind;
use thiserror::Error;

/// Content types the upload endpoint accepts.
pub const SUPPORTED_CONTENT_TYPES: [&str; 2] = ["image/png", "image/jpeg"];

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Unsupported content type: {content_type} (allowed: image/png, image/jpeg)")]
    UnsupportedContentType { content_type: String },
}

/// Validator for client-declared image content types.
pub struct ImageValidator;

impl ImageValidator {
    /// True only for the two supported MIME strings, after stripping
    /// parameters and normalizing case.
    pub fn accepts(declared_content_type: &str) -> bool {
        Self::expected_kind(declared_content_type).is_some()
    }

    /// The format a declared content type promises, if supported.
    pub fn expected_kind(declared_content_type: &str) -> Option<ImageKind> {
        let mime = normalize_mime_type(declared_content_type);
        if mime.eq_ignore_ascii_case("image/png") {
            Some(ImageKind::Png)
        } else if mime.eq_ignore_ascii_case("image/jpeg") {
            Some(ImageKind::Jpeg)
        } else {
            None
        }
    }

    /// Validate a declared content type, yielding the promised format.
    pub fn validate(declared_content_type: &str) -> Result<ImageKind, ValidationError> {
        Self::expected_kind(declared_content_type).ok_or_else(|| {
            ValidationError::UnsupportedContentType {
                content_type: declared_content_type.to_string(),
            }
        })
    }
}

/// Strip MIME parameters (e.g. "image/png; charset=utf-8" -> "image/png").
fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}
