//! Shrink-only resizing that preserves aspect ratio.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

/// Target dimensions for fitting a raster inside `max_dimension`.
///
/// Returns `None` when both dimensions already fit. Otherwise the longer
/// side becomes exactly `max_dimension` and the shorter side scales
/// proportionally, rounded to the nearest pixel (minimum 1).
pub fn fit_dimensions(width: u32, height: u32, max_dimension: u32) -> Option<(u32, u32)> {
    if width <= max_dimension && height <= max_dimension {
        return None;
    }

    if width >= height {
        let scaled = (height as f64 * max_dimension as f64 / width as f64).round() as u32;
        Some((max_dimension, scaled.max(1)))
    } else {
        let scaled = (width as f64 * max_dimension as f64 / height as f64).round() as u32;
        Some((scaled.max(1), max_dimension))
    }
}

/// Downscale so both dimensions fit within `max_dimension`.
///
/// This only ever shrinks; an image that already fits is returned
/// unchanged. Lanczos3 keeps photographic detail acceptable at portfolio
/// sizes.
pub fn fit_within(image: DynamicImage, max_dimension: u32) -> DynamicImage {
    let (width, height) = image.dimensions();
    match fit_dimensions(width, height, max_dimension) {
        Some((target_w, target_h)) => {
            tracing::debug!(
                from_width = width,
                from_height = height,
                to_width = target_w,
                to_height = target_h,
                "Downscaling image"
            );
            image.resize_exact(target_w, target_h, FilterType::Lanczos3)
        }
        None => image,
    }
}
