//! Global thresholders: one threshold for the whole image, derived from its
//! histogram (or edge co-occurrence for Mokji).

use crate::bitmap::BinaryImage;
use crate::error::BinarizeError;
use crate::histogram::{bimodal_threshold, mokji_threshold, otsu_threshold, GrayHistogram};
use crate::image::ImageU8;

/// Otsu binarization. `delta` biases the computed threshold before
/// classification.
pub fn binarize_otsu(img: &ImageU8, delta: i32) -> Result<BinaryImage, BinarizeError> {
    if img.is_null() {
        return Ok(BinaryImage::empty());
    }
    let hist = GrayHistogram::from_view(img);
    let threshold = i32::from(otsu_threshold(&hist)) + delta;
    Ok(BinaryImage::from_threshold(img, threshold))
}

/// Mokji binarization: threshold from edge-magnitude-filtered co-occurrence.
pub fn binarize_mokji(
    img: &ImageU8,
    max_edge_width: u32,
    min_edge_magnitude: u32,
) -> Result<BinaryImage, BinarizeError> {
    let threshold = mokji_threshold(img, max_edge_width, min_edge_magnitude)?;
    if img.is_null() {
        return Ok(BinaryImage::empty());
    }
    Ok(BinaryImage::from_threshold(img, i32::from(threshold)))
}

/// Bi-Modal binarization. `delta` weights the blend of the two cluster
/// means rather than offsetting the final threshold.
pub fn binarize_bimodal(img: &ImageU8, delta: i32) -> Result<BinaryImage, BinarizeError> {
    if img.is_null() {
        return Ok(BinaryImage::empty());
    }
    let threshold = bimodal_threshold_value(img, delta);
    Ok(BinaryImage::from_threshold(img, threshold))
}

/// Integer threshold the Bi-Modal method would use, without binarizing.
pub fn bimodal_threshold_value(img: &ImageU8, delta: i32) -> i32 {
    bimodal_threshold(&GrayHistogram::from_view(img), delta)
}
