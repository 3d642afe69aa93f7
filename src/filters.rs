//! Grayscale pre-filters and the element-wise raster combinator used by the
//! composite methods.

use crate::error::BinarizeError;
use crate::image::{GrayImageU8, ImageU8, ImageView, ImageViewMut};
use crate::integral::IntegralImage;
use crate::types::WindowSize;

/// Adaptive Wiener denoise over a clamped local window.
///
/// Each pixel moves toward the window mean in proportion to how much of the
/// local variance is attributable to noise:
/// `out = mean + (px - mean) · max(0, var - σ²) / max(var, σ²)`.
/// `noise_sigma = 0` is the identity transform.
pub fn wiener_filter(
    img: &ImageU8,
    window: WindowSize,
    noise_sigma: f64,
) -> Result<GrayImageU8, BinarizeError> {
    if window.is_empty() {
        return Err(BinarizeError::InvalidWindowSize(window));
    }
    if img.is_null() {
        return Ok(GrayImageU8::new(0, 0));
    }

    let (w, h) = (img.w, img.h);
    let integral = IntegralImage::from_gray(img);
    let integral_sq = IntegralImage::from_gray_squared(img);
    let noise_variance = noise_sigma * noise_sigma;

    let mut out = GrayImageU8::new(w, h);
    for y in 0..h {
        let src = img.row(y);
        let dst = out.row_mut(y);
        for x in 0..w {
            let rect = window.clamped_at(x, y, w, h);
            let r_area = 1.0 / rect.area() as f64;
            let mean = f64::from(integral.sum(rect)) * r_area;
            let sqmean = integral_sq.sum(rect) as f64 * r_area;
            let variance = sqmean - mean * mean;

            let px = f64::from(src[x]);
            let signal = (variance - noise_variance).max(0.0);
            let norm = variance.max(noise_variance);
            let value = if norm > 0.0 {
                mean + (px - mean) * signal / norm
            } else {
                mean
            };
            dst[x] = value.round().clamp(0.0, 255.0) as u8;
        }
    }
    Ok(out)
}

/// Grayscale dilation: local maximum over a clamped window.
pub fn dilate_gray(img: &ImageU8, window: WindowSize) -> GrayImageU8 {
    debug_assert!(!window.is_empty());
    let (w, h) = (img.w, img.h);
    let mut out = GrayImageU8::new(w, h);
    for y in 0..h {
        let dst = out.row_mut(y);
        for x in 0..w {
            let rect = window.clamped_at(x, y, w, h);
            let mut brightest = 0u8;
            for yy in rect.y..rect.y + rect.h {
                let row = img.row(yy);
                for &px in &row[rect.x..rect.x + rect.w] {
                    brightest = brightest.max(px);
                }
            }
            dst[x] = brightest;
        }
    }
    out
}

/// Element-wise transform of `dst` against `src` of identical dimensions,
/// writing into `dst` in place.
pub fn combine_with<F>(dst: &mut GrayImageU8, src: &GrayImageU8, mut f: F)
where
    F: FnMut(u8, u8) -> u8,
{
    assert_eq!(
        (dst.width(), dst.height()),
        (src.width(), src.height()),
        "combine_with: size mismatch"
    );
    for y in 0..src.height() {
        let s = src.row(y);
        let d = dst.row_mut(y);
        for (dv, &sv) in d.iter_mut().zip(s) {
            *dv = f(*dv, sv);
        }
    }
}
