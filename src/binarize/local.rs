//! Local adaptive thresholders: Niblack, Sauvola, Wolf and Bradley.
//!
//! All four share the clamped-window policy of
//! [`WindowSize::clamped_at`](crate::types::WindowSize::clamped_at) and
//! compute windowed means (and, except Bradley, variances) in O(1) per pixel
//! from one or two summed-area tables. Black/white is written straight into
//! the packed bitmap; no intermediate grayscale buffer is kept.

use crate::bitmap::BinaryImage;
use crate::error::BinarizeError;
use crate::image::{ImageU8, ImageView};
use crate::integral::IntegralImage;
use crate::types::WindowSize;

/// Niblack: `threshold = mean - k·stddev + delta`.
pub fn binarize_niblack(
    img: &ImageU8,
    window: WindowSize,
    k: f64,
    delta: i32,
) -> Result<BinaryImage, BinarizeError> {
    if window.is_empty() {
        return Err(BinarizeError::InvalidWindowSize(window));
    }
    if img.is_null() {
        return Ok(BinaryImage::empty());
    }

    let (w, h) = (img.w, img.h);
    let integral = IntegralImage::from_gray(img);
    let integral_sq = IntegralImage::from_gray_squared(img);

    let mut bw = BinaryImage::new(w, h);
    for y in 0..h {
        let src = img.row(y);
        for x in 0..w {
            let (mean, stddev) = window_stats(&integral, &integral_sq, window, x, y, w, h);
            let threshold = mean - k * stddev;
            bw.set(x, y, f64::from(src[x]) < threshold + f64::from(delta));
        }
    }
    Ok(bw)
}

/// Sauvola: `threshold = mean · (1 + k·(stddev/128 - 1)) + delta`.
pub fn binarize_sauvola(
    img: &ImageU8,
    window: WindowSize,
    k: f64,
    delta: i32,
) -> Result<BinaryImage, BinarizeError> {
    if window.is_empty() {
        return Err(BinarizeError::InvalidWindowSize(window));
    }
    if img.is_null() {
        return Ok(BinaryImage::empty());
    }

    let (w, h) = (img.w, img.h);
    let integral = IntegralImage::from_gray(img);
    let integral_sq = IntegralImage::from_gray_squared(img);

    let mut bw = BinaryImage::new(w, h);
    for y in 0..h {
        let src = img.row(y);
        for x in 0..w {
            let (mean, stddev) = window_stats(&integral, &integral_sq, window, x, y, w, h);
            let threshold = mean * (1.0 + k * (stddev / 128.0 - 1.0));
            bw.set(x, y, f64::from(src[x]) < threshold + f64::from(delta));
        }
    }
    Ok(bw)
}

/// Wolf: `threshold = mean - k·a·(mean - min_gray)` with
/// `a = 1 - stddev/max_stddev`, plus hard gray gates.
///
/// Two passes: the per-pixel statistics and the global extremes are only
/// known after a full sweep, so means and deviations are cached in dense
/// `f32` buffers (2 × w × h × 4 bytes) for the classification pass. Pixels
/// below `lower_bound` are forced black and pixels above `upper_bound`
/// forced white regardless of the local threshold.
pub fn binarize_wolf(
    img: &ImageU8,
    window: WindowSize,
    lower_bound: u8,
    upper_bound: u8,
    k: f64,
    delta: i32,
) -> Result<BinaryImage, BinarizeError> {
    if window.is_empty() {
        return Err(BinarizeError::InvalidWindowSize(window));
    }
    if img.is_null() {
        return Ok(BinaryImage::empty());
    }

    let (w, h) = (img.w, img.h);
    let integral = IntegralImage::from_gray(img);
    let integral_sq = IntegralImage::from_gray_squared(img);

    let mut min_gray = 255u8;
    for row in img.rows() {
        for &px in row {
            min_gray = min_gray.min(px);
        }
    }

    let mut means = vec![0f32; w * h];
    let mut deviations = vec![0f32; w * h];
    let mut max_deviation = 0f64;
    for y in 0..h {
        for x in 0..w {
            let (mean, stddev) = window_stats(&integral, &integral_sq, window, x, y, w, h);
            max_deviation = max_deviation.max(stddev);
            means[y * w + x] = mean as f32;
            deviations[y * w + x] = stddev as f32;
        }
    }
    drop(integral);
    drop(integral_sq);

    let min_gray = f64::from(min_gray);
    let mut bw = BinaryImage::new(w, h);
    for y in 0..h {
        let src = img.row(y);
        for x in 0..w {
            let mean = f64::from(means[y * w + x]);
            let deviation = f64::from(deviations[y * w + x]);
            // a = 1 on a perfectly uniform image (max_deviation = 0)
            let a = if max_deviation > 0.0 {
                1.0 - deviation / max_deviation
            } else {
                1.0
            };
            let threshold = mean - k * a * (mean - min_gray);

            let px = src[x];
            let black = px < lower_bound
                || (px <= upper_bound && f64::from(px) < threshold + f64::from(delta));
            bw.set(x, y, black);
        }
    }
    Ok(bw)
}

/// Bradley: mean-only, `threshold = mean·(1 - k) + delta` for `k < 1`, else
/// `delta` alone. Needs a single integral image.
pub fn binarize_bradley(
    img: &ImageU8,
    window: WindowSize,
    k: f64,
    delta: i32,
) -> Result<BinaryImage, BinarizeError> {
    if window.is_empty() {
        return Err(BinarizeError::InvalidWindowSize(window));
    }
    if img.is_null() {
        return Ok(BinaryImage::empty());
    }

    let (w, h) = (img.w, img.h);
    let integral = IntegralImage::from_gray(img);

    let mut bw = BinaryImage::new(w, h);
    for y in 0..h {
        let src = img.row(y);
        for x in 0..w {
            let rect = window.clamped_at(x, y, w, h);
            let mean = f64::from(integral.sum(rect)) / rect.area() as f64;
            let threshold = if k < 1.0 { mean * (1.0 - k) } else { 0.0 };
            bw.set(x, y, f64::from(src[x]) < threshold + f64::from(delta));
        }
    }
    Ok(bw)
}

/// Windowed mean and standard deviation at `(x, y)`.
///
/// `stddev = sqrt(|sqmean - mean²|)`; the absolute value guards against
/// small negative variances from floating-point cancellation.
#[inline]
fn window_stats(
    integral: &IntegralImage<u32>,
    integral_sq: &IntegralImage<u64>,
    window: WindowSize,
    x: usize,
    y: usize,
    w: usize,
    h: usize,
) -> (f64, f64) {
    let rect = window.clamped_at(x, y, w, h);
    debug_assert!(rect.area() > 0);
    let r_area = 1.0 / rect.area() as f64;
    let mean = f64::from(integral.sum(rect)) * r_area;
    let sqmean = integral_sq.sum(rect) as f64 * r_area;
    let variance = sqmean - mean * mean;
    (mean, variance.abs().sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rect;

    fn view(data: &[u8], w: usize, h: usize) -> ImageU8<'_> {
        ImageU8 {
            w,
            h,
            stride: w,
            data,
        }
    }

    fn brute_force_stats(data: &[u8], w: usize, rect: Rect) -> (f64, f64) {
        let mut sum = 0f64;
        let mut sq = 0f64;
        for y in rect.y..rect.y + rect.h {
            for x in rect.x..rect.x + rect.w {
                let v = f64::from(data[y * w + x]);
                sum += v;
                sq += v * v;
            }
        }
        let n = rect.area() as f64;
        let mean = sum / n;
        (mean, (sq / n - mean * mean).abs().sqrt())
    }

    #[test]
    fn window_stats_match_brute_force() {
        let data: Vec<u8> = (0..48).map(|i| (i * 37 % 256) as u8).collect();
        let img = view(&data, 8, 6);
        let integral = IntegralImage::from_gray(&img);
        let integral_sq = IntegralImage::from_gray_squared(&img);
        let window = WindowSize::new(3, 5);

        for y in 0..6 {
            for x in 0..8 {
                let (mean, stddev) = window_stats(&integral, &integral_sq, window, x, y, 8, 6);
                let rect = window.clamped_at(x, y, 8, 6);
                let (ref_mean, ref_stddev) = brute_force_stats(&data, 8, rect);
                assert!((mean - ref_mean).abs() < 1e-9, "mean at ({x},{y})");
                assert!((stddev - ref_stddev).abs() < 1e-9, "stddev at ({x},{y})");
            }
        }
    }

    #[test]
    fn every_method_rejects_empty_windows() {
        let data = [128u8; 16];
        let img = view(&data, 4, 4);
        for window in [WindowSize::new(0, 3), WindowSize::new(3, 0)] {
            let err = Err(BinarizeError::InvalidWindowSize(window));
            assert_eq!(binarize_niblack(&img, window, 0.2, 0), err);
            assert_eq!(binarize_sauvola(&img, window, 0.34, 0), err);
            assert_eq!(binarize_wolf(&img, window, 0, 255, 0.3, 0), err);
            assert_eq!(binarize_bradley(&img, window, 0.2, 0), err);
        }
    }

    #[test]
    fn every_method_maps_degenerate_rasters_to_empty_bitmaps() {
        let img = view(&[], 0, 0);
        let window = WindowSize::square(7);
        assert!(binarize_niblack(&img, window, 0.2, 0).unwrap().is_null());
        assert!(binarize_sauvola(&img, window, 0.34, 0).unwrap().is_null());
        assert!(binarize_wolf(&img, window, 0, 255, 0.3, 0)
            .unwrap()
            .is_null());
        assert!(binarize_bradley(&img, window, 0.2, 0).unwrap().is_null());
    }

    #[test]
    fn niblack_keeps_dark_text_on_light_ground() {
        // 12x12 light page with a dark 4x4 block.
        let mut data = vec![220u8; 144];
        for y in 4..8 {
            for x in 4..8 {
                data[y * 12 + x] = 30;
            }
        }
        let img = view(&data, 12, 12);
        let bw = binarize_niblack(&img, WindowSize::square(7), 0.2, 0).unwrap();
        assert!(bw.get(5, 5), "block interior must be black");
        assert!(!bw.get(0, 0), "far background must stay white");
    }

    #[test]
    fn bradley_high_coefficient_forces_zero_threshold() {
        let data = [100u8; 16];
        let img = view(&data, 4, 4);
        let bw = binarize_bradley(&img, WindowSize::square(3), 1.5, 0).unwrap();
        assert_eq!(bw.count_black(), 0);
    }
}
