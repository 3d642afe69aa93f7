//! EdgePlus / BlurDiv / EdgeDiv edge-preserving pre-transforms.
//!
//! The grayscale image is reshaped around its local mean before a global
//! Bi-Modal pass: `kep` amplifies the pixel-to-mean ratio (EdgePlus), `kbd`
//! divides by the inverse ratio (BlurDiv), and running both is EdgeDiv.
//! Either coefficient at zero disables its pass, so `kep = kbd = 0` reduces
//! to plain Bi-Modal.

use crate::bitmap::BinaryImage;
use crate::error::BinarizeError;
use crate::image::{GrayImageU8, ImageU8, ImageViewMut};
use crate::integral::IntegralImage;
use crate::types::WindowSize;

use super::global::binarize_bimodal;

pub fn binarize_edgediv(
    img: &ImageU8,
    window: WindowSize,
    kep: f64,
    kbd: f64,
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

    let mut gray = GrayImageU8::from_view(img);
    for y in 0..h {
        let dst = gray.row_mut(y);
        for (x, value) in dst.iter_mut().enumerate() {
            let rect = window.clamped_at(x, y, w, h);
            let mean = f64::from(integral.sum(rect)) / rect.area() as f64;
            let origin = f64::from(*value);
            let mut retval = origin;

            if kep > 0.0 {
                // edge amplification
                let edge = (retval + 1.0) / (mean + 1.0) - 0.5;
                let edgeplus = origin * edge;
                retval = kep * edgeplus + (1.0 - kep) * origin;
            }
            if kbd > 0.0 {
                // blur division
                let edgeinv = (mean + 1.0) / (retval + 1.0) - 0.5;
                let edgenorm = kbd * edgeinv + (1.0 - kbd);
                if edgenorm > 0.0 {
                    retval = origin / edgenorm;
                }
            }
            *value = retval.clamp(0.0, 255.0) as u8;
        }
    }

    binarize_bimodal(&gray.as_view(), delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(data: &[u8], w: usize, h: usize) -> ImageU8<'_> {
        ImageU8 {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[test]
    fn zero_coefficients_reduce_to_bimodal() {
        let mut data = vec![40u8; 100];
        for v in data.iter_mut().skip(50) {
            *v = 210;
        }
        let img = view(&data, 10, 10);
        let plain = binarize_bimodal(&img, 0).unwrap();
        let composite = binarize_edgediv(&img, WindowSize::square(7), 0.0, 0.0, 0).unwrap();
        assert_eq!(plain, composite);
    }

    #[test]
    fn rejects_empty_window() {
        let data = [0u8; 4];
        let img = view(&data, 2, 2);
        assert_eq!(
            binarize_edgediv(&img, WindowSize::new(3, 0), 0.5, 0.5, 0),
            Err(BinarizeError::InvalidWindowSize(WindowSize::new(3, 0)))
        );
    }

    #[test]
    fn degenerate_raster_gives_empty_bitmap() {
        let img = view(&[], 0, 0);
        let bw = binarize_edgediv(&img, WindowSize::square(7), 0.5, 0.5, 0).unwrap();
        assert!(bw.is_null());
    }

    #[test]
    fn edge_amplification_keeps_text_under_a_gradient() {
        // Horizontal illumination gradient with a dark glyph block in the
        // darker half.
        let w = 32;
        let h = 16;
        let mut data = vec![0u8; w * h];
        for y in 0..h {
            for x in 0..w {
                data[y * w + x] = (120 + 4 * x) as u8;
            }
        }
        for y in 6..10 {
            for x in 4..8 {
                data[y * w + x] = 20;
            }
        }
        let img = view(&data, w, h);
        let bw = binarize_edgediv(&img, WindowSize::square(7), 0.5, 0.5, 0).unwrap();
        assert!(bw.get(5, 7), "glyph pixel must be black");
        assert!(!bw.get(20, 3), "bright background must stay white");
    }
}
