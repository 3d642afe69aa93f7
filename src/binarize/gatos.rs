//! Gatos background-surface binarization.
//!
//! Pipeline: Wiener denoise, a Niblack pass to get a rough text mask, a
//! background surface interpolated from the non-text pixels, then a per-pixel
//! sigmoid threshold on the distance between the surface and the denoised
//! image. See Gatos, Pratikakis, Perantonis, "Adaptive degraded document
//! image binarization" (2006).

use crate::bitmap::BinaryImage;
use crate::error::BinarizeError;
use crate::filters::{combine_with, wiener_filter};
use crate::image::{GrayImageU8, ImageU8, ImageView};
use crate::integral::IntegralImage;
use crate::types::{Rect, WindowSize};

use log::debug;

use super::local::binarize_niblack;

const WIENER_WINDOW: WindowSize = WindowSize { w: 5, h: 5 };

// Sigmoid shape parameters from the paper.
const Q: f64 = 0.6;
const P1: f64 = 0.5;
const P2: f64 = 0.8;

pub fn binarize_gatos(
    img: &ImageU8,
    window: WindowSize,
    noise_sigma: f64,
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
    let wiener = wiener_filter(img, WIENER_WINDOW, noise_sigma)?;
    let rough = binarize_niblack(&wiener.as_view(), window, k, delta)?;

    // Integral images over the background (white in the rough mask) pixels
    // only: one counts them, the other accumulates their denoised values.
    let mut bg_count = IntegralImage::<u32>::new(w, h);
    let mut bg_sum = IntegralImage::<u32>::new(w, h);
    for y in 0..h {
        bg_count.begin_row();
        bg_sum.begin_row();
        let src = wiener.row(y);
        for x in 0..w {
            if rough.get(x, y) {
                bg_count.push(0);
                bg_sum.push(0);
            } else {
                bg_count.push(1);
                bg_sum.push(u32::from(src[x]));
            }
        }
    }

    // Background surface: background pixels keep their denoised value;
    // foreground pixels take the rounded mean of the background pixels in
    // the smallest window (from a growing concentric family) that contains
    // at least one.
    let mut background = GrayImageU8::from_view(&wiener.as_view());
    let mut sum_diff = 0i64;
    let mut fg_count = 0u64;
    let full = Rect::new(0, 0, w, h);
    let bg_count_total = u64::from(bg_count.sum(full));
    let sum_bg = u64::from(bg_sum.sum(full));
    for y in 0..h {
        for x in 0..w {
            if !rough.get(x, y) {
                continue;
            }
            fg_count += 1;
            let mut interpolated = background.get(x, y);
            for win in growing_windows(window, w, h) {
                let rect = win.clamped_at(x, y, w, h);
                let n = bg_count.sum(rect);
                if n > 0 {
                    let s = bg_sum.sum(rect);
                    interpolated = ((s + n / 2) / n) as u8;
                    break;
                }
            }
            let diff = i64::from(interpolated) - i64::from(background.get(x, y));
            sum_diff += diff;
            background.set(x, y, interpolated);
        }
    }
    if fg_count == 0 || bg_count_total == 0 {
        // No text or no background found; the rough mask is as good as it
        // gets.
        return Ok(rough);
    }

    // d: average distance between the surface and the denoised image on
    // text pixels. b: average background brightness.
    let d = sum_diff as f64 / fg_count as f64;
    let b = sum_bg as f64 / bg_count_total as f64;
    debug!("gatos aggregates d={d:.2} b={b:.2} fg={fg_count} bg={bg_count_total}");

    let exp_scale = -4.0 / (b * (1.0 - P1));
    let exp_bias = 2.0 * (1.0 + P1) / (1.0 - P1);
    let threshold_scale = Q * d * (1.0 - P2);
    let threshold_bias = Q * d * P2;

    let mut mask = background;
    combine_with(&mut mask, &wiener, |bg, dn| {
        let distance = f64::from(bg) - f64::from(dn);
        let threshold = threshold_scale / (1.0 + (exp_scale * f64::from(bg) + exp_bias).exp())
            + threshold_bias;
        if distance > threshold {
            0x00
        } else {
            0xff
        }
    });
    Ok(BinaryImage::from_threshold(&mask.as_view(), 128))
}

/// Concentric windows growing from `base` by integer scale until one covers
/// more than double the image in both directions (that window included).
fn growing_windows(
    base: WindowSize,
    img_w: usize,
    img_h: usize,
) -> impl Iterator<Item = WindowSize> {
    let mut scale = 0usize;
    let mut done = false;
    std::iter::from_fn(move || {
        if done {
            return None;
        }
        scale += 1;
        let win = WindowSize::new(base.w * scale, base.h * scale);
        if win.w > 2 * img_w && win.h > 2 * img_h {
            done = true;
        }
        Some(win)
    })
}
