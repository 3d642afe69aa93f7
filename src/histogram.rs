//! Full-image histogram and the global threshold selectors built on it.

use crate::error::BinarizeError;
use crate::filters::dilate_gray;
use crate::image::{ImageU8, ImageView};
use crate::types::WindowSize;

/// 256-bin grayscale histogram.
#[derive(Clone, Debug)]
pub struct GrayHistogram {
    bins: [u32; 256],
}

impl GrayHistogram {
    pub fn from_view(img: &ImageU8) -> Self {
        let mut bins = [0u32; 256];
        for row in img.rows() {
            for &px in row {
                bins[px as usize] += 1;
            }
        }
        Self { bins }
    }

    #[inline]
    pub fn bins(&self) -> &[u32; 256] {
        &self.bins
    }

    pub fn total(&self) -> u64 {
        self.bins.iter().map(|&c| u64::from(c)).sum()
    }
}

/// Otsu's threshold: the histogram split maximizing between-class variance.
///
/// Falls back to 128 when one class occupies the whole histogram (uniform
/// image), which classifies dark uniforms black and light uniforms white.
pub fn otsu_threshold(hist: &GrayHistogram) -> u8 {
    let total = hist.total() as f64;
    let mut weighted_total = 0f64;
    for (i, &c) in hist.bins().iter().enumerate() {
        weighted_total += i as f64 * f64::from(c);
    }

    let mut best_threshold = 128u8;
    let mut best_variance = 0f64;
    let mut count_below = 0f64;
    let mut sum_below = 0f64;

    for threshold in 1..=255usize {
        let c = f64::from(hist.bins()[threshold - 1]);
        count_below += c;
        sum_below += (threshold - 1) as f64 * c;

        let w0 = count_below / total;
        let w1 = 1.0 - w0;
        if w0 == 0.0 || w1 == 0.0 {
            continue;
        }

        let mu0 = sum_below / count_below;
        let mu1 = (weighted_total - sum_below) / (total - count_below);
        let variance = w0 * w1 * (mu0 - mu1) * (mu0 - mu1);
        if variance > best_variance {
            best_variance = variance;
            best_threshold = threshold as u8;
        }
    }
    best_threshold
}

/// Iterative two-cluster (bi-modal) threshold.
///
/// `part = 0.5 + delta/256` weights the blend of the two cluster means; the
/// starting threshold is `part · 256`. Refinement runs to a fixed point of
/// the update. An empty side collapses the threshold to the other side's
/// mean; two empty sides keep the previous value.
pub fn bimodal_threshold(hist: &GrayHistogram, delta: i32) -> i32 {
    let part = (0.5 + f64::from(delta) / 256.0).clamp(0.0, 1.0);
    let mut threshold = (part * 256.0).round() as i32;
    // Isodata converges in a handful of steps; the cap guards rounding
    // two-cycles on pathological histograms.
    for _ in 0..256 {
        let prev = threshold;
        let mut count = [0u64; 2];
        let mut sum = [0u64; 2];
        for (i, &c) in hist.bins().iter().enumerate() {
            let side = usize::from(i as i32 >= threshold);
            count[side] += u64::from(c);
            sum[side] += u64::from(c) * i as u64;
        }
        threshold = match (count[0] > 0, count[1] > 0) {
            (true, true) => {
                let mean_lo = sum[0] as f64 / count[0] as f64;
                let mean_hi = sum[1] as f64 / count[1] as f64;
                ((1.0 - part) * mean_lo + part * mean_hi).round() as i32
            }
            (true, false) => (sum[0] as f64 / count[0] as f64).round() as i32,
            (false, true) => (sum[1] as f64 / count[1] as f64).round() as i32,
            (false, false) => prev,
        };
        if threshold == prev {
            break;
        }
    }
    threshold
}

/// Mokji's threshold from the co-occurrence of each pixel with its brightest
/// neighbour.
///
/// Pixels inset by `max_edge_width` are paired with their local maximum over
/// a `(max_edge_width + 1) * 2 - 1` square; pairs whose magnitude reaches
/// `min_edge_magnitude` vote with their midpoint, and the threshold is the
/// mean vote. An empty co-occurrence (flat image) yields 128.
pub fn mokji_threshold(
    img: &ImageU8,
    max_edge_width: u32,
    min_edge_magnitude: u32,
) -> Result<u8, BinarizeError> {
    if max_edge_width == 0 || min_edge_magnitude == 0 {
        return Err(BinarizeError::InvalidEdgeParams(
            "max_edge_width and min_edge_magnitude must be at least 1",
        ));
    }

    let mew = max_edge_width as usize;
    let dilate_size = (mew + 1) * 2 - 1;
    let dilated = dilate_gray(img, WindowSize::square(dilate_size));

    let mut matrix = vec![0u32; 256 * 256];
    if img.w > 2 * mew && img.h > 2 * mew {
        for y in mew..img.h - mew {
            let src = img.row(y);
            let dil = dilated.row(y);
            for x in mew..img.w - mew {
                let pixel = src[x] as usize;
                let brightest = dil[x] as usize;
                matrix[brightest * 256 + pixel] += 1;
            }
        }
    }

    let mag = min_edge_magnitude as usize;
    let mut nominator = 0u64;
    let mut denominator = 0u64;
    for pixel in 0..256usize {
        for brightest in (pixel + mag).min(256)..256 {
            let c = u64::from(matrix[brightest * 256 + pixel]);
            nominator += (pixel + brightest) as u64 * c;
            denominator += c;
        }
    }

    if denominator == 0 {
        return Ok(128);
    }
    Ok((nominator as f64 / (2.0 * denominator as f64)).round() as u8)
}
