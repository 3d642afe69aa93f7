//! Word-packed 1-bit-per-pixel raster, the uniform output of every
//! thresholder.
//!
//! Row stride is `ceil(w / 32)` 32-bit words. Bit `31 - (x & 31)` of word
//! `x >> 5` holds pixel `x` of a row; a set bit is black (foreground). The
//! MSB-first layout is wire-visible when bitmaps are persisted or compared
//! against fixtures and must be preserved exactly.

use crate::image::{ImageU8, ImageView};

const MSB: u32 = 1 << 31;

/// Packed black/white bitmap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryImage {
    w: usize,
    h: usize,
    words_per_row: usize,
    data: Vec<u32>,
}

impl BinaryImage {
    /// All-white bitmap of the given size. Zero dimensions yield a valid
    /// empty bitmap.
    pub fn new(w: usize, h: usize) -> Self {
        let words_per_row = w.div_ceil(32);
        Self {
            w,
            h,
            words_per_row,
            data: vec![0; words_per_row * h],
        }
    }

    /// The bitmap returned for degenerate (zero-size) inputs.
    pub fn empty() -> Self {
        Self::new(0, 0)
    }

    /// Classify every pixel of `img` against a fixed global threshold
    /// (`pixel < threshold` is black).
    pub fn from_threshold(img: &ImageU8, threshold: i32) -> Self {
        let mut bw = Self::new(img.w, img.h);
        for y in 0..img.h {
            for (x, &px) in img.row(y).iter().enumerate() {
                if i32::from(px) < threshold {
                    bw.set(x, y, true);
                }
            }
        }
        bw
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    /// Row stride in 32-bit words, `ceil(w / 32)`.
    #[inline]
    pub fn words_per_row(&self) -> usize {
        self.words_per_row
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// True if pixel `(x, y)` is black.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < self.w && y < self.h);
        self.data[y * self.words_per_row + (x >> 5)] & (MSB >> (x & 31)) != 0
    }

    /// Set pixel `(x, y)` black or white.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, black: bool) {
        debug_assert!(x < self.w && y < self.h);
        let word = &mut self.data[y * self.words_per_row + (x >> 5)];
        let mask = MSB >> (x & 31);
        if black {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    }

    /// Packed words of row `y`.
    #[inline]
    pub fn row(&self, y: usize) -> &[u32] {
        let start = y * self.words_per_row;
        &self.data[start..start + self.words_per_row]
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [u32] {
        let start = y * self.words_per_row;
        &mut self.data[start..start + self.words_per_row]
    }

    /// All packed words, row-major.
    #[inline]
    pub fn words(&self) -> &[u32] {
        &self.data
    }

    /// Number of black pixels. Padding bits past `w` are never set.
    pub fn count_black(&self) -> usize {
        self.data.iter().map(|w| w.count_ones() as usize).sum()
    }
}
