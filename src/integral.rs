//! Summed-area table (integral image) with O(1) rectangle-sum queries.
//!
//! Built once, row by row, with [`IntegralImage::begin_row`] /
//! [`IntegralImage::push`], then queried read-only. Cell `(x, y)` of the
//! internal `(w+1) × (h+1)` table holds the sum of all source samples with
//! row < `y` and column < `x` (standard convention with a zero border), so a
//! rectangle sum is four corner lookups.

use crate::image::{ImageU8, ImageView};
use crate::types::Rect;

/// Accumulator cell for [`IntegralImage`].
///
/// `u32` is wide enough for plain 8-bit sums over images up to 2^24 pixels;
/// sums of squared samples (up to 255² each) need `u64`. Arithmetic wraps:
/// the four-corner combination may transiently exceed the type range even
/// though the final rectangle sum always fits.
pub trait IntegralSum: Copy + Default {
    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
}

impl IntegralSum for u32 {
    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
    #[inline]
    fn wrapping_sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }
}

impl IntegralSum for u64 {
    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
    #[inline]
    fn wrapping_sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }
}

/// Summed-area table over a `width × height` scalar field.
#[derive(Clone, Debug)]
pub struct IntegralImage<T> {
    width: usize,
    height: usize,
    stride: usize, // width + 1
    data: Vec<T>,
    row: usize, // rows begun so far
    cur: usize, // next cell to write within the current row
    line_sum: T,
}

impl<T: IntegralSum> IntegralImage<T> {
    /// Zero-initialized table for a `width × height` source.
    pub fn new(width: usize, height: usize) -> Self {
        let stride = width + 1;
        Self {
            width,
            height,
            stride,
            data: vec![T::default(); stride * (height + 1)],
            row: 0,
            cur: 0,
            line_sum: T::default(),
        }
    }

    /// Start the next source row. Must be called before the first `push` of
    /// every row.
    #[inline]
    pub fn begin_row(&mut self) {
        self.row += 1;
        debug_assert!(self.row <= self.height);
        self.cur = self.row * self.stride + 1;
        self.line_sum = T::default();
    }

    /// Append one sample to the current row.
    #[inline]
    pub fn push(&mut self, value: T) {
        debug_assert!(self.cur < (self.row + 1) * self.stride);
        self.line_sum = self.line_sum.wrapping_add(value);
        let above = self.data[self.cur - self.stride];
        self.data[self.cur] = above.wrapping_add(self.line_sum);
        self.cur += 1;
    }

    /// Sum of the original samples inside `rect`.
    ///
    /// `rect` must lie within image bounds; callers clamp it first, there is
    /// no validation here.
    #[inline]
    pub fn sum(&self, rect: Rect) -> T {
        let s = self.stride;
        let tl = self.data[rect.y * s + rect.x];
        let tr = self.data[rect.y * s + rect.x + rect.w];
        let bl = self.data[(rect.y + rect.h) * s + rect.x];
        let br = self.data[(rect.y + rect.h) * s + rect.x + rect.w];
        br.wrapping_add(tl).wrapping_sub(tr).wrapping_sub(bl)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
}

impl IntegralImage<u32> {
    /// Plain pixel-sum table over an 8-bit grayscale view.
    pub fn from_gray(img: &ImageU8) -> Self {
        let mut ii = Self::new(img.w, img.h);
        for y in 0..img.h {
            ii.begin_row();
            for &px in img.row(y) {
                ii.push(u32::from(px));
            }
        }
        ii
    }
}

impl IntegralImage<u64> {
    /// Squared pixel-sum table over an 8-bit grayscale view.
    pub fn from_gray_squared(img: &ImageU8) -> Self {
        let mut ii = Self::new(img.w, img.h);
        for y in 0..img.h {
            ii.begin_row();
            for &px in img.row(y) {
                let v = u64::from(px);
                ii.push(v * v);
            }
        }
        ii
    }
}
