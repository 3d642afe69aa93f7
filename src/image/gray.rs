//! Owned single-channel 8-bit image in row-major layout (stride == width).
//!
//! Composite methods (Gatos, EdgeDiv) derive and mutate rasters of this type
//! before thresholding them.

use super::traits::{ImageView, ImageViewMut};
use super::u8::ImageU8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImageU8 {
    w: usize,
    h: usize,
    stride: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0; w * h],
        }
    }

    /// Construct from raw row-major bytes.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Self {
        assert_eq!(data.len(), w * h, "buffer size does not match dimensions");
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    /// Owned copy of a borrowed view, dropping any row padding.
    pub fn from_view(img: &ImageU8) -> Self {
        let mut data = Vec::with_capacity(img.w * img.h);
        for y in 0..img.h {
            data.extend_from_slice(img.row(y));
        }
        Self::from_raw(img.w, img.h, data)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        self.data[y * self.stride + x] = v;
    }

    /// Borrow as a read-only `ImageU8` view.
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.w,
            h: self.h,
            stride: self.stride,
            data: &self.data,
        }
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

impl ImageView for GrayImageU8 {
    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl ImageViewMut for GrayImageU8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
