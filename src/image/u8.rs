//! Borrowed stride-aware 8-bit grayscale view, the input type of every
//! thresholder.

/// Read-only view into an 8-bit grayscale buffer. `stride` is the byte
/// distance between rows and may exceed `w` for padded buffers.
#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize,
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    /// Degenerate views binarize to an empty bitmap.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
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
