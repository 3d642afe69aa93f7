//! Shared plain types: rectangles and window sizes.

use serde::{Deserialize, Serialize};

/// Axis-aligned pixel rectangle covering `x..x+w` by `y..y+h`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

impl Rect {
    #[inline]
    pub fn new(x: usize, y: usize, w: usize, h: usize) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.w * self.h
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

/// Threshold window dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub w: usize,
    pub h: usize,
}

impl WindowSize {
    #[inline]
    pub fn new(w: usize, h: usize) -> Self {
        Self { w, h }
    }

    /// Square window of edge `size`.
    #[inline]
    pub fn square(size: usize) -> Self {
        Self { w: size, h: size }
    }

    /// A window with zero width or height covers no pixels and is rejected
    /// by every thresholder.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Window centered at `(x, y)`, clamped to `bounds_w × bounds_h`.
    ///
    /// The lower half is `size >> 1`; the upper half takes the remainder for
    /// odd sizes. Clamped windows near the border are smaller than nominal,
    /// so callers recompute the area per pixel.
    pub fn clamped_at(&self, x: usize, y: usize, bounds_w: usize, bounds_h: usize) -> Rect {
        let left = x.saturating_sub(self.w >> 1);
        let right = (x + (self.w - (self.w >> 1))).min(bounds_w);
        let top = y.saturating_sub(self.h >> 1);
        let bottom = (y + (self.h - (self.h >> 1))).min(bounds_h);
        Rect::new(left, top, right - left, bottom - top)
    }
}
