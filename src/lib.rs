#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod binarize;
pub mod bitmap;
pub mod config;
pub mod error;
pub mod image;
pub mod types;

// Lower-level building blocks – public for tools and experiments, but the
// surface may still move.
pub mod filters;
pub mod histogram;
pub mod integral;

// --- High-level re-exports -------------------------------------------------

// Main entry point: method selection + dispatch.
pub use crate::binarize::{binarize, ThresholdMethod};
pub use crate::bitmap::BinaryImage;
pub use crate::error::BinarizeError;

// Raster types most callers need to get pixels in.
pub use crate::image::{GrayImageU8, ImageU8};
pub use crate::types::WindowSize;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use scan_binarize::prelude::*;
///
/// # fn main() -> Result<(), BinarizeError> {
/// let (w, h) = (640usize, 480usize);
/// let gray = vec![0xffu8; w * h];
/// let img = ImageU8 { w, h, stride: w, data: &gray };
///
/// let method = ThresholdMethod::Sauvola {
///     window: WindowSize::square(61),
///     k: 0.34,
///     delta: 0,
/// };
/// let bw = binarize(&img, &method)?;
/// println!("black pixels: {}", bw.count_black());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::{binarize, BinarizeError, BinaryImage, ThresholdMethod, WindowSize};
}
