//! Errors surfaced by the binarization entry points.

use crate::types::WindowSize;
use thiserror::Error;

/// The only caller-visible failures of the engine. Degenerate (zero-size)
/// rasters are not errors; every method returns an empty bitmap for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BinarizeError {
    /// Window size with zero width or height, rejected before any
    /// allocation.
    #[error("invalid window size {}x{}", .0.w, .0.h)]
    InvalidWindowSize(WindowSize),

    /// Mokji edge parameters must both be at least 1.
    #[error("invalid edge parameters: {0}")]
    InvalidEdgeParams(&'static str),
}
