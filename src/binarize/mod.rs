//! Binarization entry points and method dispatch.
//!
//! Every entry point is a pure function `(view, parameters) -> packed
//! bitmap`. The classification rule is uniform across methods: a pixel whose
//! value is strictly below the (possibly per-pixel) threshold becomes black.
//! An empty window size is rejected before any allocation; a degenerate
//! (zero-size) raster yields an empty bitmap, not an error.

pub mod edgediv;
pub mod gatos;
pub mod global;
pub mod local;

pub use edgediv::binarize_edgediv;
pub use gatos::binarize_gatos;
pub use global::{bimodal_threshold_value, binarize_bimodal, binarize_mokji, binarize_otsu};
pub use local::{binarize_bradley, binarize_niblack, binarize_sauvola, binarize_wolf};

use crate::bitmap::BinaryImage;
use crate::error::BinarizeError;
use crate::image::ImageU8;
use crate::types::WindowSize;
use log::debug;
use serde::{Deserialize, Serialize};

/// Coefficient of the legacy fixed-constant Niblack variant (the "mean"
/// method), expressed for the `mean - k·stddev` formula.
pub const MEAN_K: f64 = 0.2;

/// Default Sauvola coefficient.
pub const SAUVOLA_DEFAULT_K: f64 = 0.34;

/// Thresholding method together with its parameters.
///
/// One closed variant per algorithm: a method the engine does not implement
/// cannot be expressed, and unknown method names fail deserialization
/// instead of silently falling back to Otsu.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum ThresholdMethod {
    Otsu {
        delta: i32,
    },
    Mokji {
        max_edge_width: u32,
        min_edge_magnitude: u32,
    },
    BiModal {
        delta: i32,
    },
    /// Legacy fixed-coefficient Niblack (`k = 0.2`).
    Mean {
        window: WindowSize,
        delta: i32,
    },
    Niblack {
        window: WindowSize,
        k: f64,
        delta: i32,
    },
    Gatos {
        window: WindowSize,
        noise_sigma: f64,
        k: f64,
        delta: i32,
    },
    Sauvola {
        window: WindowSize,
        k: f64,
        delta: i32,
    },
    Wolf {
        window: WindowSize,
        k: f64,
        delta: i32,
        lower_bound: u8,
        upper_bound: u8,
    },
    Bradley {
        window: WindowSize,
        k: f64,
        delta: i32,
    },
    EdgePlus {
        window: WindowSize,
        k: f64,
        delta: i32,
    },
    BlurDiv {
        window: WindowSize,
        k: f64,
        delta: i32,
    },
    EdgeDiv {
        window: WindowSize,
        kep: f64,
        kbd: f64,
        delta: i32,
    },
}

/// Binarize `img` with the selected method.
pub fn binarize(img: &ImageU8, method: &ThresholdMethod) -> Result<BinaryImage, BinarizeError> {
    debug!("binarize start w={} h={} method={:?}", img.w, img.h, method);
    match *method {
        ThresholdMethod::Otsu { delta } => binarize_otsu(img, delta),
        ThresholdMethod::Mokji {
            max_edge_width,
            min_edge_magnitude,
        } => binarize_mokji(img, max_edge_width, min_edge_magnitude),
        ThresholdMethod::BiModal { delta } => binarize_bimodal(img, delta),
        ThresholdMethod::Mean { window, delta } => binarize_niblack(img, window, MEAN_K, delta),
        ThresholdMethod::Niblack { window, k, delta } => binarize_niblack(img, window, k, delta),
        ThresholdMethod::Gatos {
            window,
            noise_sigma,
            k,
            delta,
        } => binarize_gatos(img, window, noise_sigma, k, delta),
        ThresholdMethod::Sauvola { window, k, delta } => binarize_sauvola(img, window, k, delta),
        ThresholdMethod::Wolf {
            window,
            k,
            delta,
            lower_bound,
            upper_bound,
        } => binarize_wolf(img, window, lower_bound, upper_bound, k, delta),
        ThresholdMethod::Bradley { window, k, delta } => binarize_bradley(img, window, k, delta),
        ThresholdMethod::EdgePlus { window, k, delta } => {
            binarize_edgediv(img, window, k, 0.0, delta)
        }
        ThresholdMethod::BlurDiv { window, k, delta } => {
            binarize_edgediv(img, window, 0.0, k, delta)
        }
        ThresholdMethod::EdgeDiv {
            window,
            kep,
            kbd,
            delta,
        } => binarize_edgediv(img, window, kep, kbd, delta),
    }
}
