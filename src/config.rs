//! JSON configuration for the page-binarization tool.
//!
//! The on-disk schema mirrors the settings block of scanned-page processing
//! pipelines: a lowercase method name plus a shared window/coefficient pair,
//! rather than per-method parameter structs. [`BinarizationConfig::validated`]
//! applies the legacy fallbacks before [`BinarizationConfig::to_method`]
//! translates to a [`ThresholdMethod`].

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::binarize::ThresholdMethod;
use crate::types::WindowSize;

/// Method selector as it appears in config files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    Otsu,
    Mean,
    Niblack,
    Gatos,
    Sauvola,
    Wolf,
    Bradley,
    EdgePlus,
    BlurDiv,
    EdgeDiv,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BinarizationConfig {
    pub method: MethodKind,
    /// Square local-window side, in pixels.
    pub window_size: usize,
    /// Method coefficient (`k`, or `kep`/`kbd` for EdgeDiv).
    pub coef: f64,
    /// Threshold adjustment, added after the method's own computation.
    pub adjustment: i32,
    pub lower_bound: u8,
    pub upper_bound: u8,
    pub noise_sigma: f64,
}

impl Default for BinarizationConfig {
    fn default() -> Self {
        Self {
            method: MethodKind::Otsu,
            window_size: 200,
            coef: 0.3,
            adjustment: 0,
            lower_bound: 0,
            upper_bound: 255,
            noise_sigma: 3.0,
        }
    }
}

impl BinarizationConfig {
    /// Copy with out-of-range settings replaced by their defaults: a zero
    /// window becomes 200, a negative coefficient 0 and a negative noise
    /// sigma 3.0.
    pub fn validated(&self) -> Self {
        let mut cfg = self.clone();
        if cfg.window_size == 0 {
            cfg.window_size = 200;
        }
        if cfg.coef < 0.0 {
            cfg.coef = 0.0;
        }
        if cfg.noise_sigma < 0.0 {
            cfg.noise_sigma = 3.0;
        }
        cfg
    }

    /// Translate to the engine's method enum.
    pub fn to_method(&self) -> ThresholdMethod {
        let window = WindowSize::square(self.window_size);
        let k = self.coef;
        let delta = self.adjustment;
        match self.method {
            MethodKind::Otsu => ThresholdMethod::Otsu { delta },
            MethodKind::Mean => ThresholdMethod::Mean { window, delta },
            MethodKind::Niblack => ThresholdMethod::Niblack { window, k, delta },
            MethodKind::Gatos => ThresholdMethod::Gatos {
                window,
                noise_sigma: self.noise_sigma,
                k,
                delta,
            },
            MethodKind::Sauvola => ThresholdMethod::Sauvola { window, k, delta },
            MethodKind::Wolf => ThresholdMethod::Wolf {
                window,
                k,
                delta,
                lower_bound: self.lower_bound,
                upper_bound: self.upper_bound,
            },
            MethodKind::Bradley => ThresholdMethod::Bradley { window, k, delta },
            MethodKind::EdgePlus => ThresholdMethod::EdgePlus { window, k, delta },
            MethodKind::BlurDiv => ThresholdMethod::BlurDiv { window, k, delta },
            MethodKind::EdgeDiv => ThresholdMethod::EdgeDiv {
                window,
                kep: k,
                kbd: k,
                delta,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BinarizeToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub binarization: BinarizationConfig,
    pub output: BinarizeOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinarizeOutputConfig {
    pub bitmap_image: PathBuf,
    pub summary_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<BinarizeToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
