use scan_binarize::config::load_config;
use scan_binarize::image::io::{load_grayscale_image, save_binary_image, write_json_file};
use scan_binarize::{binarize, ThresholdMethod};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let method = config.binarization.validated().to_method();
    let bw = binarize(&gray.as_view(), &method).map_err(|e| format!("Binarization failed: {e}"))?;

    let total = bw.width() * bw.height();
    let black_pixels = bw.count_black();
    let summary = BinarizationSummary {
        width: bw.width(),
        height: bw.height(),
        words_per_row: bw.words_per_row(),
        black_pixels,
        black_fraction: if total > 0 {
            black_pixels as f64 / total as f64
        } else {
            0.0
        },
        method,
    };

    save_binary_image(&bw, &config.output.bitmap_image)?;
    write_json_file(&config.output.summary_json, &summary)?;

    println!(
        "Saved {}x{} bitmap to {}",
        summary.width,
        summary.height,
        config.output.bitmap_image.display()
    );
    println!(
        "Saved summary ({} black pixels, {:.1}%) to {}",
        summary.black_pixels,
        100.0 * summary.black_fraction,
        config.output.summary_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: binarize_page <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BinarizationSummary {
    width: usize,
    height: usize,
    words_per_row: usize,
    black_pixels: usize,
    black_fraction: f64,
    method: ThresholdMethod,
}
