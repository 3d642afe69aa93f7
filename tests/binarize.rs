mod common;

use common::synthetic_image::{checkerboard_u8, striped_page_u8, uniform_u8};
use scan_binarize::image::ImageU8;
use scan_binarize::types::WindowSize;
use scan_binarize::{binarize, BinarizeError, ThresholdMethod};

fn view(data: &[u8], w: usize, h: usize) -> ImageU8<'_> {
    ImageU8 {
        w,
        h,
        stride: w,
        data,
    }
}

fn all_methods(window: WindowSize) -> Vec<ThresholdMethod> {
    vec![
        ThresholdMethod::Otsu { delta: 0 },
        ThresholdMethod::Mokji {
            max_edge_width: 3,
            min_edge_magnitude: 20,
        },
        ThresholdMethod::BiModal { delta: 0 },
        ThresholdMethod::Mean { window, delta: 0 },
        ThresholdMethod::Niblack {
            window,
            k: 0.2,
            delta: 0,
        },
        ThresholdMethod::Gatos {
            window,
            noise_sigma: 3.0,
            k: 0.2,
            delta: 0,
        },
        ThresholdMethod::Sauvola {
            window,
            k: 0.34,
            delta: 0,
        },
        ThresholdMethod::Wolf {
            window,
            k: 0.3,
            delta: 0,
            lower_bound: 1,
            upper_bound: 254,
        },
        ThresholdMethod::Bradley {
            window,
            k: 0.2,
            delta: 0,
        },
        ThresholdMethod::EdgePlus {
            window,
            k: 0.3,
            delta: 0,
        },
        ThresholdMethod::BlurDiv {
            window,
            k: 0.3,
            delta: 0,
        },
        ThresholdMethod::EdgeDiv {
            window,
            kep: 0.3,
            kbd: 0.3,
            delta: 0,
        },
    ]
}

#[test]
fn otsu_keeps_a_blank_page_white() {
    let data = uniform_u8(10, 10, 255);
    let bw = binarize(&view(&data, 10, 10), &ThresholdMethod::Otsu { delta: 0 }).unwrap();
    assert_eq!(bw.count_black(), 0);
}

#[test]
fn sauvola_with_positive_delta_fills_an_all_black_page() {
    // A zero image sits exactly on the Sauvola threshold; a delta of one
    // tips every pixel over it.
    let data = uniform_u8(10, 10, 0);
    let bw = binarize(
        &view(&data, 10, 10),
        &ThresholdMethod::Sauvola {
            window: WindowSize::square(5),
            k: 0.34,
            delta: 1,
        },
    )
    .unwrap();
    assert_eq!(bw.count_black(), 100);
}

#[test]
fn bradley_checkerboard_golden_words() {
    let data = checkerboard_u8(4, 4, 1, 0, 255);
    let bw = binarize(
        &view(&data, 4, 4),
        &ThresholdMethod::Bradley {
            window: WindowSize::square(3),
            k: 0.2,
            delta: 0,
        },
    )
    .unwrap();
    let expected: [u32; 4] = [0xA000_0000, 0x5000_0000, 0xA000_0000, 0x5000_0000];
    for (y, &word) in expected.iter().enumerate() {
        assert_eq!(bw.row(y)[0], word, "row {y}");
    }
}

#[test]
fn wolf_gray_bounds_override_the_local_threshold() {
    let mut data = uniform_u8(16, 16, 128);
    data[5 * 16 + 5] = 5; // below lower_bound
    data[10 * 16 + 10] = 250; // above upper_bound
    let bw = binarize(
        &view(&data, 16, 16),
        &ThresholdMethod::Wolf {
            window: WindowSize::square(7),
            k: 0.3,
            delta: 0,
            lower_bound: 10,
            upper_bound: 240,
        },
    )
    .unwrap();
    assert!(bw.get(5, 5), "pixel below lower bound must be black");
    assert!(!bw.get(10, 10), "pixel above upper bound must be white");
    assert!(!bw.get(0, 0), "mid-gray background must stay white");
}

#[test]
fn every_method_maps_a_degenerate_raster_to_an_empty_bitmap() {
    let img = view(&[], 0, 0);
    for method in all_methods(WindowSize::square(7)) {
        let bw = binarize(&img, &method).unwrap();
        assert!(bw.is_null(), "method {method:?}");
        assert_eq!(bw.count_black(), 0);
    }
}

#[test]
fn windowed_methods_reject_empty_windows() {
    let data = uniform_u8(8, 8, 128);
    let img = view(&data, 8, 8);
    for window in [WindowSize::new(0, 7), WindowSize::new(7, 0)] {
        for method in all_methods(window) {
            match method {
                ThresholdMethod::Otsu { .. }
                | ThresholdMethod::Mokji { .. }
                | ThresholdMethod::BiModal { .. } => continue,
                _ => {}
            }
            assert_eq!(
                binarize(&img, &method),
                Err(BinarizeError::InvalidWindowSize(window)),
                "method {method:?}"
            );
        }
    }
}

#[test]
fn otsu_black_count_grows_with_delta() {
    let data = striped_page_u8(64, 64, 3, 8, 40, 210);
    let img = view(&data, 64, 64);
    let mut previous = 0usize;
    for delta in [-64, -16, 0, 16, 64] {
        let bw = binarize(&img, &ThresholdMethod::Otsu { delta }).unwrap();
        let black = bw.count_black();
        assert!(
            black >= previous,
            "delta {delta}: {black} black < {previous}"
        );
        previous = black;
    }
}

#[test]
fn bitmap_rows_are_padded_to_whole_words() {
    // Otsu's uniform-image fallback threshold of 128 turns the whole dark
    // page black, exercising every bit of the partially used last word.
    let data = uniform_u8(70, 3, 0);
    let bw = binarize(&view(&data, 70, 3), &ThresholdMethod::Otsu { delta: 0 }).unwrap();
    assert_eq!(bw.words_per_row(), 3);
    assert_eq!(bw.count_black(), 210, "padding bits must not count as black");
}

#[test]
fn gatos_recovers_strokes_from_a_degraded_page() {
    let data = striped_page_u8(64, 64, 4, 20, 30, 220);
    let bw = binarize(
        &view(&data, 64, 64),
        &ThresholdMethod::Gatos {
            window: WindowSize::square(15),
            noise_sigma: 3.0,
            k: 0.2,
            delta: 0,
        },
    )
    .unwrap();
    // Stroke rows are y % 20 < 4 over x in [8, 56).
    assert!(bw.get(30, 1), "stroke pixel must be black");
    assert!(bw.get(30, 21), "stroke pixel must be black");
    assert!(!bw.get(30, 10), "background between strokes must stay white");
    assert!(!bw.get(1, 10), "margin must stay white");
}

#[test]
fn edgediv_strokes_survive_the_pre_transform() {
    let data = striped_page_u8(64, 64, 4, 20, 30, 220);
    let bw = binarize(
        &view(&data, 64, 64),
        &ThresholdMethod::EdgeDiv {
            window: WindowSize::square(7),
            kep: 0.5,
            kbd: 0.5,
            delta: 0,
        },
    )
    .unwrap();
    assert!(bw.get(30, 1), "stroke pixel must be black");
    assert!(!bw.get(30, 10), "background must stay white");
}

#[test]
fn mean_and_niblack_share_the_fixed_coefficient() {
    let data = checkerboard_u8(32, 32, 4, 32, 220);
    let img = view(&data, 32, 32);
    let window = WindowSize::square(9);
    let mean = binarize(&img, &ThresholdMethod::Mean { window, delta: 0 }).unwrap();
    let niblack = binarize(
        &img,
        &ThresholdMethod::Niblack {
            window,
            k: 0.2,
            delta: 0,
        },
    )
    .unwrap();
    assert_eq!(mean, niblack);
}
