use scan_binarize::image::ImageU8;
use scan_binarize::types::WindowSize;
use scan_binarize::{binarize, ThresholdMethod};

fn main() {
    // Demo stub: synthesizes a small "page" and binarizes it with Sauvola
    let w = 640usize;
    let h = 480usize;
    let stride = w; // tightly packed
    let mut gray = vec![220u8; w * h];
    for y in 200..240 {
        for x in 100..540 {
            gray[y * stride + x] = 40; // dark text band
        }
    }
    let img = ImageU8 {
        w,
        h,
        stride,
        data: &gray,
    };

    let method = ThresholdMethod::Sauvola {
        window: WindowSize::square(61),
        k: 0.34,
        delta: 0,
    };
    match binarize(&img, &method) {
        Ok(bw) => println!(
            "{}x{} -> {} black pixels ({} words/row)",
            bw.width(),
            bw.height(),
            bw.count_black(),
            bw.words_per_row()
        ),
        Err(err) => eprintln!("Error: {err}"),
    }
}
