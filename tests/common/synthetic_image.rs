/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize, dark: u8, light: u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let sum = x / cell + y / cell;
            img[y * width + x] = if sum & 1 == 0 { dark } else { light };
        }
    }
    img
}

/// Uniform image at a single gray level.
pub fn uniform_u8(width: usize, height: usize, level: u8) -> Vec<u8> {
    vec![level; width * height]
}

/// Light page with horizontal dark "text" strokes of `stroke` pixels height,
/// repeating every `pitch` rows.
pub fn striped_page_u8(
    width: usize,
    height: usize,
    stroke: usize,
    pitch: usize,
    dark: u8,
    light: u8,
) -> Vec<u8> {
    assert!(stroke < pitch, "strokes must leave background between them");
    let mut img = vec![light; width * height];
    for y in (0..height).filter(|y| y % pitch < stroke) {
        for x in width / 8..width - width / 8 {
            img[y * width + x] = dark;
        }
    }
    img
}
