//! Synthetic test images

use colorextract_core::{Color, PixelGrid};

/// One vertical stripe per entry of `colors`, each `band_width`
/// pixels wide.
pub fn stripes(colors: &[Color], band_width: u32, height: u32) -> PixelGrid {
    let n = colors.len().max(1) as u32;
    let width = band_width * n;
    PixelGrid::from_fn(width, height, |x, _| {
        colors
            .get((x / band_width.max(1)) as usize)
            .copied()
            .unwrap_or_default()
    })
    .unwrap_or_default()
}

/// Horizontal red ramp, vertical green ramp, constant blue.
pub fn gradient(width: u32, height: u32, blue: u8) -> PixelGrid {
    PixelGrid::from_fn(width, height, |x, y| {
        let r = (x * 255 / width.saturating_sub(1).max(1)) as u8;
        let g = (y * 255 / height.saturating_sub(1).max(1)) as u8;
        Color::new(r, g, blue)
    })
    .unwrap_or_default()
}

/// Alternating `a`/`b` squares of `cell` pixels.
pub fn checkerboard(width: u32, height: u32, cell: u32, a: Color, b: Color) -> PixelGrid {
    let cell = cell.max(1);
    PixelGrid::from_fn(width, height, |x, y| {
        if (x / cell + y / cell) % 2 == 0 { a } else { b }
    })
    .unwrap_or_default()
}

/// A 32x24 poster: two red blocks, a blue and a green block and a ramp
/// row on a near-white background. Matches `tests/data/images/poster.ppm`
/// and `poster.png`.
pub fn poster() -> PixelGrid {
    PixelGrid::from_fn(32, 24, |x, y| {
        if (4..14).contains(&x) && (4..20).contains(&y) {
            if y < 12 {
                Color::new(230, 30, 30)
            } else {
                Color::new(200, 40, 20)
            }
        } else if (18..28).contains(&x) && (4..12).contains(&y) {
            Color::new(20, 40, 200)
        } else if (18..28).contains(&x) && (12..20).contains(&y) {
            Color::new(30, 160, 60)
        } else if y == 22 {
            let v = (x * 8) as u8;
            Color::new(v, 255 - v, 128)
        } else {
            Color::gray(250)
        }
    })
    .unwrap_or_default()
}
