use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::FRAC_PI_2;
use table_grid::Line;

/// Edge mask of a ruled table: full-length 1-px lines at the given columns and rows.
pub fn ruled_table_u8(width: usize, height: usize, xs: &[usize], ys: &[usize]) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = vec![0u8; width * height];
    for &y in ys {
        for x in 0..width {
            img[y * width + x] = 255;
        }
    }
    for &x in xs {
        for y in 0..height {
            img[y * width + x] = 255;
        }
    }
    img
}

/// Replace row `y` with a dashed stroke: `on` lit pixels followed by `off` dark ones.
pub fn dash_row(img: &mut [u8], width: usize, y: usize, on: usize, off: usize) {
    for x in 0..width {
        img[y * width + x] = if x % (on + off) < on { 255 } else { 0 };
    }
}

/// Sprinkle isolated edge pixels with the given density.
pub fn add_salt_noise(img: &mut [u8], density: f64, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for px in img.iter_mut() {
        if rng.gen::<f64>() < density {
            *px = 255;
        }
    }
}

/// Hough-style detections: every grid line reported twice, one pixel to each side.
pub fn doubled_detections(xs: &[usize], ys: &[usize]) -> Vec<Line> {
    let mut lines = Vec::new();
    for &x in xs {
        lines.push(Line::new(x as f32 - 1.0, 0.0));
        lines.push(Line::new(x as f32 + 1.0, 0.0));
    }
    for &y in ys {
        lines.push(Line::new(y as f32 + 1.0, FRAC_PI_2));
        lines.push(Line::new(y as f32 - 1.0, FRAC_PI_2));
    }
    lines
}
