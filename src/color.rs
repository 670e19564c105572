//! RGB to HSV conversion.
//!
//! Hue classification works on the 8-bit HSV representation: hue is stored
//! in half-scale degrees (0-179) so it fits a `u8`, saturation and value in
//! 0-255. Approximate hues at half scale: red 0, yellow 30, green 60,
//! cyan 90, blue 120, magenta 150.

use ndarray::{Array3, ArrayView3};

/// Convert a single RGB pixel to 8-bit HSV.
///
/// Returns `(h, s, v)` with h in 0-179 (half-scale degrees), s and v in
/// 0-255. Achromatic pixels (r == g == b) get hue 0.
#[inline]
pub fn rgb_pixel_to_hsv(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let rf = r as f32;
    let gf = g as f32;
    let bf = b as f32;

    let v = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = v - min;

    let s = if v > 0.0 { delta * 255.0 / v } else { 0.0 };

    let h = if delta <= 0.0 {
        0.0
    } else if v == rf {
        60.0 * (gf - bf) / delta
    } else if v == gf {
        120.0 + 60.0 * (bf - rf) / delta
    } else {
        240.0 + 60.0 * (rf - gf) / delta
    };
    let h = if h < 0.0 { h + 360.0 } else { h };

    // Half-scale degrees, wrapping 360 back onto 0
    let h_half = (h / 2.0).round();
    let h8 = if h_half >= 180.0 { 0 } else { h_half as u8 };

    (h8, s.round().clamp(0.0, 255.0) as u8, v as u8)
}

/// Convert an RGB image to its 8-bit HSV representation.
///
/// # Arguments
/// * `image` - RGB image (height, width, 3) as u8
///
/// # Returns
/// HSV image with the same dimensions; channel 0 holds hue in 0-179.
pub fn rgb_to_hsv(image: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, _) = image.dim();
    let mut hsv = Array3::<u8>::zeros((height, width, 3));

    for y in 0..height {
        for x in 0..width {
            let (h, s, v) = rgb_pixel_to_hsv(
                image[[y, x, 0]],
                image[[y, x, 1]],
                image[[y, x, 2]],
            );
            hsv[[y, x, 0]] = h;
            hsv[[y, x, 1]] = s;
            hsv[[y, x, 2]] = v;
        }
    }

    hsv
}
