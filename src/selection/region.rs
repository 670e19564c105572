//! Hue-based region selection.
//!
//! Selects every pixel in the image whose hue lies within a tolerance of
//! the hue at a seed coordinate. This is a global color threshold over the
//! whole image, not a connectivity-constrained flood fill: the returned set
//! may contain disconnected patches anywhere in the image.

use ndarray::ArrayView3;
use rayon::prelude::*;

use super::Point;
use crate::color::rgb_to_hsv;

/// Region selection result with metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSelection {
    /// Selected coordinates in row-major scan order.
    pub points: Vec<Point>,
    /// Hue at the seed pixel in full degrees (0-360), `None` when the seed
    /// was outside the image.
    pub seed_hue: Option<u16>,
}

impl RegionSelection {
    fn empty() -> Self {
        RegionSelection { points: Vec::new(), seed_hue: None }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Select all pixels whose hue is within `tolerance` of the seed's hue.
///
/// Hue distance is the plain absolute difference of half-scale hues (0-179),
/// without cyclic wrap-around. With `tolerance = 0` exactly the pixels whose
/// hue equals the seed's hue are selected, the seed included.
///
/// An empty image or a seed outside the image yields an empty selection;
/// that is a defined "no match" outcome, not an error.
///
/// # Arguments
/// * `image` - RGB image (height, width, 3) as u8
/// * `x` - Seed column
/// * `y` - Seed row
/// * `tolerance` - Maximum hue distance (0-255)
pub fn find_region(image: ArrayView3<u8>, x: usize, y: usize, tolerance: u8) -> RegionSelection {
    let (height, width, channels) = image.dim();
    if height == 0 || width == 0 || channels < 3 || x >= width || y >= height {
        return RegionSelection::empty();
    }

    let hsv = rgb_to_hsv(image);
    let seed_hue = hsv[[y, x, 0]] as i16;
    let tol = tolerance as i16;

    // Row-parallel scan; per-row results are flattened in order so the
    // output stays row-major.
    let points: Vec<Point> = (0..height)
        .into_par_iter()
        .map(|row| {
            let mut matches = Vec::new();
            for col in 0..width {
                let hue = hsv[[row, col, 0]] as i16;
                if (hue - seed_hue).abs() <= tol {
                    matches.push(Point::new(col, row));
                }
            }
            matches
        })
        .flatten()
        .collect();

    RegionSelection {
        points,
        // Double the half-scale hue to report 0-360 degrees
        seed_hue: Some(seed_hue as u16 * 2),
    }
}
