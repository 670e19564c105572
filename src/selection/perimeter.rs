//! Boundary extraction via a diagonal-neighbor homogeneity test.

use ndarray::Array2;

use super::mask::{rasterize, region_bounds};
use super::Point;
use crate::error::AnalysisError;

/// Scan a mask and return the cells classified as boundary-like.
///
/// Only interior cells are inspected; the outermost ring is never part of
/// the perimeter. A cell is excluded when all four *diagonal* neighbors are
/// within `tolerance` of its value (`tolerance = 0` requires exact
/// equality); every other interior cell is emitted in row-major order. The
/// orthogonal neighbors are deliberately not consulted.
pub fn extract_perimeter(mask: &Array2<u8>, tolerance: u8) -> Vec<Point> {
    let (rows, cols) = mask.dim();
    let mut points = Vec::new();
    if rows < 3 || cols < 3 {
        // No interior cells to classify
        return points;
    }

    let tol = tolerance as i16;
    for i in 1..rows - 1 {
        for j in 1..cols - 1 {
            let center = mask[[i, j]] as i16;
            let uniform = [(i - 1, j - 1), (i + 1, j - 1), (i - 1, j + 1), (i + 1, j + 1)]
                .into_iter()
                .all(|(ni, nj)| (mask[[ni, nj]] as i16 - center).abs() <= tol);
            if !uniform {
                points.push(Point::new(j, i));
            }
        }
    }

    points
}

/// Extract the perimeter of a region point set.
///
/// Rasterizes the set into a binary mask sized to its bounding box, then
/// runs the exact-mode boundary scan. The mask is transient, rebuilt on
/// every call. Fails with [`AnalysisError::EmptyRegion`] when the set is
/// empty.
pub fn find_perimeter(points: &[Point]) -> Result<Vec<Point>, AnalysisError> {
    let (rows, cols) = region_bounds(points)?;
    let mask = rasterize(points, rows, cols);
    Ok(extract_perimeter(&mask, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::mask::MEMBER;

    #[test]
    fn test_uniform_masks_have_no_perimeter() {
        let background = Array2::<u8>::zeros((5, 5));
        assert!(extract_perimeter(&background, 0).is_empty());

        let foreground = Array2::<u8>::from_elem((5, 5), MEMBER);
        assert!(extract_perimeter(&foreground, 0).is_empty());
    }

    #[test]
    fn test_outer_ring_is_never_emitted() {
        // Width-1 vertical stripes: every interior cell differs from its
        // diagonal neighbors
        let mask = Array2::<u8>::from_shape_fn((6, 6), |(_, j)| {
            if j % 2 == 0 {
                MEMBER
            } else {
                0
            }
        });

        let perimeter = extract_perimeter(&mask, 0);
        assert!(!perimeter.is_empty());
        assert!(perimeter
            .iter()
            .all(|p| p.y >= 1 && p.y <= 4 && p.x >= 1 && p.x <= 4));
    }

    #[test]
    fn test_single_foreground_pixel() {
        // 4x4 mask, single foreground pixel at (2,2). Interior cells are
        // (1,1), (1,2), (2,1), (2,2); only (1,1) and (2,2) see the
        // foreground pixel on a diagonal.
        let mut mask = Array2::<u8>::zeros((4, 4));
        mask[[2, 2]] = MEMBER;

        let perimeter = extract_perimeter(&mask, 0);
        assert_eq!(perimeter, vec![Point::new(1, 1), Point::new(2, 2)]);
    }

    #[test]
    fn test_tolerance_mode_ignores_small_differences() {
        let mut mask = Array2::<u8>::from_elem((3, 3), 100);
        mask[[0, 0]] = 110;

        // Exact mode flags the center, a tolerance of 10 absorbs the bump
        assert_eq!(extract_perimeter(&mask, 0), vec![Point::new(1, 1)]);
        assert!(extract_perimeter(&mask, 10).is_empty());
        assert!(extract_perimeter(&mask, 9).len() == 1);
    }

    #[test]
    fn test_find_perimeter_of_empty_region() {
        assert_eq!(find_perimeter(&[]), Err(AnalysisError::EmptyRegion));
    }

    #[test]
    fn test_find_perimeter_of_single_point_region() {
        // Bounding box is 1x1, which has no interior
        let perimeter = find_perimeter(&[Point::new(0, 0)]).unwrap();
        assert!(perimeter.is_empty());
    }

    #[test]
    fn test_perimeter_of_solid_block() {
        // 5x5 region filled except nothing: solid block spanning the box.
        let mut points = Vec::new();
        for y in 0..5 {
            for x in 0..5 {
                points.push(Point::new(x, y));
            }
        }

        // Mask is uniformly foreground, so no interior cell differs from
        // its diagonals.
        let perimeter = find_perimeter(&points).unwrap();
        assert!(perimeter.is_empty());
    }

    #[test]
    fn test_perimeter_inside_bounding_box() {
        // L-shaped region
        let mut points = Vec::new();
        for y in 0..6 {
            points.push(Point::new(0, y));
            points.push(Point::new(1, y));
        }
        for x in 2..6 {
            points.push(Point::new(x, 4));
            points.push(Point::new(x, 5));
        }

        let (rows, cols) = region_bounds(&points).unwrap();
        let perimeter = find_perimeter(&points).unwrap();

        assert!(!perimeter.is_empty());
        assert!(perimeter
            .iter()
            .all(|p| p.y >= 1 && p.y < rows - 1 && p.x >= 1 && p.x < cols - 1));
    }
}
