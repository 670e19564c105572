//! Bounding-box computation and mask rasterization for point sets.

use ndarray::Array2;

use super::Point;
use crate::error::AnalysisError;

/// Intensity written for region members; background stays 0.
pub const MEMBER: u8 = 255;

/// Compute the tight zero-origin bounding box of a point set.
///
/// Returns `(rows, cols)` = `(max_y + 1, max_x + 1)`, so every point in the
/// set satisfies `y < rows` and `x < cols`. An empty set has no bounding box
/// and yields [`AnalysisError::EmptyRegion`].
pub fn region_bounds(points: &[Point]) -> Result<(usize, usize), AnalysisError> {
    if points.is_empty() {
        return Err(AnalysisError::EmptyRegion);
    }

    let mut max_y = 0;
    let mut max_x = 0;
    for p in points {
        max_y = max_y.max(p.y);
        max_x = max_x.max(p.x);
    }

    Ok((max_y + 1, max_x + 1))
}

/// Paint a point set into a zero-initialized `(rows, cols)` mask.
///
/// Every point must lie inside the mask; sizing the mask with
/// [`region_bounds`] guarantees that. Out-of-bounds points are a contract
/// violation and panic rather than being clipped.
pub fn rasterize(points: &[Point], rows: usize, cols: usize) -> Array2<u8> {
    let mut mask = Array2::<u8>::zeros((rows, cols));
    for p in points {
        assert!(
            p.y < rows && p.x < cols,
            "point ({}, {}) outside {}x{} mask",
            p.x,
            p.y,
            cols,
            rows
        );
        mask[[p.y, p.x]] = MEMBER;
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_of_empty_set() {
        assert_eq!(region_bounds(&[]), Err(AnalysisError::EmptyRegion));
    }

    #[test]
    fn test_bounds_contain_every_point() {
        let points = vec![Point::new(3, 1), Point::new(0, 4), Point::new(2, 2)];
        let (rows, cols) = region_bounds(&points).unwrap();

        assert_eq!((rows, cols), (5, 4));
        assert!(points.iter().all(|p| p.y < rows && p.x < cols));
    }

    #[test]
    fn test_bounds_of_single_point_at_origin() {
        let (rows, cols) = region_bounds(&[Point::new(0, 0)]).unwrap();
        assert_eq!((rows, cols), (1, 1));
    }

    #[test]
    fn test_rasterize_paints_members() {
        let points = vec![Point::new(0, 0), Point::new(2, 1)];
        let mask = rasterize(&points, 2, 3);

        assert_eq!(mask.dim(), (2, 3));
        assert_eq!(mask[[0, 0]], MEMBER);
        assert_eq!(mask[[1, 2]], MEMBER);
        assert_eq!(mask.iter().filter(|&&v| v == MEMBER).count(), 2);
        assert_eq!(mask.iter().filter(|&&v| v == 0).count(), 4);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_rasterize_rejects_out_of_bounds_point() {
        rasterize(&[Point::new(3, 0)], 2, 2);
    }
}
