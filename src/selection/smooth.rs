//! Smoothed perimeter extraction.
//!
//! Rasterizes a region, runs the selected low-pass filter over a ramp of
//! odd kernel sizes, and re-extracts the boundary from the blurred mask
//! with a tolerance-based homogeneity test.

use super::mask::{rasterize, region_bounds};
use super::perimeter::extract_perimeter;
use super::Point;
use crate::error::AnalysisError;
use crate::filters::SmoothingKind;

/// Extract a smoothed perimeter of a region point set.
///
/// The filter runs once for every odd kernel size `1, 3, 5, ...` below
/// `max_kernel_length`, each pass filtering the *original* rasterized mask
/// (the passes are not chained); only the final pass's output is kept.
/// Larger `max_kernel_length` values therefore yield smoother, less
/// faithful boundaries, and the cost grows with `max_kernel_length / 2`
/// full-mask filter passes — callers bound it for latency control.
///
/// With `max_kernel_length <= 1` no filter pass runs and the boundary scan
/// operates on the raw binary mask.
///
/// # Arguments
/// * `points` - Region coordinates (from [`super::find_region`])
/// * `kind` - Smoothing filter to apply
/// * `tolerance` - Homogeneity threshold for the boundary scan (0-255)
/// * `max_kernel_length` - Exclusive upper bound of the odd kernel ramp
pub fn find_smooth_perimeter(
    points: &[Point],
    kind: SmoothingKind,
    tolerance: u8,
    max_kernel_length: usize,
) -> Result<Vec<Point>, AnalysisError> {
    let (rows, cols) = region_bounds(points)?;
    let mask = rasterize(points, rows, cols);

    // One working buffer, overwritten by each pass over the source mask.
    let mut blurred = None;
    let mut kernel_length = 1;
    while kernel_length < max_kernel_length {
        blurred = Some(kind.apply(&mask, kernel_length));
        kernel_length += 2;
    }

    let scanned = blurred.as_ref().unwrap_or(&mask);
    Ok(extract_perimeter(scanned, tolerance))
}
