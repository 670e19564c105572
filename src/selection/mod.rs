//! Region selection and perimeter extraction.
//!
//! The pipeline goes: seed pixel + RGB image -> [`find_region`] (global hue
//! threshold) -> point set -> [`find_perimeter`] (diagonal-neighbor boundary
//! scan) or [`find_smooth_perimeter`] (low-pass filter ramp, then a
//! tolerance-based boundary scan).

pub mod mask;
pub mod perimeter;
pub mod region;
pub mod smooth;

pub use mask::{rasterize, region_bounds};
pub use perimeter::{extract_perimeter, find_perimeter};
pub use region::{find_region, RegionSelection};
pub use smooth::find_smooth_perimeter;

/// A pixel coordinate. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Point { x, y }
    }
}
