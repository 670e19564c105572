//! huescan - hue-based region selection and perimeter extraction.
//!
//! Given a decoded RGB image and a seed pixel, huescan selects every pixel
//! whose hue lies within a tolerance of the seed's hue, derives the
//! boundary of that patch with a diagonal-neighbor homogeneity test, and
//! optionally re-extracts the boundary from a low-pass-filtered mask for a
//! smoother outline.
//!
//! ## Image format
//!
//! Images are `ndarray` arrays shaped `(height, width, 3)` in RGB channel
//! order with 8 bits per channel. Masks are `(rows, cols)` single-channel
//! arrays with 0 = background and 255 = member. All operations are
//! synchronous and side-effect-free; masks are transient, rebuilt for each
//! call.
//!
//! ## Pipeline
//!
//! ```no_run
//! use huescan::{find_perimeter, find_region, find_smooth_perimeter, SmoothingKind};
//! use ndarray::Array3;
//!
//! let image = Array3::<u8>::zeros((64, 64, 3));
//! let selection = find_region(image.view(), 32, 32, 10);
//! let perimeter = find_perimeter(&selection.points)?;
//! let smoothed =
//!     find_smooth_perimeter(&selection.points, SmoothingKind::Median, 10, 31)?;
//! # Ok::<(), huescan::AnalysisError>(())
//! ```

pub mod cli;
pub mod color;
pub mod error;
pub mod filters;
pub mod render;
pub mod selection;

pub use error::AnalysisError;
pub use filters::SmoothingKind;
pub use selection::{
    extract_perimeter, find_perimeter, find_region, find_smooth_perimeter, Point,
    RegionSelection,
};
