//! Low-pass filters over single-channel masks.
//!
//! All filters take a `(rows, cols)` u8 mask and an odd kernel length, and
//! return a freshly allocated mask of the same size. Borders are handled by
//! clamping sample coordinates to the mask edge. A kernel length of 1 is an
//! identity pass for every filter.

pub mod blur;

use std::fmt;
use std::str::FromStr;

use ndarray::Array2;

use crate::error::AnalysisError;

/// The smoothing filter applied by the perimeter-smoothing pipeline.
///
/// A closed set: these four are the only smoothing behaviors required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SmoothingKind {
    /// Normalized box average.
    Box,
    /// Median of the kernel window.
    #[default]
    Median,
    /// Separable Gaussian, sigma derived from the kernel length.
    Gaussian,
    /// Edge-preserving bilateral filter.
    Bilateral,
}

impl SmoothingKind {
    /// Apply this filter to `mask` at the given odd kernel length.
    ///
    /// The bilateral pass derives its color and space sigmas from the
    /// kernel length (2k and k/2 respectively).
    pub fn apply(self, mask: &Array2<u8>, kernel_length: usize) -> Array2<u8> {
        match self {
            SmoothingKind::Box => blur::box_blur(mask, kernel_length),
            SmoothingKind::Median => blur::median_blur(mask, kernel_length),
            SmoothingKind::Gaussian => blur::gaussian_blur(mask, kernel_length),
            SmoothingKind::Bilateral => blur::bilateral_filter(
                mask,
                kernel_length,
                (kernel_length * 2) as f32,
                kernel_length as f32 / 2.0,
            ),
        }
    }
}

impl fmt::Display for SmoothingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SmoothingKind::Box => "box",
            SmoothingKind::Median => "median",
            SmoothingKind::Gaussian => "gaussian",
            SmoothingKind::Bilateral => "bilateral",
        };
        f.write_str(name)
    }
}

impl FromStr for SmoothingKind {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "box" | "blur" => Ok(SmoothingKind::Box),
            "median" | "medianblur" => Ok(SmoothingKind::Median),
            "gaussian" | "gaussianblur" => Ok(SmoothingKind::Gaussian),
            "bilateral" | "bilateralfilter" => Ok(SmoothingKind::Bilateral),
            _ => Err(AnalysisError::UnknownSmoothing(s.to_string())),
        }
    }
}
