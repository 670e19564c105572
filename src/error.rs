//! Error types for the analysis pipeline.

use thiserror::Error;

/// Error type for region analysis failures.
///
/// An out-of-range seed or an empty input image is *not* an error: region
/// selection reports those as an empty selection so callers can continue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The point set is empty or its bounding box has zero area, so there
    /// is no mask to rasterize or scan.
    #[error("empty region")]
    EmptyRegion,
    /// Unrecognized smoothing filter name.
    #[error("unknown smoothing filter '{0}', expected box, median, gaussian or bilateral")]
    UnknownSmoothing(String),
}
