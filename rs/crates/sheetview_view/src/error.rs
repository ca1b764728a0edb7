//! View-stage errors.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Failures while filtering or materializing records.
///
/// Not expected for datasets built by `sheetview_io_xlsx`; surfaced like load errors.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Frame operation failed.
    #[error("failed to filter dataset: {0}")]
    Frame(#[from] PolarsError),
}
