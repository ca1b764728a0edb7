//! Top-level load errors.

use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

use crate::spec::EnumSheetSelector;

/// "Workbook could not be turned into a dataset" errors.
///
/// Every variant is fatal for a viewing session.
#[derive(Debug, Error)]
pub enum SheetLoadError {
    /// Workbook missing, unreadable, or of an unknown format.
    #[error("failed to open workbook {}: {source}", path.display())]
    Open {
        /// Workbook path.
        path: PathBuf,
        /// Underlying reader error.
        #[source]
        source: calamine::Error,
    },
    /// Requested worksheet does not exist.
    #[error("worksheet {sheet} not found in {}", path.display())]
    SheetNotFound {
        /// Workbook path.
        path: PathBuf,
        /// Requested worksheet.
        sheet: EnumSheetSelector,
    },
    /// Worksheet exists but its cells could not be decoded.
    #[error("failed to read worksheet {sheet_name:?}: {source}")]
    Sheet {
        /// Worksheet name.
        sheet_name: String,
        /// Underlying reader error.
        #[source]
        source: calamine::Error,
    },
    /// Normalized columns were rejected by the frame builder.
    #[error("failed to build dataset: {0}")]
    Frame(#[from] PolarsError),
}
