//! Two-key row filter behind the selection guard.

use polars::prelude::{ChunkCompareEq, DataFrame, PolarsResult};
use sheetview_io_xlsx::{
    C_COL_MODEL, C_COL_PROPERTY_NAME, SpecDataset, SpecRecord, derive_records_from_frame,
    derive_str_column,
};
use tracing::debug;

use crate::spec::SpecSelection;

/// Rows matching one complete selection, in dataset order.
#[derive(Debug, Clone)]
pub struct SpecFilteredView {
    df: DataFrame,
}

impl SpecFilteredView {
    /// Matching rows as a frame.
    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    /// Number of matching rows.
    pub fn height(&self) -> usize {
        self.df.height()
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// Matching rows as records.
    pub fn records(&self) -> PolarsResult<Vec<SpecRecord>> {
        derive_records_from_frame(&self.df)
    }

    /// Narrow this view again by `selection`; same guard and predicate as [`filter_dataset`].
    pub fn filter(&self, selection: &SpecSelection) -> PolarsResult<Option<SpecFilteredView>> {
        filter_frame(&self.df, selection)
    }
}

/// Keep rows where `Model` and `Property Name` both equal the selection.
///
/// Returns `None` without touching the frame while either choice is still
/// the placeholder.
pub fn filter_dataset(
    dataset: &SpecDataset,
    selection: &SpecSelection,
) -> PolarsResult<Option<SpecFilteredView>> {
    filter_frame(dataset.frame(), selection)
}

fn filter_frame(
    df: &DataFrame,
    selection: &SpecSelection,
) -> PolarsResult<Option<SpecFilteredView>> {
    let Some((c_model, c_property_name)) = selection.as_pair() else {
        return Ok(None);
    };

    let mask_model = derive_str_column(df, C_COL_MODEL)?.equal(c_model);
    let mask_property_name = derive_str_column(df, C_COL_PROPERTY_NAME)?.equal(c_property_name);
    let df_filtered = df.filter(&(&mask_model & &mask_property_name))?;

    debug!(
        model = c_model,
        property_name = c_property_name,
        n_rows_in = df.height(),
        n_rows_out = df_filtered.height(),
        "filtered dataset"
    );

    Ok(Some(SpecFilteredView { df: df_filtered }))
}
