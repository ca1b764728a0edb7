//! Loader constants and default preset factories.

use crate::spec::SpecLoadOptions;

/// Workbook read by the viewer surfaces.
pub const C_PATH_FILE_DATA: &str = "data_streamlit.xlsx";

/// Key column: model.
pub const C_COL_MODEL: &str = "Model";
/// Key column: property name.
pub const C_COL_PROPERTY_NAME: &str = "Property Name";
/// Free-text column: subject data.
pub const C_COL_SUBJECT_DATA: &str = "Subject Data";
/// Free-text column: comparable data.
pub const C_COL_COMP_DATA: &str = "Comp Data";
/// Free-text column: narrative.
pub const C_COL_NARRATIVE: &str = "Narrative";

/// Columns coerced to text and exposed on [`crate::spec::SpecRecord`], in record order.
pub const TUP_COLS_RECORD: [&str; 5] = [
    C_COL_MODEL,
    C_COL_PROPERTY_NAME,
    C_COL_SUBJECT_DATA,
    C_COL_COMP_DATA,
    C_COL_NARRATIVE,
];

/// Placeholder label shown first in the model pick-list.
pub const C_SENTINEL_MODEL: &str = "Select Model";
/// Placeholder label shown first in the property-name pick-list.
pub const C_SENTINEL_PROPERTY_NAME: &str = "Select Property Name";

/// Text written for empty cells.
pub const C_MISSING_VALUE_STR: &str = "None";
/// Text written for boolean `true` cells.
pub const C_TRUE_STR: &str = "True";
/// Text written for boolean `false` cells.
pub const C_FALSE_STR: &str = "False";
/// `chrono` format used for date/time cells.
pub const C_FMT_DATETIME: &str = "%Y-%m-%d %H:%M:%S";

/// Build default load options: [`C_PATH_FILE_DATA`], first worksheet.
pub fn derive_default_load_options() -> SpecLoadOptions {
    SpecLoadOptions::default()
}
