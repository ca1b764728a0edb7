//! `sheetview_io_xlsx` v1:
//! Rust-side spreadsheet loader kernel.
//!
//! Modules:
//! - `conf`    : column names, sentinels and default presets
//! - `spec`    : options/records/key domains/report
//! - `util`    : pure helper functions
//! - `dataset` : normalized read-only snapshot
//! - `reader`  : workbook reader kernel
//! - `error`   : load errors
pub mod conf;
pub mod dataset;
pub mod error;
pub mod reader;
pub mod spec;
pub mod util;

pub use conf::{
    C_COL_COMP_DATA, C_COL_MODEL, C_COL_NARRATIVE, C_COL_PROPERTY_NAME, C_COL_SUBJECT_DATA,
    C_PATH_FILE_DATA, C_SENTINEL_MODEL, C_SENTINEL_PROPERTY_NAME, TUP_COLS_RECORD,
};
pub use dataset::{SpecDataset, derive_records_from_frame, derive_str_column};
pub use error::SheetLoadError;
pub use reader::load_dataset;
pub use spec::{
    EnumCellValue, EnumKeyChoice, EnumSheetSelector, SpecKeyDomain, SpecLoadOptions,
    SpecLoadReport, SpecRecord, SpecTextCoercePolicy,
};
pub use util::{derive_dataframe_from_grid, derive_distinct_values, sanitize_column_name};
