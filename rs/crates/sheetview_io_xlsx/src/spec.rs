//! Shared loader specification models.

use std::fmt;
use std::path::PathBuf;

use crate::conf::{
    C_FALSE_STR, C_FMT_DATETIME, C_MISSING_VALUE_STR, C_PATH_FILE_DATA, C_TRUE_STR,
};

////////////////////////////////////////////////////////////////////////////////
// #region CellValues

/// Raw worksheet cell before text coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumCellValue {
    /// Empty cell.
    None,
    /// Text value (also carries dates and error codes already rendered).
    String(String),
    /// Whole number stored as such (xls/ods); kept exact beyond 2^53.
    Integer(i64),
    /// Numeric value.
    Number(f64),
    /// Boolean value.
    Boolean(bool),
}

/// How cells are stringified during normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecTextCoercePolicy {
    /// Replacement text for empty cells.
    pub missing_value_str: String,
    /// Text for boolean `true`.
    pub true_str: String,
    /// Text for boolean `false`.
    pub false_str: String,
    /// `chrono` format for date/time cells.
    pub fmt_datetime: String,
}

impl Default for SpecTextCoercePolicy {
    fn default() -> Self {
        Self {
            missing_value_str: C_MISSING_VALUE_STR.to_string(),
            true_str: C_TRUE_STR.to_string(),
            false_str: C_FALSE_STR.to_string(),
            fmt_datetime: C_FMT_DATETIME.to_string(),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region LoadOptions

/// Worksheet reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumSheetSelector {
    /// Zero-based worksheet position.
    Index(usize),
    /// Worksheet name.
    Name(String),
}

impl fmt::Display for EnumSheetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(n_idx) => write!(f, "#{n_idx}"),
            Self::Name(c_name) => write!(f, "{c_name:?}"),
        }
    }
}

/// Input options for [`crate::reader::load_dataset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecLoadOptions {
    /// Workbook path.
    pub path_file: PathBuf,
    /// Worksheet to read.
    pub sheet: EnumSheetSelector,
    /// Cell stringification policy.
    pub text_policy: SpecTextCoercePolicy,
}

impl Default for SpecLoadOptions {
    fn default() -> Self {
        Self {
            path_file: PathBuf::from(C_PATH_FILE_DATA),
            sheet: EnumSheetSelector::Index(0),
            text_policy: SpecTextCoercePolicy::default(),
        }
    }
}

impl SpecLoadOptions {
    /// Default options reading `path_file` instead of the built-in workbook.
    pub fn with_path(path_file: impl Into<PathBuf>) -> Self {
        Self {
            path_file: path_file.into(),
            ..Default::default()
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Records

/// One normalized dataset row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecRecord {
    /// `Model` cell text.
    pub model: String,
    /// `Property Name` cell text.
    pub property_name: String,
    /// `Subject Data` cell text.
    pub subject_data: String,
    /// `Comp Data` cell text.
    pub comp_data: String,
    /// `Narrative` cell text.
    pub narrative: String,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region KeyDomains

/// One pick-list entry: the placeholder or a real column value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum EnumKeyChoice {
    /// Nothing picked yet.
    #[default]
    Unselected,
    /// A value observed in the key column.
    Value(String),
}

impl EnumKeyChoice {
    /// Picked value, if any.
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Self::Unselected => None,
            Self::Value(c_value) => Some(c_value),
        }
    }
}

/// Selectable values of one key column, sentinel first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecKeyDomain {
    /// Source column name.
    pub column: String,
    /// Label displayed for [`EnumKeyChoice::Unselected`].
    pub sentinel_label: String,
    /// Distinct values in first-seen order.
    pub values: Vec<String>,
}

impl SpecKeyDomain {
    /// Number of options including the sentinel.
    pub fn len(&self) -> usize {
        self.values.len() + 1
    }

    /// A domain always holds at least the sentinel.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All options, sentinel at index 0.
    pub fn options(&self) -> Vec<EnumKeyChoice> {
        std::iter::once(EnumKeyChoice::Unselected)
            .chain(self.values.iter().cloned().map(EnumKeyChoice::Value))
            .collect()
    }

    /// Display labels, sentinel label at index 0.
    pub fn labels(&self) -> Vec<String> {
        std::iter::once(self.sentinel_label.clone())
            .chain(self.values.iter().cloned())
            .collect()
    }

    /// Option at `idx` in [`Self::options`] order.
    pub fn choice_at(&self, idx: usize) -> Option<EnumKeyChoice> {
        match idx {
            0 => Some(EnumKeyChoice::Unselected),
            _ => self.values.get(idx - 1).cloned().map(EnumKeyChoice::Value),
        }
    }

    /// Label for `choice` as shown in the pick-list.
    pub fn label_of<'a>(&'a self, choice: &'a EnumKeyChoice) -> &'a str {
        match choice {
            EnumKeyChoice::Unselected => &self.sentinel_label,
            EnumKeyChoice::Value(c_value) => c_value,
        }
    }

    /// Whether `choice` is the sentinel or one of the observed values.
    pub fn contains(&self, choice: &EnumKeyChoice) -> bool {
        match choice {
            EnumKeyChoice::Unselected => true,
            EnumKeyChoice::Value(c_value) => self.values.iter().any(|v| v == c_value),
        }
    }

    /// Option for a pick-list label handed back by a presentation layer.
    ///
    /// Observed values win; anything else (`None`, the sentinel label, text
    /// not in the column) is the placeholder.
    pub fn choice_of_label(&self, label: Option<&str>) -> EnumKeyChoice {
        match label.map(|c| EnumKeyChoice::Value(c.to_string())) {
            Some(choice) if self.contains(&choice) => choice,
            _ => EnumKeyChoice::Unselected,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportSpecification

/// Per-load report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecLoadReport {
    /// Worksheet that was read.
    pub sheet_name: String,
    /// Data rows read (header excluded).
    pub n_rows: usize,
    /// Columns kept after trimming and de-duplication.
    pub columns: Vec<String>,
    /// Record columns absent from the worksheet and filled with missing-value text.
    pub columns_missing: Vec<String>,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecLoadReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }
}

impl fmt::Display for SpecLoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[LOAD] sheet={:?} rows={} columns={} warnings={}",
            self.sheet_name,
            self.n_rows,
            self.columns.len(),
            self.warnings.len()
        )
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
