//! Workbook reader kernel: worksheet cells into a normalized [`SpecDataset`].

use calamine::{Data, Reader, open_workbook_auto};
use tracing::{debug, info, warn};

use crate::dataset::SpecDataset;
use crate::error::SheetLoadError;
use crate::spec::{
    EnumCellValue, EnumSheetSelector, SpecLoadOptions, SpecLoadReport, SpecTextCoercePolicy,
};
use crate::util::derive_dataframe_from_grid;

/// Load the worksheet selected by `options` as an all-text dataset.
///
/// The first row of the used range is the header. Load warnings are kept on
/// the dataset report and echoed through `tracing`.
pub fn load_dataset(options: &SpecLoadOptions) -> Result<SpecDataset, SheetLoadError> {
    let path_file = &options.path_file;
    debug!(path = %path_file.display(), sheet = %options.sheet, "opening workbook");

    let mut workbook = open_workbook_auto(path_file).map_err(|source| SheetLoadError::Open {
        path: path_file.clone(),
        source,
    })?;

    let l_sheet_names = workbook.sheet_names();
    let c_sheet_name = match &options.sheet {
        EnumSheetSelector::Index(n_idx) => l_sheet_names.get(*n_idx).cloned(),
        EnumSheetSelector::Name(c_name) => l_sheet_names.iter().find(|c| *c == c_name).cloned(),
    }
    .ok_or_else(|| SheetLoadError::SheetNotFound {
        path: path_file.clone(),
        sheet: options.sheet.clone(),
    })?;

    let range = workbook
        .worksheet_range(&c_sheet_name)
        .map_err(|source| SheetLoadError::Sheet {
            sheet_name: c_sheet_name.clone(),
            source,
        })?;

    let mut rows = range.rows();
    let l_header: Vec<EnumCellValue> = rows
        .next()
        .map(|row| {
            row.iter()
                .map(|cell| convert_data_to_cell_value(cell, &options.text_policy))
                .collect()
        })
        .unwrap_or_default();
    let l_body: Vec<Vec<EnumCellValue>> = rows
        .map(|row| {
            row.iter()
                .map(|cell| convert_data_to_cell_value(cell, &options.text_policy))
                .collect()
        })
        .collect();

    let mut report = SpecLoadReport {
        sheet_name: c_sheet_name,
        ..Default::default()
    };
    let df = derive_dataframe_from_grid(&l_header, &l_body, &options.text_policy, &mut report)?;

    for c_warning in &report.warnings {
        warn!("{c_warning}");
    }
    info!("{report}");

    Ok(SpecDataset::from_frame(df, report)?)
}

/// Map one worksheet cell onto [`EnumCellValue`].
///
/// Dates are rendered with `text_policy.fmt_datetime`; durations and
/// out-of-range serials fall back to their numeric serial value.
pub fn convert_data_to_cell_value(
    cell: &Data,
    text_policy: &SpecTextCoercePolicy,
) -> EnumCellValue {
    match cell {
        Data::Empty => EnumCellValue::None,
        Data::String(val) => EnumCellValue::String(val.clone()),
        Data::Int(val) => EnumCellValue::Integer(*val),
        Data::Float(val) => EnumCellValue::Number(*val),
        Data::Bool(val) => EnumCellValue::Boolean(*val),
        Data::DateTime(val) => match val.as_datetime() {
            Some(dt) if !val.is_duration() => {
                EnumCellValue::String(dt.format(&text_policy.fmt_datetime).to_string())
            }
            _ => EnumCellValue::Number(val.as_f64()),
        },
        Data::DateTimeIso(val) => EnumCellValue::String(val.clone()),
        Data::DurationIso(val) => EnumCellValue::String(val.clone()),
        Data::Error(err) => EnumCellValue::String(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::CellErrorType;

    #[test]
    fn test_convert_data_to_cell_value() {
        let policy = SpecTextCoercePolicy::default();

        assert_eq!(convert_data_to_cell_value(&Data::Empty, &policy), EnumCellValue::None);
        assert_eq!(
            convert_data_to_cell_value(&Data::Int(123456789012345678), &policy),
            EnumCellValue::Integer(123456789012345678)
        );
        assert_eq!(
            convert_data_to_cell_value(&Data::Bool(false), &policy),
            EnumCellValue::Boolean(false)
        );
        assert_eq!(
            convert_data_to_cell_value(&Data::String("x".to_string()), &policy),
            EnumCellValue::String("x".to_string())
        );
        assert_eq!(
            convert_data_to_cell_value(&Data::Error(CellErrorType::Div0), &policy),
            EnumCellValue::String("#DIV/0!".to_string())
        );
    }
}
