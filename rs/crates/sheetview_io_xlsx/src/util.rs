//! Stateless helpers used by the loader kernel.

use std::collections::{BTreeMap, HashSet};

use polars::prelude::{Column, DataFrame, PolarsResult};

use crate::conf::TUP_COLS_RECORD;
use crate::spec::{EnumCellValue, SpecLoadReport, SpecTextCoercePolicy};

////////////////////////////////////////////////////////////////////////////////
// #region CellValueConversion

/// Stringify one cell under `text_policy`.
///
/// Integral numbers print without a fractional part (`100`), others use the
/// shortest round-trip form (`5.5`).
pub fn convert_cell_value_to_text(
    value: &EnumCellValue,
    text_policy: &SpecTextCoercePolicy,
) -> String {
    match value {
        EnumCellValue::None => text_policy.missing_value_str.clone(),
        EnumCellValue::String(s) => s.clone(),
        EnumCellValue::Integer(n) => n.to_string(),
        EnumCellValue::Number(n) => n.to_string(),
        EnumCellValue::Boolean(true) => text_policy.true_str.clone(),
        EnumCellValue::Boolean(false) => text_policy.false_str.clone(),
    }
}

/// Header text for column `n_idx_col`; blank headers get a positional name.
pub fn convert_header_value_to_text(value: &EnumCellValue, n_idx_col: usize) -> String {
    let c_name = match value {
        EnumCellValue::None => String::new(),
        EnumCellValue::String(s) => s.clone(),
        EnumCellValue::Integer(n) => n.to_string(),
        EnumCellValue::Number(n) => n.to_string(),
        EnumCellValue::Boolean(b) => (if *b { "True" } else { "False" }).to_string(),
    };
    let c_name = sanitize_column_name(&c_name);
    if c_name.is_empty() {
        format!("Unnamed: {n_idx_col}")
    } else {
        c_name
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ColumnNormalization

/// Strip leading/trailing whitespace from a column name.
pub fn sanitize_column_name(name: &str) -> String {
    name.trim().to_string()
}

/// Keep the first occurrence of every column name, returning `(source_idx, name)` pairs.
///
/// Dropped duplicates are reported once per name with all their positions.
pub fn plan_unique_columns(
    columns: &[String],
    report: &mut SpecLoadReport,
) -> Vec<(usize, String)> {
    let mut dict_pos: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (n_idx, c_name) in columns.iter().enumerate() {
        dict_pos.entry(c_name).or_default().push(n_idx);
    }

    for (c_name, l_pos) in &dict_pos {
        if l_pos.len() > 1 {
            report.warn(format!(
                "Duplicate column name {c_name:?} x{} at indices {:?}; keeping index {}.",
                l_pos.len(),
                l_pos,
                l_pos[0]
            ));
        }
    }

    columns
        .iter()
        .enumerate()
        .filter(|(n_idx, c_name)| dict_pos[c_name.as_str()][0] == *n_idx)
        .map(|(n_idx, c_name)| (n_idx, c_name.clone()))
        .collect()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region KeyDomainUtils

/// Distinct values in first-seen order.
pub fn derive_distinct_values<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut set_seen = HashSet::new();
    let mut l_distinct = Vec::new();
    for c_value in values {
        if set_seen.insert(c_value) {
            l_distinct.push(c_value.to_string());
        }
    }
    l_distinct
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region DataFrameAssembly

/// Turn a header row plus body rows into an all-text frame.
///
/// Column names are trimmed and de-duplicated; record columns absent from
/// the header are appended and filled with the policy's missing-value text.
/// Short rows are padded with empty cells.
pub fn derive_dataframe_from_grid(
    header: &[EnumCellValue],
    rows: &[Vec<EnumCellValue>],
    text_policy: &SpecTextCoercePolicy,
    report: &mut SpecLoadReport,
) -> PolarsResult<DataFrame> {
    let l_colnames: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(n_idx, value)| convert_header_value_to_text(value, n_idx))
        .collect();
    let l_cols_kept = plan_unique_columns(&l_colnames, report);

    let n_height = rows.len();
    let mut l_columns = Vec::with_capacity(l_cols_kept.len() + TUP_COLS_RECORD.len());
    for (n_idx_src, c_name) in &l_cols_kept {
        let l_values: Vec<String> = rows
            .iter()
            .map(|row| {
                row.get(*n_idx_src)
                    .map_or_else(
                        || text_policy.missing_value_str.clone(),
                        |value| convert_cell_value_to_text(value, text_policy),
                    )
            })
            .collect();
        l_columns.push(Column::new(c_name.as_str().into(), l_values));
    }

    for c_col in TUP_COLS_RECORD {
        if l_cols_kept.iter().any(|(_, c_name)| c_name == c_col) {
            continue;
        }
        report.warn(format!(
            "Column {c_col:?} not found; filled with {:?}.",
            text_policy.missing_value_str
        ));
        report.columns_missing.push(c_col.to_string());
        l_columns.push(Column::new(
            c_col.into(),
            vec![text_policy.missing_value_str.clone(); n_height],
        ));
    }

    report.n_rows = n_height;
    report.columns = l_cols_kept.into_iter().map(|(_, c_name)| c_name).collect();

    DataFrame::new(l_columns)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    fn s(value: &str) -> EnumCellValue {
        EnumCellValue::String(value.to_string())
    }

    #[test]
    fn test_convert_cell_value_to_text_matches_default_policy() {
        let policy = SpecTextCoercePolicy::default();

        assert_eq!(convert_cell_value_to_text(&EnumCellValue::None, &policy), "None");
        assert_eq!(convert_cell_value_to_text(&EnumCellValue::Number(100.0), &policy), "100");
        assert_eq!(convert_cell_value_to_text(&EnumCellValue::Number(5.5), &policy), "5.5");
        assert_eq!(
            convert_cell_value_to_text(&EnumCellValue::Integer(123456789012345678), &policy),
            "123456789012345678"
        );
        assert_eq!(
            convert_cell_value_to_text(&EnumCellValue::Boolean(true), &policy),
            "True"
        );
        assert_eq!(convert_cell_value_to_text(&s("abc"), &policy), "abc");

        let policy_blank = SpecTextCoercePolicy {
            missing_value_str: String::new(),
            ..Default::default()
        };
        assert_eq!(convert_cell_value_to_text(&EnumCellValue::None, &policy_blank), "");
    }

    #[test]
    fn test_convert_header_value_trims_and_names_blanks() {
        assert_eq!(convert_header_value_to_text(&s("  Model \t"), 0), "Model");
        assert_eq!(convert_header_value_to_text(&EnumCellValue::None, 3), "Unnamed: 3");
        assert_eq!(convert_header_value_to_text(&s("   "), 1), "Unnamed: 1");
    }

    #[test]
    fn test_plan_unique_columns_keeps_first_and_warns() {
        let mut report = SpecLoadReport::default();
        let l_cols = vec!["A".to_string(), "B".to_string(), "A".to_string()];

        let l_kept = plan_unique_columns(&l_cols, &mut report);

        assert_eq!(l_kept, vec![(0, "A".to_string()), (1, "B".to_string())]);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("\"A\" x2 at indices [0, 2]"));
    }

    #[test]
    fn test_derive_distinct_values_preserves_first_seen_order() {
        let l_values = ["b", "a", "b", "c", "a"];
        assert_eq!(
            derive_distinct_values(l_values),
            vec!["b".to_string(), "a".to_string(), "c".to_string()]
        );
        assert!(derive_distinct_values(Vec::<&str>::new()).is_empty());
    }

    #[test]
    fn test_derive_dataframe_from_grid_appends_missing_record_columns() {
        let mut report = SpecLoadReport::default();
        let header = vec![s(" Model "), s("Property Name"), s("Extra")];
        let rows = vec![
            vec![s("M1"), EnumCellValue::Number(3.0), EnumCellValue::None],
            vec![s("M2")],
        ];

        let df = derive_dataframe_from_grid(
            &header,
            &rows,
            &SpecTextCoercePolicy::default(),
            &mut report,
        )
        .unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(
            df.get_column_names_str(),
            vec![
                "Model",
                "Property Name",
                "Extra",
                "Subject Data",
                "Comp Data",
                "Narrative"
            ]
        );
        assert_eq!(report.n_rows, 2);
        assert_eq!(report.columns, vec!["Model", "Property Name", "Extra"]);
        assert_eq!(
            report.columns_missing,
            vec!["Subject Data", "Comp Data", "Narrative"]
        );
        assert_eq!(report.warnings.len(), 3);

        let ca_prop = df
            .column("Property Name")
            .unwrap()
            .as_materialized_series()
            .str()
            .unwrap();
        assert_eq!(ca_prop.get(0), Some("3"));
        assert_eq!(ca_prop.get(1), Some("None"));
    }

    #[test]
    fn test_derive_dataframe_from_empty_grid_has_record_columns() {
        let mut report = SpecLoadReport::default();
        let df = derive_dataframe_from_grid(
            &[],
            &[],
            &SpecTextCoercePolicy::default(),
            &mut report,
        )
        .unwrap();

        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 5);
        assert_eq!(report.columns_missing.len(), 5);
    }
}
