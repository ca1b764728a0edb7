//! Normalized, read-only dataset snapshot.

use polars::prelude::{DataFrame, PolarsResult, StringChunked};

use crate::conf::{
    C_COL_COMP_DATA, C_COL_MODEL, C_COL_NARRATIVE, C_COL_PROPERTY_NAME, C_COL_SUBJECT_DATA,
    C_SENTINEL_MODEL, C_SENTINEL_PROPERTY_NAME,
};
use crate::spec::{SpecKeyDomain, SpecLoadReport, SpecRecord};
use crate::util::derive_distinct_values;

/// All-text frame plus the two key domains derived from it.
#[derive(Debug, Clone)]
pub struct SpecDataset {
    df: DataFrame,
    domain_model: SpecKeyDomain,
    domain_property_name: SpecKeyDomain,
    report: SpecLoadReport,
}

impl SpecDataset {
    /// Wrap a normalized frame.
    ///
    /// Every record column must exist with `String` dtype. Key columns listed
    /// in `report.columns_missing` contribute no values to their domain.
    pub fn from_frame(df: DataFrame, report: SpecLoadReport) -> PolarsResult<Self> {
        let domain_model = derive_key_domain(&df, C_COL_MODEL, C_SENTINEL_MODEL, &report)?;
        let domain_property_name = derive_key_domain(
            &df,
            C_COL_PROPERTY_NAME,
            C_SENTINEL_PROPERTY_NAME,
            &report,
        )?;

        Ok(Self {
            df,
            domain_model,
            domain_property_name,
            report,
        })
    }

    /// Underlying frame.
    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    /// Model pick-list.
    pub fn domain_model(&self) -> &SpecKeyDomain {
        &self.domain_model
    }

    /// Property-name pick-list.
    pub fn domain_property_name(&self) -> &SpecKeyDomain {
        &self.domain_property_name
    }

    /// Report produced while loading.
    pub fn report(&self) -> &SpecLoadReport {
        &self.report
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.df.height()
    }

    /// Whether the dataset holds no rows.
    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// Rows as records, in dataset order.
    pub fn records(&self) -> PolarsResult<Vec<SpecRecord>> {
        derive_records_from_frame(&self.df)
    }
}

/// Borrow a text column.
pub fn derive_str_column<'a>(df: &'a DataFrame, name: &str) -> PolarsResult<&'a StringChunked> {
    df.column(name)?.as_materialized_series().str()
}

/// Materialize every row of an all-text frame as a [`SpecRecord`].
pub fn derive_records_from_frame(df: &DataFrame) -> PolarsResult<Vec<SpecRecord>> {
    let ca_model = derive_str_column(df, C_COL_MODEL)?;
    let ca_property_name = derive_str_column(df, C_COL_PROPERTY_NAME)?;
    let ca_subject_data = derive_str_column(df, C_COL_SUBJECT_DATA)?;
    let ca_comp_data = derive_str_column(df, C_COL_COMP_DATA)?;
    let ca_narrative = derive_str_column(df, C_COL_NARRATIVE)?;

    let mut l_records = Vec::with_capacity(df.height());
    for n_idx_row in 0..df.height() {
        l_records.push(SpecRecord {
            model: ca_model.get(n_idx_row).unwrap_or_default().to_string(),
            property_name: ca_property_name
                .get(n_idx_row)
                .unwrap_or_default()
                .to_string(),
            subject_data: ca_subject_data
                .get(n_idx_row)
                .unwrap_or_default()
                .to_string(),
            comp_data: ca_comp_data.get(n_idx_row).unwrap_or_default().to_string(),
            narrative: ca_narrative.get(n_idx_row).unwrap_or_default().to_string(),
        });
    }
    Ok(l_records)
}

fn derive_key_domain(
    df: &DataFrame,
    column: &str,
    sentinel_label: &str,
    report: &SpecLoadReport,
) -> PolarsResult<SpecKeyDomain> {
    let values = if report.columns_missing.iter().any(|c| c == column) {
        vec![]
    } else {
        derive_distinct_values(derive_str_column(df, column)?.into_iter().flatten())
    };

    Ok(SpecKeyDomain {
        column: column.to_string(),
        sentinel_label: sentinel_label.to_string(),
        values,
    })
}
