//! View assembly: guard, filter, render, and the results-page layout.

use sheetview_io_xlsx::{
    SheetLoadError, SpecDataset, SpecKeyDomain, SpecLoadOptions, load_dataset,
};
use tracing::debug;

use crate::conf::{
    C_HEADING_COMP_DATA, C_HEADING_NARRATIVE, C_HEADING_RESULTS, C_HEADING_SUBJECT_DATA,
    C_MARKUP_RULE, C_MSG_NO_DATA, C_MSG_SELECT_BOTH,
};
use crate::error::ViewError;
use crate::filter::filter_dataset;
use crate::format::render_record;
use crate::spec::{EnumViewState, SpecRenderedRecord, SpecSelection};

////////////////////////////////////////////////////////////////////////////////
// #region ViewAssembly

/// Resolve what the results area shows for `selection`.
pub fn build_view(
    dataset: &SpecDataset,
    selection: &SpecSelection,
) -> Result<EnumViewState, ViewError> {
    let Some(view) = filter_dataset(dataset, selection)? else {
        return Ok(EnumViewState::AwaitingSelection {
            message: C_MSG_SELECT_BOTH.to_string(),
        });
    };

    if view.is_empty() {
        return Ok(EnumViewState::NoMatch {
            message: C_MSG_NO_DATA.to_string(),
        });
    }

    let l_rendered: Vec<SpecRenderedRecord> =
        view.records()?.iter().map(render_record).collect();
    debug!(n_records = l_rendered.len(), "rendered view");
    Ok(EnumViewState::Records(l_rendered))
}

/// A loaded dataset ready to answer selections.
///
/// Holds no selection state; every call to [`SheetViewer::view`] is independent.
#[derive(Debug, Clone)]
pub struct SheetViewer {
    dataset: SpecDataset,
}

impl SheetViewer {
    /// Wrap an already loaded dataset.
    pub fn new(dataset: SpecDataset) -> Self {
        Self { dataset }
    }

    /// Load the workbook described by `options`.
    pub fn open(options: &SpecLoadOptions) -> Result<Self, SheetLoadError> {
        load_dataset(options).map(Self::new)
    }

    /// Underlying dataset.
    pub fn dataset(&self) -> &SpecDataset {
        &self.dataset
    }

    /// Model pick-list.
    pub fn domain_model(&self) -> &SpecKeyDomain {
        self.dataset.domain_model()
    }

    /// Property-name pick-list.
    pub fn domain_property_name(&self) -> &SpecKeyDomain {
        self.dataset.domain_property_name()
    }

    /// Selection from pick-list labels; see [`SpecKeyDomain::choice_of_label`].
    pub fn selection_from_labels(
        &self,
        model: Option<&str>,
        property_name: Option<&str>,
    ) -> SpecSelection {
        SpecSelection {
            model: self.domain_model().choice_of_label(model),
            property_name: self.domain_property_name().choice_of_label(property_name),
        }
    }

    /// See [`build_view`].
    pub fn view(&self, selection: &SpecSelection) -> Result<EnumViewState, ViewError> {
        build_view(&self.dataset, selection)
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region PageLayout

/// Markdown for the results area.
///
/// Records render as a `Model | Property Name` header, the subject/comp
/// panels, then the narrative, separated by rules. A selection without
/// matches keeps the results heading above its warning.
pub fn render_page_markdown(state: &EnumViewState) -> String {
    let c_heading = format!("## {C_HEADING_RESULTS}");
    let l_records = match state {
        EnumViewState::AwaitingSelection { message } => return format!("{message}\n"),
        EnumViewState::NoMatch { message } => return format!("{c_heading}\n\n{message}\n"),
        EnumViewState::Records(l_records) => l_records,
    };

    let mut l_lines = vec![c_heading, String::new()];
    for record in l_records {
        l_lines.extend([
            format!(
                "### Model: {} | Property Name: {}",
                record.model, record.property_name
            ),
            C_MARKUP_RULE.to_string(),
            format!("### {C_HEADING_SUBJECT_DATA}"),
            record.subject_html.clone(),
            format!("### {C_HEADING_COMP_DATA}"),
            record.comp_html.clone(),
            C_MARKUP_RULE.to_string(),
            format!("### {C_HEADING_NARRATIVE}"),
            record.narrative_html.clone(),
            C_MARKUP_RULE.to_string(),
            String::new(),
        ]);
    }

    l_lines.join("\n")
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use sheetview_io_xlsx::{
        EnumCellValue, EnumKeyChoice, SpecLoadReport, SpecTextCoercePolicy,
        derive_dataframe_from_grid,
    };

    fn s(value: &str) -> EnumCellValue {
        EnumCellValue::String(value.to_string())
    }

    fn viewer() -> SheetViewer {
        let header = vec![
            s("Model"),
            s("Property Name"),
            s("Subject Data"),
            s("Comp Data"),
            s("Narrative"),
        ];
        let rows = vec![
            vec![
                s("Valuation Model"),
                s("Size"),
                s("Price: $100"),
                s("Comp\nline"),
                s("o Point one\no Point two"),
            ],
            vec![s("Income Model"), s("Age"), s("x"), s("y"), s("z")],
        ];
        let mut report = SpecLoadReport::default();
        let df = derive_dataframe_from_grid(
            &header,
            &rows,
            &SpecTextCoercePolicy::default(),
            &mut report,
        )
        .unwrap();
        SheetViewer::new(SpecDataset::from_frame(df, report).unwrap())
    }

    #[test]
    fn test_unselected_returns_info_state() {
        let viewer = viewer();

        let state = viewer.view(&SpecSelection::default()).unwrap();
        assert_eq!(
            state,
            EnumViewState::AwaitingSelection {
                message: C_MSG_SELECT_BOTH.to_string()
            }
        );

        let selection_half = SpecSelection {
            model: EnumKeyChoice::Unselected,
            property_name: EnumKeyChoice::Value("Size".to_string()),
        };
        assert_eq!(viewer.view(&selection_half).unwrap().kind(), "info");
    }

    #[test]
    fn test_sentinel_labels_return_info_state() {
        let viewer = viewer();
        let l_models = viewer.domain_model().labels();
        let l_property_names = viewer.domain_property_name().labels();

        let selection =
            viewer.selection_from_labels(Some(&l_models[0]), Some(&l_property_names[0]));
        assert_eq!(selection, SpecSelection::default());
        assert_eq!(viewer.view(&selection).unwrap().kind(), "info");

        let selection =
            viewer.selection_from_labels(Some(&l_models[1]), Some(&l_property_names[1]));
        assert_eq!(selection, SpecSelection::new("Valuation Model", "Size"));
        assert_eq!(viewer.view(&selection).unwrap().kind(), "records");
    }

    #[test]
    fn test_valid_pair_without_rows_returns_warning() {
        let viewer = viewer();

        let state = viewer
            .view(&SpecSelection::new("Valuation Model", "Age"))
            .unwrap();
        assert_eq!(state.kind(), "warning");
        assert_eq!(state.message(), Some(C_MSG_NO_DATA));
        assert!(state.records().is_empty());
    }

    #[test]
    fn test_match_renders_fields() {
        let viewer = viewer();

        let state = viewer
            .view(&SpecSelection::new("Valuation Model", "Size"))
            .unwrap();
        let l_records = state.records();
        assert_eq!(l_records.len(), 1);
        assert_eq!(l_records[0].subject_html, "Price: \\$100");
        assert_eq!(l_records[0].comp_html, "Comp<br>line");
        assert_eq!(l_records[0].narrative_html, "* Point one<br><br>* Point two");
    }

    #[test]
    fn test_render_page_markdown_layout() {
        let state = EnumViewState::Records(vec![SpecRenderedRecord {
            model: "M".to_string(),
            property_name: "P".to_string(),
            subject_html: "s".to_string(),
            comp_html: "c".to_string(),
            narrative_html: "n".to_string(),
        }]);

        assert_eq!(
            render_page_markdown(&state),
            "## Filtered Data\n\n### Model: M | Property Name: P\n---\n### Subject Data\ns\n\
             ### Comp Data\nc\n---\n### Narrative\nn\n---\n"
        );
        assert_eq!(
            render_page_markdown(&EnumViewState::NoMatch {
                message: "w".to_string()
            }),
            "## Filtered Data\n\nw\n"
        );
        assert_eq!(
            render_page_markdown(&EnumViewState::AwaitingSelection {
                message: "i".to_string()
            }),
            "i\n"
        );
    }
}
