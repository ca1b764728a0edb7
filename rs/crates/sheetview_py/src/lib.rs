use std::path::PathBuf;

use pyo3::exceptions::{PyOSError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;
use sheetview_io_xlsx::{
    C_PATH_FILE_DATA, EnumSheetSelector, SheetLoadError, SpecLoadOptions, SpecTextCoercePolicy,
};
use sheetview_view::{
    C_MSG_LOAD_ERROR_PREFIX, EnumViewState, SheetViewer, SpecRenderedRecord, ViewError,
    format_text, render_page_markdown,
};

const N_BRIDGE_ABI_VERSION: u64 = 1;
const C_BRIDGE_CONTRACT_VERSION: &str = "sheetview.viewer.v1";
const C_BRIDGE_TRANSPORT: &str = "rust_native";

#[pyclass(name = "RenderedRecord")]
#[derive(Debug, Clone)]
struct PyRenderedRecord {
    #[pyo3(get)]
    model: String,
    #[pyo3(get)]
    property_name: String,
    #[pyo3(get)]
    subject_html: String,
    #[pyo3(get)]
    comp_html: String,
    #[pyo3(get)]
    narrative_html: String,
}

impl From<SpecRenderedRecord> for PyRenderedRecord {
    fn from(record: SpecRenderedRecord) -> Self {
        Self {
            model: record.model,
            property_name: record.property_name,
            subject_html: record.subject_html,
            comp_html: record.comp_html,
            narrative_html: record.narrative_html,
        }
    }
}

#[pymethods]
impl PyRenderedRecord {
    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict_record = PyDict::new(py);
        dict_record.set_item("model", &self.model)?;
        dict_record.set_item("property_name", &self.property_name)?;
        dict_record.set_item("subject_html", &self.subject_html)?;
        dict_record.set_item("comp_html", &self.comp_html)?;
        dict_record.set_item("narrative_html", &self.narrative_html)?;
        Ok(dict_record)
    }
}

#[pyclass(name = "ViewState")]
#[derive(Debug, Clone)]
struct PyViewState {
    /// `info`, `warning` or `records`.
    #[pyo3(get)]
    state: String,
    #[pyo3(get)]
    message: Option<String>,
    #[pyo3(get)]
    records: Vec<PyRenderedRecord>,
    #[pyo3(get)]
    page_markdown: String,
}

impl From<EnumViewState> for PyViewState {
    fn from(state: EnumViewState) -> Self {
        let page_markdown = render_page_markdown(&state);
        let c_state = state.kind().to_string();
        match state {
            EnumViewState::AwaitingSelection { message } | EnumViewState::NoMatch { message } => {
                Self {
                    state: c_state,
                    message: Some(message),
                    records: vec![],
                    page_markdown,
                }
            }
            EnumViewState::Records(l_records) => Self {
                state: c_state,
                message: None,
                records: l_records.into_iter().map(PyRenderedRecord::from).collect(),
                page_markdown,
            },
        }
    }
}

#[pymethods]
impl PyViewState {
    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict_state = PyDict::new(py);
        dict_state.set_item("state", &self.state)?;
        dict_state.set_item("message", &self.message)?;
        let l_records = self
            .records
            .iter()
            .map(|record| record.to_dict(py))
            .collect::<PyResult<Vec<_>>>()?;
        dict_state.set_item("records", l_records)?;
        Ok(dict_state)
    }

    fn __len__(&self) -> usize {
        self.records.len()
    }
}

#[pyclass(name = "SheetViewer")]
struct PySheetViewer {
    #[pyo3(get)]
    path: String,
    inner: SheetViewer,
}

#[pymethods]
impl PySheetViewer {
    #[new]
    #[pyo3(signature = (path = None, sheet_name = None, missing_value_str = None))]
    fn new(
        py: Python<'_>,
        path: Option<String>,
        sheet_name: Option<String>,
        missing_value_str: Option<String>,
    ) -> PyResult<Self> {
        let path = path.unwrap_or_else(|| C_PATH_FILE_DATA.to_string());
        let mut cfg_text_policy = SpecTextCoercePolicy::default();
        if let Some(c_missing) = missing_value_str {
            cfg_text_policy.missing_value_str = c_missing;
        }
        let cfg_load_options = SpecLoadOptions {
            path_file: PathBuf::from(&path),
            sheet: sheet_name.map_or(EnumSheetSelector::Index(0), EnumSheetSelector::Name),
            text_policy: cfg_text_policy,
        };

        let inner = py
            .allow_threads(|| SheetViewer::open(&cfg_load_options))
            .map_err(map_sheet_load_error)?;
        Ok(Self { path, inner })
    }

    /// Model pick-list labels, placeholder first.
    fn models(&self) -> Vec<String> {
        self.inner.domain_model().labels()
    }

    /// Property-name pick-list labels, placeholder first.
    fn property_names(&self) -> Vec<String> {
        self.inner.domain_property_name().labels()
    }

    #[getter]
    fn height(&self) -> usize {
        self.inner.dataset().height()
    }

    #[getter]
    fn warnings(&self) -> Vec<String> {
        self.inner.dataset().report().warnings.clone()
    }

    /// `None`, a placeholder label or an unknown label means unselected.
    #[pyo3(signature = (model = None, property_name = None))]
    fn view(&self, model: Option<&str>, property_name: Option<&str>) -> PyResult<PyViewState> {
        let selection = self.inner.selection_from_labels(model, property_name);
        let state = self.inner.view(&selection).map_err(map_view_error)?;
        Ok(PyViewState::from(state))
    }
}

fn map_sheet_load_error(exception: SheetLoadError) -> PyErr {
    let c_msg = format!("{C_MSG_LOAD_ERROR_PREFIX}: {exception}");
    match exception {
        SheetLoadError::Open { .. } => PyOSError::new_err(c_msg),
        SheetLoadError::SheetNotFound { .. } => PyValueError::new_err(c_msg),
        SheetLoadError::Sheet { .. } | SheetLoadError::Frame(_) => PyRuntimeError::new_err(c_msg),
    }
}

fn map_view_error(exception: ViewError) -> PyErr {
    PyRuntimeError::new_err(exception.to_string())
}

#[pyfunction(name = "format_text")]
#[pyo3(signature = (text, add_space = false))]
fn format_text_py(text: &str, add_space: bool) -> String {
    format_text(text, add_space)
}

#[pymodule]
fn _sheetview_rs(module: &Bound<'_, PyModule>) -> PyResult<()> {
    module.add_class::<PyRenderedRecord>()?;
    module.add_class::<PyViewState>()?;
    module.add_class::<PySheetViewer>()?;
    module.add_function(wrap_pyfunction!(format_text_py, module)?)?;
    module.add("__bridge_abi__", N_BRIDGE_ABI_VERSION)?;
    module.add("__bridge_contract__", C_BRIDGE_CONTRACT_VERSION)?;
    module.add("__bridge_transport__", C_BRIDGE_TRANSPORT)?;
    Ok(())
}
