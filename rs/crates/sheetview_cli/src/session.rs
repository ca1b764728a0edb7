//! Interactive pick-list loop over a loaded viewer.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use sheetview_io_xlsx::{EnumKeyChoice, SpecKeyDomain, SpecLoadOptions};
use sheetview_view::{
    C_MSG_LOAD_ERROR_PREFIX, C_TITLE_PAGE, EnumViewState, SheetViewer, SpecSelection,
    render_page_markdown,
};
use tracing::{debug, info};

/// Severity of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumMessageLevel {
    /// Informational.
    Info,
    /// Recoverable problem.
    Warning,
    /// Fatal problem.
    Error,
}

/// Colour `text` by `level` when `if_color` is set.
pub fn paint(level: EnumMessageLevel, text: &str, if_color: bool) -> String {
    if !if_color {
        return text.to_string();
    }
    match level {
        EnumMessageLevel::Info => text.cyan().to_string(),
        EnumMessageLevel::Warning => text.yellow().to_string(),
        EnumMessageLevel::Error => text.bright_red().to_string(),
    }
}

/// Load the workbook named by `options`, then run [`run_session`].
///
/// A load failure is returned with the load-error prefix before anything is
/// written to `output`.
pub fn run_viewer<R: BufRead, W: Write>(
    options: &SpecLoadOptions,
    input: R,
    output: &mut W,
    if_color: bool,
) -> Result<()> {
    let viewer = SheetViewer::open(options).context(C_MSG_LOAD_ERROR_PREFIX)?;
    info!(
        path = %options.path_file.display(),
        n_rows = viewer.dataset().height(),
        "workbook loaded"
    );
    run_session(&viewer, input, output, if_color)
}

/// Run the select-and-render loop until `q` or end of input.
///
/// Each pass prints the view for the current selection, then asks for a
/// model and a property name. Empty input keeps the previous choice.
pub fn run_session<R: BufRead, W: Write>(
    viewer: &SheetViewer,
    mut input: R,
    output: &mut W,
    if_color: bool,
) -> Result<()> {
    writeln!(output, "# {C_TITLE_PAGE}")?;
    writeln!(output)?;

    let mut selection = SpecSelection::default();
    loop {
        let state = viewer.view(&selection)?;
        write_view(&state, output, if_color)?;
        writeln!(output)?;

        let Some(model) = read_choice(
            viewer.domain_model(),
            &selection.model,
            &mut input,
            output,
            if_color,
        )?
        else {
            break;
        };
        let Some(property_name) = read_choice(
            viewer.domain_property_name(),
            &selection.property_name,
            &mut input,
            output,
            if_color,
        )?
        else {
            break;
        };

        selection = SpecSelection {
            model,
            property_name,
        };
        debug!(?selection, "selection changed");
    }

    Ok(())
}

fn write_view<W: Write>(state: &EnumViewState, output: &mut W, if_color: bool) -> Result<()> {
    let c_page = render_page_markdown(state);
    let c_page = match state {
        EnumViewState::AwaitingSelection { .. } => paint(EnumMessageLevel::Info, &c_page, if_color),
        EnumViewState::NoMatch { .. } => paint(EnumMessageLevel::Warning, &c_page, if_color),
        EnumViewState::Records(_) => c_page,
    };
    write!(output, "{c_page}")?;
    Ok(())
}

/// Ask for one option of `domain`; `None` means the user quit.
fn read_choice<R: BufRead, W: Write>(
    domain: &SpecKeyDomain,
    current: &EnumKeyChoice,
    input: &mut R,
    output: &mut W,
    if_color: bool,
) -> Result<Option<EnumKeyChoice>> {
    writeln!(output, "{}:", domain.column)?;
    for (n_idx, choice) in domain.options().iter().enumerate() {
        let c_mark = if choice == current { "*" } else { " " };
        writeln!(output, " {c_mark}[{n_idx}] {}", domain.label_of(choice))?;
    }

    loop {
        write!(
            output,
            "{} (number, Enter to keep, q to quit): ",
            domain.sentinel_label
        )?;
        output.flush()?;

        let mut c_line = String::new();
        if input.read_line(&mut c_line)? == 0 {
            return Ok(None);
        }
        let c_line = c_line.trim();
        if c_line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        if c_line.is_empty() {
            return Ok(Some(current.clone()));
        }

        match c_line.parse::<usize>().ok().and_then(|n| domain.choice_at(n)) {
            Some(choice) => return Ok(Some(choice)),
            None => writeln!(
                output,
                "{}",
                paint(
                    EnumMessageLevel::Warning,
                    &format!(
                        "Invalid choice {c_line:?}; expected a number from 0 to {}.",
                        domain.len() - 1
                    ),
                    if_color
                )
            )?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetview_io_xlsx::{
        EnumCellValue, SpecDataset, SpecLoadReport, SpecTextCoercePolicy,
        derive_dataframe_from_grid,
    };
    use sheetview_view::{C_MSG_NO_DATA, C_MSG_SELECT_BOTH};

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
            vec![s("M1"), s("Size"), s("Price: $100"), s("c"), s("o a\no b")],
            vec![s("M2"), s("Age"), s("s"), s("c"), s("n")],
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

    fn run(input: &str) -> String {
        let mut output = Vec::new();
        run_session(&viewer(), input.as_bytes(), &mut output, false).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_session_select_render_and_quit() {
        let c_out = run("1\n1\n\n2\nq\n");

        assert!(c_out.starts_with("# Excel Data Selector\n"));
        assert!(c_out.contains(C_MSG_SELECT_BOTH));
        assert!(c_out.contains("### Model: M1 | Property Name: Size"));
        assert!(c_out.contains("Price: \\$100"));
        assert!(c_out.contains("* a<br><br>* b"));
        assert!(c_out.contains(C_MSG_NO_DATA));
        assert!(c_out.contains(" *[1] M1"));
    }

    #[test]
    fn test_session_rejects_invalid_choice_and_stops_at_eof() {
        let c_out = run("9\nx\n0\n0\n");

        assert!(c_out.contains("Invalid choice \"9\"; expected a number from 0 to 2."));
        assert!(c_out.contains("Invalid choice \"x\""));
        assert_eq!(c_out.matches(C_MSG_SELECT_BOTH).count(), 2);
        assert!(!c_out.contains("### Model:"));
    }

    #[test]
    fn test_load_failure_reports_prefix_and_writes_nothing() {
        let options = SpecLoadOptions::with_path("no_such_dir/data_streamlit.xlsx");
        let mut output = Vec::new();

        let err = run_viewer(&options, "1\n1\n".as_bytes(), &mut output, false).unwrap_err();
        let c_err = format!("{err:#}");

        assert!(c_err.starts_with("Error loading Excel file: "));
        assert!(c_err.contains("data_streamlit.xlsx"));
        assert!(output.is_empty());
    }

    #[test]
    fn test_paint_without_color_is_identity() {
        assert_eq!(paint(EnumMessageLevel::Error, "boom", false), "boom");
        assert_ne!(paint(EnumMessageLevel::Error, "boom", true), "boom");
    }
}
