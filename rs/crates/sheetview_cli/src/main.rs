//! `sheetview`: terminal front end for the spreadsheet viewer.
//!
//! Reads the built-in workbook, then loops over numbered pick-lists. Set
//! `RUST_LOG` for diagnostics (default `warn`).

mod session;

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use sheetview_io_xlsx::conf::derive_default_load_options;
use tracing_subscriber::EnvFilter;

use crate::session::{EnumMessageLevel, paint, run_viewer};

fn main() -> ExitCode {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let if_color = stdout.is_terminal();
    let result = run_viewer(
        &derive_default_load_options(),
        io::stdin().lock(),
        &mut stdout.lock(),
        if_color,
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!(
                "{}",
                paint(
                    EnumMessageLevel::Error,
                    &format!("{err:#}"),
                    io::stderr().is_terminal()
                )
            );
            ExitCode::FAILURE
        }
    }
}
