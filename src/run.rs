//! End-to-end test page run
//!
//! The pipeline is strictly sequential: resolve the output path, render the
//! PDF, then hand it to the print script unless printing was skipped. Any
//! failure aborts the run; there is no retry and no partial-completion
//! state.

use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::pdf::{create_test_page, TestPageOptions};
use crate::print::dispatch_print;

/// Render the test page and, unless `no_print` is set, dispatch it
///
/// Returns the path of the generated PDF.
pub fn run(config: &Config, no_print: bool) -> Result<PathBuf> {
    let output = config.output_path();

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }

    create_test_page(&output, &TestPageOptions::default())?;

    if no_print {
        log::info!("print dispatch skipped");
        return Ok(output);
    }

    if let Some(printer) = &config.printer {
        log::info!("dispatching to printer {}", printer);
    }
    dispatch_print(&config.script_path())?;

    Ok(output)
}
