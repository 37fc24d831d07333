//! Print dispatch
//!
//! The tool does not talk to printers itself. It hands the generated PDF to
//! an external script that owns printer selection and spooling, and only
//! checks that the script ran and exited cleanly.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Invoke the print-dispatch script and wait for it to finish
///
/// The script is run as a child process with no arguments and no stdin.
/// There is no timeout: a hung script blocks the caller. A missing script,
/// a spawn failure, or a nonzero exit status is an error.
pub fn dispatch_print(script: &Path) -> Result<()> {
    if !script.exists() {
        return Err(Error::ScriptNotFound(script.to_path_buf()));
    }

    log::info!("dispatching print job via {}", script.display());

    let status = Command::new(script).status()?;
    if !status.success() {
        return Err(Error::PrintFailed(status));
    }

    Ok(())
}
