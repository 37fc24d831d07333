//! Error types for the printer test page library

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the printer test page library
#[derive(Error, Debug)]
pub enum Error {
    /// PDF processing error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be read or parsed
    #[error("Config error: {0}")]
    Config(#[from] ini::Error),

    /// Configuration file not found
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Configuration section missing
    #[error("Missing [{0}] section in config")]
    MissingSection(String),

    /// Configuration key missing
    #[error("Missing config key: {section}.{key}")]
    MissingKey { section: String, key: String },

    /// Generated PDF has no pages
    #[error("PDF has no pages: {}", .0.display())]
    EmptyPdf(PathBuf),

    /// Print-dispatch script not found
    #[error("Print script not found: {}", .0.display())]
    ScriptNotFound(PathBuf),

    /// Print-dispatch script exited with a failure status
    #[error("Print script failed: {0}")]
    PrintFailed(ExitStatus),

    /// General error
    #[error("{0}")]
    General(String),
}
