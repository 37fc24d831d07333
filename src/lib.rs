//! Printer Test Page Library
//!
//! Generates a single-page PDF test sheet and dispatches it to an external
//! print script. This library provides functionality to:
//! - Load the tool configuration from an INI file
//! - Render the test sheet (title, timestamp, four color swatches)
//! - Inspect generated PDFs (page count, media box)
//! - Invoke the print-dispatch script and surface its exit status
//!
//! # Example
//!
//! ```no_run
//! use print_test_page::config::Config;
//! use print_test_page::run::run;
//! use std::path::Path;
//!
//! let config = Config::load(Path::new("config.ini")).expect("Failed to load config");
//!
//! // Render the PDF but skip the print dispatch
//! run(&config, true).expect("Failed to generate test page");
//! ```

pub mod config;
pub mod date;
pub mod error;
pub mod layout;
pub mod pdf;
pub mod print;
pub mod run;

// Re-export commonly used items
pub use error::{Error, Result};
