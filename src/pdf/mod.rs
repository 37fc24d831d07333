//! PDF generation and inspection module

pub mod create;
pub mod fonts;
pub mod metadata;

// Re-export commonly used items
pub use create::{create_test_page, Swatch, TestPageOptions, SWATCHES};
pub use metadata::{count_pages, extract_metadata, PdfMetadata};
