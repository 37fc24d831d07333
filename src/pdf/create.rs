//! Test sheet creation using lopdf
//!
//! Builds the single-page document directly as PDF objects: a page tree with
//! one A4 page, a resource dictionary holding the two fonts, and a content
//! stream that draws the title, the timestamp line and the swatch column.

use std::path::Path;

use chrono::NaiveDateTime;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::date::{current_timestamp, format_timestamp};
use crate::error::Result;
use crate::layout::{
    self, PageSize, LABEL_GAP, SWATCH_HEIGHT, SWATCH_MARGIN, SWATCH_WIDTH,
};
use crate::pdf::fonts::{self, FontFace};

/// Title printed when the caller does not override it
pub const DEFAULT_TITLE: &str = "HP DeskJet Test Page";

/// A labeled color rectangle on the test sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    /// Color name drawn next to the rectangle
    pub label: &'static str,
    /// Fill color as a normalized RGB triple
    pub rgb: (f32, f32, f32),
}

/// The fixed swatch sequence, top to bottom
///
/// Black first so a completely dry cartridge is obvious at a glance, then
/// the three ink primaries.
pub const SWATCHES: [Swatch; 4] = [
    Swatch { label: "Black", rgb: (0.0, 0.0, 0.0) },
    Swatch { label: "Cyan", rgb: (0.0, 1.0, 1.0) },
    Swatch { label: "Magenta", rgb: (1.0, 0.0, 1.0) },
    Swatch { label: "Yellow", rgb: (1.0, 1.0, 0.0) },
];

/// Options for generating the test sheet
#[derive(Debug, Clone)]
pub struct TestPageOptions {
    /// Title text, centered at the top of the page
    pub title: String,
    /// Timestamp shown below the title; `None` uses the wall clock at
    /// render time. Tests inject a fixed value here.
    pub timestamp: Option<NaiveDateTime>,
    /// Title font size in points
    pub title_font_size: f64,
    /// Font size for the timestamp line and swatch labels in points
    pub body_font_size: f64,
}

impl Default for TestPageOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            timestamp: None,
            title_font_size: 16.0,
            body_font_size: 12.0,
        }
    }
}

/// Create the single-page A4 test sheet at `output`
///
/// Overwrites any existing file at the path. The file is fully written when
/// this returns.
pub fn create_test_page(output: &Path, options: &TestPageOptions) -> Result<()> {
    let page = PageSize::a4();
    let width = page.width.pt();
    let height = page.height.pt();

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let title_font_id = doc.add_object(fonts::type1_font(FontFace::HelveticaBold));
    let body_font_id = doc.add_object(fonts::type1_font(FontFace::Helvetica));

    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => title_font_id,
            "F2" => body_font_id,
        },
    });

    let content = build_content(width, height, options);
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            Object::Real(width as f32),
            Object::Real(height as f32),
        ],
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.compress();
    doc.save(output)?;

    log::info!("wrote test sheet to {}", output.display());

    Ok(())
}

/// Build the page content stream
fn build_content(width: f64, height: f64, options: &TestPageOptions) -> Content {
    let mut ops = Vec::new();

    // Title, centered near the top margin
    let title_x = centered_x(width, &options.title, FontFace::HelveticaBold, options.title_font_size);
    push_text(
        &mut ops,
        "F1",
        options.title_font_size,
        title_x,
        height - layout::TITLE_OFFSET,
        &options.title,
    );

    // Timestamp line below the title
    let stamp = options.timestamp.unwrap_or_else(current_timestamp);
    let stamp_line = format!("Printed on: {}", format_timestamp(&stamp));
    let stamp_x = centered_x(width, &stamp_line, FontFace::Helvetica, options.body_font_size);
    push_text(
        &mut ops,
        "F2",
        options.body_font_size,
        stamp_x,
        height - layout::TIMESTAMP_OFFSET,
        &stamp_line,
    );

    // Swatch column: filled rectangle, then its label in black to the right
    for (index, swatch) in SWATCHES.iter().enumerate() {
        let top = layout::swatch_top(height, index);
        let (r, g, b) = swatch.rgb;

        ops.push(Operation::new(
            "rg",
            vec![Object::Real(r), Object::Real(g), Object::Real(b)],
        ));
        ops.push(Operation::new(
            "re",
            vec![
                Object::Real(SWATCH_MARGIN as f32),
                Object::Real((top - SWATCH_HEIGHT) as f32),
                Object::Real(SWATCH_WIDTH as f32),
                Object::Real(SWATCH_HEIGHT as f32),
            ],
        ));
        ops.push(Operation::new("f", vec![]));

        // Reset fill to black before drawing the label
        ops.push(Operation::new(
            "rg",
            vec![Object::Real(0.0), Object::Real(0.0), Object::Real(0.0)],
        ));
        push_text(
            &mut ops,
            "F2",
            options.body_font_size,
            SWATCH_MARGIN + SWATCH_WIDTH + LABEL_GAP,
            top - SWATCH_HEIGHT / 2.0,
            swatch.label,
        );
    }

    Content { operations: ops }
}

/// x position that centers `text` horizontally on the page
fn centered_x(page_width: f64, text: &str, face: FontFace, size: f64) -> f64 {
    (page_width - fonts::text_width(text, face, size)) / 2.0
}

fn push_text(ops: &mut Vec<Operation>, font: &str, size: f64, x: f64, y: f64, text: &str) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new(
        "Tf",
        vec![font.into(), Object::Real(size as f32)],
    ));
    ops.push(Operation::new(
        "Td",
        vec![Object::Real(x as f32), Object::Real(y as f32)],
    ));
    ops.push(Operation::new("Tj", vec![Object::string_literal(text)]));
    ops.push(Operation::new("ET", vec![]));
}
