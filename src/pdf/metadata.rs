//! PDF metadata extraction
//!
//! Used to validate generated output: page count comes from the Count field
//! of the page tree root, which also catches truncated or malformed files.

use std::path::Path;

use lopdf::{Document, Object};

use crate::error::{Error, Result};

/// PDF metadata
#[derive(Debug, Clone)]
pub struct PdfMetadata {
    /// Number of pages in the PDF
    pub page_count: usize,
    /// Media box dimensions of the first page in points (width, height)
    pub media_box: Option<(f64, f64)>,
}

/// Count pages by reading the Count field from the Pages dictionary
fn count_pages_from_catalog(doc: &Document) -> Result<usize> {
    let catalog_ref = doc
        .trailer
        .get(b"Root")
        .map_err(|_| Error::General("No Root in trailer".to_string()))?;

    let catalog_id = match catalog_ref {
        Object::Reference(id) => *id,
        _ => return Err(Error::General("Root is not a reference".to_string())),
    };

    let catalog = doc.get_object(catalog_id)?.as_dict().map_err(Error::Pdf)?;

    let pages_id = match catalog.get(b"Pages") {
        Ok(Object::Reference(id)) => *id,
        _ => return Err(Error::General("No Pages reference in catalog".to_string())),
    };

    let pages = doc.get_object(pages_id)?.as_dict().map_err(Error::Pdf)?;

    match pages.get(b"Count") {
        Ok(Object::Integer(n)) => Ok(*n as usize),
        _ => Err(Error::General("No Count in Pages".to_string())),
    }
}

/// Read the media box of the first page, if present
fn first_page_media_box(doc: &Document) -> Option<(f64, f64)> {
    let (_, page_id) = doc.get_pages().into_iter().next()?;
    let page = doc.get_object(page_id).ok()?.as_dict().ok()?;
    let media_box = match page.get(b"MediaBox").ok()? {
        Object::Array(values) => values.clone(),
        Object::Reference(id) => match doc.get_object(*id).ok()? {
            Object::Array(values) => values.clone(),
            _ => return None,
        },
        _ => return None,
    };

    if media_box.len() != 4 {
        return None;
    }

    let nums: Vec<f64> = media_box
        .iter()
        .filter_map(|obj| match obj {
            Object::Integer(i) => Some(*i as f64),
            Object::Real(r) => Some(f64::from(*r)),
            _ => None,
        })
        .collect();

    if nums.len() != 4 {
        return None;
    }

    Some((nums[2] - nums[0], nums[3] - nums[1]))
}

/// Extract metadata from a PDF file
pub fn extract_metadata(path: &Path) -> Result<PdfMetadata> {
    let doc = Document::load(path)?;

    let page_count = count_pages_from_catalog(&doc)?;
    if page_count == 0 {
        return Err(Error::EmptyPdf(path.to_path_buf()));
    }

    Ok(PdfMetadata {
        page_count,
        media_box: first_page_media_box(&doc),
    })
}

/// Count the number of pages in a PDF file
pub fn count_pages(path: &Path) -> Result<usize> {
    extract_metadata(path).map(|metadata| metadata.page_count)
}
