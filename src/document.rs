//! Plain-text extraction from the downloaded PDF report.

use crate::error::Result;
use lopdf::Document;
use std::path::Path;
use tracing::{debug, warn};

/// Load the PDF at `path` and return the text of each page, in page order.
///
/// A page whose content cannot be decoded yields an empty string rather than
/// failing the whole document.
pub fn page_texts(path: &Path) -> Result<Vec<String>> {
    let doc = Document::load(path)?;
    let pages = doc.get_pages();
    debug!(pages = pages.len(), path = %path.display(), "loaded report");

    let texts = pages
        .keys()
        .map(|&number| match doc.extract_text(&[number]) {
            Ok(text) => text,
            Err(e) => {
                warn!(page = number, error = %e, "page has no extractable text");
                String::new()
            }
        })
        .collect();
    Ok(texts)
}

/// Full document text with pages joined by newlines.
///
/// Unreadable documents produce an empty string; the field extractor then
/// simply finds nothing.
pub fn extract_text(path: &Path) -> String {
    match page_texts(path) {
        Ok(pages) => pages.join("\n"),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read report document");
            String::new()
        }
    }
}
