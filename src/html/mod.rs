pub mod frequency;
pub mod inspector;
pub mod lexer;
pub mod report;

pub use frequency::FrequencyTable;
pub use inspector::{DraftInspector, InteractiveElement, RootChild, INTERACTIVE_TAGS, SEMANTIC_TAGS};
pub use lexer::{Attributes, Lexer, Token};
pub use report::{Inspection, InspectionReport};

use crate::error::ScanError;
use log::info;
use std::fs;
use std::path::Path;

/// Walk `raw_html` once and shape the result.
pub fn inspect(raw_html: &str) -> Inspection {
    let mut inspector = DraftInspector::new();
    inspector.feed(raw_html);
    inspector.summarize()
}

/// Validate and read a local `.html` draft, then inspect it.
pub fn inspect_file(path: &Path) -> Result<InspectionReport, ScanError> {
    if !path.is_file() {
        return Err(ScanError::HtmlNotFound(path.to_path_buf()));
    }

    let is_html = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("html"))
        .unwrap_or(false);
    if !is_html {
        return Err(ScanError::NotHtml(path.to_path_buf()));
    }

    let raw_html = fs::read_to_string(path).map_err(|source| ScanError::HtmlUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let resolved = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    info!("inspecting {} ({} bytes)", resolved.display(), raw_html.len());

    Ok(InspectionReport {
        html_path: resolved.display().to_string(),
        inspection: inspect(&raw_html),
    })
}
