use crate::parser::Document;
use crate::sanitize::{normalize_ws, truncate_chars};

pub const MAX_RAW_TEXT_CHARS: usize = 2000;

/// Content selectors, most specific first. Every selector contributes;
/// overlapping matches are kept as-is.
const DETAIL_SELECTORS: &[&str] = &[
    ".project-details",
    ".project-content",
    ".project-description",
    ".elementor-widget-text-editor",
    "article .content",
    "article p",
    "main p",
];

/// All detail text of the page, whitespace-collapsed.
pub fn details_text(doc: &Document) -> String {
    let mut buf = String::new();
    for selector in DETAIL_SELECTORS {
        for text in doc.texts(selector) {
            buf.push(' ');
            buf.push_str(&text);
        }
    }
    normalize_ws(&buf)
}

/// Details text capped for storage.
pub fn raw_details(details: &str) -> Option<String> {
    let capped = truncate_chars(details, MAX_RAW_TEXT_CHARS);
    (!capped.is_empty()).then(|| capped.to_string())
}
