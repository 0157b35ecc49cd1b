pub mod apartments;
pub mod category;
pub mod content;
pub mod description;
pub mod images;
pub mod location;
pub mod slug;

use tracing::debug;
use url::Url;

use super::Document;
use crate::model::{Project, ProjectCandidate, Status};
use crate::sanitize::sanitize_url;

/// Build a `Project` from a fetched detail page. `index` is 1-based.
pub fn extract(
    candidate: &ProjectCandidate,
    doc: &Document,
    index: usize,
    base: Option<&Url>,
) -> Project {
    let title = location::resolve_title(&candidate.name, doc)
        .unwrap_or_else(|| candidate.link.clone());

    let details = content::details_text(doc);
    let images = images::collect_images(doc, base);
    if images.dropped > 0 {
        debug!("{}: dropped {} non-https images", candidate.link, images.dropped);
    }

    Project {
        id: slug::project_id(index),
        slug: slug::slug_or_fallback(&title, index),
        city: location::extract_city(&title),
        address: location::extract_address(&title),
        category: category::infer_category(&details),
        status: Status::UnderReview,
        apartments_before: apartments::apartments_before(&details),
        apartments_after: apartments::apartments_after(&details),
        short_description: description::short_description(&details),
        raw_details_text: content::raw_details(&details),
        images: images.urls,
        external_link: sanitize_url(&candidate.link).unwrap_or_else(|| candidate.link.clone()),
        name: title,
    }
}

// ── Tests ──
