use std::collections::HashSet;

use tracing::{debug, info};
use url::Url;

use super::{Anchor, Document};
use crate::config::ScrapeConfig;
use crate::model::ProjectCandidate;
use crate::sanitize::normalize_ws;

const HEADING_ANCHORS: &str = "h2 a, h3 a, h4 a";
const CONTAINER_ANCHORS: &str = "article a, .project a, .elementor-post a, \
     .elementor-widget-container a, .jet-listing-grid__item a";

const NAME_SEPARATOR: char = '|';
const NAME_MARKER: &str = "מתחם";

/// Collect project candidates from a listing page, de-duplicated by link.
pub fn collect(doc: &Document, cfg: &ScrapeConfig) -> Vec<ProjectCandidate> {
    let base = cfg.base();
    let domain = cfg.site_domain();

    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for pass in [HEADING_ANCHORS, CONTAINER_ANCHORS] {
        for anchor in doc.anchors(pass) {
            let Some(candidate) = accept(&anchor, base.as_ref(), domain.as_deref(), cfg) else {
                continue;
            };
            if seen.insert(candidate.link.clone()) {
                out.push(candidate);
            }
        }
    }

    info!("Found {} projects on listing page", out.len());
    out
}

fn accept(
    anchor: &Anchor,
    base: Option<&Url>,
    domain: Option<&str>,
    cfg: &ScrapeConfig,
) -> Option<ProjectCandidate> {
    let name = normalize_ws(&anchor.text);
    if !looks_like_project_name(&name) {
        return None;
    }
    let link = resolve(&anchor.href, base)?;
    if !is_site_link(&anchor.href, &link, domain, &cfg.site_path_markers) {
        debug!("Skipping off-site link {} ({})", link, name);
        return None;
    }
    Some(ProjectCandidate::new(name, link))
}

/// Project titles look like "מתחם X | city".
pub fn looks_like_project_name(text: &str) -> bool {
    !text.is_empty() && (text.contains(NAME_SEPARATOR) || text.contains(NAME_MARKER))
}

fn resolve(href: &str, base: Option<&Url>) -> Option<String> {
    if href.starts_with('#') || href.starts_with("javascript:") || href.starts_with("mailto:") {
        return None;
    }
    match Url::parse(href) {
        Ok(url) => Some(url.to_string()),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            base.and_then(|b| b.join(href).ok()).map(|u| u.to_string())
        }
        Err(_) => None,
    }
}

fn is_site_link(raw: &str, resolved: &str, domain: Option<&str>, markers: &[String]) -> bool {
    if Url::parse(raw).is_err() {
        // relative to the site itself
        return true;
    }
    let on_domain = domain.is_some_and(|d| {
        Url::parse(resolved)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.to_string()))
            .is_some_and(|h| h == d || h.ends_with(&format!(".{}", d)))
    });
    on_domain || markers.iter().any(|m| raw.contains(m.as_str()) || resolved.contains(m.as_str()))
}
