use std::collections::HashSet;

use url::Url;

use crate::parser::Document;
use crate::sanitize::sanitize_url;

pub const MAX_IMAGES: usize = 10;

const REJECT_MARKERS: &[&str] = &["logo", "icon", "placeholder", "data:image"];
const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".webp"];

#[derive(Debug, Default, PartialEq)]
pub struct Images {
    /// https-only, unique, in page order, at most `MAX_IMAGES`.
    pub urls: Vec<String>,
    /// Sources dropped by the https check.
    pub dropped: usize,
}

/// Gallery images of a project page.
pub fn collect_images(doc: &Document, base: Option<&Url>) -> Images {
    let mut seen = HashSet::new();
    let mut images = Images::default();

    for src in doc.image_sources() {
        if !is_gallery_image(&src) || !seen.insert(src.clone()) {
            continue;
        }
        let Some(absolute) = absolutize(&src, base) else {
            continue;
        };
        match sanitize_url(&absolute) {
            Some(url) => images.urls.push(url),
            None => images.dropped += 1,
        }
    }

    images.urls.truncate(MAX_IMAGES);
    images
}

fn is_gallery_image(src: &str) -> bool {
    !REJECT_MARKERS.iter().any(|m| src.contains(m))
        && IMAGE_EXTENSIONS.iter().any(|ext| src.contains(ext))
}

fn absolutize(src: &str, base: Option<&Url>) -> Option<String> {
    if src.starts_with("http") {
        return Some(src.to_string());
    }
    match Url::parse(src) {
        Ok(url) => Some(url.to_string()),
        Err(_) => base?.join(src).ok().map(|u| u.to_string()),
    }
}
