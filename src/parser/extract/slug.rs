use std::sync::LazyLock;

use regex::Regex;

static DISALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\x{0590}-\x{05FF}A-Za-z0-9_\s-]").unwrap());
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// URL-safe identifier: Hebrew letters, ASCII word chars and hyphens.
pub fn slugify(text: &str) -> String {
    let kept = DISALLOWED_RE.replace_all(text, "");
    WS_RE.replace_all(kept.trim(), "-").to_lowercase()
}

/// Slug of `title`, or `project-<index>` when nothing survives.
pub fn slug_or_fallback(title: &str, index: usize) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        format!("project-{}", index)
    } else {
        slug
    }
}

pub fn project_id(index: usize) -> String {
    format!("proj-{}", index)
}
