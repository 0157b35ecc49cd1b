use tracing::warn;

/// Force an absolute URL onto https. `http://` is upgraded; any other scheme is dropped.
pub fn sanitize_url(url: &str) -> Option<String> {
    if let Some(rest) = strip_prefix_ci(url, "http://") {
        return Some(format!("https://{}", rest));
    }
    if let Some(rest) = strip_prefix_ci(url, "https://") {
        return Some(format!("https://{}", rest));
    }
    warn!("Dropping non-https URL: {}", url);
    None
}

fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

/// Collapse every whitespace run (newlines included) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First `max` chars of `s`.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_is_upgraded() {
        assert_eq!(
            sanitize_url("http://example.com/a.jpg").as_deref(),
            Some("https://example.com/a.jpg")
        );
        assert_eq!(
            sanitize_url("HTTP://example.com/a.jpg").as_deref(),
            Some("https://example.com/a.jpg")
        );
    }

    #[test]
    fn https_is_kept() {
        assert_eq!(
            sanitize_url("https://example.com/").as_deref(),
            Some("https://example.com/")
        );
    }

    #[test]
    fn other_schemes_are_dropped() {
        assert_eq!(sanitize_url("ftp://example.com/a.jpg"), None);
        assert_eq!(sanitize_url("//cdn.example.com/a.jpg"), None);
        assert_eq!(sanitize_url("data:image/png;base64,AAAA"), None);
        assert_eq!(sanitize_url(""), None);
    }

    #[test]
    fn ws_collapses() {
        assert_eq!(normalize_ws("  a \n\n b\t c  "), "a b c");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_chars("שלום עולם", 4), "שלום");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }
}
