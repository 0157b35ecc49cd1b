pub const MAX_DESCRIPTION_CHARS: usize = 200;
const MIN_FRAGMENT_CHARS: usize = 10;
const ELLIPSIS: &str = "...";

/// First two sentence-like fragments of the details text, closed with a period
/// or cut to 200 chars with an ellipsis.
pub fn short_description(text: &str) -> Option<String> {
    let fragments: Vec<&str> = text
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_FRAGMENT_CHARS)
        .take(2)
        .collect();
    if fragments.is_empty() {
        return None;
    }

    let desc = fragments.join(". ");
    if desc.chars().count() + 1 > MAX_DESCRIPTION_CHARS {
        let keep = MAX_DESCRIPTION_CHARS - ELLIPSIS.len();
        let cut: String = desc.chars().take(keep).collect();
        Some(format!("{}{}", cut, ELLIPSIS))
    } else {
        Some(format!("{}.", desc))
    }
}
