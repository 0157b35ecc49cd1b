use std::sync::LazyLock;

use regex::Regex;

use crate::parser::Document;
use crate::sanitize::normalize_ws;

static CITY_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\|\s*(.+)$").unwrap());
static CITY_STRIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\|.*$").unwrap());

/// Known cities, in match priority order.
pub const CITIES: &[&str] = &[
    "תל אביב", "ירושלים", "חיפה", "באר שבע", "ראשון לציון", "פתח תקווה",
    "אשדוד", "נתניה", "בני ברק", "חולון", "רמת גן", "אשקלון", "רחובות",
    "בת ים", "הרצליה", "כפר סבא", "רעננה", "הוד השרון", "גבעתיים",
    "קריית אונו", "קריית גת", "נס ציונה", "לוד", "רמלה", "מודיעין",
    "יבנה", "נהריה", "עכו", "כרמיאל", "טבריה", "אילת", "דימונה",
    "ערד", "צפת", "עפולה", "נצרת", "מגדל העמק", "יהוד", "גבעת שמואל",
    "אור יהודה", "קריית אתא", "נשר", "טירת כרמל", "רמת השרון",
    "גני תקווה", "קריית שמונה", "גדרה", "קדימה", "בית שמש",
];

/// Display title: the listing name, else the page `<h1>`, else `<title>` up to its first `|`.
pub fn resolve_title(known_name: &str, doc: &Document) -> Option<String> {
    let known = known_name.trim();
    if !known.is_empty() {
        return Some(known.to_string());
    }
    if let Some(h1) = doc.first_text("h1") {
        return Some(normalize_ws(&h1));
    }
    doc.title()
        .and_then(|t| t.split('|').next().map(|s| s.trim().to_string()))
        .filter(|t| !t.is_empty())
}

/// City from a "... | city" suffix, else the first known city named in the title.
pub fn extract_city(title: &str) -> Option<String> {
    if let Some(caps) = CITY_SUFFIX_RE.captures(title) {
        let city = caps[1].trim();
        if !city.is_empty() {
            return Some(city.to_string());
        }
    }
    CITIES
        .iter()
        .find(|city| title.contains(*city))
        .map(|city| city.to_string())
}

/// Title with any "| city" suffix removed.
pub fn extract_address(title: &str) -> Option<String> {
    let address = CITY_STRIP_RE.replace(title, "").trim().to_string();
    (!address.is_empty()).then_some(address)
}
