use crate::model::{Category, Project, Status};
use crate::parser::extract::location::extract_address;
use crate::parser::extract::slug::{project_id, slug_or_fallback};

/// Known projects, written when the live site yields nothing usable.
const SAMPLE: &[(&str, &str)] = &[
    ("מתחם ז'בוטינסקי-חשמונאים-לוי-לאן | רמת גן", "רמת גן"),
    ("מתחם נחלת אשר | נהריה", "נהריה"),
    ("מתחם יד לבנים | חיפה", "חיפה"),
    ("מתחם גור אריה | בית שמש", "בית שמש"),
    ("מתחם זולוטוב | בית שמש", "בית שמש"),
    ("מתחם הרצל מוהליבר | ראשון לציון", "ראשון לציון"),
    ("סיני 2-14 (מתחם S61) | אור יהודה", "אור יהודה"),
    (
        "אור יום 4-10, איילת השחר 10-12-14, שטרן 13-19 (מתחם M61) | אור יהודה",
        "אור יהודה",
    ),
    ("מתחם גולני משה שרת | עכו", "עכו"),
];

pub fn sample_projects(base_url: &str) -> Vec<Project> {
    SAMPLE
        .iter()
        .enumerate()
        .map(|(i, (name, city))| Project {
            id: project_id(i + 1),
            slug: slug_or_fallback(name, i + 1),
            name: name.to_string(),
            city: Some(city.to_string()),
            address: extract_address(name),
            category: Category::EvictionReconstruction,
            status: Status::UnderReview,
            apartments_before: None,
            apartments_after: None,
            short_description: Some(format!("פרויקט פינוי בינוי ב{}.", city)),
            raw_details_text: None,
            images: Vec::new(),
            external_link: base_url.to_string(),
        })
        .collect()
}

/// Hand-curated project that is not listed on the source site.
pub fn manual_project() -> Project {
    Project {
        id: "proj-manual-1".to_string(),
        slug: "מתחם-הנביאים-חולון".to_string(),
        name: "מתחם הנביאים | חולון".to_string(),
        city: Some("חולון".to_string()),
        address: Some("מתחם הנביאים".to_string()),
        category: Category::EvictionReconstruction,
        status: Status::UnderReview,
        apartments_before: Some(48),
        apartments_after: Some(156),
        short_description: Some(
            "פרויקט פינוי בינוי בשכונת הנביאים בחולון. הפרויקט נמצא בשלבי בדיקה ראשוניים."
                .to_string(),
        ),
        raw_details_text: None,
        images: Vec::new(),
        external_link: String::new(),
    }
}
