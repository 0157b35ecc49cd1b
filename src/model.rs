use serde::{Deserialize, Serialize};

/// A project link found on the listing page, before its detail page is fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCandidate {
    pub name: String,
    pub link: String,
}

impl ProjectCandidate {
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
        }
    }
}

/// Wire literals are consumed verbatim by the front-end.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "פינוי בינוי")]
    EvictionReconstruction,
    #[serde(rename = "הריסה ובנייה (38/2)")]
    DemolitionRebuild,
    #[serde(rename = "חיזוק ותוספת (38/1)")]
    ReinforcementAddition,
    #[serde(rename = "אחר")]
    Other,
}

/// Scraping only ever produces `UnderReview`.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "בבדיקה")]
    UnderReview,
    #[serde(rename = "בתכנון")]
    Planning,
    #[serde(rename = "בביצוע")]
    InProgress,
    #[serde(rename = "הושלם")]
    Completed,
    #[serde(rename = "לא ידוע")]
    Unknown,
}

/// One record of the persisted dataset. Field order is the JSON field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub city: Option<String>,
    pub address: Option<String>,
    pub category: Category,
    pub status: Status,
    pub apartments_before: Option<u32>,
    pub apartments_after: Option<u32>,
    pub short_description: Option<String>,
    pub raw_details_text: Option<String>,
    pub images: Vec<String>,
    pub external_link: String,
}
