use crate::model::Category;

/// Checked top to bottom; the first rule with any keyword present wins.
const RULES: &[(&[&str], Category)] = &[
    (&["פינוי בינוי", "פינוי-בינוי"], Category::EvictionReconstruction),
    (&["38/2", "הריסה ובנייה"], Category::DemolitionRebuild),
    (&["38/1", "חיזוק ותוספת", "תמ\"א 38"], Category::ReinforcementAddition),
];

/// Used when no keyword matches. Business rule of the source site, not `Other`.
pub const DEFAULT_CATEGORY: Category = Category::EvictionReconstruction;

pub fn infer_category(text: &str) -> Category {
    let text = text.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| text.contains(&k.to_lowercase())))
        .map(|(_, category)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}
