use std::cmp::Ordering;

use anyhow::{anyhow, Result};
use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;

/// ICU collation for the `he` locale. Hebrew script sorts ahead of Latin,
/// final forms and niqqud only matter once the base letters tie.
pub struct HebrewCollator {
    collator: Collator,
}

impl HebrewCollator {
    pub fn new() -> Result<Self> {
        let he = locale!("he").into();
        let collator = Collator::try_new(&he, CollatorOptions::new())
            .map_err(|e| anyhow!("Hebrew collation data unavailable: {:?}", e))?;
        Ok(Self { collator })
    }

    /// Total order: collation ties fall back to the raw strings.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b).then_with(|| a.cmp(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn he() -> HebrewCollator {
        HebrewCollator::new().unwrap()
    }

    fn sorted(mut v: Vec<&str>) -> Vec<&str> {
        let c = he();
        v.sort_by(|a, b| c.compare(a, b));
        v
    }

    #[test]
    fn hebrew_alphabetical() {
        assert_eq!(
            sorted(vec!["מתחם נחלת אשר", "אור יום", "גור אריה", "בית"]),
            vec!["אור יום", "בית", "גור אריה", "מתחם נחלת אשר"]
        );
    }

    #[test]
    fn project_names_match_locale_compare_order() {
        // order produced by localeCompare(…, "he")
        assert_eq!(
            sorted(vec![
                "מתחם S61 | אור יהודה",
                "מתחם בית | לוד",
                "מתחם M61 | אור יהודה",
                "מתחם ב-12 | לוד",
                "מתחם אלון | חיפה",
                "מתחם (א) | לוד",
                "מתחם ב 12 | לוד",
            ]),
            vec![
                "מתחם (א) | לוד",
                "מתחם אלון | חיפה",
                "מתחם ב 12 | לוד",
                "מתחם ב-12 | לוד",
                "מתחם בית | לוד",
                "מתחם M61 | אור יהודה",
                "מתחם S61 | אור יהודה",
            ]
        );
    }

    #[test]
    fn hebrew_before_latin() {
        assert_eq!(he().compare("מתחם", "alpha"), Ordering::Less);
        assert_eq!(he().compare("Zeta", "אבג"), Ordering::Greater);
    }

    #[test]
    fn final_forms_sort_with_base_letter() {
        let c = he();
        assert_eq!(c.compare("אם", "אן"), Ordering::Less);
        assert_eq!(c.compare("אםב", "אמא"), Ordering::Greater);
    }

    #[test]
    fn space_sorts_before_letters() {
        assert_eq!(he().compare("גן יבנה", "גנים"), Ordering::Less);
    }

    #[test]
    fn niqqud_is_ignored_at_first_level() {
        let c = he();
        assert_eq!(c.compare("אָב", "אג"), Ordering::Less);
        assert_eq!(c.compare("שָׁלוֹם", "שלוםא"), Ordering::Less);
    }

    #[test]
    fn total_and_deterministic() {
        let c = he();
        assert_eq!(c.compare("מתחם", "מתחם"), Ordering::Equal);
        assert_ne!(c.compare("Abc", "abc"), Ordering::Equal);
    }
}
