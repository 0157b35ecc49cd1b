use std::sync::LazyLock;

use regex::Regex;

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

// Order encodes priority: the first pattern that yields a number wins.
static BEFORE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"([0-9][0-9,]*)\s*יחידות?\s*דיור\s*קיימות",
        r#"([0-9][0-9,]*)\s*יח"ד\s*קיימות"#,
        r"([0-9][0-9,]*)\s*דירות?\s*קיימות",
        r"קיימות\s*([0-9][0-9,]*)\s*יחידות",
        r"([0-9][0-9,]*)\s*יחידות?\s*קיימות",
    ])
});

static AFTER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"([0-9][0-9,]*)\s*יחידות?\s*דיור\s*חדשות",
        r#"([0-9][0-9,]*)\s*יח"ד\s*חדשות"#,
        r"([0-9][0-9,]*)\s*דירות?\s*חדשות",
        r"יבנו\s*([0-9][0-9,]*)\s*יחידות",
        r"([0-9][0-9,]*)\s*יחידות?\s*דיור\s*מתוכננות",
        r#"סה"כ\s*([0-9][0-9,]*)\s*יחידות"#,
    ])
});

/// Number of existing apartments.
pub fn apartments_before(text: &str) -> Option<u32> {
    first_number(text, &BEFORE_PATTERNS)
}

/// Number of apartments after the project.
pub fn apartments_after(text: &str) -> Option<u32> {
    first_number(text, &AFTER_PATTERNS)
}

fn first_number(text: &str, patterns: &[Regex]) -> Option<u32> {
    patterns.iter().find_map(|re| {
        let caps = re.captures(text)?;
        parse_count(&caps[1])
    })
}

/// "1,234" -> 1234. Anything that is not a u32 after stripping commas is `None`.
pub fn parse_count(raw: &str) -> Option<u32> {
    raw.replace(',', "").parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn existing_and_new_units() {
        let text = "בפרויקט 120 יחידות דיור קיימות ולאחריו יוקמו 180 יחידות דיור חדשות.";
        assert_eq!(apartments_before(text), Some(120));
        assert_eq!(apartments_after(text), Some(180));
    }

    #[test]
    fn abbreviations_and_alternate_wording() {
        assert_eq!(apartments_before(r#"64 יח"ד קיימות"#), Some(64));
        assert_eq!(apartments_before("32 דירות קיימות"), Some(32));
        assert_eq!(apartments_before("קיימות 48 יחידות"), Some(48));
        assert_eq!(apartments_after("במקום יבנו 210 יחידות"), Some(210));
        assert_eq!(apartments_after(r#"סה"כ 300 יחידות"#), Some(300));
        assert_eq!(apartments_after("450 יחידות דיור מתוכננות"), Some(450));
    }

    #[test]
    fn thousands_separator() {
        assert_eq!(apartments_after("1,234 יחידות דיור חדשות"), Some(1234));
    }

    #[test]
    fn earlier_pattern_wins() {
        let text = r#"סה"כ 999 יחידות, מתוכן 250 דירות חדשות"#;
        assert_eq!(apartments_after(text), Some(250));
    }

    #[test]
    fn unparseable_is_absent_not_zero() {
        assert_eq!(apartments_before("אין נתונים"), None);
        assert_eq!(apartments_before("99999999999 יחידות דיור קיימות"), None);
    }

    proptest! {
        #[test]
        fn parse_count_strips_commas(n in 0u32..=u32::MAX) {
            let mut grouped = String::new();
            let digits = n.to_string();
            for (i, ch) in digits.chars().enumerate() {
                if i > 0 && (digits.len() - i) % 3 == 0 {
                    grouped.push(',');
                }
                grouped.push(ch);
            }
            prop_assert_eq!(parse_count(&grouped), Some(n));
        }
    }
}
