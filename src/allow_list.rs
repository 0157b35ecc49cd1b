use tracing::info;

use crate::model::ProjectCandidate;

/// Keep candidates whose name contains any keyword (case-insensitive). Input order is kept.
pub fn filter(candidates: Vec<ProjectCandidate>, keywords: &[String]) -> Vec<ProjectCandidate> {
    let keywords: Vec<String> = keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect();

    let total = candidates.len();
    let kept: Vec<ProjectCandidate> = candidates
        .into_iter()
        .filter(|c| {
            let name = c.name.to_lowercase();
            keywords.iter().any(|k| name.contains(k.as_str()))
        })
        .collect();

    info!("Allow-list kept {} of {} candidates", kept.len(), total);
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(name: &str, link: &str) -> ProjectCandidate {
        ProjectCandidate::new(name, link)
    }

    #[test]
    fn substring_match_keeps_and_drops() {
        let list = vec!["הרצל 102".to_string()];
        let kept = filter(
            vec![
                c("מתחם הרצל 102 | ראשון לציון", "https://x/1"),
                c("מתחם אחר | חיפה", "https://x/2"),
            ],
            &list,
        );
        assert_eq!(kept, vec![c("מתחם הרצל 102 | ראשון לציון", "https://x/1")]);
    }

    #[test]
    fn case_insensitive_and_ordered() {
        let list = vec!["m61".to_string(), "S61".to_string()];
        let kept = filter(
            vec![
                c("שטרן 13-19 (מתחם M61) | אור יהודה", "https://x/a"),
                c("מתחם גולני | עכו", "https://x/b"),
                c("סיני 2-14 (מתחם s61) | אור יהודה", "https://x/c"),
            ],
            &list,
        );
        let links: Vec<&str> = kept.iter().map(|k| k.link.as_str()).collect();
        assert_eq!(links, vec!["https://x/a", "https://x/c"]);
    }

    #[test]
    fn blank_keywords_match_nothing() {
        let kept = filter(vec![c("מתחם", "https://x/1")], &["  ".to_string()]);
        assert!(kept.is_empty());
    }
}
