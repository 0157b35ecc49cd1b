pub mod extract;
pub mod links;

use scraper::{Html, Selector};
use tracing::debug;

/// An `<a>` element reduced to what the heuristics look at.
#[derive(Debug, Clone)]
pub struct Anchor {
    pub text: String,
    pub href: String,
}

/// Parsed HTML page. The heuristics only query pages through this type,
/// so they run the same against fixtures and live responses.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    fn selector(css: &str) -> Option<Selector> {
        match Selector::parse(css) {
            Ok(sel) => Some(sel),
            Err(e) => {
                debug!("Bad selector {:?}: {:?}", css, e);
                None
            }
        }
    }

    /// Anchors with a non-empty `href`, in document order. Text is trimmed.
    pub fn anchors(&self, css: &str) -> Vec<Anchor> {
        let Some(sel) = Self::selector(css) else {
            return Vec::new();
        };
        self.html
            .select(&sel)
            .filter_map(|el| {
                let href = el.value().attr("href")?.trim();
                if href.is_empty() {
                    return None;
                }
                Some(Anchor {
                    text: el.text().collect::<String>().trim().to_string(),
                    href: href.to_string(),
                })
            })
            .collect()
    }

    /// Trimmed text of every element matching `css`, in document order.
    pub fn texts(&self, css: &str) -> Vec<String> {
        let Some(sel) = Self::selector(css) else {
            return Vec::new();
        };
        self.html
            .select(&sel)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .collect()
    }

    /// Trimmed text of the first match, if that text is non-empty.
    pub fn first_text(&self, css: &str) -> Option<String> {
        let sel = Self::selector(css)?;
        let text = self
            .html
            .select(&sel)
            .next()?
            .text()
            .collect::<String>()
            .trim()
            .to_string();
        (!text.is_empty()).then_some(text)
    }

    /// Raw `<title>` text.
    pub fn title(&self) -> Option<String> {
        let text: String = self.texts("title").concat();
        (!text.is_empty()).then_some(text)
    }

    /// `src` of every `<img>`, falling back to the lazy-load `data-src`.
    pub fn image_sources(&self) -> Vec<String> {
        let Some(sel) = Self::selector("img") else {
            return Vec::new();
        };
        self.html
            .select(&sel)
            .filter_map(|el| {
                let attrs = el.value();
                attrs
                    .attr("src")
                    .filter(|s| !s.trim().is_empty())
                    .or_else(|| attrs.attr("data-src"))
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
            })
            .collect()
    }
}
