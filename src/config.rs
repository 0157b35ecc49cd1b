use std::path::PathBuf;
use std::time::Duration;

use url::Url;

pub const BASE_URL: &str = "https://bereshitgroup.co.il";
pub const OUTPUT_PATH: &str = "src/data/projects.json";

pub const MAX_RETRIES: u32 = 2;
pub const RETRY_BACKOFF_MS: u64 = 1000;
pub const REQUEST_DELAY_MS: u64 = 500;

pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
pub const ACCEPT_LANGUAGE: &str = "he-IL,he;q=0.9,en-US;q=0.8,en;q=0.7";

/// Keywords of the curated project subset (matched as substrings of the candidate name).
pub const ALLOW_LIST: &[&str] = &[
    "ז'בוטינסקי",
    "נחלת אשר",
    "יד לבנים",
    "גור אריה",
    "זולוטוב",
    "הרצל",
    "S61",
    "M61",
    "גולני",
];

/// Path segments that mark a link as a project page even off the main domain.
pub const SITE_PATH_MARKERS: &[&str] = &["/project", "/projects/", "/פרויקט", "/מתחם"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Every project found on the listing page.
    #[default]
    All,
    /// Only allow-listed projects, plus the manually curated record.
    Curated,
}

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub base_url: String,
    pub listing_url: String,
    pub output_path: PathBuf,
    pub mode: Mode,
    pub allow_list: Vec<String>,
    pub site_path_markers: Vec<String>,
    pub max_retries: u32,
    pub retry_backoff: Duration,
    pub request_delay: Duration,
    pub user_agent: String,
    pub accept_language: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            listing_url: BASE_URL.to_string(),
            output_path: PathBuf::from(OUTPUT_PATH),
            mode: Mode::All,
            allow_list: ALLOW_LIST.iter().map(|s| s.to_string()).collect(),
            site_path_markers: SITE_PATH_MARKERS.iter().map(|s| s.to_string()).collect(),
            max_retries: MAX_RETRIES,
            retry_backoff: Duration::from_millis(RETRY_BACKOFF_MS),
            request_delay: Duration::from_millis(REQUEST_DELAY_MS),
            user_agent: USER_AGENT.to_string(),
            accept_language: ACCEPT_LANGUAGE.to_string(),
        }
    }
}

impl ScrapeConfig {
    /// Point both the base and the listing page at another site.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        self.listing_url = base.clone();
        self.base_url = base;
        self
    }

    /// Host of `base_url` without a leading `www.`.
    pub fn site_domain(&self) -> Option<String> {
        let url = Url::parse(&self.base_url).ok()?;
        let host = url.host_str()?;
        Some(host.trim_start_matches("www.").to_string())
    }

    pub fn base(&self) -> Option<Url> {
        Url::parse(&self.base_url).ok()
    }
}
