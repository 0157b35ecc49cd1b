use std::time::Duration;

use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{self, ScrapeConfig};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {0}")]
    Status(StatusCode),
}

/// Where pages come from. `None` means the page is unavailable after all retries.
pub trait PageSource {
    async fn fetch(&self, url: &str) -> Option<String>;
}

pub struct HttpFetcher {
    client: reqwest::Client,
    max_retries: u32,
    backoff: Duration,
}

impl HttpFetcher {
    pub fn new(cfg: &ScrapeConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(config::ACCEPT));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_str(&cfg.accept_language)?);

        let client = reqwest::Client::builder()
            .user_agent(cfg.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            max_retries: cfg.max_retries,
            backoff: cfg.retry_backoff,
        })
    }

    async fn fetch_once(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        Ok(response.text().await?)
    }
}

impl PageSource for HttpFetcher {
    async fn fetch(&self, url: &str) -> Option<String> {
        for attempt in 1..=self.max_retries + 1 {
            match self.fetch_once(url).await {
                Ok(body) => {
                    debug!("Fetched {} ({} bytes)", url, body.len());
                    return Some(body);
                }
                Err(e) => {
                    warn!("Attempt {} failed for {}: {}", attempt, url, e);
                    if attempt <= self.max_retries {
                        tokio::time::sleep(retry_delay(self.backoff, attempt)).await;
                    }
                }
            }
        }
        None
    }
}

/// Linear backoff: the wait after the n-th failed attempt is `backoff × n`.
pub fn retry_delay(backoff: Duration, attempt: u32) -> Duration {
    backoff * attempt
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    /// Local HTTP server answering every request with `status` and `body`.
    /// Returns its URL and a count of requests served.
    async fn serve(status: &'static str, body: &'static str) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = vec![0u8; 8192];
                let mut read = 0;
                while let Ok(n) = socket.read(&mut buf[read..]).await {
                    read += n;
                    if n == 0 || read == buf.len() || buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }
                counter.fetch_add(1, Ordering::SeqCst);
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        (url, hits)
    }

    fn fast_fetcher(max_retries: u32) -> HttpFetcher {
        let mut cfg = ScrapeConfig::default();
        cfg.max_retries = max_retries;
        cfg.retry_backoff = Duration::from_millis(1);
        HttpFetcher::new(&cfg).unwrap()
    }

    #[test]
    fn backoff_is_linear() {
        let base = Duration::from_millis(1000);
        assert_eq!(retry_delay(base, 1), Duration::from_millis(1000));
        assert_eq!(retry_delay(base, 2), Duration::from_millis(2000));
    }

    #[test]
    fn client_builds_with_default_headers() {
        assert!(HttpFetcher::new(&ScrapeConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn unreachable_host_gives_none_after_retries() {
        // port 9 (discard) on localhost refuses connections
        assert_eq!(fast_fetcher(1).fetch("http://127.0.0.1:9/").await, None);
    }

    #[tokio::test]
    async fn server_error_is_retried_then_gives_none() {
        let (url, hits) = serve("503 Service Unavailable", "").await;
        assert_eq!(fast_fetcher(2).fetch(&url).await, None);
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn success_is_not_retried() {
        let (url, hits) = serve("200 OK", "<html>ok</html>").await;
        assert_eq!(
            fast_fetcher(2).fetch(&url).await.as_deref(),
            Some("<html>ok</html>")
        );
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
