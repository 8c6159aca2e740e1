// Trending listing HTTP client.
// Issues browser-identified GETs against the public trending page.

use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, USER_AGENT},
};
use tracing::debug;

use crate::error::Result;

use super::TrendingSource;
use super::parse;
use super::types::TrendingRepo;

const TRENDING_BASE: &str = "https://github.com/trending";

// The listing rejects requests without a browser-like identity.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// HTTP client for the trending listing page.
pub struct TrendingClient {
    client: Client,
    base_url: String,
}

impl TrendingClient {
    /// Create a new client with the browser User-Agent preset.
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: TRENDING_BASE.to_string(),
        })
    }

    /// Fetch the raw listing markup, optionally scoped to one language.
    /// Transport failures and non-success statuses fail the call; there is
    /// no retry.
    async fn fetch_page(&self, language: Option<&str>) -> Result<String> {
        let url = match language {
            Some(language) => format!("{}/{}", self.base_url, language),
            None => self.base_url.clone(),
        };

        debug!(%url, "requesting trending listing");
        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

impl TrendingSource for TrendingClient {
    async fn fetch(&self, language: Option<&str>) -> Result<Vec<TrendingRepo>> {
        let html = self.fetch_page(language).await?;
        parse::extract_repos(&html)
    }
}
