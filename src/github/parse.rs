// Markup extraction for the trending listing.
// Class-name based element selection mirroring the page structure. A missing
// sub-element degrades that field to an empty string; only transport errors
// fail a whole page.

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::error::{Result, SurgeError};

use super::types::TrendingRepo;

/// Maximum records extracted from one listing page.
pub const MAX_REPOS: usize = 10;

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| SurgeError::Other(format!("invalid selector `{css}`: {e}")))
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Extract up to [`MAX_REPOS`] repository records from a trending page,
/// preserving page order.
pub fn extract_repos(html: &str) -> Result<Vec<TrendingRepo>> {
    let document = Html::parse_document(html);
    let row = selector("article.Box-row")?;
    let title = selector("h2.h3")?;
    let description = selector("p.col-9")?;
    let muted_link = selector("a.Link--muted")?;

    let mut repos = Vec::new();
    for article in document.select(&row).take(MAX_REPOS) {
        // The heading text is "owner / repo" spread over several lines.
        let full_name: String = article
            .select(&title)
            .next()
            .map(element_text)
            .unwrap_or_default()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        if full_name.is_empty() {
            warn!("listing entry without a repository name");
        }

        let description = article
            .select(&description)
            .next()
            .map(|el| element_text(el).trim().to_string())
            .unwrap_or_default();

        // The second muted link holds the total star count.
        let stargazers_count = article
            .select(&muted_link)
            .nth(1)
            .map(|el| element_text(el).trim().to_string())
            .unwrap_or_default();

        let html_url = format!("https://github.com/{full_name}");

        repos.push(TrendingRepo {
            full_name,
            description,
            html_url,
            stargazers_count,
        });
    }

    Ok(repos)
}
