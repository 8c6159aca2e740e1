// Trending listing types.
// Records extracted from the listing markup, consumed by the summarizer.

/// One repository entry from the trending listing.
///
/// All fields are kept as display text; in particular the star count stays
/// unnormalized ("12,345").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingRepo {
    /// The `owner/repo` identifier.
    pub full_name: String,
    /// Free-text description; empty when the listing has none.
    pub description: String,
    /// Canonical repository URL.
    pub html_url: String,
    /// Star count as shown on the page.
    pub stargazers_count: String,
}
