// Report orchestration.
// Decides between reusing the cached report and running a fresh
// scrape-then-summarize cycle over the fixed query variants.

pub mod render;

use chrono::{Local, Utc};
use tracing::info;

use crate::cache::{CachedReport, ReportCache};
use crate::error::Result;
use crate::github::TrendingSource;
use crate::summary::Summarize;

/// One query against the trending listing and the section title its summary
/// is filed under.
pub struct QueryVariant {
    pub language: Option<&'static str>,
    pub title: &'static str,
}

/// The fixed set of listing queries making up one report.
pub const QUERY_VARIANTS: &[QueryVariant] = &[
    QueryVariant {
        language: None,
        title: "All Trending Repositories",
    },
    QueryVariant {
        language: Some("go"),
        title: "Trending Golang Repositories",
    },
];

const REPORT_TITLE: &str = "Daily GitHub Trending Repositories Report";

/// Orchestrates one report cycle over explicitly injected collaborators.
pub struct Reporter<S, M> {
    source: S,
    summarizer: M,
    cache: ReportCache,
}

impl<S: TrendingSource, M: Summarize> Reporter<S, M> {
    pub fn new(source: S, summarizer: M, cache: ReportCache) -> Self {
        Self {
            source,
            summarizer,
            cache,
        }
    }

    /// Produce the report body, reusing the cache when fresh. The returned
    /// text is exactly what the renderer displays.
    pub async fn run(&self) -> Result<String> {
        if self.cache.is_fresh() {
            info!("loading report from cache");
            let cached = self.cache.load()?;
            return Ok(cached.full_report);
        }

        info!("cache stale or missing, fetching fresh data");
        let body = self.build_report().await?;

        let report = CachedReport {
            timestamp: Utc::now(),
            full_report: body.clone(),
        };
        self.cache.save(&report)?;
        info!("fresh report generated and cached");

        Ok(body)
    }

    /// Run every query variant sequentially and compose the report body.
    /// Any variant failure aborts the whole refresh; nothing partial is
    /// cached.
    async fn build_report(&self) -> Result<String> {
        let mut body = format!("{REPORT_TITLE}\n{}\n", Local::now().format("%Y-%m-%d"));

        for variant in QUERY_VARIANTS {
            info!(section = variant.title, "fetching listing");
            let repos = self.source.fetch(variant.language).await?;

            info!(section = variant.title, repos = repos.len(), "summarizing");
            let summary = self.summarizer.summarize(&repos).await?;

            body.push_str(&format!("\n--- {} ---\n{}\n", variant.title, summary));
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use tempfile::TempDir;

    use crate::error::SurgeError;
    use crate::github::TrendingRepo;

    struct FakeSource {
        calls: RefCell<Vec<Option<String>>>,
        fail: bool,
    }

    impl FakeSource {
        fn new(fail: bool) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail,
            }
        }
    }

    impl TrendingSource for FakeSource {
        async fn fetch(&self, language: Option<&str>) -> Result<Vec<TrendingRepo>> {
            self.calls.borrow_mut().push(language.map(str::to_string));
            if self.fail {
                return Err(SurgeError::Other("listing unreachable".to_string()));
            }
            Ok(vec![TrendingRepo {
                full_name: "octo/spark".to_string(),
                description: "Example repo".to_string(),
                html_url: "https://github.com/octo/spark".to_string(),
                stargazers_count: "1,234".to_string(),
            }])
        }
    }

    struct FakeSummarizer {
        calls: RefCell<usize>,
    }

    impl FakeSummarizer {
        fn new() -> Self {
            Self {
                calls: RefCell::new(0),
            }
        }
    }

    impl Summarize for FakeSummarizer {
        async fn summarize(&self, repos: &[TrendingRepo]) -> Result<String> {
            *self.calls.borrow_mut() += 1;
            Ok(format!("summary of {} repos", repos.len()))
        }
    }

    fn reporter_in(
        dir: &TempDir,
        fail_fetch: bool,
    ) -> Reporter<FakeSource, FakeSummarizer> {
        let cache = ReportCache::new(dir.path().join("report.json"));
        Reporter::new(FakeSource::new(fail_fetch), FakeSummarizer::new(), cache)
    }

    #[tokio::test]
    async fn test_absent_cache_triggers_full_refresh() {
        let dir = TempDir::new().unwrap();
        let reporter = reporter_in(&dir, false);

        let body = reporter.run().await.unwrap();

        assert_eq!(
            *reporter.source.calls.borrow(),
            vec![None, Some("go".to_string())]
        );
        assert_eq!(*reporter.summarizer.calls.borrow(), 2);

        assert!(body.starts_with(REPORT_TITLE));
        assert!(body.contains("--- All Trending Repositories ---"));
        assert!(body.contains("--- Trending Golang Repositories ---"));

        let saved = reporter.cache.load().unwrap();
        assert_eq!(saved.full_report, body);
    }

    #[tokio::test]
    async fn test_fresh_cache_short_circuits() {
        let dir = TempDir::new().unwrap();
        let cache = ReportCache::new(dir.path().join("report.json"));
        cache
            .save(&CachedReport {
                timestamp: Utc::now(),
                full_report: "cached body".to_string(),
            })
            .unwrap();

        let reporter = Reporter::new(FakeSource::new(false), FakeSummarizer::new(), cache);
        let body = reporter.run().await.unwrap();

        assert_eq!(body, "cached body");
        assert!(reporter.source.calls.borrow().is_empty());
        assert_eq!(*reporter.summarizer.calls.borrow(), 0);
    }

    #[tokio::test]
    async fn test_fetch_failure_aborts_without_caching() {
        let dir = TempDir::new().unwrap();
        let reporter = reporter_in(&dir, true);

        assert!(reporter.run().await.is_err());
        assert_eq!(*reporter.summarizer.calls.borrow(), 0);
        assert!(!reporter.cache.path().exists());
    }
}
