// GitHub trending module.
// Fetches the public trending listing and extracts repository records.

pub mod client;
pub mod parse;
pub mod types;

pub use client::TrendingClient;
pub use types::TrendingRepo;

use crate::error::Result;

/// Source of trending repository records, optionally filtered by a
/// programming-language tag. Fronts the live client so tests can substitute
/// fixture-backed fakes.
pub trait TrendingSource {
    async fn fetch(&self, language: Option<&str>) -> Result<Vec<TrendingRepo>>;
}
