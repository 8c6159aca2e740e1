// Summary module.
// Sends extracted repository records to an external text-generation service.

pub mod client;
pub mod prompt;

pub use client::GroqClient;

use crate::error::Result;
use crate::github::TrendingRepo;

/// Produces a natural-language summary of a batch of repository records.
/// Narrow seam over the live service so tests can use deterministic fakes.
pub trait Summarize {
    async fn summarize(&self, repos: &[TrendingRepo]) -> Result<String>;
}
