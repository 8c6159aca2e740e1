// surge: daily AI-summarized report of trending GitHub repositories.
// Scrapes the public trending listing, summarizes it through a
// text-generation service, caches the result for a day, and prints styled
// panels to the terminal.

mod cache;
mod config;
mod error;
mod github;
mod report;
mod summary;

use std::process::ExitCode;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cache::ReportCache;
use config::Config;
use error::Result;
use github::TrendingClient;
use report::{Reporter, render};
use summary::GroqClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let config = Config::from_env()?;

    let source = TrendingClient::new()?;
    let summarizer = GroqClient::new(&config.api_key)?;
    let cache = ReportCache::new(&config.cache_path);

    let reporter = Reporter::new(source, summarizer, cache);
    let body = reporter.run().await?;

    render::print_report(&body)?;
    Ok(())
}
