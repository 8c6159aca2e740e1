// Prompt construction for the summary service.
// Formats records into plain-text blocks embedded in a fixed instruction
// template.

use crate::github::TrendingRepo;

/// System-role instruction sent with every summary request.
pub const SYSTEM_PROMPT: &str =
    "You are an expert software analyst summarizing GitHub repositories.";

/// Shown in place of an absent description.
const NO_DESCRIPTION: &str = "No description";

fn repo_block(repo: &TrendingRepo) -> String {
    let description = if repo.description.is_empty() {
        NO_DESCRIPTION
    } else {
        &repo.description
    };
    format!(
        "Repository: {}\nDescription: {}\nStars: {}\nURL: {}",
        repo.full_name, description, repo.stargazers_count, repo.html_url
    )
}

/// Build the user prompt asking for a professional summary of the records.
pub fn summary_prompt(repos: &[TrendingRepo]) -> String {
    let details = repos
        .iter()
        .map(repo_block)
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Provide a professional summary of the following trending GitHub repositories.\n\
         Highlight their purpose, key features, and potential use cases:\n\n{details}"
    )
}
