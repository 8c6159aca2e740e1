// Summary service HTTP client.
// Talks to Groq's OpenAI-compatible chat completions endpoint.

use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SurgeError};
use crate::github::TrendingRepo;

use super::Summarize;
use super::prompt::{SYSTEM_PROMPT, summary_prompt};

const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Model used for every summary request.
const SUMMARY_MODEL: &str = "llama3-70b-8192";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Client for the text-generation service.
pub struct GroqClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GroqClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: GROQ_API_BASE.to_string(),
        })
    }

    /// Send one chat completion request and return the generated text
    /// verbatim. No retry, no backoff.
    async fn chat_completion(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: SUMMARY_MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let response = check_response(response).await?;
        let body: ChatResponse = response.json().await?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| SurgeError::Service("response contained no choices".to_string()))
    }
}

/// Check response status and convert errors.
async fn check_response(response: Response) -> Result<Response> {
    match response.status() {
        StatusCode::OK => Ok(response),
        StatusCode::UNAUTHORIZED => Err(SurgeError::Unauthorized),
        StatusCode::TOO_MANY_REQUESTS => Err(SurgeError::RateLimited),
        status => Err(SurgeError::Service(format!(
            "HTTP {}: {}",
            status,
            response.text().await.unwrap_or_default()
        ))),
    }
}

impl Summarize for GroqClient {
    async fn summarize(&self, repos: &[TrendingRepo]) -> Result<String> {
        let prompt = summary_prompt(repos);
        debug!(repos = repos.len(), "requesting summary");
        self.chat_completion(&prompt).await
    }
}
