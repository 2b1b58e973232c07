//! Summarization provider abstraction and the OpenAI implementation.
//!
//! Defines the [`Summarizer`] trait and the [`OpenAiSummarizer`], which sends
//! a single-turn chat completion request with a fixed prompt and parses the
//! free-text response with [`parse_completion`].
//!
//! # Response Format
//!
//! The prompt asks the model for a two-line reply:
//!
//! ```text
//! Summary: <at most N characters>
//! Tags: <1-3 labels, comma separated>
//! ```
//!
//! The model's output format is not guaranteed, so parsing is best-effort:
//! when the `Summary:` marker can't be located, the entire trimmed response
//! becomes the summary and the tags come only from an independent `Tags:`
//! lookup. This fallback is the contract, not an implementation detail —
//! callers must tolerate a summary that is simply the raw completion.
//!
//! # Failure
//!
//! Network, auth, and quota errors from the API propagate untouched. There is
//! no retry and no backoff.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use std::time::Duration;

use crate::config::SummarizerConfig;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

const SUMMARY_MARKER: &str = "Summary:";
const TAGS_MARKER: &str = "Tags:";

/// Structured result parsed out of a model completion.
#[derive(Debug, Clone, PartialEq)]
pub struct Summarized {
    pub summary: String,
    pub tags: Vec<String>,
}

/// Trait for summarization backends.
///
/// Kept narrow (`Text → {summary, tags}`) so the remote call can be mocked
/// in tests and the parsing strategy can evolve without touching callers.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Returns the model identifier (e.g. `"gpt-4o-mini"`).
    fn model_name(&self) -> &str;

    /// Summarize and tag `text`. Callers must pass non-empty input.
    async fn summarize(&self, text: &str) -> Result<Summarized>;
}

/// Create the appropriate [`Summarizer`] based on configuration.
///
/// # Errors
///
/// Returns an error for unknown provider names or if the OpenAI provider
/// cannot be initialized (missing API key).
pub fn create_summarizer(config: &SummarizerConfig) -> Result<Box<dyn Summarizer>> {
    match config.provider.as_str() {
        "openai" => Ok(Box::new(OpenAiSummarizer::new(config)?)),
        other => bail!(
            "Unknown summarizer provider: '{}'. Only 'openai' is supported.",
            other
        ),
    }
}

/// Summarizer backed by the OpenAI chat completions API.
///
/// Sends one user-role message per call with the configured model and no
/// additional sampling configuration. Requires the `OPENAI_API_KEY`
/// environment variable.
pub struct OpenAiSummarizer {
    client: reqwest::Client,
    model: String,
    max_summary_chars: usize,
    api_key: String,
}

impl OpenAiSummarizer {
    /// Create a new OpenAI summarizer from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `OPENAI_API_KEY` is not in the environment or the
    /// HTTP client cannot be built.
    pub fn new(config: &SummarizerConfig) -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| anyhow::anyhow!("OPENAI_API_KEY environment variable not set"))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            model: config.model.clone(),
            max_summary_chars: config.max_summary_chars,
            api_key,
        })
    }

    fn build_prompt(&self, text: &str) -> String {
        format!(
            "Read the following article and write a summary of at most {} characters, \
             then give 1-3 short tags separated by commas. Respond in exactly this format:\n\
             Summary: ...\nTags: ...\n\nArticle:\n{}",
            self.max_summary_chars, text
        )
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn summarize(&self, text: &str) -> Result<Summarized> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": self.build_prompt(text) }],
        });

        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .context("chat completion request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            bail!("OpenAI API error {}: {}", status, body_text);
        }

        let json: serde_json::Value = response.json().await?;
        let completion = json
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .unwrap_or_default();

        Ok(parse_completion(completion))
    }
}

/// Parse a model completion into a summary and tag list.
///
/// The summary is everything between the `Summary:` marker and the next
/// `Tags:` line, trimmed. If that span can't be found, the whole trimmed
/// completion is the summary. Tags are parsed independently: everything
/// after the `Tags:` marker to end-of-response, split on commas, trimmed,
/// empty fragments discarded.
pub fn parse_completion(text: &str) -> Summarized {
    let summary = extract_summary(text).unwrap_or_else(|| text.trim().to_string());
    let tags = extract_tags(text);
    Summarized { summary, tags }
}

fn extract_summary(text: &str) -> Option<String> {
    let start = text.find(SUMMARY_MARKER)? + SUMMARY_MARKER.len();
    let rest = &text[start..];
    let end = rest.find(&format!("\n{}", TAGS_MARKER))?;
    Some(rest[..end].trim().to_string())
}

fn extract_tags(text: &str) -> Vec<String> {
    let Some(pos) = text.find(TAGS_MARKER) else {
        return Vec::new();
    };
    text[pos + TAGS_MARKER.len()..]
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
