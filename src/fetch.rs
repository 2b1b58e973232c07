//! Article retrieval and HTML extraction.
//!
//! Given a URL, performs a single GET and pulls out a title and body using
//! fixed selectors: the first `<h1>` becomes the title, and the text of one
//! configured content container (default `#js_content`) becomes the body.
//! Either comes back as an empty string when the element is missing; whether
//! an empty body is an error is the caller's call, not this module's.
//!
//! There is no retry. Network failures propagate to the caller.

use anyhow::{Context, Result};
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;

use crate::config::FetcherConfig;

/// Title and body text extracted from a fetched document.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub title: String,
    pub body: String,
}

/// Fetches article pages and extracts their text content.
pub struct ArticleFetcher {
    client: reqwest::Client,
    content_selector: String,
}

impl ArticleFetcher {
    /// Create a fetcher from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured content selector is not valid CSS
    /// or the HTTP client cannot be built.
    pub fn new(config: &FetcherConfig) -> Result<Self> {
        Selector::parse(&config.content_selector).map_err(|e| {
            anyhow::anyhow!(
                "invalid fetcher.content_selector '{}': {}",
                config.content_selector,
                e
            )
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            content_selector: config.content_selector.clone(),
        })
    }

    /// Fetch `url` and extract its title and body.
    ///
    /// One outbound request, no retry; transport failures propagate.
    pub async fn fetch(&self, url: &str) -> Result<Article> {
        let html = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("failed to fetch {}", url))?
            .text()
            .await
            .with_context(|| format!("failed to read response body of {}", url))?;

        Ok(extract_article(&html, &self.content_selector))
    }
}

/// Extract title and body text from an HTML document.
///
/// Title is the first `<h1>` element's text; body is the text of the first
/// element matching `content_selector`. Missing elements yield empty strings.
pub fn extract_article(html: &str, content_selector: &str) -> Article {
    let document = Html::parse_document(html);

    let title = select_text(&document, "h1").unwrap_or_default();
    let body = select_text(&document, content_selector).unwrap_or_default();

    Article { title, body }
}

fn select_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .map(|element| element_text(&element))
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
