//! End-to-end ingestion: source → fetch → summarize → persist.
//!
//! The pipeline is linear with no branching back and no rollback: if the
//! store write fails after the summarization call succeeded, the generated
//! summary is lost. That gap is accepted; this is not a durable pipeline.

use chrono::Utc;
use uuid::Uuid;

use crate::fetch::ArticleFetcher;
use crate::models::SummaryRecord;
use crate::store::SummaryStore;
use crate::summarizer::Summarizer;

/// Where the text to summarize comes from.
///
/// Modeled as a tagged variant instead of two optional fields so the
/// precedence rule — URL wins when present — is explicit and exhaustive.
#[derive(Debug, Clone)]
pub enum SummarizeSource {
    /// Fetch and extract the article at this URL.
    Url(String),
    /// Summarize this pasted text as-is.
    Text(String),
}

impl SummarizeSource {
    /// Build a source from the request's optional fields.
    ///
    /// An empty-string URL counts as absent, matching the form UI which
    /// always submits both fields.
    pub fn from_parts(url: Option<String>, content: Option<String>) -> Self {
        match url {
            Some(url) if !url.is_empty() => SummarizeSource::Url(url),
            _ => SummarizeSource::Text(content.unwrap_or_default()),
        }
    }
}

/// Ingestion failure, split by pipeline stage so the HTTP layer can tell
/// user-correctable input errors from upstream failures.
#[derive(Debug)]
pub enum IngestError {
    /// Neither the URL nor the pasted text yielded usable content.
    NoContent,
    /// Fetching or extracting the article failed.
    Fetch(anyhow::Error),
    /// The summarization call failed (network, auth, quota).
    Summarize(anyhow::Error),
    /// Writing the updated store failed.
    Store(anyhow::Error),
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestError::NoContent => write!(f, "No content to summarize"),
            IngestError::Fetch(e) => write!(f, "article fetch failed: {}", e),
            IngestError::Summarize(e) => write!(f, "summarization failed: {}", e),
            IngestError::Store(e) => write!(f, "store write failed: {}", e),
        }
    }
}

impl std::error::Error for IngestError {}

/// Run the full pipeline for one request and return the stored record.
///
/// Steps: resolve the source (fetching when it's a URL), reject empty
/// content, summarize, build a fresh record, prepend it to the store.
pub async fn ingest(
    fetcher: &ArticleFetcher,
    summarizer: &dyn Summarizer,
    store: &SummaryStore,
    source: SummarizeSource,
) -> Result<SummaryRecord, IngestError> {
    let (title, url, content) = match source {
        SummarizeSource::Url(url) => {
            let article = fetcher.fetch(&url).await.map_err(IngestError::Fetch)?;
            (article.title, Some(url), article.body)
        }
        SummarizeSource::Text(text) => (String::new(), None, text),
    };

    if content.is_empty() {
        return Err(IngestError::NoContent);
    }

    let summarized = summarizer
        .summarize(&content)
        .await
        .map_err(IngestError::Summarize)?;

    let record = SummaryRecord {
        id: Uuid::new_v4().to_string(),
        title,
        url,
        summary: summarized.summary,
        tags: summarized.tags,
        created_at: Utc::now(),
    };

    store
        .insert(record.clone())
        .await
        .map_err(IngestError::Store)?;

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_wins_over_content() {
        let source = SummarizeSource::from_parts(
            Some("https://example.com".to_string()),
            Some("pasted".to_string()),
        );
        assert!(matches!(source, SummarizeSource::Url(url) if url == "https://example.com"));
    }

    #[test]
    fn empty_url_falls_back_to_content() {
        let source = SummarizeSource::from_parts(Some(String::new()), Some("pasted".to_string()));
        assert!(matches!(source, SummarizeSource::Text(text) if text == "pasted"));
    }

    #[test]
    fn absent_fields_become_empty_text() {
        let source = SummarizeSource::from_parts(None, None);
        assert!(matches!(source, SummarizeSource::Text(text) if text.is_empty()));
    }

    #[test]
    fn no_content_error_message_is_the_api_contract() {
        assert_eq!(IngestError::NoContent.to_string(), "No content to summarize");
    }
}
