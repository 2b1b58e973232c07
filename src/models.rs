//! Core data model: the persisted summary record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored summarization result.
///
/// Serialized as a JSON object inside the store file's top-level array.
/// Field order here is the stable key order on disk; `url` is omitted
/// entirely when the record came from pasted text rather than a URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Unique record id (UUID v4), generated at creation, never reused.
    pub id: String,
    /// Article title; empty when the input was pasted content.
    pub title: String,
    /// Source URL, present only for URL-originated records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// The generated summary text.
    pub summary: String,
    /// Short labels, insertion order preserved; may be empty.
    pub tags: Vec<String>,
    /// Creation timestamp, fixed at insert time.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
