//! # Summary Harness
//!
//! A small harness for turning articles into stored, searchable summaries.
//! Input is either a URL (fetched and extracted) or pasted text; the text is
//! sent to an LLM that returns a short summary plus 1–3 tags, and the result
//! is prepended to a flat JSON store that a search endpoint filters by
//! substring match.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌────────────┐   ┌───────────┐
//! │ Fetcher  │──▶│ Summarizer │──▶│ JSON file │
//! │ URL→text │   │ OpenAI API │   │  (store)  │
//! └──────────┘   └────────────┘   └─────┬─────┘
//!                                       │
//!                      ┌────────────────┤
//!                      ▼                ▼
//!                 ┌──────────┐    ┌──────────┐
//!                 │   CLI    │    │   HTTP   │
//!                 │  (sumh)  │    │  (axum)  │
//!                 └──────────┘    └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! sumh summarize https://example.com/article    # fetch, summarize, store
//! sumh summarize --text "pasted article body"   # summarize pasted text
//! sumh search "kubernetes"                      # filter stored summaries
//! sumh serve                                    # start the HTTP server
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | The persisted [`SummaryRecord`](models::SummaryRecord) |
//! | [`fetch`] | Article retrieval and HTML extraction |
//! | [`summarizer`] | LLM client and completion parsing |
//! | [`store`] | Flat-file JSON store |
//! | [`search`] | Substring filtering over stored records |
//! | [`ingest`] | End-to-end ingestion pipeline |
//! | [`server`] | JSON HTTP server |

pub mod config;
pub mod fetch;
pub mod ingest;
pub mod models;
pub mod search;
pub mod server;
pub mod store;
pub mod summarizer;
