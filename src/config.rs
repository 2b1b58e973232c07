use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub summarizer: SummarizerConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("./data/summaries.json")
}

#[derive(Debug, Deserialize, Clone)]
pub struct FetcherConfig {
    /// CSS selector for the article's content container.
    #[serde(default = "default_content_selector")]
    pub content_selector: String,
    #[serde(default = "default_fetch_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            content_selector: default_content_selector(),
            timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

fn default_content_selector() -> String {
    "#js_content".to_string()
}
fn default_fetch_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Deserialize, Clone)]
pub struct SummarizerConfig {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Character budget the prompt asks the model to stay under.
    #[serde(default = "default_max_summary_chars")]
    pub max_summary_chars: usize,
    #[serde(default = "default_summarize_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            max_summary_chars: default_max_summary_chars(),
            timeout_secs: default_summarize_timeout_secs(),
        }
    }
}

fn default_provider() -> String {
    "openai".to_string()
}
fn default_model() -> String {
    "gpt-4o-mini".to_string()
}
fn default_max_summary_chars() -> usize {
    200
}
fn default_summarize_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:7431".to_string()
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    // Validate summarizer
    match config.summarizer.provider.as_str() {
        "openai" => {}
        other => anyhow::bail!(
            "Unknown summarizer provider: '{}'. Only 'openai' is supported.",
            other
        ),
    }

    if config.summarizer.max_summary_chars == 0 {
        anyhow::bail!("summarizer.max_summary_chars must be > 0");
    }

    if config.summarizer.timeout_secs == 0 || config.fetcher.timeout_secs == 0 {
        anyhow::bail!("timeout_secs must be > 0");
    }

    // Validate fetcher
    if config.fetcher.content_selector.trim().is_empty() {
        anyhow::bail!("fetcher.content_selector must not be empty");
    }

    // Validate server
    if config.server.bind.trim().is_empty() {
        anyhow::bail!("server.bind must not be empty");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn empty_config_uses_defaults() {
        let file = write_config("");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.summarizer.provider, "openai");
        assert_eq!(config.summarizer.model, "gpt-4o-mini");
        assert_eq!(config.summarizer.max_summary_chars, 200);
        assert_eq!(config.fetcher.content_selector, "#js_content");
        assert_eq!(config.store.path, PathBuf::from("./data/summaries.json"));
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let file = write_config("[summarizer]\nprovider = \"acme\"\n");
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("Unknown summarizer provider"));
    }

    #[test]
    fn zero_summary_budget_is_rejected() {
        let file = write_config("[summarizer]\nmax_summary_chars = 0\n");
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let err = load_config(Path::new("/nonexistent/sumh.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
