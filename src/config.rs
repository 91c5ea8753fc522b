//! Widget configuration.
//!
//! Loaded from an optional `config.toml`. Every key is optional; stock
//! defaults fill in whatever the file leaves out.
//!
//! ```toml
//! data = "posts-data.json"      # Feed location
//!
//! [labels]
//! all_posts = "All Posts"       # Label of the `all` category chip
//! empty = "No posts found."     # Empty-state message
//! read_more = "Read More"
//! previous = "Previous"
//! next = "Next"
//! search_placeholder = "Search posts..."
//!
//! [latest]
//! count = 3                     # Default size of the latest-posts excerpt
//!
//! [page]
//! title = "Blog"                # <title> of the standalone document
//! stylesheet = "css/blog.css"   # Optional <link rel="stylesheet">
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Widget configuration loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetConfig {
    /// Path of the JSON feed.
    pub data: String,
    /// User-facing strings.
    pub labels: LabelsConfig,
    /// Latest-posts excerpt settings.
    pub latest: LatestConfig,
    /// Standalone document settings.
    pub page: PageConfig,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            data: crate::load::POSTS_DATA_PATH.to_string(),
            labels: LabelsConfig::default(),
            latest: LatestConfig::default(),
            page: PageConfig::default(),
        }
    }
}

impl WidgetConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data.trim().is_empty() {
            return Err(ConfigError::Validation("data must not be empty".into()));
        }
        if self.latest.count == 0 {
            return Err(ConfigError::Validation(
                "latest.count must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelsConfig {
    /// Label of the `all` category chip.
    pub all_posts: String,
    /// Message shown when the visible set is empty.
    pub empty: String,
    pub read_more: String,
    pub previous: String,
    pub next: String,
    pub search_placeholder: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            all_posts: "All Posts".to_string(),
            empty: "No posts found.".to_string(),
            read_more: "Read More".to_string(),
            previous: "Previous".to_string(),
            next: "Next".to_string(),
            search_placeholder: "Search posts...".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LatestConfig {
    /// Number of posts returned by the latest-posts excerpt.
    pub count: usize,
}

impl Default for LatestConfig {
    fn default() -> Self {
        Self {
            count: crate::widget::DEFAULT_LATEST_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylesheet: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            stylesheet: None,
        }
    }
}

/// Parse and validate config text.
pub fn parse_config(content: &str) -> Result<WidgetConfig, ConfigError> {
    let config: WidgetConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load config from a `config.toml` file.
///
/// A missing file yields the stock defaults; an unreadable or invalid file
/// is an error.
pub fn load_config(path: &Path) -> Result<WidgetConfig, ConfigError> {
    if !path.exists() {
        return Ok(WidgetConfig::default());
    }
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Blog Grid Configuration
# =======================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Path of the JSON feed: { "posts": [ { title, description, category, ... } ] }
data = "posts-data.json"

# ---------------------------------------------------------------------------
# Labels
# ---------------------------------------------------------------------------
[labels]
all_posts = "All Posts"        # Chip that clears the category filter
empty = "No posts found."      # Shown when nothing matches
read_more = "Read More"
previous = "Previous"
next = "Next"
search_placeholder = "Search posts..."

# ---------------------------------------------------------------------------
# Latest posts excerpt (homepage embedding)
# ---------------------------------------------------------------------------
[latest]
count = 3

# ---------------------------------------------------------------------------
# Standalone page
# ---------------------------------------------------------------------------
[page]
title = "Blog"
# stylesheet = "css/blog.css"
"##
}
