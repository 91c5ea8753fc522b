//! Post feed loading.
//!
//! The feed is fetched exactly once, before the first render. Any failure
//! (unreadable source, malformed JSON) is logged and masked: the widget falls
//! back to an empty post list and shows its normal "no posts" state.
//!
//! Sources implement [`PostSource`] so the loader can be driven from a file
//! on disk, an in-memory string, or a test double that simulates a network
//! error.

use crate::types::{Post, PostsDocument};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default location of the feed, relative to the working directory.
pub const POSTS_DATA_PATH: &str = "posts-data.json";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Somewhere the raw feed document can be fetched from.
pub trait PostSource {
    /// Fetch the feed as JSON text.
    fn fetch(&self) -> Result<String, LoadError>;

    /// Human-readable location, used in diagnostics.
    fn describe(&self) -> String;
}

/// Feed stored as a file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSource {
    fn default() -> Self {
        Self::new(POSTS_DATA_PATH)
    }
}

impl PostSource for FileSource {
    fn fetch(&self) -> Result<String, LoadError> {
        Ok(fs::read_to_string(&self.path)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Feed held in memory.
#[derive(Debug, Clone)]
pub struct StaticSource(pub String);

impl PostSource for StaticSource {
    fn fetch(&self) -> Result<String, LoadError> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "<inline>".to_string()
    }
}

/// Parse a feed document into its post list.
pub fn parse_posts(json: &str) -> Result<Vec<Post>, LoadError> {
    let doc: PostsDocument = serde_json::from_str(json)?;
    Ok(doc.into_posts())
}

/// Fetch and parse the feed without masking errors.
pub fn try_load_posts(source: &dyn PostSource) -> Result<Vec<Post>, LoadError> {
    let json = source.fetch()?;
    parse_posts(&json)
}

/// Fetch and parse the feed, falling back to an empty list on any failure.
///
/// No retry. The error goes to the `tracing` error channel.
pub fn load_posts(source: &dyn PostSource) -> Vec<Post> {
    match try_load_posts(source) {
        Ok(posts) => {
            tracing::debug!(count = posts.len(), source = %source.describe(), "loaded posts");
            posts
        }
        Err(err) => {
            tracing::error!(source = %source.describe(), "Error loading posts: {err}");
            Vec::new()
        }
    }
}
