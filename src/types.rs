//! Shared types for the post feed and the widget state.
//!
//! [`Post`] mirrors one record of the `posts-data.json` feed. Records are
//! loaded once and never mutated afterwards; identity is array position.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single blog entry from the feed.
///
/// Every field defaults to an empty string when missing. Fields are not
/// validated: a bad `date` or an empty `cover` shows up in the rendered card,
/// not as a load error. Unknown keys in the feed are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    pub title: String,
    pub description: String,
    /// Free-form grouping label
    pub category: String,
    /// ISO date or datetime, formatted for display by [`crate::render::format_date`]
    pub date: String,
    pub author: String,
    /// Link target of the card
    pub url: String,
    /// Cover image reference
    pub cover: String,
}

/// Top-level shape of the feed: `{ "posts": [ ... ] }`.
///
/// A missing or `null` `posts` field is treated as an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostsDocument {
    #[serde(default)]
    pub posts: Option<Vec<Post>>,
}

impl PostsDocument {
    pub fn into_posts(self) -> Vec<Post> {
        self.posts.unwrap_or_default()
    }
}

/// The category selection: the `all` sentinel or one named category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    All,
    Named(String),
}

impl Category {
    /// Value used for the `data-category` attribute of rendered controls.
    pub const ALL_KEY: &'static str = "all";

    /// Decode a `data-category` value. `"all"` is always the sentinel.
    pub fn parse(value: &str) -> Self {
        if value == Self::ALL_KEY {
            Category::All
        } else {
            Category::Named(value.to_string())
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Category::All => Self::ALL_KEY,
            Category::Named(name) => name,
        }
    }

    /// True if `post` belongs to this selection.
    pub fn admits(&self, post: &Post) -> bool {
        match self {
            Category::All => true,
            Category::Named(name) => post.category == *name,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category::parse(value)
    }
}
