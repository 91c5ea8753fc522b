//! Shared test utilities: post builders, feed fixtures and extractors.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let posts = numbered_posts(12, "tech");
//! let mut widget = BlogWidget::new(MemoryHost::new(), WidgetConfig::default());
//! widget.init(&StaticSource(feed_json(&posts)));
//! assert_eq!(titles(&widget.state().page_posts())[0], "Post 1");
//! ```

use crate::load::{LoadError, PostSource};
use crate::types::{Post, PostsDocument};

// =========================================================================
// Builders
// =========================================================================

/// A post with the given title, description and category.
pub fn post(title: &str, description: &str, category: &str) -> Post {
    Post {
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        date: "2024-01-05".to_string(),
        author: "Test Author".to_string(),
        url: format!("/posts/{}.html", title.to_lowercase().replace(' ', "-")),
        cover: "img/cover.jpg".to_string(),
    }
}

/// `count` posts titled `Post 1` .. `Post N`, all in `category`.
pub fn numbered_posts(count: usize, category: &str) -> Vec<Post> {
    (1..=count)
        .map(|n| post(&format!("Post {n}"), &format!("Description of entry {n}"), category))
        .collect()
}

/// Serialize posts as a feed document.
pub fn feed_json(posts: &[Post]) -> String {
    let doc = PostsDocument {
        posts: Some(posts.to_vec()),
    };
    serde_json::to_string(&doc).unwrap()
}

// =========================================================================
// Sources
// =========================================================================

/// A source whose fetch always fails, like a dropped network connection.
pub struct FailingSource;

impl PostSource for FailingSource {
    fn fetch(&self) -> Result<String, LoadError> {
        Err(LoadError::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "simulated network error",
        )))
    }

    fn describe(&self) -> String {
        "<failing>".to_string()
    }
}

// =========================================================================
// Extractors
// =========================================================================

/// Titles of `posts` in order.
pub fn titles<'a>(posts: &[&'a Post]) -> Vec<&'a str> {
    posts.iter().map(|p| p.title.as_str()).collect()
}

/// Titles of the posts at `indices`.
pub fn titles_at<'a>(posts: &'a [Post], indices: &[usize]) -> Vec<&'a str> {
    indices.iter().map(|&i| posts[i].title.as_str()).collect()
}
