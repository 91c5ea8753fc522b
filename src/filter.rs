//! The filter engine: derives the visible set from the full post list.
//!
//! The visible set is kept as indices into the full list, so it is always a
//! subset of the posts in their original order. Search always applies on top
//! of the category selection, never on its own.

use crate::types::{Category, Post};

/// Indices of posts admitted by `category`, in original order.
pub fn filter_by_category(posts: &[Post], category: &Category) -> Vec<usize> {
    posts
        .iter()
        .enumerate()
        .filter(|(_, post)| category.admits(post))
        .map(|(idx, _)| idx)
        .collect()
}

/// Case-insensitive substring match on title or description.
///
/// `lowered_query` must already be lower-cased.
pub fn matches_query(post: &Post, lowered_query: &str) -> bool {
    post.title.to_lowercase().contains(lowered_query)
        || post.description.to_lowercase().contains(lowered_query)
}

/// Compose category and search filters.
///
/// An empty query leaves the category-filtered base set untouched.
pub fn filter_posts(posts: &[Post], category: &Category, query: &str) -> Vec<usize> {
    let query = query.to_lowercase();
    let base = filter_by_category(posts, category);
    if query.is_empty() {
        return base;
    }
    base.into_iter()
        .filter(|&idx| matches_query(&posts[idx], &query))
        .collect()
}
