//! Category summary for the filter chips.

use crate::types::{Category, Post};
use std::collections::HashMap;

/// One selectable category and the number of posts it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: Category,
    pub count: usize,
}

/// Summarize the categories present in `posts`.
///
/// `All` comes first with the total count, followed by each distinct named
/// category in first-seen order.
pub fn summarize(posts: &[Post]) -> Vec<CategorySummary> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for post in posts {
        let count = counts.entry(post.category.as_str()).or_insert_with(|| {
            order.push(post.category.as_str());
            0
        });
        *count += 1;
    }

    let mut summary = Vec::with_capacity(order.len() + 1);
    summary.push(CategorySummary {
        category: Category::All,
        count: posts.len(),
    });
    summary.extend(order.into_iter().map(|name| CategorySummary {
        category: Category::Named(name.to_string()),
        count: counts[name],
    }));
    summary
}
