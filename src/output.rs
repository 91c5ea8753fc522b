//! CLI output formatting.
//!
//! Each command has a `format_*` function returning lines (pure, testable)
//! and a `print_*` wrapper that writes them to stdout.
//!
//! ```text
//! Categories
//! 001 All Posts (20)
//! 002 tech (12)
//! 003 life (8)
//!
//! Latest
//! 001 Shipping the new parser
//!     Jan 5, 2024 · tech · Sam
//!     /posts/parser.html
//! ```

use crate::categories::CategorySummary;
use crate::config::LabelsConfig;
use crate::render::format_date;
use crate::types::{Category, Post};
use crate::widget::BlogState;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

pub fn format_categories(summary: &[CategorySummary], labels: &LabelsConfig) -> Vec<String> {
    let mut lines = vec!["Categories".to_string()];
    for (i, entry) in summary.iter().enumerate() {
        let label = match &entry.category {
            Category::All => labels.all_posts.as_str(),
            Category::Named(name) => name.as_str(),
        };
        lines.push(format!("{} {} ({})", format_index(i + 1), label, entry.count));
    }
    lines
}

pub fn print_categories(summary: &[CategorySummary], labels: &LabelsConfig) {
    for line in format_categories(summary, labels) {
        println!("{}", line);
    }
}

/// Header line plus indented meta and link lines for each post.
pub fn format_posts(heading: &str, posts: &[Post]) -> Vec<String> {
    let mut lines = vec![heading.to_string()];
    if posts.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
        return lines;
    }
    for (i, post) in posts.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), post.title));
        lines.push(format!(
            "{}{} · {} · {}",
            indent(1),
            format_date(&post.date),
            post.category,
            post.author
        ));
        if !post.url.is_empty() {
            lines.push(format!("{}{}", indent(1), post.url));
        }
    }
    lines
}

pub fn print_posts(heading: &str, posts: &[Post]) {
    for line in format_posts(heading, posts) {
        println!("{}", line);
    }
}

/// One-paragraph summary of a rendered widget state.
pub fn format_render_summary(state: &BlogState, output: Option<&Path>) -> Vec<String> {
    let mut lines = vec![format!(
        "Category: {} · {} of {} posts",
        state.current_category(),
        state.filtered_len(),
        state.all_posts().len()
    )];
    if !state.query().is_empty() {
        lines.push(format!("{}Search: \"{}\"", indent(1), state.query()));
    }
    lines.push(format!(
        "{}Page {} of {} ({} shown)",
        indent(1),
        state.current_page(),
        state.total_pages().max(1),
        state.page_posts().len()
    ));
    if let Some(path) = output {
        lines.push(format!("Generated {}", path.display()));
    }
    lines
}

/// Render summaries go to stderr so HTML piped to stdout stays clean.
pub fn print_render_summary(state: &BlogState, output: Option<&Path>) {
    for line in format_render_summary(state, output) {
        eprintln!("{}", line);
    }
}
