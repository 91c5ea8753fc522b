//! HTML rendering for the three widget regions.
//!
//! Every function returns a complete replacement for its region. Rendering
//! the same state twice produces identical markup; there is no diffing and no
//! incremental state to corrupt.
//!
//! ## Markup Contract
//!
//! Rendered controls carry the data the click dispatcher needs:
//!
//! ```text
//! <button class="category-btn active" data-category="all">All Posts (20)</button>
//! <button class="page-btn" data-page="2">Next</button>
//! ```
//!
//! See [`crate::widget::Action::from_control`] for the decoding side.
//!
//! Uses [maud](https://maud.lambda.xyz/), so all post fields are escaped on
//! interpolation.

use crate::categories::CategorySummary;
use crate::config::{LabelsConfig, PageConfig};
use crate::paginate::PageControl;
use crate::types::{Category, Post};
use crate::widget::Region;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Rendered for dates that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

pub const CATEGORY_BUTTON_CLASS: &str = "category-btn";
pub const PAGE_BUTTON_CLASS: &str = "page-btn";

// ============================================================================
// Dates
// ============================================================================

fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    // Minute precision with a zone: 2024-01-05T10:30Z, 2024-01-05T10:30+05:30
    if let Some(utc) = value.strip_suffix('Z') {
        if let Ok(dt) = NaiveDateTime::parse_from_str(utc, "%Y-%m-%dT%H:%M") {
            return Some(dt.date());
        }
    }
    for fmt in ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"] {
        if let Ok(dt) = DateTime::parse_from_str(value, fmt) {
            return Some(dt.date_naive());
        }
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt.date());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    // Reduced precision: missing month and day default to 1
    if value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit()) {
        return value.parse().ok().and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1));
    }
    if value.matches('-').count() == 1 {
        return NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").ok();
    }
    None
}

/// Format a feed date as `en-US` short month, day, year: `"Jan 5, 2024"`.
///
/// The calendar date is taken as written; no timezone shifting.
pub fn format_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

// ============================================================================
// Regions
// ============================================================================

/// Category chips, one per summary entry, with the selected one active.
pub fn render_categories(
    summary: &[CategorySummary],
    current: &Category,
    labels: &LabelsConfig,
) -> Markup {
    html! {
        @for entry in summary {
            @let active = entry.category == *current;
            @let label = match &entry.category {
                Category::All => labels.all_posts.as_str(),
                Category::Named(name) => name.as_str(),
            };
            button.category-btn.active[active] data-category=(entry.category.key()) {
                (label) " (" (entry.count) ")"
            }
        }
    }
}

/// One post card.
pub fn render_card(post: &Post, labels: &LabelsConfig) -> Markup {
    html! {
        article.blog-card {
            a.blog-card-link href=(post.url) {
                div.blog-card-image {
                    img src=(post.cover) alt=(post.title) loading="lazy";
                    span.blog-card-category { (post.category) }
                }
                div.blog-card-content {
                    div.blog-card-meta {
                        span { i.fa-regular.fa-calendar {} " " (format_date(&post.date)) }
                        span { i.fa-regular.fa-user {} " " (post.author) }
                    }
                    h3.blog-card-title { (post.title) }
                    p.blog-card-description { (post.description) }
                    span.read-more { (labels.read_more) " " i.fa-solid.fa-arrow-right {} }
                }
            }
        }
    }
}

/// The grid for one page of posts, or the empty state when there are none.
pub fn render_grid(page: &[&Post], labels: &LabelsConfig) -> Markup {
    html! {
        @if page.is_empty() {
            div.no-posts { p { (labels.empty) } }
        } @else {
            @for post in page {
                (render_card(post, labels))
            }
        }
    }
}

/// The pagination strip. Empty markup when `controls` is empty.
pub fn render_pagination(controls: &[PageControl], labels: &LabelsConfig) -> Markup {
    html! {
        @for control in controls {
            @match *control {
                PageControl::Previous(n) => {
                    button.page-btn data-page=(n) { (labels.previous) }
                },
                PageControl::Page { number, active } => {
                    button.page-btn.active[active] data-page=(number) { (number) }
                },
                PageControl::Ellipsis => {
                    span.page-dots { "..." }
                },
                PageControl::Next(n) => {
                    button.page-btn data-page=(n) { (labels.next) }
                },
            }
        }
    }
}

/// The search box, pre-filled with the active query.
pub fn render_search_input(query: &str, labels: &LabelsConfig) -> Markup {
    html! {
        input id=(Region::Search.id())
            type="search"
            placeholder=(labels.search_placeholder)
            value=(query);
    }
}

// ============================================================================
// Standalone document
// ============================================================================

/// Already-rendered region contents, in page order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Regions<'a> {
    pub categories: Option<&'a str>,
    pub search: Option<&'a str>,
    pub grid: Option<&'a str>,
    pub pagination: Option<&'a str>,
}

/// Wrap rendered regions in a full HTML page.
///
/// Regions that are `None` are left out entirely, mirroring a page without
/// that mount point.
pub fn render_document(page: &PageConfig, regions: Regions<'_>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (page.title) }
                @if let Some(href) = &page.stylesheet {
                    link rel="stylesheet" href=(href);
                }
            }
            body {
                main.blog-page {
                    h1 { (page.title) }
                    @if let Some(search) = regions.search {
                        div.blog-search { (PreEscaped(search)) }
                    }
                    @if let Some(categories) = regions.categories {
                        div id=(Region::Categories.id()) { (PreEscaped(categories)) }
                    }
                    @if let Some(grid) = regions.grid {
                        div id=(Region::Grid.id()) { (PreEscaped(grid)) }
                    }
                    @if let Some(pagination) = regions.pagination {
                        nav id=(Region::Pagination.id()) { (PreEscaped(pagination)) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::summarize;
    use crate::paginate::page_controls;
    use crate::test_helpers::post;

    fn labels() -> LabelsConfig {
        LabelsConfig::default()
    }

    #[test]
    fn format_date_plain_date() {
        assert_eq!(format_date("2024-01-05"), "Jan 5, 2024");
        assert_eq!(format_date("2023-12-25"), "Dec 25, 2023");
    }

    #[test]
    fn format_date_datetime_variants() {
        assert_eq!(format_date("2024-03-09T10:30:00Z"), "Mar 9, 2024");
        assert_eq!(format_date("2024-03-09T23:30:00-05:00"), "Mar 9, 2024");
        assert_eq!(format_date("2024-03-09T10:30:00"), "Mar 9, 2024");
    }

    #[test]
    fn format_date_minute_precision_with_zone() {
        assert_eq!(format_date("2024-01-05T10:30Z"), "Jan 5, 2024");
        assert_eq!(format_date("2024-01-05T10:30+05:30"), "Jan 5, 2024");
        assert_eq!(format_date("2024-01-05T10:30"), "Jan 5, 2024");
    }

    #[test]
    fn format_date_reduced_precision() {
        assert_eq!(format_date("2024-01"), "Jan 1, 2024");
        assert_eq!(format_date("2023-11"), "Nov 1, 2023");
        assert_eq!(format_date("2024"), "Jan 1, 2024");
        assert_eq!(format_date("2024-13"), INVALID_DATE);
    }

    #[test]
    fn format_date_invalid() {
        assert_eq!(format_date("yesterday"), INVALID_DATE);
        assert_eq!(format_date(""), INVALID_DATE);
        assert_eq!(format_date("2024-13-40"), INVALID_DATE);
    }

    #[test]
    fn categories_mark_active_chip() {
        let posts = vec![post("a", "", "tech"), post("b", "", "life")];
        let html = render_categories(&summarize(&posts), &"tech".into(), &labels()).into_string();

        assert!(html.contains(r#"class="category-btn" data-category="all">All Posts (2)"#));
        assert!(html.contains(r#"class="category-btn active" data-category="tech">tech (1)"#));
        assert!(html.contains(r#"data-category="life">life (1)"#));
    }

    #[test]
    fn card_shows_all_fields() {
        let mut p = post("Hello", "A long description that is not truncated", "tech");
        p.date = "2024-01-05".into();
        p.author = "Sam".into();
        p.url = "/posts/hello.html".into();
        p.cover = "img/hello.jpg".into();

        let html = render_card(&p, &labels()).into_string();
        assert!(html.contains(r#"href="/posts/hello.html""#));
        assert!(html.contains(r#"src="img/hello.jpg""#));
        assert!(html.contains(r#"alt="Hello""#));
        assert!(html.contains(r#"loading="lazy""#));
        assert!(html.contains("Jan 5, 2024"));
        assert!(html.contains("Sam"));
        assert!(html.contains("A long description that is not truncated"));
        assert!(html.contains("Read More"));
    }

    #[test]
    fn empty_grid_shows_message() {
        let html = render_grid(&[], &labels()).into_string();
        assert_eq!(
            html,
            r#"<div class="no-posts"><p>No posts found.</p></div>"#
        );
    }

    #[test]
    fn pagination_markup() {
        let html = render_pagination(&page_controls(5, 10), &labels()).into_string();
        assert!(html.starts_with(r#"<button class="page-btn" data-page="4">Previous</button>"#));
        assert!(html.contains(r#"<button class="page-btn active" data-page="5">5</button>"#));
        assert_eq!(html.matches("page-dots").count(), 2);
        assert!(html.ends_with(r#"<button class="page-btn" data-page="6">Next</button>"#));
    }

    #[test]
    fn empty_pagination_is_empty_markup() {
        assert_eq!(render_pagination(&[], &labels()).into_string(), "");
    }

    #[test]
    fn html_escape_in_cards() {
        let p = post("<script>alert('xss')</script>", "", "tech");
        let html = render_card(&p, &labels()).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn document_includes_only_present_regions() {
        let page = PageConfig::default();
        let doc = render_document(
            &page,
            Regions {
                grid: Some("<p>grid</p>"),
                ..Default::default()
            },
        )
        .into_string();

        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(r#"<div id="blog-posts-grid"><p>grid</p></div>"#));
        assert!(!doc.contains("blog-categories"));
        assert!(!doc.contains("blog-pagination"));
        assert!(!doc.contains("stylesheet"));
    }

    #[test]
    fn document_links_stylesheet() {
        let page = PageConfig {
            title: "Notes".into(),
            stylesheet: Some("blog.css".into()),
        };
        let doc = render_document(&page, Regions::default()).into_string();
        assert!(doc.contains(r#"<link rel="stylesheet" href="blog.css">"#));
        assert!(doc.contains("<title>Notes</title>"));
    }

    #[test]
    fn document_uses_region_ids() {
        let search = render_search_input("rust", &labels()).into_string();
        let doc = render_document(
            &PageConfig::default(),
            Regions {
                categories: Some(""),
                search: Some(&search),
                grid: Some(""),
                pagination: Some(""),
            },
        )
        .into_string();

        for region in Region::ALL {
            assert_eq!(
                doc.matches(&format!(r#"id="{}""#, region.id())).count(),
                1,
                "mount id for {region:?}"
            );
        }
    }
}
