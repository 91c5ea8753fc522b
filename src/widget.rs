//! The blog widget controller.
//!
//! [`BlogWidget`] owns the state ([`BlogState`]) and a [`Host`] that holds the
//! rendered regions. User interactions arrive as [`Action`]s through
//! [`BlogWidget::dispatch`]; each one mutates state and re-renders the regions
//! it affects:
//!
//! ```text
//! action → state mutation → recompute visible set (if filters changed)
//!        → render categories / grid → pagination
//! ```
//!
//! The grid render always chains into the pagination render, so callers never
//! render pagination on their own after a page change.

use crate::categories::summarize;
use crate::config::WidgetConfig;
use crate::filter::filter_posts;
use crate::load::{PostSource, load_posts};
use crate::paginate::{clamp_page, page_controls, page_range, total_pages};
use crate::render::{
    self, CATEGORY_BUTTON_CLASS, PAGE_BUTTON_CLASS, Regions, render_categories, render_grid,
    render_pagination, render_search_input,
};
use crate::types::{Category, Post};
use maud::Markup;
use std::collections::HashMap;

/// Default size of the latest-posts excerpt.
pub const DEFAULT_LATEST_COUNT: usize = 3;

// ============================================================================
// State
// ============================================================================

/// Filter and page state of one widget instance.
///
/// `filtered` always equals `all_posts` filtered by `current_category` and
/// then by `query`, stored as indices in original order.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogState {
    all_posts: Vec<Post>,
    filtered: Vec<usize>,
    current_category: Category,
    current_page: usize,
    query: String,
}

impl Default for BlogState {
    fn default() -> Self {
        Self {
            all_posts: Vec::new(),
            filtered: Vec::new(),
            current_category: Category::All,
            current_page: 1,
            query: String::new(),
        }
    }
}

impl BlogState {
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let mut state = Self {
            all_posts: posts,
            ..Default::default()
        };
        state.refilter();
        state
    }

    pub fn all_posts(&self) -> &[Post] {
        &self.all_posts
    }

    /// The visible set, in original order.
    pub fn filtered_posts(&self) -> Vec<&Post> {
        self.filtered.iter().map(|&i| &self.all_posts[i]).collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn current_category(&self) -> &Category {
        &self.current_category
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Lower-cased active search query; empty when not searching.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len())
    }

    /// Posts on the current page.
    pub fn page_posts(&self) -> Vec<&Post> {
        self.filtered[page_range(self.current_page, self.filtered.len())]
            .iter()
            .map(|&i| &self.all_posts[i])
            .collect()
    }

    fn refilter(&mut self) {
        self.filtered = filter_posts(&self.all_posts, &self.current_category, &self.query);
        self.current_page = 1;
    }

    /// Select a category, keeping the active search applied on top.
    pub fn select_category(&mut self, category: Category) {
        self.current_category = category;
        self.refilter();
    }

    /// Replace the search query. Matching is case-insensitive.
    pub fn search(&mut self, query: &str) {
        self.query = query.to_lowercase();
        self.refilter();
    }

    /// Move to `page`, clamped into the valid range.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = clamp_page(page, self.filtered.len());
    }
}

// ============================================================================
// Host
// ============================================================================

/// A mount point on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Categories,
    Grid,
    Pagination,
    /// The search input. Its presence enables search handling.
    Search,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::Categories,
        Region::Grid,
        Region::Pagination,
        Region::Search,
    ];

    /// Fixed element id of the mount point.
    pub const fn id(self) -> &'static str {
        match self {
            Region::Categories => "blog-categories",
            Region::Grid => "blog-posts-grid",
            Region::Pagination => "blog-pagination",
            Region::Search => "blog-search",
        }
    }
}

/// The page the widget renders into.
///
/// Every region may be absent; rendering into an absent region is a no-op.
pub trait Host {
    fn has_region(&self, region: Region) -> bool;

    /// Replace the contents of `region`. Ignored if the region is absent.
    fn replace(&mut self, region: Region, markup: Markup);

    /// Smooth-scroll the viewport to the top.
    fn scroll_to_top(&mut self);
}

/// In-memory host holding rendered region markup.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    regions: HashMap<Region, String>,
    scrolls: usize,
}

impl MemoryHost {
    /// A host with every region mounted and empty.
    pub fn new() -> Self {
        Self::with_regions(&Region::ALL)
    }

    pub fn with_regions(regions: &[Region]) -> Self {
        Self {
            regions: regions.iter().map(|&r| (r, String::new())).collect(),
            scrolls: 0,
        }
    }

    /// A host with every region except `missing`.
    pub fn without(missing: Region) -> Self {
        let present: Vec<Region> = Region::ALL.into_iter().filter(|&r| r != missing).collect();
        Self::with_regions(&present)
    }

    pub fn content(&self, region: Region) -> Option<&str> {
        self.regions.get(&region).map(String::as_str)
    }

    /// Number of scroll-to-top requests received.
    pub fn scroll_count(&self) -> usize {
        self.scrolls
    }
}

impl Host for MemoryHost {
    fn has_region(&self, region: Region) -> bool {
        self.regions.contains_key(&region)
    }

    fn replace(&mut self, region: Region, markup: Markup) {
        if let Some(slot) = self.regions.get_mut(&region) {
            *slot = markup.into_string();
        }
    }

    fn scroll_to_top(&mut self) {
        self.scrolls += 1;
    }
}

// ============================================================================
// Actions
// ============================================================================

/// A user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Click on a category chip
    SelectCategory(Category),
    /// Input event on the search box, carrying the full current value
    Search(String),
    /// Click on a page control
    GoToPage(usize),
}

impl Action {
    /// Decode a click on a rendered control.
    ///
    /// `classes` is the element's class list and `data` the value of its
    /// `data-category` or `data-page` attribute. Returns `None` for elements
    /// that are not widget controls or carry an unparseable page number.
    pub fn from_control(classes: &str, data: &str) -> Option<Action> {
        let has = |class: &str| classes.split_whitespace().any(|c| c == class);
        if has(CATEGORY_BUTTON_CLASS) {
            Some(Action::SelectCategory(Category::parse(data)))
        } else if has(PAGE_BUTTON_CLASS) {
            data.trim().parse().ok().map(Action::GoToPage)
        } else {
            None
        }
    }
}

// ============================================================================
// Public surface
// ============================================================================

/// The surface other pages use to embed the feed.
pub trait BlogManager {
    /// Fetch the feed. Failures leave the widget with no posts.
    fn load_posts(&mut self, source: &dyn PostSource);

    /// First `count` posts in feed order, regardless of filter state.
    fn latest_posts(&self, count: usize) -> &[Post];

    /// The full post list.
    fn all_posts(&self) -> &[Post];
}

// ============================================================================
// Controller
// ============================================================================

pub struct BlogWidget<H: Host> {
    state: BlogState,
    config: WidgetConfig,
    host: H,
    loaded: bool,
}

impl<H: Host> BlogWidget<H> {
    pub fn new(host: H, config: WidgetConfig) -> Self {
        Self {
            state: BlogState::default(),
            config,
            host,
            loaded: false,
        }
    }

    pub fn state(&self) -> &BlogState {
        &self.state
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Load the feed and render every region.
    pub fn init(&mut self, source: &dyn PostSource) {
        self.load_posts(source);
        self.render_categories();
        self.render_posts();
    }

    /// Render the category chips.
    pub fn render_categories(&mut self) {
        if !self.host.has_region(Region::Categories) {
            return;
        }
        let summary = summarize(self.state.all_posts());
        let markup = render_categories(
            &summary,
            self.state.current_category(),
            &self.config.labels,
        );
        self.host.replace(Region::Categories, markup);
    }

    /// Render the current page of the grid, then the pagination strip.
    pub fn render_posts(&mut self) {
        if self.host.has_region(Region::Grid) {
            let markup = render_grid(&self.state.page_posts(), &self.config.labels);
            self.host.replace(Region::Grid, markup);
        }
        self.render_pagination();
    }

    /// Render the pagination strip; cleared when there is at most one page.
    pub fn render_pagination(&mut self) {
        if !self.host.has_region(Region::Pagination) {
            return;
        }
        let controls = page_controls(self.state.current_page(), self.state.total_pages());
        let markup = render_pagination(&controls, &self.config.labels);
        self.host.replace(Region::Pagination, markup);
    }

    /// Apply one user interaction and re-render what it affects.
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(?action, "dispatch");
        match action {
            Action::SelectCategory(category) => {
                self.state.select_category(category);
                self.render_categories();
                self.render_posts();
            }
            Action::Search(query) => {
                if !self.host.has_region(Region::Search) {
                    tracing::debug!("no search input mounted, ignoring search");
                    return;
                }
                self.state.search(&query);
                self.render_posts();
            }
            Action::GoToPage(page) => {
                self.state.go_to_page(page);
                self.render_posts();
                self.host.scroll_to_top();
            }
        }
    }
}

impl BlogWidget<MemoryHost> {
    /// Render the whole widget as a standalone HTML page.
    pub fn render_document(&self) -> Markup {
        let search = self
            .host
            .has_region(Region::Search)
            .then(|| render_search_input(self.state.query(), &self.config.labels).into_string());
        let regions = Regions {
            categories: self.host.content(Region::Categories),
            search: search.as_deref(),
            grid: self.host.content(Region::Grid),
            pagination: self.host.content(Region::Pagination),
        };
        render::render_document(&self.config.page, regions)
    }
}

impl<H: Host> BlogManager for BlogWidget<H> {
    fn load_posts(&mut self, source: &dyn PostSource) {
        if self.loaded {
            tracing::warn!("posts already loaded, ignoring reload");
            return;
        }
        self.state = BlogState::with_posts(load_posts(source));
        self.loaded = true;
    }

    fn latest_posts(&self, count: usize) -> &[Post] {
        let posts = self.state.all_posts();
        &posts[..count.min(posts.len())]
    }

    fn all_posts(&self) -> &[Post] {
        self.state.all_posts()
    }
}
