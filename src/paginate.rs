//! Page math for the grid.
//!
//! Pages are 1-based and hold [`PAGE_SIZE`] posts. The control strip always
//! shows the first page, the last page, the current page and its immediate
//! neighbors; every gap collapses into a single ellipsis.
//!
//! ```text
//! total = 10, current = 5
//! Previous 1 … 4 [5] 6 … 10 Next
//! ```

use std::ops::Range;

/// Posts per page.
pub const PAGE_SIZE: usize = 9;

/// One element of the rendered pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    /// Link to the page before the current one
    Previous(usize),
    Page { number: usize, active: bool },
    Ellipsis,
    /// Link to the page after the current one
    Next(usize),
}

impl PageControl {
    /// Page this control navigates to, if it is clickable.
    pub fn target(&self) -> Option<usize> {
        match *self {
            PageControl::Previous(n) | PageControl::Next(n) => Some(n),
            PageControl::Page { number, .. } => Some(number),
            PageControl::Ellipsis => None,
        }
    }
}

/// Number of pages needed for `len` posts: `ceil(len / PAGE_SIZE)`.
pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Bring `page` into `1..=total_pages(len)`. Empty sets map to page 1.
pub fn clamp_page(page: usize, len: usize) -> usize {
    page.clamp(1, total_pages(len).max(1))
}

/// Half-open index range `[(page-1)*9, page*9)` clipped to `len`.
pub fn page_range(page: usize, len: usize) -> Range<usize> {
    let start = (page.max(1) - 1) * PAGE_SIZE;
    let start = start.min(len);
    let end = (start + PAGE_SIZE).min(len);
    start..end
}

/// Build the pagination strip. Empty when there is at most one page.
pub fn page_controls(current: usize, total: usize) -> Vec<PageControl> {
    if total <= 1 {
        return Vec::new();
    }

    let mut controls = Vec::new();
    if current > 1 {
        controls.push(PageControl::Previous(current - 1));
    }

    let window_start = current.saturating_sub(1);
    let window_end = current + 1;
    let mut in_gap = false;
    for number in 1..=total {
        let visible =
            number == 1 || number == total || (number >= window_start && number <= window_end);
        if visible {
            controls.push(PageControl::Page {
                number,
                active: number == current,
            });
            in_gap = false;
        } else if !in_gap {
            controls.push(PageControl::Ellipsis);
            in_gap = true;
        }
    }

    if current < total {
        controls.push(PageControl::Next(current + 1));
    }
    controls
}
