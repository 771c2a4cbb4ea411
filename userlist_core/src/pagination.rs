//! Pagination control shown below the users table.
//!
//! The control is built from a `PageState` and a `PaginationConfig`; it knows nothing about
//! the records being paged. Its layout follows the usual bootstrap pager: first, previous,
//! a window of page numbers around the current page, next, last.

use crate::pager::{Navigation, PageState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq, Hash)]
pub struct PaginationConfig {
    /// Pages shown on each side of the current page.
    #[serde(default = "default_between")]
    pub between: usize,
    /// Pages pinned to each end of the control when `ellipsis` is enabled.
    #[serde(default = "default_boundary")]
    pub boundary: usize,
    /// Render boundary pages and an ellipsis glyph for skipped ranges.
    #[serde(default)]
    pub ellipsis: bool,
    /// Render the previous/next arrows.
    #[serde(default = "default_prev_next")]
    pub prev_next: bool,
}

fn default_between() -> usize {
    5
}

fn default_boundary() -> usize {
    1
}

fn default_prev_next() -> bool {
    true
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            between: default_between(),
            boundary: default_boundary(),
            ellipsis: false,
            prev_next: default_prev_next(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageLinkKind {
    First,
    Prev,
    Page,
    Ellipsis,
    Next,
    Last,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub kind: PageLinkKind,
    pub label: String,
    /// `None` for the ellipsis and for disabled arrows.
    pub target: Option<Navigation>,
    pub active: bool,
    pub disabled: bool,
}

impl PageLink {
    fn first() -> Self {
        Self::enabled(PageLinkKind::First, "«", Navigation::First)
    }

    fn last() -> Self {
        Self::enabled(PageLinkKind::Last, "»", Navigation::Last)
    }

    fn page(number: usize, current_page: usize) -> Self {
        Self {
            kind: PageLinkKind::Page,
            label: number.to_string(),
            target: Some(Navigation::Page(number)),
            active: number == current_page,
            disabled: false,
        }
    }

    fn ellipsis() -> Self {
        Self {
            kind: PageLinkKind::Ellipsis,
            label: "…".to_owned(),
            target: None,
            active: false,
            disabled: true,
        }
    }

    fn arrow(kind: PageLinkKind, label: &str, target: usize, disabled: bool) -> Self {
        if disabled {
            Self {
                kind,
                label: label.to_owned(),
                target: None,
                active: false,
                disabled: true,
            }
        } else {
            Self::enabled(kind, label, Navigation::Page(target))
        }
    }

    fn enabled(kind: PageLinkKind, label: &str, target: Navigation) -> Self {
        Self {
            kind,
            label: label.to_owned(),
            target: Some(target),
            active: false,
            disabled: false,
        }
    }
}

/// Builds the links of the pagination control for `state`.
///
/// First and last links are always present. Everything between them is emitted only when
/// there is at least one page.
pub fn pagination_links(config: &PaginationConfig, state: PageState) -> Vec<PageLink> {
    let total = state.total_pages;
    let mut links = vec![PageLink::first()];
    if total == 0 {
        links.push(PageLink::last());
        return links;
    }

    let page = state.current_page.clamp(1, total);
    let between = config.between.max(1);
    let window = between.saturating_mul(2).saturating_add(1);
    let boundary = effective_boundary(config, between);
    let shrink = if boundary > 0 { boundary + 1 } else { 0 };
    let at_start = page - 1 <= between;
    let at_end = page.saturating_add(between) >= total;
    let collapsed = total > window;

    let range = if !collapsed {
        1..=total
    } else if at_start {
        1..=window - shrink
    } else if at_end {
        total - window + shrink + 1..=total
    } else {
        page - (between - shrink)..=page + (between - shrink)
    };

    if config.prev_next {
        links.push(PageLink::arrow(PageLinkKind::Prev, "‹", page.saturating_sub(1), page <= 1));
    }
    if collapsed && boundary > 0 && !at_start {
        links.extend((1..=boundary).map(|n| PageLink::page(n, state.current_page)));
        links.push(PageLink::ellipsis());
    }
    links.extend(range.map(|n| PageLink::page(n, state.current_page)));
    if collapsed && boundary > 0 && !at_end {
        links.push(PageLink::ellipsis());
        links.extend((total - boundary + 1..=total).map(|n| PageLink::page(n, state.current_page)));
    }
    if config.prev_next {
        links.push(PageLink::arrow(PageLinkKind::Next, "›", page + 1, page >= total));
    }

    links.push(PageLink::last());
    links
}

/// Boundary pages only exist together with the ellipsis and must leave room for at least
/// one page of the window on each side of the current page.
fn effective_boundary(config: &PaginationConfig, between: usize) -> usize {
    if !config.ellipsis || config.boundary == 0 {
        0
    } else if config.boundary.saturating_add(2) >= between {
        between.saturating_sub(2)
    } else {
        config.boundary
    }
}
