use serde::Serialize;

/// Number of records shown on a single page.
pub const ITEMS_PER_PAGE: usize = 20;

/// The current/total page pair owned by a `Pager`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub current_page: usize,
    pub total_pages: usize,
}

/// A navigation event coming from the pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Navigation {
    First,
    Last,
    Page(usize),
}

/// Tracks which page of a fixed record list is selected.
///
/// The total page count is computed once in `initialize` and never recomputed; the record
/// list itself is not owned by the pager and is passed in again when slicing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    state: PageState,
}

impl Pager {
    /// Creates a pager positioned on page 1.
    ///
    /// A `page_size` of zero is treated as one.
    pub fn initialize<T>(records: &[T], page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            state: PageState {
                current_page: 1,
                total_pages: records.len().div_ceil(page_size),
            },
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.state.total_pages
    }

    pub fn go_to_first(&mut self) {
        self.state.current_page = 1;
    }

    /// Moves to the last page; an empty list keeps the pager on page 1.
    pub fn go_to_last(&mut self) {
        self.state.current_page = self.state.total_pages.max(1);
    }

    /// Moves to page `page` as given. Out of range pages are not rejected, they simply
    /// produce an empty slice.
    pub fn go_to_page(&mut self, page: usize) {
        self.state.current_page = page;
    }

    pub fn navigate(&mut self, navigation: Navigation) {
        match navigation {
            Navigation::First => self.go_to_first(),
            Navigation::Last => self.go_to_last(),
            Navigation::Page(page) => self.go_to_page(page),
        }
    }

    /// Records visible on the current page.
    pub fn visible<'a, T>(&self, records: &'a [T]) -> &'a [T] {
        visible_slice(records, self.state.current_page, self.page_size)
    }
}

/// Returns `records[(current_page - 1) * page_size..][..page_size]`, clipped to the list.
///
/// Pages outside `1..=ceil(len / page_size)`, including page 0, yield an empty slice.
pub fn visible_slice<T>(records: &[T], current_page: usize, page_size: usize) -> &[T] {
    let Some(index) = current_page.checked_sub(1) else {
        return &[];
    };
    let start = index.saturating_mul(page_size);
    if start >= records.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(records.len());
    &records[start..end]
}
