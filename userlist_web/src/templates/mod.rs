use serde::Serialize;
use userlist_core::PageState;

pub mod error;
pub mod index;

#[derive(Serialize)]
pub struct PageInfo {
    pub page: usize,
    pub total_pages: usize,
}

impl PageInfo {
    pub fn new(page: usize, total_pages: usize) -> Self {
        Self { page, total_pages }
    }
}

impl From<PageState> for PageInfo {
    fn from(value: PageState) -> Self {
        Self::new(value.current_page, value.total_pages)
    }
}
