//! Core types of the user list viewer.
//!
//! This crate holds everything that does not touch the network: the `UserRecord` model,
//! the `Pager` that owns the current page of a viewer, and the pagination control builder
//! that turns a `PageState` into the links shown under the table.

pub mod models;
pub mod pager;
pub mod pagination;

pub use models::UserRecord;
pub use pager::{ITEMS_PER_PAGE, Navigation, PageState, Pager, visible_slice};
pub use pagination::{PageLink, PageLinkKind, PaginationConfig, pagination_links};
