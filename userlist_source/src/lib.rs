//! Data loader for the user list viewer.
//!
//! The loader performs exactly one `GET` against the configured users endpoint per call and
//! never fails: every outcome is folded into a `LoadResult` carrying an HTTP-like status code.

pub mod config;
pub mod error;
pub mod loader;


pub use config::SourceConfig;
pub use loader::{HttpUserSource, LoadResult, STATUS_LOAD_FAILED, STATUS_OK, UserSource};
