//! Web interface of the user list viewer.
//!
//! Serves a single page listing the users returned by the upstream endpoint, twenty per page.
//! The list is fetched when `/` is requested; the pages are then browsed through
//! `/page/first`, `/page/last` and `/page/{n}` against a per-session viewer kept in memory.
//!
//! The module uses Actix Web as the web framework and Minijinja for template rendering.

use crate::config::WebConfig;
use crate::error::WebError;
use crate::utils::{AppState, create_reloader, session_key};
use crate::viewer::ViewerRegistry;
use log::info;
use std::sync::Arc;
use userlist_source::{HttpUserSource, SourceConfig};

pub mod config;
pub mod error;

mod handlers;
mod init;
mod templates;
mod utils;
mod viewer;

#[cfg(test)]
mod tests;

/// Initializes and starts the web server.
///
/// # Arguments
///
/// * `web_config` - Bind address, static files, session and presentation settings
/// * `source_config` - Location of the upstream users endpoint
///
/// # Errors
///
/// Fails if the HTTP client cannot be built, the configured session key is too short,
/// or the server cannot bind to `web_config.hostname`.
pub async fn web_init(web_config: WebConfig, source_config: SourceConfig) -> Result<(), WebError> {
    let jinja = Arc::new(create_reloader(format!(
        "{}/templates",
        web_config.files_dir
    )));
    let app_state = AppState::new(
        jinja,
        ViewerRegistry::new(&web_config.session),
        web_config.theme.clone(),
        web_config.pagination.clone(),
    );
    let source = HttpUserSource::new(&source_config)?;
    info!("users are loaded from {}", source.url());
    let key = session_key(&web_config.session_key)?;

    init::run_web(web_config, app_state, source, key).await
}
