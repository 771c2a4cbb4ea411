//! Shared state and middleware builders for the web interface.

use crate::config::ThemeConfig;
use crate::error::WebError;
use crate::viewer::ViewerRegistry;
use actix_cors::Cors;
use actix_session::SessionMiddleware;
use actix_session::config::PersistentSession;
use actix_session::storage::CookieSessionStore;
use actix_web::ResponseError;
use actix_web::cookie::Key;
use actix_web::http::header;
use actix_web::web::PathConfig;
use log::warn;
use minijinja::{Environment, path_loader};
use minijinja_autoreload::AutoReloader;
use std::sync::Arc;
use userlist_core::PaginationConfig;

pub(crate) const SESSION_COOKIE_NAME: &str = "userlist";

#[derive(Clone)]
pub struct AppState {
    pub jinja: Arc<AutoReloader>,
    pub viewers: ViewerRegistry,
    pub theme: ThemeConfig,
    pub pagination: PaginationConfig,
}

impl AppState {
    pub fn new(
        jinja: Arc<AutoReloader>,
        viewers: ViewerRegistry,
        theme: ThemeConfig,
        pagination: PaginationConfig,
    ) -> Self {
        AppState {
            jinja,
            viewers,
            theme,
            pagination,
        }
    }
}

/// Creates a Minijinja template reloader watching `template_path`.
pub fn create_reloader(template_path: String) -> AutoReloader {
    AutoReloader::new(move |notifier| {
        let mut env = Environment::new();
        env.set_loader(path_loader(&template_path));
        notifier.set_fast_reload(true);
        notifier.watch_path(&template_path, true);
        Ok(env)
    })
}

/// Builds the cookie signing key from configuration, or a random one when none is set.
///
/// A random key invalidates every session cookie on restart, which only costs viewers a
/// reload of the user list.
pub fn session_key(configured: &Option<String>) -> Result<Key, WebError> {
    match configured {
        Some(key) => Ok(Key::try_from(key.as_bytes())?),
        None => {
            warn!("no session key configured; generating a random one");
            Ok(Key::generate())
        }
    }
}

/// Creates CORS middleware allowing requests from `http://{host}`.
pub fn get_cors_middleware(host: &str) -> Cors {
    Cors::default()
        .allowed_origin(format!("http://{}", host).as_str())
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![header::ACCEPT])
        .allowed_header(header::CONTENT_TYPE)
        .supports_credentials()
        .max_age(3600)
}

/// Creates session middleware storing the viewer id in a signed cookie.
///
/// # Arguments
///
/// * `key` - Key signing the session cookie
/// * `use_secure_cookie` - If true, cookies are only sent over HTTPS connections
/// * `session_expiry` - Cookie time-to-live in seconds
pub fn get_session_middleware(
    key: Key,
    use_secure_cookie: bool,
    session_expiry: u64,
) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE_NAME.to_string())
        .cookie_secure(use_secure_cookie)
        .session_lifecycle(
            PersistentSession::default()
                .session_ttl(time::Duration::seconds(session_expiry as i64)),
        )
        .build()
}

pub fn path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| {
        let web_error = WebError::ParseError(err.to_string());
        actix_web::error::InternalError::from_response(err, web_error.error_response()).into()
    })
}
