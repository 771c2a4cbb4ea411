use serde::{Deserialize, Serialize};
use userlist_core::PaginationConfig;

#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq, Hash)]
pub struct WebConfig {
    #[serde(default = "default_web_hostname")]
    pub hostname: String,
    #[serde(default = "default_web_hostname")]
    pub site_url: String,
    #[serde(default = "default_files_dir")]
    pub files_dir: String,
    /// Key signing the session cookie, at least 64 bytes. A random key is generated when unset.
    #[serde(default)]
    pub session_key: Option<String>,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            hostname: default_web_hostname(),
            site_url: default_web_hostname(),
            files_dir: default_files_dir(),
            session_key: None,
            session: SessionConfig::default(),
            theme: ThemeConfig::default(),
            pagination: PaginationConfig::default(),
        }
    }
}

fn default_web_hostname() -> String {
    "localhost:8000".to_string()
}

fn default_files_dir() -> String {
    "userlist_web".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq, Hash)]
pub struct SessionConfig {
    /// Seconds a viewer may stay idle before its page state is dropped.
    pub ttl: u64,
    /// Maximum number of viewers kept in memory.
    pub capacity: usize,
    pub use_secure_cookie: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl: 1800,
            capacity: 1024,
            use_secure_cookie: false,
        }
    }
}

/// Font settings read once at startup and handed to every template.
#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq, Hash)]
pub struct ThemeConfig {
    pub font_family: String,
    pub font_stylesheet: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            font_family: "Inter".to_string(),
            font_stylesheet: "https://fonts.googleapis.com/css2?family=Inter&display=swap"
                .to_string(),
        }
    }
}
