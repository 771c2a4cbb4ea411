use std::fmt::Debug;
use thiserror::Error;
use userlist_web::error::WebError;

#[derive(Error, Clone)]
pub enum AppError {
    #[error("WebError -> {0}")]
    WebError(WebError),
    #[error("config error: {0}")]
    ConfigError(String),
    #[error("env file error: {0}")]
    EnvFileError(String),
}

impl Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0}", self)
    }
}

impl From<WebError> for AppError {
    fn from(value: WebError) -> Self {
        Self::WebError(value)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(e: config::ConfigError) -> Self {
        Self::ConfigError(e.to_string())
    }
}

impl From<dotenvy::Error> for AppError {
    fn from(e: dotenvy::Error) -> Self {
        Self::EnvFileError(e.to_string())
    }
}
