use crate::templates::error::GenericError;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use minijinja::Environment;
use std::error::Error;
use std::fmt::Debug;
use thiserror::Error;
use userlist_source::error::SourceError;

const ERROR_TEMPLATE: &str = include_str!("../templates/error.html");

/// User facing error type
#[derive(Error, Clone)]
pub enum WebError {
    #[error("SourceError -> {0}")]
    SourceError(SourceError),
    #[error("Templating error: {0}")]
    TemplatingError(String),
    #[error("Session error: {0}")]
    SessionError(String),
    #[error("File error: {0}")]
    FileError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Config error: {0}")]
    ConfigError(String),
}

impl Debug for WebError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0}", self)
    }
}

impl From<SourceError> for WebError {
    fn from(value: SourceError) -> Self {
        Self::SourceError(value)
    }
}

impl From<minijinja::Error> for WebError {
    fn from(value: minijinja::Error) -> Self {
        let mut res = value.to_string();
        let mut source = value.source();
        while let Some(cause) = source {
            res.push_str(&format!("\nCaused by: {}", cause));
            source = cause.source();
        }
        Self::TemplatingError(res)
    }
}

impl From<std::io::Error> for WebError {
    fn from(value: std::io::Error) -> Self {
        Self::FileError(value.to_string())
    }
}

impl From<actix_session::SessionInsertError> for WebError {
    fn from(value: actix_session::SessionInsertError) -> Self {
        Self::SessionError(value.to_string())
    }
}

impl From<actix_session::SessionGetError> for WebError {
    fn from(value: actix_session::SessionGetError) -> Self {
        Self::SessionError(value.to_string())
    }
}

impl From<actix_web::cookie::KeyError> for WebError {
    fn from(value: actix_web::cookie::KeyError) -> Self {
        Self::ConfigError(format!("invalid session key: {value}"))
    }
}

impl ResponseError for WebError {
    fn status_code(&self) -> StatusCode {
        match self {
            WebError::ParseError(_) => StatusCode::BAD_REQUEST,
            WebError::SourceError(_)
            | WebError::TemplatingError(_)
            | WebError::SessionError(_)
            | WebError::FileError(_)
            | WebError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        render_generic(self)
    }
}

fn render_generic(error: &WebError) -> HttpResponse {
    let context = GenericError {
        code: error.status_code().as_u16(),
        status_code: error.status_code().to_string(),
        description: error.to_string(),
    };
    let mut env = Environment::new();
    let body = env
        .add_template("error.html", ERROR_TEMPLATE)
        .and_then(|_| env.get_template("error.html")?.render(context))
        .unwrap_or_else(|e| {
            error!("failed to render the error page: {e}");
            error.to_string()
        });
    HttpResponse::build(error.status_code())
        .insert_header(ContentType::html())
        .body(body)
}
