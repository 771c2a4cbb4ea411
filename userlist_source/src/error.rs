use std::fmt::Debug;
use thiserror::Error;

/// Failures inside the loader. They never leave the crate as errors; `HttpUserSource`
/// reports all of them as a load failure with status 500.
#[derive(Error, Clone)]
pub enum SourceError {
    #[error("HTTP client error: {0}")]
    ClientError(String),
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Response decode error: {0}")]
    DecodeError(String),
}

impl Debug for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0}", self)
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            Self::DecodeError(value.to_string())
        } else if value.is_builder() {
            Self::ClientError(value.to_string())
        } else {
            Self::RequestError(value.to_string())
        }
    }
}
