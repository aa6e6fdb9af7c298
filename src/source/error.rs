// Sun Oct 18 2026 - Alex

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FetchError {
    #[error("{0}")]
    FetchFailed(String),
}

impl FetchError {
    pub fn failed(message: impl Into<String>) -> Self {
        FetchError::FetchFailed(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            FetchError::FetchFailed(msg) => msg,
        }
    }
}

pub type FetchResult<T> = std::result::Result<T, FetchError>;
