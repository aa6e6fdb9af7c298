// Sun Oct 18 2026 - Alex

use crate::source::error::{FetchError, FetchResult};
use serde::Serialize;
use std::time::Duration;

/// What one source produced during one dispatch.
///
/// Built once by the unit that ran the fetch and moved through the conduit;
/// fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    source: String,
    payload: String,
    error: Option<FetchError>,
    elapsed_ms: u64,
}

impl Outcome {
    pub fn new(source: impl Into<String>, result: FetchResult<String>, elapsed: Duration) -> Self {
        let (payload, error) = match result {
            Ok(payload) => (payload, None),
            Err(e) => (String::new(), Some(e)),
        };

        Self {
            source: source.into(),
            payload,
            error,
            elapsed_ms: elapsed.as_millis() as u64,
        }
    }

    pub fn success(source: impl Into<String>, payload: impl Into<String>) -> Self {
        Self::new(source, Ok(payload.into()), Duration::ZERO)
    }

    pub fn failure(source: impl Into<String>, error: FetchError) -> Self {
        Self::new(source, Err(error), Duration::ZERO)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Empty when the fetch failed.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms)
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}
