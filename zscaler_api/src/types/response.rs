use reqwest::{header::HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

use crate::{client::truncate_body, Error};

/// A successful (2xx) HTTP response with its body already read.
///
/// Returned alongside decoded values so callers can inspect the status the
/// transport reported.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl ApiResponse {
    /// True when there is nothing to decode: a 204 or an empty body.
    pub fn is_empty(&self) -> bool {
        self.status == StatusCode::NO_CONTENT || self.body.trim().is_empty()
    }

    /// Decodes the body as JSON.
    ///
    /// Returns `Ok(None)` without touching the body when [`Self::is_empty`].
    pub fn json<T: DeserializeOwned>(&self) -> Result<Option<T>, Error> {
        if self.is_empty() {
            return Ok(None);
        }
        serde_json::from_str::<T>(&self.body)
            .map(Some)
            .map_err(|e| {
                let snippet = truncate_body(&self.body);
                tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
                Error::Decode {
                    source: e,
                    body: snippet,
                }
            })
    }

    /// Decodes a body that must be present.
    pub fn json_required<T: DeserializeOwned>(&self) -> Result<T, Error> {
        match self.json::<T>()? {
            Some(value) => Ok(value),
            // An empty body fails as a JSON EOF for every target type.
            None => serde_json::from_str::<T>("").map_err(|e| {
                tracing::error!("Expected a response body, got status {}", self.status);
                Error::Decode {
                    source: e,
                    body: String::new(),
                }
            }),
        }
    }
}
