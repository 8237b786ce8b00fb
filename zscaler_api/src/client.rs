//! HTTP request executor for the Zscaler management APIs.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, Method};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::{
    config::Config,
    errors::ApiErrorBody,
    query::Query,
    types::ApiResponse,
    Error,
};

/// Per-call settings carried by a [`crate::Service`]: cancellation and an
/// optional timeout that overrides the client-wide one.
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    pub cancel: CancellationToken,
    pub timeout: Option<Duration>,
}

impl RequestContext {
    /// Fails with [`Error::Cancelled`] once the token has fired.
    pub fn check(&self) -> Result<(), Error> {
        if self.cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        Ok(())
    }
}

/// HTTP client for the management API.
///
/// Holds one pooled `reqwest::Client` and the resolved [`Config`]. Both are
/// read-only after construction, so a `Client` can be shared freely across
/// tasks. The client performs exactly one round trip per call and never retries.
pub struct Client {
    http: reqwest::Client,
    config: Arc<Config>,
}

impl Client {
    /// Builds a client from a resolved configuration.
    pub fn new(config: Config) -> Result<Self, Error> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e)
            })?;
        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    /// Builds a client against a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, customer_id: &str) -> Result<Self, Error> {
        Self::new(Config::with_base_url(base_url, customer_id))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn customer_id(&self) -> &str {
        &self.config.customer_id
    }

    fn get_url(&self, path: &str, query: Option<&(dyn Query + Sync)>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.config.base_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed for path {}: {}", path, e);
            Error::InvalidUrl(e)
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    /// Performs one HTTP round trip.
    ///
    /// `path` is relative to the configured base URL. 2xx responses come back
    /// with their body read but not decoded; anything else becomes
    /// [`Error::HttpStatus`] carrying the upstream `{id, message}` payload
    /// when one was sent.
    pub async fn send(
        &self,
        ctx: &RequestContext,
        method: Method,
        path: &str,
        query: Option<&(dyn Query + Sync)>,
        body: Option<&serde_json::Value>,
    ) -> Result<ApiResponse, Error> {
        ctx.check()?;
        let url = self.get_url(path, query)?;
        tracing::debug!("{} {}", method, url);

        let mut req = self
            .http
            .request(method.clone(), url.clone())
            .header(header::ACCEPT, "application/json");
        if let Some(token) = &self.config.access_token {
            req = req.bearer_auth(token);
        }
        if let Some(body) = body {
            req = req.json(body);
        }
        if let Some(timeout) = ctx.timeout {
            req = req.timeout(timeout);
        }

        let exchange = async {
            let resp = req.send().await?;
            let status = resp.status();
            let headers = resp.headers().clone();
            let body = resp.text().await?;
            Ok::<_, reqwest::Error>((status, headers, body))
        };

        let (status, headers, body) = tokio::select! {
            biased;
            _ = ctx.cancel.cancelled() => {
                tracing::debug!("{} {} cancelled", method, url);
                return Err(Error::Cancelled);
            }
            result = exchange => result.map_err(|e| {
                tracing::error!("Failed to {} {}: {}", method, url, e);
                Error::Transport(e)
            })?,
        };
        tracing::debug!("{} {} -> {}", method, url, status);

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::warn!("{} {} failed with status {}: {}", method, url, status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                error: parse_error_body(&body),
                body: snippet,
            });
        }

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }

    /// Performs one round trip and decodes the JSON body.
    ///
    /// The value is `None` when the server sent no body (204 or empty).
    pub async fn request<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        method: Method,
        path: &str,
        query: Option<&(dyn Query + Sync)>,
        body: Option<&serde_json::Value>,
    ) -> Result<(Option<T>, ApiResponse), Error> {
        let resp = self.send(ctx, method, path, query, body).await?;
        let value = resp.json::<T>()?;
        Ok((value, resp))
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.config.base_url)
            .field("customer_id", &self.config.customer_id)
            .field("has_access_token", &self.config.access_token.is_some())
            .finish_non_exhaustive()
    }
}

fn parse_error_body(body: &str) -> Option<ApiErrorBody> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .filter(|e| !e.id.is_empty() || !e.message.is_empty())
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
