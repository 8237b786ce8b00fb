//! Service carrier: the configured client plus per-caller scoping.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use tokio_util::sync::CancellationToken;

use crate::{
    client::{Client, RequestContext},
    query::{Filter, SortField, SortOrder},
    types::ApiResponse,
    Error,
};

/// What every resource call receives: a shared [`Client`] plus an optional
/// micro-tenant scope, sort preference and request context.
///
/// A `Service` is never mutated after construction. The `with_*` methods
/// return a new carrier that shares the same client, so concurrent callers
/// can each scope their own copy without affecting one another.
#[derive(Clone, Debug)]
pub struct Service {
    client: Arc<Client>,
    micro_tenant_id: Option<String>,
    sort_by: Option<SortField>,
    sort_order: Option<SortOrder>,
    context: RequestContext,
}

impl Service {
    pub fn new(client: Client) -> Self {
        Self::from_shared(Arc::new(client))
    }

    /// Wraps a client that is already shared with other carriers.
    pub fn from_shared(client: Arc<Client>) -> Self {
        Self {
            client,
            micro_tenant_id: None,
            sort_by: None,
            sort_order: None,
            context: RequestContext::default(),
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn customer_id(&self) -> &str {
        self.client.customer_id()
    }

    pub fn micro_tenant_id(&self) -> Option<&str> {
        self.micro_tenant_id.as_deref()
    }

    pub fn sort_by(&self) -> Option<SortField> {
        self.sort_by
    }

    pub fn sort_order(&self) -> Option<SortOrder> {
        self.sort_order
    }

    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    /// Returns a carrier scoped to `micro_tenant_id`. An empty ID means
    /// "unscoped": the parameter is omitted from requests.
    pub fn with_micro_tenant(&self, micro_tenant_id: &str) -> Self {
        let mut service = self.clone();
        service.micro_tenant_id = if micro_tenant_id.is_empty() {
            None
        } else {
            Some(micro_tenant_id.to_string())
        };
        service
    }

    /// Returns a carrier that asks the server to sort list results.
    pub fn with_sort(&self, sort_by: SortField, sort_order: SortOrder) -> Self {
        let mut service = self.clone();
        service.sort_by = Some(sort_by);
        service.sort_order = Some(sort_order);
        service
    }

    /// String form of [`Self::with_sort`] for values coming from user input.
    ///
    /// Each value that does not name a known field/order keeps this carrier's
    /// current setting and logs a warning; it never fails.
    pub fn with_sort_str(&self, sort_by: &str, sort_order: &str) -> Self {
        let mut service = self.clone();
        match sort_by.parse::<SortField>() {
            Ok(field) => service.sort_by = Some(field),
            Err(()) => tracing::warn!("Ignoring unknown sort field '{}'", sort_by),
        }
        match sort_order.parse::<SortOrder>() {
            Ok(order) => service.sort_order = Some(order),
            Err(()) => tracing::warn!("Ignoring unknown sort order '{}'", sort_order),
        }
        service
    }

    /// Returns a carrier whose calls abort once `token` is cancelled.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        let mut service = self.clone();
        service.context.cancel = token;
        service
    }

    /// Returns a carrier with a per-request timeout overriding the client's.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        let mut service = self.clone();
        service.context.timeout = Some(timeout);
        service
    }

    /// Filter carrying this carrier's micro-tenant scope and sort preference.
    pub fn scope_filter(&self) -> Filter {
        Filter {
            search: None,
            sort_by: self.sort_by,
            sort_order: self.sort_order,
            micro_tenant_id: self.micro_tenant_id.clone(),
        }
    }

    /// [`Self::scope_filter`] plus a server-side search string.
    pub fn filter(&self, search: &str) -> Filter {
        self.scope_filter().with_search(search)
    }

    /// Micro-tenant scope only, for singular endpoints.
    fn micro_tenant_filter(&self) -> Filter {
        Filter {
            micro_tenant_id: self.micro_tenant_id.clone(),
            ..Filter::default()
        }
    }

    /// GETs a single resource. The body is required.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<(T, ApiResponse), Error> {
        let resp = self
            .client
            .send(
                &self.context,
                Method::GET,
                path,
                Some(&self.micro_tenant_filter()),
                None,
            )
            .await?;
        let value = resp.json_required::<T>()?;
        Ok((value, resp))
    }

    /// POSTs a new resource and decodes the created object.
    pub async fn create<B, T>(&self, path: &str, body: &B) -> Result<(T, ApiResponse), Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode_body(body)?;
        let resp = self
            .client
            .send(
                &self.context,
                Method::POST,
                path,
                Some(&self.micro_tenant_filter()),
                Some(&body),
            )
            .await?;
        let value = resp.json_required::<T>()?;
        Ok((value, resp))
    }

    /// PUTs an updated resource. Update endpoints usually answer 204, so no
    /// body is decoded; callers that need the stored object GET it afterwards.
    pub async fn update<B>(&self, path: &str, body: &B) -> Result<ApiResponse, Error>
    where
        B: Serialize + ?Sized,
    {
        let body = encode_body(body)?;
        self.client
            .send(
                &self.context,
                Method::PUT,
                path,
                Some(&self.micro_tenant_filter()),
                Some(&body),
            )
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiResponse, Error> {
        self.client
            .send(
                &self.context,
                Method::DELETE,
                path,
                Some(&self.micro_tenant_filter()),
                None,
            )
            .await
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value, Error> {
    serde_json::to_value(body).map_err(|e| {
        tracing::error!("Failed to encode request body: {}", e);
        Error::Encode(e)
    })
}
