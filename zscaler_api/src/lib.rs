//! Request, pagination and scoping core shared by every Zscaler resource binding.
//!
//! A [`Client`] performs single HTTP round trips against a resolved
//! [`Config`]. A [`Service`] wraps it with micro-tenant scope, sort
//! preference and cancellation, and is what bindings receive. The
//! [`pagination`] functions turn `{list, totalPages}` endpoints into one
//! flat typed list.

mod client;
pub mod config;
mod errors;
pub mod lookup;
pub mod pagination;
mod query;
pub mod retry;
mod service;
pub mod types;

pub use self::client::{Client, RequestContext};
pub use self::config::{Cloud, Config};
pub use self::errors::{ApiErrorBody, Error};
pub use self::lookup::Named;
pub use self::query::{Chain, Filter, PageRequest, Query, SortField, SortOrder};
pub use self::service::Service;
pub use self::types::ApiResponse;

pub use reqwest::{Method, StatusCode};
pub use tokio_util::sync::CancellationToken;
