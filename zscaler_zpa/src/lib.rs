//! ZPA resource bindings built on `zscaler_api`.
//!
//! Each module maps one management endpoint to `get`, `get_by_name`,
//! `get_all`, `create`, `update` and `delete`. Every function takes the
//! [`Service`] it should run under, so micro-tenant scope, sort and
//! cancellation come from the caller's carrier.

pub mod app_connector_group;
pub mod common;
pub mod segment_group;
pub mod server_group;

pub use zscaler_api;
pub use zscaler_api::{ApiResponse, Client, Config, Error, Service};
