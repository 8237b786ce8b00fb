//! Server groups: the servers (or dynamic discovery) behind application segments.

use serde::{Deserialize, Serialize};
use zscaler_api::{lookup, pagination, ApiResponse, Error, Named, Service};

use crate::common::{customer_path, resource_path, Reference};

const SERVER_GROUP_ENDPOINT: &str = "/serverGroup";
const RESOURCE: &str = "server group";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServerGroup {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub ip_anchored: bool,
    /// When set, servers are discovered through the connector groups and
    /// `servers` must be empty.
    #[serde(default)]
    pub dynamic_discovery: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub config_space: String,
    #[serde(default)]
    pub app_connector_groups: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applications: Vec<Reference>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub creation_time: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub modified_by: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub modified_time: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub microtenant_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub microtenant_name: String,
}

impl Named for ServerGroup {
    fn name(&self) -> &str {
        &self.name
    }
}

pub async fn get(service: &Service, id: &str) -> Result<(ServerGroup, ApiResponse), Error> {
    service
        .get(&resource_path(service, SERVER_GROUP_ENDPOINT, id))
        .await
}

pub async fn get_by_name(
    service: &Service,
    name: &str,
) -> Result<(ServerGroup, ApiResponse), Error> {
    lookup::get_by_name(
        service,
        &customer_path(service, SERVER_GROUP_ENDPOINT),
        name,
        RESOURCE,
    )
    .await
}

pub async fn get_all(service: &Service) -> Result<(Vec<ServerGroup>, ApiResponse), Error> {
    pagination::get_all_pages(
        service,
        &customer_path(service, SERVER_GROUP_ENDPOINT),
        &service.scope_filter(),
    )
    .await
}

pub async fn create(
    service: &Service,
    group: &ServerGroup,
) -> Result<(ServerGroup, ApiResponse), Error> {
    service
        .create(&customer_path(service, SERVER_GROUP_ENDPOINT), group)
        .await
}

pub async fn update(
    service: &Service,
    id: &str,
    group: &ServerGroup,
) -> Result<ApiResponse, Error> {
    service
        .update(&resource_path(service, SERVER_GROUP_ENDPOINT, id), group)
        .await
}

pub async fn delete(service: &Service, id: &str) -> Result<ApiResponse, Error> {
    service
        .delete(&resource_path(service, SERVER_GROUP_ENDPOINT, id))
        .await
}
