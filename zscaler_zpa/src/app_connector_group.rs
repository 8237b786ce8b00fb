//! App connector groups: location-bound pools of App Connectors.

use serde::{Deserialize, Serialize};
use zscaler_api::{lookup, pagination, ApiResponse, Error, Named, Service};

use crate::common::{customer_path, resource_path, Reference};

const APP_CONNECTOR_GROUP_ENDPOINT: &str = "/appConnectorGroup";
const RESOURCE: &str = "app connector group";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppConnectorGroup {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city_country: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub latitude: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub longitude: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,
    /// `IPV4`, `IPV6` or `IPV4_IPV6`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub dns_query_type: String,
    #[serde(default)]
    pub lss_app_connector_group: bool,
    #[serde(default)]
    pub override_version_profile: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version_profile_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version_profile_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub upgrade_day: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub upgrade_time_in_secs: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub server_groups: Vec<Reference>,
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

impl Named for AppConnectorGroup {
    fn name(&self) -> &str {
        &self.name
    }
}

pub async fn get(service: &Service, id: &str) -> Result<(AppConnectorGroup, ApiResponse), Error> {
    service
        .get(&resource_path(service, APP_CONNECTOR_GROUP_ENDPOINT, id))
        .await
}

pub async fn get_by_name(
    service: &Service,
    name: &str,
) -> Result<(AppConnectorGroup, ApiResponse), Error> {
    lookup::get_by_name(
        service,
        &customer_path(service, APP_CONNECTOR_GROUP_ENDPOINT),
        name,
        RESOURCE,
    )
    .await
}

pub async fn get_all(service: &Service) -> Result<(Vec<AppConnectorGroup>, ApiResponse), Error> {
    pagination::get_all_pages(
        service,
        &customer_path(service, APP_CONNECTOR_GROUP_ENDPOINT),
        &service.scope_filter(),
    )
    .await
}

pub async fn create(
    service: &Service,
    group: &AppConnectorGroup,
) -> Result<(AppConnectorGroup, ApiResponse), Error> {
    service
        .create(&customer_path(service, APP_CONNECTOR_GROUP_ENDPOINT), group)
        .await
}

pub async fn update(
    service: &Service,
    id: &str,
    group: &AppConnectorGroup,
) -> Result<ApiResponse, Error> {
    service
        .update(
            &resource_path(service, APP_CONNECTOR_GROUP_ENDPOINT, id),
            group,
        )
        .await
}

pub async fn delete(service: &Service, id: &str) -> Result<ApiResponse, Error> {
    service
        .delete(&resource_path(service, APP_CONNECTOR_GROUP_ENDPOINT, id))
        .await
}
