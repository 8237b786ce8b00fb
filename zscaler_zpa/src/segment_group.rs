//! Segment groups: named collections of application segments.

use serde::{Deserialize, Serialize};
use zscaler_api::{lookup, pagination, ApiResponse, Error, Named, Service};

use crate::common::{customer_path, resource_path, Reference};

const SEGMENT_GROUP_ENDPOINT: &str = "/segmentGroup";
const RESOURCE: &str = "segment group";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SegmentGroup {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub enabled: bool,
    /// Application segments in this group.
    #[serde(default)]
    pub applications: Vec<Reference>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub config_space: String,
    #[serde(default)]
    pub policy_migrated: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tcp_keep_alive_enabled: String,
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

impl Named for SegmentGroup {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Fetches a segment group by ID.
pub async fn get(service: &Service, id: &str) -> Result<(SegmentGroup, ApiResponse), Error> {
    service
        .get(&resource_path(service, SEGMENT_GROUP_ENDPOINT, id))
        .await
}

/// Finds a segment group by exact (case-insensitive) name.
pub async fn get_by_name(
    service: &Service,
    name: &str,
) -> Result<(SegmentGroup, ApiResponse), Error> {
    lookup::get_by_name(
        service,
        &customer_path(service, SEGMENT_GROUP_ENDPOINT),
        name,
        RESOURCE,
    )
    .await
}

/// Lists every segment group visible to the service's scope.
pub async fn get_all(service: &Service) -> Result<(Vec<SegmentGroup>, ApiResponse), Error> {
    pagination::get_all_pages(
        service,
        &customer_path(service, SEGMENT_GROUP_ENDPOINT),
        &service.scope_filter(),
    )
    .await
}

pub async fn create(
    service: &Service,
    group: &SegmentGroup,
) -> Result<(SegmentGroup, ApiResponse), Error> {
    let (created, resp) = service
        .create::<_, SegmentGroup>(&customer_path(service, SEGMENT_GROUP_ENDPOINT), group)
        .await?;
    tracing::debug!("Created segment group {}", created.id);
    Ok((created, resp))
}

/// Replaces a segment group. The API answers 204 with no body.
pub async fn update(
    service: &Service,
    id: &str,
    group: &SegmentGroup,
) -> Result<ApiResponse, Error> {
    service
        .update(&resource_path(service, SEGMENT_GROUP_ENDPOINT, id), group)
        .await
}

pub async fn delete(service: &Service, id: &str) -> Result<ApiResponse, Error> {
    service
        .delete(&resource_path(service, SEGMENT_GROUP_ENDPOINT, id))
        .await
}
