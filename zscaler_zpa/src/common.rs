//! Pieces shared by every ZPA binding.

use serde::{Deserialize, Serialize};
use zscaler_api::Service;

/// Prefix of every ZPA management endpoint; the customer ID follows it.
pub const MGMT_CONFIG: &str = "/mgmtconfig/v1/admin/customers/";

/// Full path of `endpoint` for the service's customer.
pub fn customer_path(service: &Service, endpoint: &str) -> String {
    format!("{}{}{}", MGMT_CONFIG, service.customer_id(), endpoint)
}

/// Path of one resource under `endpoint`.
pub fn resource_path(service: &Service, endpoint: &str, id: &str) -> String {
    format!("{}/{}", customer_path(service, endpoint), id)
}

/// `{id, name}` reference to another resource, as embedded in parent objects.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Reference {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl Reference {
    pub fn id(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use zscaler_api::Client;

    use super::*;

    #[test]
    fn paths_include_customer() {
        let svc = Service::new(Client::with_base_url("http://localhost", "7777").unwrap());
        assert_eq!(
            customer_path(&svc, "/segmentGroup"),
            "/mgmtconfig/v1/admin/customers/7777/segmentGroup"
        );
        assert_eq!(
            resource_path(&svc, "/serverGroup", "42"),
            "/mgmtconfig/v1/admin/customers/7777/serverGroup/42"
        );
    }

    #[test]
    fn reference_skips_empty_name() {
        let json = serde_json::to_string(&Reference::id("5")).unwrap();
        assert_eq!(json, r#"{"id":"5"}"#);
    }
}
