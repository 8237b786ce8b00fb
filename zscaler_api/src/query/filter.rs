//! Search/sort/micro-tenant filter and page selection for list endpoints.

use url::Url;

use super::{
    sort::{SortField, SortOrder},
    Query,
};

/// Filter applied to list and lookup calls.
///
/// `micro_tenant_id` distinguishes `None` (no scoping, the parameter is not
/// sent) from `Some("")` (sent as an empty `microtenantId=`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filter {
    /// Server-side substring filter. Not authoritative for exact matches.
    pub search: Option<String>,
    pub sort_by: Option<SortField>,
    pub sort_order: Option<SortOrder>,
    pub micro_tenant_id: Option<String>,
}

impl Query for Filter {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(search) = &self.search {
            if !search.is_empty() {
                url.query_pairs_mut().append_pair("search", search);
            }
        };
        if let Some(micro_tenant_id) = &self.micro_tenant_id {
            url.query_pairs_mut()
                .append_pair("microtenantId", micro_tenant_id);
        };
        if let Some(sort_by) = self.sort_by {
            url.query_pairs_mut()
                .append_pair("sortBy", &sort_by.to_string());
        };
        if let Some(sort_order) = self.sort_order {
            url.query_pairs_mut()
                .append_pair("sortOrder", &sort_order.to_string());
        };
        url
    }
}

impl Filter {
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    pub fn with_sort(mut self, sort_by: SortField, sort_order: SortOrder) -> Self {
        self.sort_by = Some(sort_by);
        self.sort_order = Some(sort_order);
        self
    }

    /// Scopes the filter to a micro-tenant. An empty ID is kept as an
    /// explicit empty parameter; use `Filter::default()` for no scoping.
    pub fn with_micro_tenant(mut self, micro_tenant_id: &str) -> Self {
        self.micro_tenant_id = Some(micro_tenant_id.to_string());
        self
    }
}

/// Page selection for one list request. Pages are 1-indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub page_size: i64,
}

impl Query for PageRequest {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("page", &self.page.to_string())
            .append_pair("pageSize", &self.page_size.to_string());
        url
    }
}
