//
// Copyright (c) 2026 castellan project (https://github.com/castellan)
//
// This file is part of the Castellan Panel Automation Project
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::sync::Arc;

use poem_openapi::param::Query;
use poem_openapi::payload::Json;
use poem_openapi::{Object, OpenApi};
use serde::{Deserialize, Serialize};

use crate::modules::directadmin::domain::{self, DomainLimits};
use crate::modules::directadmin::subdomain;
use crate::modules::directadmin::DirectAdminClient;
use crate::modules::rest::api::{panel_entries, ApiTags, PanelEntry};
use crate::modules::rest::ApiResult;

pub struct DomainApi {
    client: Arc<DirectAdminClient>,
}

impl DomainApi {
    pub fn new(client: Arc<DirectAdminClient>) -> Self {
        Self { client }
    }
}

/// Limits and toggles for a new or changed domain. Omitted numeric
/// limits mean unlimited; omitted toggles default to the panel's
/// conventions (ssl off, cgi and php on).
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct DomainRequest {
    pub domain: String,
    /// Bandwidth limit in MB; absent means unlimited.
    pub bandwidth: Option<u64>,
    /// Disk quota in MB; absent means unlimited.
    pub quota: Option<u64>,
    pub ssl: Option<bool>,
    pub cgi: Option<bool>,
    pub php: Option<bool>,
}

impl DomainRequest {
    fn limits(&self) -> DomainLimits {
        let defaults = DomainLimits::default();
        DomainLimits {
            bandwidth: self.bandwidth.unwrap_or(0),
            unlimited_bandwidth: self.bandwidth.is_none(),
            quota: self.quota.unwrap_or(0),
            unlimited_quota: self.quota.is_none(),
            ssl: self.ssl.unwrap_or(defaults.ssl),
            cgi: self.cgi.unwrap_or(defaults.cgi),
            php: self.php.unwrap_or(defaults.php),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct DomainSelection {
    pub domains: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SubdomainRequest {
    pub domain: String,
    pub subdomain: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SubdomainDeleteRequest {
    pub domain: String,
    pub subdomains: Vec<String>,
    /// Also remove the directory contents of each subdomain.
    pub remove_contents: bool,
}

#[OpenApi(prefix_path = "/api/domain", tag = "ApiTags::Domain")]
impl DomainApi {
    /// Lists the domains of the panel account.
    #[oai(path = "/list", method = "get", operation_id = "list_domains")]
    async fn list(&self) -> ApiResult<Json<Vec<PanelEntry>>> {
        Ok(Json(panel_entries(domain::list(&self.client).await?)))
    }

    /// Creates a domain.
    #[oai(path = "/create", method = "post", operation_id = "create_domain")]
    async fn create(&self, payload: Json<DomainRequest>) -> ApiResult<Json<Vec<PanelEntry>>> {
        let response = domain::create(&self.client, &payload.domain, &payload.limits()).await?;
        Ok(Json(panel_entries(response)))
    }

    /// Changes the limits and toggles of an existing domain.
    #[oai(path = "/modify", method = "post", operation_id = "modify_domain")]
    async fn modify(&self, payload: Json<DomainRequest>) -> ApiResult<Json<Vec<PanelEntry>>> {
        let response = domain::modify(&self.client, &payload.domain, &payload.limits()).await?;
        Ok(Json(panel_entries(response)))
    }

    /// Marks a domain as the account default.
    #[oai(path = "/set-default", method = "post", operation_id = "set_default_domain")]
    async fn set_default(&self, domain: Query<String>) -> ApiResult<Json<Vec<PanelEntry>>> {
        let response = domain::set_default(&self.client, &domain.0).await?;
        Ok(Json(panel_entries(response)))
    }

    /// Suspends the selected domains.
    #[oai(path = "/suspend", method = "post", operation_id = "suspend_domains")]
    async fn suspend(&self, payload: Json<DomainSelection>) -> ApiResult<Json<Vec<PanelEntry>>> {
        let response = domain::suspend(&self.client, payload.0.domains).await?;
        Ok(Json(panel_entries(response)))
    }

    /// Deletes the selected domains.
    #[oai(path = "/delete", method = "post", operation_id = "delete_domains")]
    async fn delete(&self, payload: Json<DomainSelection>) -> ApiResult<Json<Vec<PanelEntry>>> {
        let response = domain::delete(&self.client, payload.0.domains).await?;
        Ok(Json(panel_entries(response)))
    }

    /// Lists the subdomains of a domain.
    #[oai(path = "/subdomains", method = "get", operation_id = "list_subdomains")]
    async fn subdomains(&self, domain: Query<String>) -> ApiResult<Json<Vec<PanelEntry>>> {
        let response = subdomain::list(&self.client, &domain.0).await?;
        Ok(Json(panel_entries(response)))
    }

    /// Creates a subdomain.
    #[oai(
        path = "/subdomains/create",
        method = "post",
        operation_id = "create_subdomain"
    )]
    async fn create_subdomain(
        &self,
        payload: Json<SubdomainRequest>,
    ) -> ApiResult<Json<Vec<PanelEntry>>> {
        let response = subdomain::create(&self.client, &payload.domain, &payload.subdomain).await?;
        Ok(Json(panel_entries(response)))
    }

    /// Deletes the selected subdomains.
    #[oai(
        path = "/subdomains/delete",
        method = "post",
        operation_id = "delete_subdomains"
    )]
    async fn delete_subdomains(
        &self,
        payload: Json<SubdomainDeleteRequest>,
    ) -> ApiResult<Json<Vec<PanelEntry>>> {
        let payload = payload.0;
        let response = subdomain::delete(
            &self.client,
            &payload.domain,
            payload.subdomains,
            payload.remove_contents,
        )
        .await?;
        Ok(Json(panel_entries(response)))
    }
}
