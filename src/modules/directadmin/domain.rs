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

//! Domain management (`CMD_API_DOMAIN`, `CMD_API_SHOW_DOMAINS`).

use super::commands::{CMD_API_DOMAIN, CMD_API_SHOW_DOMAINS};
use super::params::ParamList;
use super::response::PanelResponse;
use super::{DirectAdminClient, PanelMethod};
use crate::modules::error::CastellanResult;

/// Bandwidth/quota limits and feature toggles for a domain.
///
/// When an unlimited flag is set the panel ignores the corresponding
/// numeric value, but both fields are still sent on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainLimits {
    pub bandwidth: u64,
    pub unlimited_bandwidth: bool,
    pub quota: u64,
    pub unlimited_quota: bool,
    pub ssl: bool,
    pub cgi: bool,
    pub php: bool,
}

impl Default for DomainLimits {
    fn default() -> Self {
        Self {
            bandwidth: 0,
            unlimited_bandwidth: true,
            quota: 0,
            unlimited_quota: true,
            ssl: false,
            cgi: true,
            php: true,
        }
    }
}

fn domain_action_params(action: &str, domain: &str, limits: &DomainLimits) -> ParamList {
    let mut params = ParamList::new();
    params
        .push("action", action)
        .push("domain", domain)
        .push("bandwidth", limits.bandwidth.to_string())
        .push("quota", limits.quota.to_string())
        .push_on_off("ssl", limits.ssl)
        .push_on_off("cgi", limits.cgi)
        .push_on_off("php", limits.php);
    if limits.unlimited_bandwidth {
        params.push("ubandwidth", "unlimited");
    }
    if limits.unlimited_quota {
        params.push("uquota", "unlimited");
    }
    params
}

pub fn create_params(domain: &str, limits: &DomainLimits) -> ParamList {
    domain_action_params("create", domain, limits)
}

pub fn modify_params(domain: &str, limits: &DomainLimits) -> ParamList {
    domain_action_params("modify", domain, limits)
}

pub fn set_default_params(domain: &str) -> ParamList {
    let mut params = ParamList::new();
    params
        .push("action", "select")
        .push("default", "default")
        .push("select0", domain);
    params
}

pub fn suspend_params<I>(domains: I) -> ParamList
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut params = ParamList::new();
    params
        .push("suspend", "suspend")
        .push_yes_no("confirmed", true)
        .push_select(domains);
    params
}

pub fn delete_params<I>(domains: I) -> ParamList
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut params = ParamList::new();
    params
        .push("delete", "delete")
        .push_yes_no("confirmed", true)
        .push_select(domains);
    params
}

pub async fn list(client: &DirectAdminClient) -> CastellanResult<PanelResponse> {
    client
        .query(PanelMethod::Get, CMD_API_SHOW_DOMAINS, &ParamList::new())
        .await
}

pub async fn create(
    client: &DirectAdminClient,
    domain: &str,
    limits: &DomainLimits,
) -> CastellanResult<PanelResponse> {
    client
        .query(PanelMethod::Get, CMD_API_DOMAIN, &create_params(domain, limits))
        .await
}

pub async fn modify(
    client: &DirectAdminClient,
    domain: &str,
    limits: &DomainLimits,
) -> CastellanResult<PanelResponse> {
    client
        .query(PanelMethod::Get, CMD_API_DOMAIN, &modify_params(domain, limits))
        .await
}

/// Makes `domain` the account's default domain.
pub async fn set_default(client: &DirectAdminClient, domain: &str) -> CastellanResult<PanelResponse> {
    client
        .query(PanelMethod::Get, CMD_API_DOMAIN, &set_default_params(domain))
        .await
}

pub async fn suspend<I>(client: &DirectAdminClient, domains: I) -> CastellanResult<PanelResponse>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    client
        .query(PanelMethod::Get, CMD_API_DOMAIN, &suspend_params(domains))
        .await
}

pub async fn delete<I>(client: &DirectAdminClient, domains: I) -> CastellanResult<PanelResponse>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    client
        .query(PanelMethod::Get, CMD_API_DOMAIN, &delete_params(domains))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_flags_keep_numeric_fields() {
        let limits = DomainLimits {
            bandwidth: 0,
            unlimited_bandwidth: true,
            quota: 0,
            unlimited_quota: true,
            ..DomainLimits::default()
        };
        let params = create_params("x.com", &limits);
        assert_eq!(params.get("bandwidth"), Some("0"));
        assert_eq!(params.get("ubandwidth"), Some("unlimited"));
        assert_eq!(params.get("quota"), Some("0"));
        assert_eq!(params.get("uquota"), Some("unlimited"));
    }

    #[test]
    fn bounded_limits_omit_unlimited_flags() {
        let limits = DomainLimits {
            bandwidth: 1024,
            unlimited_bandwidth: false,
            quota: 512,
            unlimited_quota: false,
            ssl: true,
            cgi: false,
            php: true,
        };
        let params = modify_params("x.com", &limits);
        assert_eq!(params.get("action"), Some("modify"));
        assert_eq!(params.get("bandwidth"), Some("1024"));
        assert!(!params.contains("ubandwidth"));
        assert!(!params.contains("uquota"));
        assert_eq!(params.get("ssl"), Some("ON"));
        assert_eq!(params.get("cgi"), Some("OFF"));
    }

    #[test]
    fn suspend_serializes_domains_in_order() {
        let params = suspend_params(["a.com", "b.com"]);
        assert_eq!(params.get("suspend"), Some("suspend"));
        assert_eq!(params.get("confirmed"), Some("yes"));
        assert_eq!(params.get("select0"), Some("a.com"));
        assert_eq!(params.get("select1"), Some("b.com"));
    }

    #[test]
    fn set_default_selects_a_single_domain() {
        let params = set_default_params("x.com");
        assert_eq!(params.get("action"), Some("select"));
        assert_eq!(params.get("default"), Some("default"));
        assert_eq!(params.get("select0"), Some("x.com"));
    }
}
