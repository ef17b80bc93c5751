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

//! Subdomain management (`CMD_API_SUBDOMAINS`).

use super::commands::CMD_API_SUBDOMAINS;
use super::params::ParamList;
use super::response::PanelResponse;
use super::{DirectAdminClient, PanelMethod};
use crate::modules::error::CastellanResult;

pub fn list_params(domain: &str) -> ParamList {
    let mut params = ParamList::new();
    params.push("domain", domain);
    params
}

pub fn create_params(domain: &str, subdomain: &str) -> ParamList {
    let mut params = ParamList::new();
    params
        .push("action", "create")
        .push("domain", domain)
        .push("subdomain", subdomain);
    params
}

/// `remove_contents` controls whether the subdomain's document root is
/// deleted along with the subdomain.
pub fn delete_params<I>(domain: &str, subdomains: I, remove_contents: bool) -> ParamList
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut params = ParamList::new();
    params
        .push("action", "delete")
        .push("domain", domain)
        .push_select(subdomains)
        .push_yes_no("contents", remove_contents);
    params
}

pub async fn list(client: &DirectAdminClient, domain: &str) -> CastellanResult<PanelResponse> {
    client
        .query(PanelMethod::Get, CMD_API_SUBDOMAINS, &list_params(domain))
        .await
}

pub async fn create(
    client: &DirectAdminClient,
    domain: &str,
    subdomain: &str,
) -> CastellanResult<PanelResponse> {
    client
        .query(
            PanelMethod::Get,
            CMD_API_SUBDOMAINS,
            &create_params(domain, subdomain),
        )
        .await
}

pub async fn delete<I>(
    client: &DirectAdminClient,
    domain: &str,
    subdomains: I,
    remove_contents: bool,
) -> CastellanResult<PanelResponse>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    client
        .query(
            PanelMethod::Get,
            CMD_API_SUBDOMAINS,
            &delete_params(domain, subdomains, remove_contents),
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_carries_contents_flag() {
        let params = delete_params("x.com", ["blog", "shop"], false);
        assert_eq!(params.get("action"), Some("delete"));
        assert_eq!(params.get("select0"), Some("blog"));
        assert_eq!(params.get("select1"), Some("shop"));
        assert_eq!(params.get("contents"), Some("no"));
    }
}
