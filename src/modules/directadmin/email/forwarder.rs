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

//! Mail forwarders (`CMD_API_EMAIL_FORWARDERS`).

use crate::modules::directadmin::commands::CMD_API_EMAIL_FORWARDERS;
use crate::modules::directadmin::params::ParamList;
use crate::modules::directadmin::response::PanelResponse;
use crate::modules::directadmin::{DirectAdminClient, PanelMethod};
use crate::modules::error::CastellanResult;

pub fn list_params(domain: &str) -> ParamList {
    let mut params = ParamList::new();
    params.push("domain", domain);
    params
}

/// `destination` takes multiple addresses separated by commas.
pub fn create_params(domain: &str, user: &str, destination: &str) -> ParamList {
    let mut params = ParamList::new();
    params
        .push("action", "create")
        .push("domain", domain)
        .push("user", user)
        .push("email", destination);
    params
}

pub fn modify_params(domain: &str, user: &str, destination: &str) -> ParamList {
    let mut params = ParamList::new();
    params
        .push("action", "modify")
        .push("domain", domain)
        .push("user", user)
        .push("email", destination);
    params
}

pub fn delete_params<I>(domain: &str, users: I) -> ParamList
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut params = ParamList::new();
    params
        .push("action", "delete")
        .push("domain", domain)
        .push_select(users);
    params
}

pub async fn list(client: &DirectAdminClient, domain: &str) -> CastellanResult<PanelResponse> {
    client
        .query(
            PanelMethod::Get,
            CMD_API_EMAIL_FORWARDERS,
            &list_params(domain),
        )
        .await
}

pub async fn create(
    client: &DirectAdminClient,
    domain: &str,
    user: &str,
    destination: &str,
) -> CastellanResult<PanelResponse> {
    client
        .query(
            PanelMethod::Get,
            CMD_API_EMAIL_FORWARDERS,
            &create_params(domain, user, destination),
        )
        .await
}

pub async fn modify(
    client: &DirectAdminClient,
    domain: &str,
    user: &str,
    destination: &str,
) -> CastellanResult<PanelResponse> {
    client
        .query(
            PanelMethod::Get,
            CMD_API_EMAIL_FORWARDERS,
            &modify_params(domain, user, destination),
        )
        .await
}

pub async fn delete<I>(
    client: &DirectAdminClient,
    domain: &str,
    users: I,
) -> CastellanResult<PanelResponse>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    client
        .query(
            PanelMethod::Get,
            CMD_API_EMAIL_FORWARDERS,
            &delete_params(domain, users),
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_user_delete_becomes_select_zero() {
        let params = delete_params("x.com", ["sales"]);
        assert_eq!(params.get("action"), Some("delete"));
        assert_eq!(params.get("select0"), Some("sales"));
        assert!(!params.contains("select1"));
    }
}
