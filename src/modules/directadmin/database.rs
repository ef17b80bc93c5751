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

//! Database and database-user management (`CMD_API_DATABASES`,
//! `CMD_API_DB_USER`).

use super::commands::{CMD_API_DATABASES, CMD_API_DB_USER};
use super::params::ParamList;
use super::response::PanelResponse;
use super::{DirectAdminClient, PanelMethod};
use crate::modules::error::CastellanResult;

pub fn list_params(domain: &str) -> ParamList {
    let mut params = ParamList::new();
    params.push("domain", domain);
    params
}

/// `existing_user` selects an already-present database user instead of
/// creating a new one.
pub fn create_params(
    domain: &str,
    name: &str,
    user: &str,
    password: &str,
    existing_user: Option<&str>,
) -> ParamList {
    let mut params = ParamList::new();
    params
        .push("action", "create")
        .push("domain", domain)
        .push("name", name)
        .push("user", user)
        .push("passwd", password)
        .push("passwd2", password);
    if let Some(existing) = existing_user {
        params.push("userlist", existing);
    }
    params
}

pub fn delete_params<I>(domain: &str, databases: I) -> ParamList
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut params = ParamList::new();
    params
        .push("action", "delete")
        .push("domain", domain)
        .push_select(databases);
    params
}

pub fn user_list_params(database: &str) -> ParamList {
    let mut params = ParamList::new();
    params.push("name", database);
    params
}

fn user_action_params(action: &str, database: &str, user: &str, password: &str) -> ParamList {
    let mut params = ParamList::new();
    params
        .push("action", action)
        .push("name", database)
        .push("user", user)
        .push("passwd", password)
        .push("passwd2", password);
    params
}

pub fn user_create_params(database: &str, user: &str, password: &str) -> ParamList {
    user_action_params("create", database, user, password)
}

pub fn user_modify_params(database: &str, user: &str, password: &str) -> ParamList {
    user_action_params("modify", database, user, password)
}

pub fn user_delete_params<I>(database: &str, users: I) -> ParamList
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut params = ParamList::new();
    params
        .push("action", "delete")
        .push("name", database)
        .push_select(users);
    params
}

pub async fn list(client: &DirectAdminClient, domain: &str) -> CastellanResult<PanelResponse> {
    client
        .query(PanelMethod::Get, CMD_API_DATABASES, &list_params(domain))
        .await
}

pub async fn create(
    client: &DirectAdminClient,
    domain: &str,
    name: &str,
    user: &str,
    password: &str,
    existing_user: Option<&str>,
) -> CastellanResult<PanelResponse> {
    client
        .query(
            PanelMethod::Get,
            CMD_API_DATABASES,
            &create_params(domain, name, user, password, existing_user),
        )
        .await
}

pub async fn delete<I>(
    client: &DirectAdminClient,
    domain: &str,
    databases: I,
) -> CastellanResult<PanelResponse>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    client
        .query(
            PanelMethod::Get,
            CMD_API_DATABASES,
            &delete_params(domain, databases),
        )
        .await
}

pub async fn user_list(client: &DirectAdminClient, database: &str) -> CastellanResult<PanelResponse> {
    client
        .query(PanelMethod::Get, CMD_API_DB_USER, &user_list_params(database))
        .await
}

pub async fn user_create(
    client: &DirectAdminClient,
    database: &str,
    user: &str,
    password: &str,
) -> CastellanResult<PanelResponse> {
    client
        .query(
            PanelMethod::Get,
            CMD_API_DB_USER,
            &user_create_params(database, user, password),
        )
        .await
}

pub async fn user_modify(
    client: &DirectAdminClient,
    database: &str,
    user: &str,
    password: &str,
) -> CastellanResult<PanelResponse> {
    client
        .query(
            PanelMethod::Get,
            CMD_API_DB_USER,
            &user_modify_params(database, user, password),
        )
        .await
}

pub async fn user_delete<I>(
    client: &DirectAdminClient,
    database: &str,
    users: I,
) -> CastellanResult<PanelResponse>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    client
        .query(
            PanelMethod::Get,
            CMD_API_DB_USER,
            &user_delete_params(database, users),
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_omits_userlist_unless_reusing_a_user() {
        let fresh = create_params("x.com", "shop", "shop_rw", "hunter2", None);
        assert!(!fresh.contains("userlist"));

        let reused = create_params("x.com", "shop", "shop_rw", "hunter2", Some("legacy_rw"));
        assert_eq!(reused.get("userlist"), Some("legacy_rw"));
    }

    #[test]
    fn user_delete_selects_each_user() {
        let params = user_delete_params("shop", ["ro", "rw"]);
        assert_eq!(params.get("name"), Some("shop"));
        assert_eq!(params.get("select0"), Some("ro"));
        assert_eq!(params.get("select1"), Some("rw"));
    }
}
