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

//! FTP account management (`CMD_API_FTP`).

use super::commands::CMD_API_FTP;
use super::params::ParamList;
use super::response::PanelResponse;
use super::{DirectAdminClient, PanelMethod};
use crate::modules::error::CastellanResult;

/// Root-directory flavor of an FTP account. An unrecognized raw value
/// is silently coerced to `Domain`, matching the panel's own behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FtpAccountType {
    Domain,
    Ftp,
    User,
    Custom { root: String },
}

impl FtpAccountType {
    pub fn parse(raw: &str, custom_root: &str) -> Self {
        match raw {
            "ftp" => FtpAccountType::Ftp,
            "user" => FtpAccountType::User,
            "custom" => FtpAccountType::Custom {
                root: custom_root.to_string(),
            },
            _ => FtpAccountType::Domain,
        }
    }

    fn write_into(&self, params: &mut ParamList) {
        match self {
            FtpAccountType::Domain => {
                params.push("type", "domain");
            }
            FtpAccountType::Ftp => {
                params.push("type", "ftp");
            }
            FtpAccountType::User => {
                params.push("type", "user");
            }
            FtpAccountType::Custom { root } => {
                params.push("custom_val", root.clone());
                params.push("type", "custom");
            }
        }
    }
}

fn account_params(action: &str, domain: &str, user: &str, password: &str) -> ParamList {
    let mut params = ParamList::new();
    params
        .push("action", action)
        .push("domain", domain)
        .push("user", user)
        .push("passwd", password)
        .push("passwd2", password);
    params
}

pub fn create_params(
    domain: &str,
    user: &str,
    password: &str,
    account_type: &FtpAccountType,
) -> ParamList {
    let mut params = account_params("create", domain, user, password);
    account_type.write_into(&mut params);
    params
}

pub fn modify_params(
    domain: &str,
    user: &str,
    password: &str,
    account_type: &FtpAccountType,
) -> ParamList {
    let mut params = account_params("modify", domain, user, password);
    account_type.write_into(&mut params);
    params
}

pub fn list_params(domain: &str) -> ParamList {
    let mut params = ParamList::new();
    params.push("domain", domain);
    params
}

pub fn suspend_params<I>(domain: &str, users: I) -> ParamList
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut params = ParamList::new();
    params
        .push("action", "delete")
        .push("suspend", "suspend")
        .push("domain", domain)
        .push_select(users);
    params
}

pub fn unsuspend_params<I>(domain: &str, users: I) -> ParamList
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut params = ParamList::new();
    params
        .push("action", "delete")
        .push("unsuspend", "unsuspend")
        .push("domain", domain)
        .push_select(users);
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
        .query(PanelMethod::Get, CMD_API_FTP, &list_params(domain))
        .await
}

pub async fn create(
    client: &DirectAdminClient,
    domain: &str,
    user: &str,
    password: &str,
    account_type: &FtpAccountType,
) -> CastellanResult<PanelResponse> {
    client
        .query(
            PanelMethod::Get,
            CMD_API_FTP,
            &create_params(domain, user, password, account_type),
        )
        .await
}

pub async fn modify(
    client: &DirectAdminClient,
    domain: &str,
    user: &str,
    password: &str,
    account_type: &FtpAccountType,
) -> CastellanResult<PanelResponse> {
    client
        .query(
            PanelMethod::Get,
            CMD_API_FTP,
            &modify_params(domain, user, password, account_type),
        )
        .await
}

pub async fn suspend<I>(
    client: &DirectAdminClient,
    domain: &str,
    users: I,
) -> CastellanResult<PanelResponse>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    client
        .query(PanelMethod::Get, CMD_API_FTP, &suspend_params(domain, users))
        .await
}

pub async fn unsuspend<I>(
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
            CMD_API_FTP,
            &unsuspend_params(domain, users),
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
        .query(PanelMethod::Get, CMD_API_FTP, &delete_params(domain, users))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_account_type_falls_back_to_domain() {
        assert_eq!(
            FtpAccountType::parse("sftp", "/"),
            FtpAccountType::Domain
        );
        assert_eq!(FtpAccountType::parse("", "/"), FtpAccountType::Domain);
        assert_eq!(FtpAccountType::parse("ftp", "/"), FtpAccountType::Ftp);
    }

    #[test]
    fn custom_type_carries_its_root() {
        let params = create_params(
            "x.com",
            "deploy",
            "hunter2",
            &FtpAccountType::Custom {
                root: "/srv/www".into(),
            },
        );
        assert_eq!(params.get("custom_val"), Some("/srv/www"));
        assert_eq!(params.get("type"), Some("custom"));
        assert_eq!(params.get("passwd"), Some("hunter2"));
        assert_eq!(params.get("passwd2"), Some("hunter2"));
    }

    #[test]
    fn suspend_and_unsuspend_share_the_delete_action() {
        let suspend = suspend_params("x.com", ["alice"]);
        assert_eq!(suspend.get("action"), Some("delete"));
        assert_eq!(suspend.get("suspend"), Some("suspend"));
        assert_eq!(suspend.get("select0"), Some("alice"));

        let unsuspend = unsuspend_params("x.com", ["alice", "bob"]);
        assert_eq!(unsuspend.get("action"), Some("delete"));
        assert_eq!(unsuspend.get("unsuspend"), Some("unsuspend"));
        assert_eq!(unsuspend.get("select1"), Some("bob"));
    }
}
