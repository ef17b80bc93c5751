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

//! Mailbox management (`CMD_API_POP`).

use crate::modules::directadmin::commands::CMD_API_POP;
use crate::modules::directadmin::params::ParamList;
use crate::modules::directadmin::response::PanelResponse;
use crate::modules::directadmin::{DirectAdminClient, PanelMethod};
use crate::modules::error::CastellanResult;

/// Quota applied when the caller does not pick one, in megabytes.
pub const DEFAULT_QUOTA_MB: u64 = 50;

pub fn list_params(domain: &str) -> ParamList {
    let mut params = ParamList::new();
    params.push("action", "list").push("domain", domain);
    params
}

fn account_params(
    action: &str,
    domain: &str,
    user: &str,
    password: &str,
    quota_mb: u64,
) -> ParamList {
    let mut params = ParamList::new();
    params
        .push("action", action)
        .push("domain", domain)
        .push("user", user)
        .push("passwd", password)
        .push("passwd2", password)
        .push("quota", quota_mb.to_string());
    params
}

pub fn create_params(domain: &str, user: &str, password: &str, quota_mb: u64) -> ParamList {
    account_params("create", domain, user, password, quota_mb)
}

pub fn modify_params(domain: &str, user: &str, password: &str, quota_mb: u64) -> ParamList {
    account_params("modify", domain, user, password, quota_mb)
}

/// A suspend is a delete with the `suspend` marker, so the mailbox and
/// its contents survive.
pub fn suspend_params(domain: &str, user: &str) -> ParamList {
    let mut params = ParamList::new();
    params
        .push("action", "delete")
        .push("suspend", "suspend")
        .push("domain", domain)
        .push("user", user);
    params
}

pub fn unsuspend_params(domain: &str, user: &str) -> ParamList {
    let mut params = ParamList::new();
    params
        .push("action", "delete")
        .push("unsuspend", "unsuspend")
        .push("domain", domain)
        .push("user", user);
    params
}

pub fn delete_params(domain: &str, user: &str) -> ParamList {
    let mut params = ParamList::new();
    params
        .push("action", "delete")
        .push("domain", domain)
        .push("user", user);
    params
}

pub async fn list(client: &DirectAdminClient, domain: &str) -> CastellanResult<PanelResponse> {
    client
        .query(PanelMethod::Get, CMD_API_POP, &list_params(domain))
        .await
}

pub async fn create(
    client: &DirectAdminClient,
    domain: &str,
    user: &str,
    password: &str,
    quota_mb: Option<u64>,
) -> CastellanResult<PanelResponse> {
    let quota = quota_mb.unwrap_or(DEFAULT_QUOTA_MB);
    client
        .query(
            PanelMethod::Get,
            CMD_API_POP,
            &create_params(domain, user, password, quota),
        )
        .await
}

pub async fn modify(
    client: &DirectAdminClient,
    domain: &str,
    user: &str,
    password: &str,
    quota_mb: Option<u64>,
) -> CastellanResult<PanelResponse> {
    let quota = quota_mb.unwrap_or(DEFAULT_QUOTA_MB);
    client
        .query(
            PanelMethod::Get,
            CMD_API_POP,
            &modify_params(domain, user, password, quota),
        )
        .await
}

pub async fn suspend(
    client: &DirectAdminClient,
    domain: &str,
    user: &str,
) -> CastellanResult<PanelResponse> {
    client
        .query(PanelMethod::Get, CMD_API_POP, &suspend_params(domain, user))
        .await
}

pub async fn unsuspend(
    client: &DirectAdminClient,
    domain: &str,
    user: &str,
) -> CastellanResult<PanelResponse> {
    client
        .query(
            PanelMethod::Get,
            CMD_API_POP,
            &unsuspend_params(domain, user),
        )
        .await
}

pub async fn delete(
    client: &DirectAdminClient,
    domain: &str,
    user: &str,
) -> CastellanResult<PanelResponse> {
    client
        .query(PanelMethod::Get, CMD_API_POP, &delete_params(domain, user))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_sent_twice_with_quota() {
        let params = create_params("x.com", "info", "s3cret", DEFAULT_QUOTA_MB);
        assert_eq!(params.get("passwd"), Some("s3cret"));
        assert_eq!(params.get("passwd2"), Some("s3cret"));
        assert_eq!(params.get("quota"), Some("50"));
    }

    #[test]
    fn suspend_variants_share_the_delete_action() {
        let suspend = suspend_params("x.com", "info");
        assert_eq!(suspend.get("action"), Some("delete"));
        assert_eq!(suspend.get("suspend"), Some("suspend"));
        assert!(!suspend.contains("unsuspend"));

        let unsuspend = unsuspend_params("x.com", "info");
        assert_eq!(unsuspend.get("action"), Some("delete"));
        assert_eq!(unsuspend.get("unsuspend"), Some("unsuspend"));

        let delete = delete_params("x.com", "info");
        assert!(!delete.contains("suspend"));
        assert!(!delete.contains("unsuspend"));
    }
}
