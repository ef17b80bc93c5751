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

//! Autoresponders (`CMD_API_EMAIL_AUTORESPONDER` and its `_MODIFY`
//! detail view).

use crate::modules::directadmin::commands::{
    CMD_API_EMAIL_AUTORESPONDER, CMD_API_EMAIL_AUTORESPONDER_MODIFY,
};
use crate::modules::directadmin::params::ParamList;
use crate::modules::directadmin::response::PanelResponse;
use crate::modules::directadmin::{DirectAdminClient, PanelMethod};
use crate::modules::error::CastellanResult;

pub fn list_params(domain: &str) -> ParamList {
    let mut params = ParamList::new();
    params.push("domain", domain);
    params
}

pub fn details_params(domain: &str, user: &str) -> ParamList {
    let mut params = ParamList::new();
    params.push("domain", domain).push("user", user);
    params
}

/// `cc_address` is always sent; the `cc` flag decides whether the panel
/// honors it. Multiple addresses go comma-separated.
fn responder_params(
    action: &str,
    domain: &str,
    user: &str,
    text: &str,
    cc: bool,
    cc_address: &str,
) -> ParamList {
    let mut params = ParamList::new();
    params
        .push("action", action)
        .push("domain", domain)
        .push("user", user)
        .push("text", text)
        .push("email", cc_address)
        .push_on_off("cc", cc);
    params
}

pub fn create_params(domain: &str, user: &str, text: &str, cc: bool, cc_address: &str) -> ParamList {
    responder_params("create", domain, user, text, cc, cc_address)
}

pub fn modify_params(domain: &str, user: &str, text: &str, cc: bool, cc_address: &str) -> ParamList {
    responder_params("modify", domain, user, text, cc, cc_address)
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
            CMD_API_EMAIL_AUTORESPONDER,
            &list_params(domain),
        )
        .await
}

pub async fn details(
    client: &DirectAdminClient,
    domain: &str,
    user: &str,
) -> CastellanResult<PanelResponse> {
    client
        .query(
            PanelMethod::Get,
            CMD_API_EMAIL_AUTORESPONDER_MODIFY,
            &details_params(domain, user),
        )
        .await
}

pub async fn create(
    client: &DirectAdminClient,
    domain: &str,
    user: &str,
    text: &str,
    cc: bool,
    cc_address: &str,
) -> CastellanResult<PanelResponse> {
    client
        .query(
            PanelMethod::Get,
            CMD_API_EMAIL_AUTORESPONDER,
            &create_params(domain, user, text, cc, cc_address),
        )
        .await
}

pub async fn modify(
    client: &DirectAdminClient,
    domain: &str,
    user: &str,
    text: &str,
    cc: bool,
    cc_address: &str,
) -> CastellanResult<PanelResponse> {
    client
        .query(
            PanelMethod::Get,
            CMD_API_EMAIL_AUTORESPONDER,
            &modify_params(domain, user, text, cc, cc_address),
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
            CMD_API_EMAIL_AUTORESPONDER,
            &delete_params(domain, users),
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cc_flag_uses_the_on_off_spelling() {
        let with_cc = create_params("x.com", "help", "away", true, "boss@x.com");
        assert_eq!(with_cc.get("cc"), Some("ON"));
        assert_eq!(with_cc.get("email"), Some("boss@x.com"));

        let without_cc = create_params("x.com", "help", "away", false, "");
        assert_eq!(without_cc.get("cc"), Some("OFF"));
        assert_eq!(without_cc.get("email"), Some(""));
    }

    #[test]
    fn details_use_the_modify_command() {
        let params = details_params("x.com", "help");
        assert_eq!(params.get("domain"), Some("x.com"));
        assert_eq!(params.get("user"), Some("help"));
        assert!(!params.contains("action"));
    }
}
