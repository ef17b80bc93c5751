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

//! Account usage statistics (`CMD_API_SHOW_USER_USAGE`,
//! `CMD_API_CHANGE_INFO`). Both are scoped to the authenticated account.

use super::commands::{CMD_API_CHANGE_INFO, CMD_API_SHOW_USER_USAGE};
use super::params::ParamList;
use super::response::PanelResponse;
use super::{DirectAdminClient, PanelMethod};
use crate::modules::error::CastellanResult;

pub fn refresh_params() -> ParamList {
    let mut params = ParamList::new();
    params.push("update", "update");
    params
}

/// Bandwidth, disk usage and related counters for the account.
pub async fn stats(client: &DirectAdminClient) -> CastellanResult<PanelResponse> {
    client
        .query(PanelMethod::Get, CMD_API_SHOW_USER_USAGE, &ParamList::new())
        .await
}

/// Asks the panel to recount the usage figures. The panel only accepts
/// this as a POST, and rate-limits it to once every ten minutes.
pub async fn refresh(client: &DirectAdminClient) -> CastellanResult<PanelResponse> {
    client
        .query(PanelMethod::Post, CMD_API_CHANGE_INFO, &refresh_params())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_sends_only_the_update_marker() {
        let params = refresh_params();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("update"), Some("update"));
    }
}
