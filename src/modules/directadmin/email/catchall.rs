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

//! Catch-all routing for a domain (`CMD_API_EMAIL_CATCH_ALL`).

use crate::modules::directadmin::commands::CMD_API_EMAIL_CATCH_ALL;
use crate::modules::directadmin::params::ParamList;
use crate::modules::directadmin::response::PanelResponse;
use crate::modules::directadmin::{DirectAdminClient, PanelMethod};
use crate::modules::error::CastellanResult;

/// What happens to mail addressed to a nonexistent mailbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchAllMode {
    /// Bounce the message back to the sender.
    Fail,
    /// Accept and discard silently.
    Blackhole,
    /// Forward to a fixed address.
    Address,
}

impl CatchAllMode {
    /// Anything unrecognized bounces, matching the panel's own default.
    pub fn parse(raw: &str) -> CatchAllMode {
        match raw {
            "blackhole" => CatchAllMode::Blackhole,
            "address" => CatchAllMode::Address,
            _ => CatchAllMode::Fail,
        }
    }

    fn wire_value(self) -> &'static str {
        match self {
            CatchAllMode::Fail => ":fail:",
            CatchAllMode::Blackhole => ":blackhole:",
            CatchAllMode::Address => "address",
        }
    }
}

pub fn settings_params(domain: &str) -> ParamList {
    let mut params = ParamList::new();
    params.push("domain", domain);
    params
}

/// `value` only matters in [`CatchAllMode::Address`] mode but is always
/// sent, empty or not.
pub fn update_params(domain: &str, mode: CatchAllMode, value: &str) -> ParamList {
    let mut params = ParamList::new();
    params
        .push("update", "Update")
        .push("domain", domain)
        .push("catch", mode.wire_value())
        .push("value", value);
    params
}

pub async fn settings(client: &DirectAdminClient, domain: &str) -> CastellanResult<PanelResponse> {
    client
        .query(
            PanelMethod::Get,
            CMD_API_EMAIL_CATCH_ALL,
            &settings_params(domain),
        )
        .await
}

pub async fn update(
    client: &DirectAdminClient,
    domain: &str,
    mode: CatchAllMode,
    value: &str,
) -> CastellanResult<PanelResponse> {
    client
        .query(
            PanelMethod::Get,
            CMD_API_EMAIL_CATCH_ALL,
            &update_params(domain, mode, value),
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_map_to_their_wire_spellings() {
        assert_eq!(
            update_params("x.com", CatchAllMode::Fail, "").get("catch"),
            Some(":fail:")
        );
        assert_eq!(
            update_params("x.com", CatchAllMode::Blackhole, "").get("catch"),
            Some(":blackhole:")
        );
        assert_eq!(
            update_params("x.com", CatchAllMode::Address, "all@x.com").get("catch"),
            Some("address")
        );
    }

    #[test]
    fn unrecognized_mode_falls_back_to_bouncing() {
        assert_eq!(CatchAllMode::parse("teapot"), CatchAllMode::Fail);
        assert_eq!(CatchAllMode::parse(""), CatchAllMode::Fail);
        assert_eq!(CatchAllMode::parse("blackhole"), CatchAllMode::Blackhole);
    }

    #[test]
    fn value_is_sent_even_when_empty() {
        let params = update_params("x.com", CatchAllMode::Fail, "");
        assert_eq!(params.get("value"), Some(""));
        assert_eq!(params.get("update"), Some("Update"));
    }
}
