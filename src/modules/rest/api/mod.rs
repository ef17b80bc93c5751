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

use poem_openapi::{Object, OpenApiService, Tags};
use serde::{Deserialize, Serialize};

use crate::modules::directadmin::response::PanelResponse;
use crate::modules::directadmin::DirectAdminClient;

pub mod cron;
pub mod database;
pub mod domain;
pub mod email;
pub mod ftp;
pub mod installer;
pub mod usage;

use cron::CronApi;
use database::DatabaseApi;
use domain::DomainApi;
use email::EmailApi;
use ftp::FtpApi;
use installer::InstallerApi;
use usage::UsageApi;

#[derive(Tags)]
pub enum ApiTags {
    /// Domains, subdomains and related resources.
    Domain,
    /// FTP accounts.
    Ftp,
    /// Databases and database users.
    Database,
    /// Mailboxes, forwarders, autoresponders, catch-all and vacation
    /// messages.
    Email,
    /// Scheduled jobs of the panel account.
    Cron,
    /// Usage statistics.
    Usage,
    /// Installatron application management.
    Installer,
}

/// One `key=value` entry of a panel response. Keys repeat for list
/// responses, so this is not a map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Object)]
pub struct PanelEntry {
    pub key: String,
    pub value: String,
}

pub fn panel_entries(response: PanelResponse) -> Vec<PanelEntry> {
    response
        .into_entries()
        .into_iter()
        .map(|(key, value)| PanelEntry { key, value })
        .collect()
}

pub fn create_openapi_service(
    client: Arc<DirectAdminClient>,
) -> OpenApiService<
    (
        DomainApi,
        FtpApi,
        DatabaseApi,
        EmailApi,
        CronApi,
        UsageApi,
        InstallerApi,
    ),
    (),
> {
    OpenApiService::new(
        (
            DomainApi::new(client.clone()),
            FtpApi::new(client.clone()),
            DatabaseApi::new(client.clone()),
            EmailApi::new(client.clone()),
            CronApi::new(client.clone()),
            UsageApi::new(client.clone()),
            InstallerApi::new(client),
        ),
        "Castellan",
        env!("CARGO_PKG_VERSION"),
    )
}
