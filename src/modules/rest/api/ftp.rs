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

use poem_openapi::param::Query;
use poem_openapi::payload::Json;
use poem_openapi::{Object, OpenApi};
use serde::{Deserialize, Serialize};

use crate::modules::directadmin::ftp::{self, FtpAccountType};
use crate::modules::directadmin::DirectAdminClient;
use crate::modules::rest::api::{panel_entries, ApiTags, PanelEntry};
use crate::modules::rest::ApiResult;

pub struct FtpApi {
    client: Arc<DirectAdminClient>,
}

impl FtpApi {
    pub fn new(client: Arc<DirectAdminClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct FtpAccountRequest {
    pub domain: String,
    pub user: String,
    pub password: String,
    /// `domain`, `ftp`, `user` or `custom`; unknown values fall back
    /// to `domain`.
    pub account_type: Option<String>,
    /// Document root, only meaningful for the `custom` type.
    pub custom_root: Option<String>,
}

impl FtpAccountRequest {
    fn account_type(&self) -> FtpAccountType {
        FtpAccountType::parse(
            self.account_type.as_deref().unwrap_or("domain"),
            self.custom_root.as_deref().unwrap_or("/"),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct FtpSelection {
    pub domain: String,
    pub users: Vec<String>,
}

#[OpenApi(prefix_path = "/api/ftp", tag = "ApiTags::Ftp")]
impl FtpApi {
    /// Lists the FTP accounts of a domain.
    #[oai(path = "/list", method = "get", operation_id = "list_ftp_accounts")]
    async fn list(&self, domain: Query<String>) -> ApiResult<Json<Vec<PanelEntry>>> {
        Ok(Json(panel_entries(ftp::list(&self.client, &domain.0).await?)))
    }

    /// Creates an FTP account.
    #[oai(path = "/create", method = "post", operation_id = "create_ftp_account")]
    async fn create(&self, payload: Json<FtpAccountRequest>) -> ApiResult<Json<Vec<PanelEntry>>> {
        let response = ftp::create(
            &self.client,
            &payload.domain,
            &payload.user,
            &payload.password,
            &payload.account_type(),
        )
        .await?;
        Ok(Json(panel_entries(response)))
    }

    /// Changes the password or type of an FTP account.
    #[oai(path = "/modify", method = "post", operation_id = "modify_ftp_account")]
    async fn modify(&self, payload: Json<FtpAccountRequest>) -> ApiResult<Json<Vec<PanelEntry>>> {
        let response = ftp::modify(
            &self.client,
            &payload.domain,
            &payload.user,
            &payload.password,
            &payload.account_type(),
        )
        .await?;
        Ok(Json(panel_entries(response)))
    }

    /// Suspends the selected FTP accounts.
    #[oai(path = "/suspend", method = "post", operation_id = "suspend_ftp_accounts")]
    async fn suspend(&self, payload: Json<FtpSelection>) -> ApiResult<Json<Vec<PanelEntry>>> {
        let payload = payload.0;
        let response = ftp::suspend(&self.client, &payload.domain, payload.users).await?;
        Ok(Json(panel_entries(response)))
    }

    /// Unsuspends the selected FTP accounts.
    #[oai(
        path = "/unsuspend",
        method = "post",
        operation_id = "unsuspend_ftp_accounts"
    )]
    async fn unsuspend(&self, payload: Json<FtpSelection>) -> ApiResult<Json<Vec<PanelEntry>>> {
        let payload = payload.0;
        let response = ftp::unsuspend(&self.client, &payload.domain, payload.users).await?;
        Ok(Json(panel_entries(response)))
    }

    /// Deletes the selected FTP accounts.
    #[oai(path = "/delete", method = "post", operation_id = "delete_ftp_accounts")]
    async fn delete(&self, payload: Json<FtpSelection>) -> ApiResult<Json<Vec<PanelEntry>>> {
        let payload = payload.0;
        let response = ftp::delete(&self.client, &payload.domain, payload.users).await?;
        Ok(Json(panel_entries(response)))
    }
}
