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

use poem_openapi::payload::Json;
use poem_openapi::OpenApi;

use crate::modules::directadmin::usage;
use crate::modules::directadmin::DirectAdminClient;
use crate::modules::rest::api::{panel_entries, ApiTags, PanelEntry};
use crate::modules::rest::ApiResult;

pub struct UsageApi {
    client: Arc<DirectAdminClient>,
}

impl UsageApi {
    pub fn new(client: Arc<DirectAdminClient>) -> Self {
        Self { client }
    }
}

#[OpenApi(prefix_path = "/api/usage", tag = "ApiTags::Usage")]
impl UsageApi {
    /// Bandwidth, disk and related usage counters of the account.
    #[oai(path = "/stats", method = "get", operation_id = "usage_stats")]
    async fn stats(&self) -> ApiResult<Json<Vec<PanelEntry>>> {
        Ok(Json(panel_entries(usage::stats(&self.client).await?)))
    }

    /// Asks the panel to recount the usage figures; the panel accepts
    /// this at most once every ten minutes.
    #[oai(path = "/refresh", method = "post", operation_id = "usage_refresh")]
    async fn refresh(&self) -> ApiResult<Json<Vec<PanelEntry>>> {
        Ok(Json(panel_entries(usage::refresh(&self.client).await?)))
    }
}
