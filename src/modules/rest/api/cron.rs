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
use poem_openapi::{Object, OpenApi};
use serde::{Deserialize, Serialize};

use crate::modules::directadmin::cron::{self, CronListing, CronSchedule};
use crate::modules::directadmin::DirectAdminClient;
use crate::modules::rest::api::{panel_entries, ApiTags, PanelEntry};
use crate::modules::rest::ApiResult;

pub struct CronApi {
    client: Arc<DirectAdminClient>,
}

impl CronApi {
    pub fn new(client: Arc<DirectAdminClient>) -> Self {
        Self { client }
    }
}

/// Schedule fields default to `*` when omitted.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CronRequest {
    /// Required for modify, ignored for create.
    pub id: Option<String>,
    pub minute: Option<String>,
    pub hour: Option<String>,
    pub dayofmonth: Option<String>,
    pub month: Option<String>,
    pub dayofweek: Option<String>,
    pub command: String,
}

impl CronRequest {
    fn schedule(&self) -> CronSchedule {
        let defaults = CronSchedule::default();
        CronSchedule {
            minute: self.minute.clone().unwrap_or(defaults.minute),
            hour: self.hour.clone().unwrap_or(defaults.hour),
            dayofmonth: self.dayofmonth.clone().unwrap_or(defaults.dayofmonth),
            month: self.month.clone().unwrap_or(defaults.month),
            dayofweek: self.dayofweek.clone().unwrap_or(defaults.dayofweek),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CronSelection {
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CronMailtoRequest {
    pub email: String,
}

#[OpenApi(prefix_path = "/api/cron", tag = "ApiTags::Cron")]
impl CronApi {
    /// Lists the account's cron jobs with the schedule split out.
    #[oai(path = "/list", method = "get", operation_id = "list_cron_jobs")]
    async fn list(&self) -> ApiResult<Json<CronListing>> {
        Ok(Json(cron::list(&self.client).await?))
    }

    /// Creates a cron job.
    #[oai(path = "/create", method = "post", operation_id = "create_cron_job")]
    async fn create(&self, payload: Json<CronRequest>) -> ApiResult<Json<Vec<PanelEntry>>> {
        let response = cron::create(&self.client, &payload.schedule(), &payload.command).await?;
        Ok(Json(panel_entries(response)))
    }

    /// Rewrites an existing cron job.
    #[oai(path = "/modify", method = "post", operation_id = "modify_cron_job")]
    async fn modify(&self, payload: Json<CronRequest>) -> ApiResult<Json<Vec<PanelEntry>>> {
        let id = payload.id.clone().unwrap_or_default();
        let response =
            cron::modify(&self.client, &id, &payload.schedule(), &payload.command).await?;
        Ok(Json(panel_entries(response)))
    }

    /// Sets the address cron output is mailed to.
    #[oai(path = "/mailto", method = "post", operation_id = "set_cron_mailto")]
    async fn set_mailto(&self, payload: Json<CronMailtoRequest>) -> ApiResult<Json<Vec<PanelEntry>>> {
        let response = cron::set_email(&self.client, &payload.email).await?;
        Ok(Json(panel_entries(response)))
    }

    /// Deletes the selected cron jobs.
    #[oai(path = "/delete", method = "post", operation_id = "delete_cron_jobs")]
    async fn delete(&self, payload: Json<CronSelection>) -> ApiResult<Json<Vec<PanelEntry>>> {
        let response = cron::delete(&self.client, payload.0.ids).await?;
        Ok(Json(panel_entries(response)))
    }
}
