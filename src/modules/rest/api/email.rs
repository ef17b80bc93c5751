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

use crate::modules::directadmin::email::catchall::{self, CatchAllMode};
use crate::modules::directadmin::email::vacation::{self, VacationWindow};
use crate::modules::directadmin::email::{account, autoresponder, forwarder};
use crate::modules::directadmin::DirectAdminClient;
use crate::modules::rest::api::{panel_entries, ApiTags, PanelEntry};
use crate::modules::rest::ApiResult;

pub struct EmailApi {
    client: Arc<DirectAdminClient>,
}

impl EmailApi {
    pub fn new(client: Arc<DirectAdminClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct MailboxRequest {
    pub domain: String,
    pub user: String,
    pub password: String,
    /// Mailbox quota in MB; absent means the panel default of 50.
    pub quota_mb: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct MailboxTarget {
    pub domain: String,
    pub user: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CatchAllRequest {
    pub domain: String,
    /// `fail`, `blackhole` or `address`; unknown values fall back to
    /// `fail`.
    pub mode: String,
    /// Delivery address, only meaningful for the `address` mode.
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ForwarderRequest {
    pub domain: String,
    pub user: String,
    /// Where mail for the forwarder is delivered.
    pub destination: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct MailboxSelection {
    pub domain: String,
    pub users: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct AutoresponderRequest {
    pub domain: String,
    pub user: String,
    pub text: String,
    /// Also deliver incoming mail to `cc_address`.
    pub cc: Option<bool>,
    pub cc_address: Option<String>,
}

/// Out-of-range days and months are clamped, unknown time-of-day
/// tokens fall back to the panel defaults; nothing here is rejected.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct VacationRequest {
    pub domain: String,
    pub user: String,
    pub text: String,
    pub start_day: i32,
    pub start_month: i32,
    pub start_year: i32,
    pub end_day: i32,
    pub end_month: i32,
    pub end_year: i32,
    /// `morning`, `afternoon` or `evening`.
    pub start_time: Option<String>,
    /// `morning`, `afternoon` or `evening`.
    pub end_time: Option<String>,
}

impl VacationRequest {
    fn window(&self) -> VacationWindow {
        VacationWindow {
            start_day: self.start_day,
            start_month: self.start_month,
            start_year: self.start_year,
            end_day: self.end_day,
            end_month: self.end_month,
            end_year: self.end_year,
            start_time: self
                .start_time
                .clone()
                .unwrap_or_else(|| "morning".to_string()),
            end_time: self
                .end_time
                .clone()
                .unwrap_or_else(|| "evening".to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct VacationEntryPayload {
    pub user: String,
    pub fields: Vec<PanelEntry>,
}

#[OpenApi(prefix_path = "/api/email", tag = "ApiTags::Email")]
impl EmailApi {
    /// Lists the mailboxes of a domain.
    #[oai(path = "/accounts", method = "get", operation_id = "list_mailboxes")]
    async fn account_list(&self, domain: Query<String>) -> ApiResult<Json<Vec<PanelEntry>>> {
        Ok(Json(panel_entries(
            account::list(&self.client, &domain.0).await?,
        )))
    }

    /// Creates a mailbox.
    #[oai(
        path = "/accounts/create",
        method = "post",
        operation_id = "create_mailbox"
    )]
    async fn account_create(
        &self,
        payload: Json<MailboxRequest>,
    ) -> ApiResult<Json<Vec<PanelEntry>>> {
        let response = account::create(
            &self.client,
            &payload.domain,
            &payload.user,
            &payload.password,
            payload.quota_mb,
        )
        .await?;
        Ok(Json(panel_entries(response)))
    }

    /// Changes a mailbox's password or quota.
    #[oai(
        path = "/accounts/modify",
        method = "post",
        operation_id = "modify_mailbox"
    )]
    async fn account_modify(
        &self,
        payload: Json<MailboxRequest>,
    ) -> ApiResult<Json<Vec<PanelEntry>>> {
        let response = account::modify(
            &self.client,
            &payload.domain,
            &payload.user,
            &payload.password,
            payload.quota_mb,
        )
        .await?;
        Ok(Json(panel_entries(response)))
    }

    /// Suspends a mailbox.
    #[oai(
        path = "/accounts/suspend",
        method = "post",
        operation_id = "suspend_mailbox"
    )]
    async fn account_suspend(
        &self,
        payload: Json<MailboxTarget>,
    ) -> ApiResult<Json<Vec<PanelEntry>>> {
        let response = account::suspend(&self.client, &payload.domain, &payload.user).await?;
        Ok(Json(panel_entries(response)))
    }

    /// Unsuspends a mailbox.
    #[oai(
        path = "/accounts/unsuspend",
        method = "post",
        operation_id = "unsuspend_mailbox"
    )]
    async fn account_unsuspend(
        &self,
        payload: Json<MailboxTarget>,
    ) -> ApiResult<Json<Vec<PanelEntry>>> {
        let response = account::unsuspend(&self.client, &payload.domain, &payload.user).await?;
        Ok(Json(panel_entries(response)))
    }

    /// Deletes a mailbox.
    #[oai(
        path = "/accounts/delete",
        method = "post",
        operation_id = "delete_mailbox"
    )]
    async fn account_delete(
        &self,
        payload: Json<MailboxTarget>,
    ) -> ApiResult<Json<Vec<PanelEntry>>> {
        let response = account::delete(&self.client, &payload.domain, &payload.user).await?;
        Ok(Json(panel_entries(response)))
    }

    /// The domain's catch-all settings.
    #[oai(path = "/catchall", method = "get", operation_id = "catchall_settings")]
    async fn catchall_settings(&self, domain: Query<String>) -> ApiResult<Json<Vec<PanelEntry>>> {
        Ok(Json(panel_entries(
            catchall::settings(&self.client, &domain.0).await?,
        )))
    }

    /// Changes how mail to unknown addresses is handled.
    #[oai(
        path = "/catchall/update",
        method = "post",
        operation_id = "update_catchall"
    )]
    async fn catchall_update(
        &self,
        payload: Json<CatchAllRequest>,
    ) -> ApiResult<Json<Vec<PanelEntry>>> {
        let mode = CatchAllMode::parse(&payload.mode);
        let response = catchall::update(
            &self.client,
            &payload.domain,
            mode,
            payload.address.as_deref().unwrap_or_default(),
        )
        .await?;
        Ok(Json(panel_entries(response)))
    }

    /// Lists the forwarders of a domain.
    #[oai(path = "/forwarders", method = "get", operation_id = "list_forwarders")]
    async fn forwarder_list(&self, domain: Query<String>) -> ApiResult<Json<Vec<PanelEntry>>> {
        Ok(Json(panel_entries(
            forwarder::list(&self.client, &domain.0).await?,
        )))
    }

    /// Creates a forwarder.
    #[oai(
        path = "/forwarders/create",
        method = "post",
        operation_id = "create_forwarder"
    )]
    async fn forwarder_create(
        &self,
        payload: Json<ForwarderRequest>,
    ) -> ApiResult<Json<Vec<PanelEntry>>> {
        let response = forwarder::create(
            &self.client,
            &payload.domain,
            &payload.user,
            &payload.destination,
        )
        .await?;
        Ok(Json(panel_entries(response)))
    }

    /// Changes a forwarder's destination.
    #[oai(
        path = "/forwarders/modify",
        method = "post",
        operation_id = "modify_forwarder"
    )]
    async fn forwarder_modify(
        &self,
        payload: Json<ForwarderRequest>,
    ) -> ApiResult<Json<Vec<PanelEntry>>> {
        let response = forwarder::modify(
            &self.client,
            &payload.domain,
            &payload.user,
            &payload.destination,
        )
        .await?;
        Ok(Json(panel_entries(response)))
    }

    /// Deletes the selected forwarders.
    #[oai(
        path = "/forwarders/delete",
        method = "post",
        operation_id = "delete_forwarders"
    )]
    async fn forwarder_delete(
        &self,
        payload: Json<MailboxSelection>,
    ) -> ApiResult<Json<Vec<PanelEntry>>> {
        let payload = payload.0;
        let response = forwarder::delete(&self.client, &payload.domain, payload.users).await?;
        Ok(Json(panel_entries(response)))
    }

    /// Lists the autoresponders of a domain.
    #[oai(
        path = "/autoresponders",
        method = "get",
        operation_id = "list_autoresponders"
    )]
    async fn autoresponder_list(&self, domain: Query<String>) -> ApiResult<Json<Vec<PanelEntry>>> {
        Ok(Json(panel_entries(
            autoresponder::list(&self.client, &domain.0).await?,
        )))
    }

    /// One autoresponder's current text and settings.
    #[oai(
        path = "/autoresponders/details",
        method = "get",
        operation_id = "autoresponder_details"
    )]
    async fn autoresponder_details(
        &self,
        domain: Query<String>,
        user: Query<String>,
    ) -> ApiResult<Json<Vec<PanelEntry>>> {
        Ok(Json(panel_entries(
            autoresponder::details(&self.client, &domain.0, &user.0).await?,
        )))
    }

    /// Creates an autoresponder.
    #[oai(
        path = "/autoresponders/create",
        method = "post",
        operation_id = "create_autoresponder"
    )]
    async fn autoresponder_create(
        &self,
        payload: Json<AutoresponderRequest>,
    ) -> ApiResult<Json<Vec<PanelEntry>>> {
        let response = autoresponder::create(
            &self.client,
            &payload.domain,
            &payload.user,
            &payload.text,
            payload.cc.unwrap_or(false),
            payload.cc_address.as_deref().unwrap_or_default(),
        )
        .await?;
        Ok(Json(panel_entries(response)))
    }

    /// Rewrites an autoresponder.
    #[oai(
        path = "/autoresponders/modify",
        method = "post",
        operation_id = "modify_autoresponder"
    )]
    async fn autoresponder_modify(
        &self,
        payload: Json<AutoresponderRequest>,
    ) -> ApiResult<Json<Vec<PanelEntry>>> {
        let response = autoresponder::modify(
            &self.client,
            &payload.domain,
            &payload.user,
            &payload.text,
            payload.cc.unwrap_or(false),
            payload.cc_address.as_deref().unwrap_or_default(),
        )
        .await?;
        Ok(Json(panel_entries(response)))
    }

    /// Deletes the selected autoresponders.
    #[oai(
        path = "/autoresponders/delete",
        method = "post",
        operation_id = "delete_autoresponders"
    )]
    async fn autoresponder_delete(
        &self,
        payload: Json<MailboxSelection>,
    ) -> ApiResult<Json<Vec<PanelEntry>>> {
        let payload = payload.0;
        let response = autoresponder::delete(&self.client, &payload.domain, payload.users).await?;
        Ok(Json(panel_entries(response)))
    }

    /// Lists the vacation messages of a domain, one decoded record per
    /// mailbox.
    #[oai(path = "/vacations", method = "get", operation_id = "list_vacations")]
    async fn vacation_list(
        &self,
        domain: Query<String>,
    ) -> ApiResult<Json<Vec<VacationEntryPayload>>> {
        let entries = vacation::list(&self.client, &domain.0).await?;
        Ok(Json(
            entries
                .into_iter()
                .map(|entry| VacationEntryPayload {
                    user: entry.user,
                    fields: entry
                        .fields
                        .into_iter()
                        .map(|(key, value)| PanelEntry { key, value })
                        .collect(),
                })
                .collect(),
        ))
    }

    /// One mailbox's vacation settings.
    #[oai(
        path = "/vacations/details",
        method = "get",
        operation_id = "vacation_details"
    )]
    async fn vacation_details(
        &self,
        domain: Query<String>,
        user: Query<String>,
    ) -> ApiResult<Json<Vec<PanelEntry>>> {
        Ok(Json(panel_entries(
            vacation::details(&self.client, &domain.0, &user.0).await?,
        )))
    }

    /// Creates a vacation message.
    #[oai(
        path = "/vacations/create",
        method = "post",
        operation_id = "create_vacation"
    )]
    async fn vacation_create(
        &self,
        payload: Json<VacationRequest>,
    ) -> ApiResult<Json<Vec<PanelEntry>>> {
        let response = vacation::create(
            &self.client,
            &payload.domain,
            &payload.user,
            &payload.text,
            &payload.window(),
        )
        .await?;
        Ok(Json(panel_entries(response)))
    }

    /// Rewrites a vacation message.
    #[oai(
        path = "/vacations/modify",
        method = "post",
        operation_id = "modify_vacation"
    )]
    async fn vacation_modify(
        &self,
        payload: Json<VacationRequest>,
    ) -> ApiResult<Json<Vec<PanelEntry>>> {
        let response = vacation::modify(
            &self.client,
            &payload.domain,
            &payload.user,
            &payload.text,
            &payload.window(),
        )
        .await?;
        Ok(Json(panel_entries(response)))
    }

    /// Deletes the selected vacation messages.
    #[oai(
        path = "/vacations/delete",
        method = "post",
        operation_id = "delete_vacations"
    )]
    async fn vacation_delete(
        &self,
        payload: Json<MailboxSelection>,
    ) -> ApiResult<Json<Vec<PanelEntry>>> {
        let payload = payload.0;
        let response = vacation::delete(&self.client, &payload.domain, payload.users).await?;
        Ok(Json(panel_entries(response)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> VacationRequest {
        VacationRequest {
            domain: "x.com".to_string(),
            user: "info".to_string(),
            text: "away".to_string(),
            start_day: 1,
            start_month: 6,
            start_year: 2026,
            end_day: 15,
            end_month: 6,
            end_year: 2026,
            start_time: None,
            end_time: None,
        }
    }

    #[test]
    fn omitted_times_use_the_morning_and_evening_defaults() {
        let window = request().window();
        assert_eq!(window.start_time, "morning");
        assert_eq!(window.end_time, "evening");

        let params = vacation::create_params("x.com", "info", "away", &window);
        assert_eq!(params.get("starttime"), Some("morning"));
        assert_eq!(params.get("endtime"), Some("evening"));
    }

    #[test]
    fn explicit_times_pass_through() {
        let mut req = request();
        req.start_time = Some("evening".to_string());
        req.end_time = Some("morning".to_string());
        let window = req.window();
        assert_eq!(window.start_time, "evening");
        assert_eq!(window.end_time, "morning");
    }
}
