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

//! Cron job management (`CMD_API_CRON_JOBS`). Cron jobs are scoped to the
//! authenticated account, not to a domain.
//!
//! The panel returns each job as `id=<five schedule fields> <command>`,
//! plus a `MAILTO` entry carrying the notification address. [`CronListing`]
//! splits that raw form into structured jobs.

use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use super::commands::CMD_API_CRON_JOBS;
use super::params::ParamList;
use super::response::PanelResponse;
use super::{DirectAdminClient, PanelMethod};
use crate::modules::error::CastellanResult;

/// A single cron job, with the schedule split into its five fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Object)]
pub struct CronJob {
    /// Panel-assigned identifier, used by `modify` and `delete`.
    pub id: String,
    pub minute: String,
    pub hour: String,
    pub dayofmonth: String,
    pub month: String,
    pub dayofweek: String,
    pub command: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Object)]
pub struct CronMailto {
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Object)]
pub struct CronListing {
    pub cronjobs: Vec<CronJob>,
    pub mailto: Option<CronMailto>,
}

impl CronListing {
    /// Splits the raw panel listing into jobs. A schedule line with fewer
    /// than six fields is passed through with the missing fields empty.
    pub fn from_response(response: &PanelResponse) -> CronListing {
        let mut listing = CronListing::default();
        for (key, value) in response.iter() {
            if key == "MAILTO" {
                let email = value.split(' ').next().unwrap_or_default().to_string();
                listing.mailto = Some(CronMailto { email });
                continue;
            }
            let mut fields = value.splitn(6, ' ');
            let mut next = || fields.next().unwrap_or_default().to_string();
            listing.cronjobs.push(CronJob {
                id: key.to_string(),
                minute: next(),
                hour: next(),
                dayofmonth: next(),
                month: next(),
                dayofweek: next(),
                command: next(),
            });
        }
        listing
    }
}

/// The five schedule fields of a job, in crontab order. Every field
/// defaults to `*`.
#[derive(Debug, Clone)]
pub struct CronSchedule {
    pub minute: String,
    pub hour: String,
    pub dayofmonth: String,
    pub month: String,
    pub dayofweek: String,
}

impl Default for CronSchedule {
    fn default() -> Self {
        CronSchedule {
            minute: "*".to_string(),
            hour: "*".to_string(),
            dayofmonth: "*".to_string(),
            month: "*".to_string(),
            dayofweek: "*".to_string(),
        }
    }
}

impl CronSchedule {
    fn write_into(&self, params: &mut ParamList) {
        params
            .push("minute", &self.minute)
            .push("hour", &self.hour)
            .push("dayofmonth", &self.dayofmonth)
            .push("month", &self.month)
            .push("dayofweek", &self.dayofweek);
    }
}

pub fn create_params(schedule: &CronSchedule, command: &str) -> ParamList {
    let mut params = ParamList::new();
    params.push("action", "create");
    schedule.write_into(&mut params);
    params.push("command", command);
    params
}

pub fn modify_params(id: &str, schedule: &CronSchedule, command: &str) -> ParamList {
    let mut params = ParamList::new();
    params
        .push("id", id)
        .push("action", "modify")
        .push("save", "Save");
    schedule.write_into(&mut params);
    params.push("command", command);
    params
}

pub fn set_email_params(email: &str) -> ParamList {
    let mut params = ParamList::new();
    params.push("action", "saveemail").push("email", email);
    params
}

pub fn delete_params<I>(ids: I) -> ParamList
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut params = ParamList::new();
    params.push("action", "delete").push_select(ids);
    params
}

pub async fn list(client: &DirectAdminClient) -> CastellanResult<CronListing> {
    let response = client
        .query(PanelMethod::Get, CMD_API_CRON_JOBS, &ParamList::new())
        .await?;
    Ok(CronListing::from_response(&response))
}

pub async fn create(
    client: &DirectAdminClient,
    schedule: &CronSchedule,
    command: &str,
) -> CastellanResult<PanelResponse> {
    client
        .query(
            PanelMethod::Get,
            CMD_API_CRON_JOBS,
            &create_params(schedule, command),
        )
        .await
}

pub async fn modify(
    client: &DirectAdminClient,
    id: &str,
    schedule: &CronSchedule,
    command: &str,
) -> CastellanResult<PanelResponse> {
    client
        .query(
            PanelMethod::Get,
            CMD_API_CRON_JOBS,
            &modify_params(id, schedule, command),
        )
        .await
}

pub async fn set_email(client: &DirectAdminClient, email: &str) -> CastellanResult<PanelResponse> {
    client
        .query(PanelMethod::Get, CMD_API_CRON_JOBS, &set_email_params(email))
        .await
}

pub async fn delete<I>(client: &DirectAdminClient, ids: I) -> CastellanResult<PanelResponse>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    client
        .query(PanelMethod::Get, CMD_API_CRON_JOBS, &delete_params(ids))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_splits_schedule_and_keeps_command_whole() {
        let response = PanelResponse::from_entries(vec![
            (
                "3".to_string(),
                "*/5 1 2 3 4 /usr/bin/php /home/site/poll.php --all".to_string(),
            ),
            ("MAILTO".to_string(), "ops@example.com extra".to_string()),
        ]);
        let listing = CronListing::from_response(&response);

        assert_eq!(listing.cronjobs.len(), 1);
        let job = &listing.cronjobs[0];
        assert_eq!(job.id, "3");
        assert_eq!(job.minute, "*/5");
        assert_eq!(job.hour, "1");
        assert_eq!(job.dayofmonth, "2");
        assert_eq!(job.month, "3");
        assert_eq!(job.dayofweek, "4");
        assert_eq!(job.command, "/usr/bin/php /home/site/poll.php --all");
        assert_eq!(listing.mailto.unwrap().email, "ops@example.com");
    }

    #[test]
    fn listing_without_mailto_leaves_it_empty() {
        let response =
            PanelResponse::from_entries(vec![("0".to_string(), "0 0 1 1 0 true".to_string())]);
        let listing = CronListing::from_response(&response);
        assert!(listing.mailto.is_none());
    }

    #[test]
    fn modify_carries_id_and_save_marker() {
        let schedule = CronSchedule {
            minute: "0".into(),
            hour: "4".into(),
            ..CronSchedule::default()
        };
        let params = modify_params("7", &schedule, "backup.sh");
        assert_eq!(params.get("action"), Some("modify"));
        assert_eq!(params.get("id"), Some("7"));
        assert_eq!(params.get("save"), Some("Save"));
        assert_eq!(params.get("command"), Some("backup.sh"));
        assert_eq!(params.get("dayofweek"), Some("*"));
    }

    #[test]
    fn delete_takes_ids_as_selections() {
        let params = delete_params(["2", "5"]);
        assert_eq!(params.get("select0"), Some("2"));
        assert_eq!(params.get("select1"), Some("5"));
        assert!(!params.contains("domain"));
    }
}
