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

//! Vacation messages (`CMD_API_EMAIL_VACATION` and its `_MODIFY` detail
//! view).
//!
//! The listing nests a second urlencoded document inside each value, one
//! per mailbox. [`list`] flattens that into per-user entry sets.

use crate::modules::directadmin::commands::{
    CMD_API_EMAIL_VACATION, CMD_API_EMAIL_VACATION_MODIFY,
};
use crate::modules::directadmin::params::ParamList;
use crate::modules::directadmin::response::PanelResponse;
use crate::modules::directadmin::{DirectAdminClient, PanelMethod};
use crate::modules::error::CastellanResult;

/// When a vacation message starts and ends. Days are clamped to 1..=31
/// and months to 1..=12 before hitting the wire; the panel rejects the
/// whole request otherwise.
#[derive(Debug, Clone)]
pub struct VacationWindow {
    pub start_day: i32,
    pub start_month: i32,
    pub start_year: i32,
    pub end_day: i32,
    pub end_month: i32,
    pub end_year: i32,
    /// `morning`, `afternoon` or `evening`; anything else becomes `morning`.
    pub start_time: String,
    /// `morning`, `afternoon` or `evening`; anything else becomes `afternoon`.
    pub end_time: String,
}

fn clamp_day(day: i32) -> i32 {
    day.clamp(1, 31)
}

fn clamp_month(month: i32) -> i32 {
    month.clamp(1, 12)
}

fn normalize_start_time(raw: &str) -> &str {
    match raw {
        "afternoon" | "evening" => raw,
        _ => "morning",
    }
}

fn normalize_end_time(raw: &str) -> &str {
    match raw {
        "morning" | "evening" => raw,
        _ => "afternoon",
    }
}

fn message_params(
    action: &str,
    domain: &str,
    user: &str,
    text: &str,
    window: &VacationWindow,
) -> ParamList {
    let mut params = ParamList::new();
    params
        .push("action", action)
        .push("domain", domain)
        .push("user", user)
        .push("text", text)
        .push("starttime", normalize_start_time(&window.start_time))
        .push("startday", clamp_day(window.start_day).to_string())
        .push("startmonth", clamp_month(window.start_month).to_string())
        .push("startyear", window.start_year.to_string())
        .push("endtime", normalize_end_time(&window.end_time))
        .push("endday", clamp_day(window.end_day).to_string())
        .push("endmonth", clamp_month(window.end_month).to_string())
        .push("endyear", window.end_year.to_string());
    params
}

pub fn create_params(domain: &str, user: &str, text: &str, window: &VacationWindow) -> ParamList {
    message_params("create", domain, user, text, window)
}

pub fn modify_params(domain: &str, user: &str, text: &str, window: &VacationWindow) -> ParamList {
    message_params("modify", domain, user, text, window)
}

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

/// One mailbox's vacation settings: the owning user plus the decoded
/// nested pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacationEntry {
    pub user: String,
    pub fields: Vec<(String, String)>,
}

pub fn flatten_listing(response: &PanelResponse) -> CastellanResult<Vec<VacationEntry>> {
    let mut entries = Vec::with_capacity(response.len());
    for (user, nested) in response.iter() {
        let fields = PanelResponse::decode_nested(nested)?;
        entries.push(VacationEntry {
            user: user.to_string(),
            fields,
        });
    }
    Ok(entries)
}

pub async fn list(client: &DirectAdminClient, domain: &str) -> CastellanResult<Vec<VacationEntry>> {
    let response = client
        .query(
            PanelMethod::Get,
            CMD_API_EMAIL_VACATION,
            &list_params(domain),
        )
        .await?;
    flatten_listing(&response)
}

pub async fn details(
    client: &DirectAdminClient,
    domain: &str,
    user: &str,
) -> CastellanResult<PanelResponse> {
    client
        .query(
            PanelMethod::Get,
            CMD_API_EMAIL_VACATION_MODIFY,
            &details_params(domain, user),
        )
        .await
}

pub async fn create(
    client: &DirectAdminClient,
    domain: &str,
    user: &str,
    text: &str,
    window: &VacationWindow,
) -> CastellanResult<PanelResponse> {
    client
        .query(
            PanelMethod::Get,
            CMD_API_EMAIL_VACATION,
            &create_params(domain, user, text, window),
        )
        .await
}

pub async fn modify(
    client: &DirectAdminClient,
    domain: &str,
    user: &str,
    text: &str,
    window: &VacationWindow,
) -> CastellanResult<PanelResponse> {
    client
        .query(
            PanelMethod::Get,
            CMD_API_EMAIL_VACATION,
            &modify_params(domain, user, text, window),
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
            CMD_API_EMAIL_VACATION,
            &delete_params(domain, users),
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> VacationWindow {
        VacationWindow {
            start_day: 1,
            start_month: 6,
            start_year: 2026,
            end_day: 14,
            end_month: 6,
            end_year: 2026,
            start_time: "morning".to_string(),
            end_time: "evening".to_string(),
        }
    }

    #[test]
    fn out_of_range_dates_are_clamped() {
        let mut w = window();
        w.start_day = 0;
        w.end_day = 45;
        w.start_month = -3;
        w.end_month = 13;
        let params = create_params("x.com", "info", "away", &w);
        assert_eq!(params.get("startday"), Some("1"));
        assert_eq!(params.get("endday"), Some("31"));
        assert_eq!(params.get("startmonth"), Some("1"));
        assert_eq!(params.get("endmonth"), Some("12"));
    }

    #[test]
    fn time_of_day_fallbacks_differ_per_edge() {
        let mut w = window();
        w.start_time = "midnight".to_string();
        w.end_time = "midnight".to_string();
        let params = create_params("x.com", "info", "away", &w);
        assert_eq!(params.get("starttime"), Some("morning"));
        assert_eq!(params.get("endtime"), Some("afternoon"));

        w.start_time = "evening".to_string();
        w.end_time = "morning".to_string();
        let params = modify_params("x.com", "info", "away", &w);
        assert_eq!(params.get("starttime"), Some("evening"));
        assert_eq!(params.get("endtime"), Some("morning"));
    }

    #[test]
    fn listing_flattens_nested_documents_per_user() {
        let response = PanelResponse::from_entries(vec![(
            "info".to_string(),
            "text=on%20leave&startday=3".to_string(),
        )]);
        let entries = flatten_listing(&response).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].user, "info");
        assert!(entries[0]
            .fields
            .contains(&("text".to_string(), "on leave".to_string())));
        assert!(entries[0]
            .fields
            .contains(&("startday".to_string(), "3".to_string())));
    }
}
