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

//! DirectAdmin HTTP API client.
//!
//! Every panel operation funnels through [`DirectAdminClient::query`]:
//! one request to `/{COMMAND}` with basic-auth credentials and a flat
//! parameter list, answered by a form-encoded body. The per-resource
//! modules in this tree only build parameters and reshape responses;
//! none of them touch HTTP themselves.

use crate::modules::error::{code::ErrorCode, CastellanResult};
use crate::modules::settings::cli::SETTINGS;
use crate::raise_error;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use std::time::Duration;
use tracing::debug;

pub mod commands;
pub mod cron;
pub mod database;
pub mod domain;
pub mod email;
pub mod ftp;
pub mod params;
pub mod response;
pub mod subdomain;
pub mod usage;

#[cfg(test)]
mod client_tests;

use params::ParamList;
use response::PanelResponse;

/// HTTP verbs the panel accepts.
///
/// Almost everything goes over GET; the usage-statistics update is the
/// one endpoint that only accepts POST, and HEAD serves as a cheap
/// connectivity probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMethod {
    Get,
    Head,
    Post,
}

impl PanelMethod {
    /// Panel convention: anything other than an explicit POST or HEAD
    /// request collapses to GET.
    pub fn normalize(raw: &str) -> Self {
        match raw.to_ascii_uppercase().as_str() {
            "POST" => PanelMethod::Post,
            "HEAD" => PanelMethod::Head,
            _ => PanelMethod::Get,
        }
    }

    fn as_reqwest(self) -> reqwest::Method {
        match self {
            PanelMethod::Get => reqwest::Method::GET,
            PanelMethod::Head => reqwest::Method::HEAD,
            PanelMethod::Post => reqwest::Method::POST,
        }
    }
}

#[derive(Debug)]
pub struct DirectAdminClient {
    host: String,
    port: u16,
    ssl: bool,
    username: String,
    password: String,
    timeout: Duration,
    http: reqwest::Client,
}

impl DirectAdminClient {
    /// Connects to the panel and verifies the credentials immediately
    /// with a HEAD probe; there is no lazy first-use authentication.
    pub async fn connect(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        port: u16,
        ssl: bool,
        timeout: Duration,
    ) -> CastellanResult<Self> {
        let username = username.into();
        let password = password.into();
        let client = Self {
            host: host.into(),
            port,
            ssl,
            http: build_http(&username, &password, timeout)?,
            username,
            password,
            timeout,
        };
        client.probe().await?;
        Ok(client)
    }

    pub async fn from_settings() -> CastellanResult<Self> {
        Self::connect(
            SETTINGS.castellan_panel_host.clone(),
            SETTINGS.castellan_panel_username.clone(),
            SETTINGS.castellan_panel_password.clone(),
            SETTINGS.castellan_panel_port,
            SETTINGS.castellan_panel_ssl,
            Duration::from_secs(SETTINGS.castellan_panel_timeout),
        )
        .await
    }

    /// Replaces the credentials and re-authenticates at once. In-flight
    /// calls are not retried.
    pub async fn change_login(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> CastellanResult<()> {
        self.username = username.into();
        self.password = password.into();
        self.http = build_http(&self.username, &self.password, self.timeout)?;
        self.probe().await
    }

    /// Issues one request against `/{COMMAND}`.
    ///
    /// Parameters travel as a query string for GET/HEAD and as a form
    /// body for POST. The response mapping is returned as-is; the panel
    /// reports logical failures inside it (`error`/`text`/`details`)
    /// and this layer deliberately does not inspect those keys.
    pub async fn query(
        &self,
        method: PanelMethod,
        command: &str,
        params: &ParamList,
    ) -> CastellanResult<PanelResponse> {
        let command = command.to_ascii_uppercase();
        let url = self.command_url(&command);
        debug!(command = %command, method = ?method, params = params.len(), "panel query");

        let mut request = self.http.request(method.as_reqwest(), &url);
        request = match method {
            PanelMethod::Get | PanelMethod::Head => request.query(params.as_pairs()),
            PanelMethod::Post => request.form(params.as_pairs()),
        };

        let response = request.send().await.map_err(|e| {
            let code = if e.is_timeout() {
                ErrorCode::ConnectionTimeout
            } else {
                ErrorCode::NetworkError
            };
            raise_error!(format!("panel request to {command} failed: {e}"), code)
        })?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(raise_error!(
                format!("panel rejected credentials for {}", self.username),
                ErrorCode::PanelAuthFailed
            ));
        }

        let body = response.text().await.map_err(|e| {
            raise_error!(
                format!("failed to read panel response body: {e}"),
                ErrorCode::HttpResponseError
            )
        })?;

        PanelResponse::parse(&body)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    async fn probe(&self) -> CastellanResult<()> {
        self.query(PanelMethod::Head, commands::CMD_API_SHOW_DOMAINS, &ParamList::new())
            .await
            .map(|_| ())
    }

    fn command_url(&self, command: &str) -> String {
        let scheme = if self.ssl { "https" } else { "http" };
        format!("{}://{}:{}/{}", scheme, self.host, self.port, command)
    }
}

fn build_http(username: &str, password: &str, timeout: Duration) -> CastellanResult<reqwest::Client> {
    let mut headers = HeaderMap::new();
    let credentials = format!("{}:{}", username, password);
    let encoded = STANDARD.encode(credentials.as_bytes());
    let auth_value = format!("Basic {}", encoded);
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&auth_value).map_err(|e| {
            raise_error!(
                format!("credentials are not a valid header value: {e}"),
                ErrorCode::InvalidParameter
            )
        })?,
    );

    reqwest::Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(concat!("castellan/", env!("CARGO_PKG_VERSION")))
        .default_headers(headers)
        .build()
        .map_err(|e| {
            raise_error!(
                format!("failed to build panel HTTP client: {e}"),
                ErrorCode::InternalError
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_normalization_collapses_to_get() {
        assert_eq!(PanelMethod::normalize("post"), PanelMethod::Post);
        assert_eq!(PanelMethod::normalize("HEAD"), PanelMethod::Head);
        assert_eq!(PanelMethod::normalize("PUT"), PanelMethod::Get);
        assert_eq!(PanelMethod::normalize("get"), PanelMethod::Get);
        assert_eq!(PanelMethod::normalize(""), PanelMethod::Get);
    }

    #[test]
    fn command_url_uppercases_and_respects_scheme() {
        let client = DirectAdminClient {
            host: "panel.example.com".into(),
            port: 2222,
            ssl: true,
            username: "admin".into(),
            password: "secret".into(),
            timeout: Duration::from_secs(5),
            http: reqwest::Client::new(),
        };
        assert_eq!(
            client.command_url("CMD_API_DOMAIN"),
            "https://panel.example.com:2222/CMD_API_DOMAIN"
        );
    }
}
