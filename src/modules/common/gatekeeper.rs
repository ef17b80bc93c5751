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

//! Maintenance-mode gate.
//!
//! When maintenance mode is on, every request is rerouted to the
//! under-construction page unless the caller's address is on the
//! configured allow-list. Requests whose address cannot be determined
//! are rerouted as well.

use std::collections::HashSet;

use poem::http::Uri;
use poem::web::RealIp;
use poem::{Endpoint, FromRequest, Middleware, Request, Result};
use tracing::info;

use crate::modules::settings::cli::SETTINGS;

/// Where gated requests land.
pub const CONSTRUCTION_DESTINATION: &str = "/default/construction/index";

pub struct Gatekeeper {
    enabled: bool,
    allow: HashSet<String>,
}

impl Gatekeeper {
    pub fn new(enabled: bool, allow: HashSet<String>) -> Self {
        Self { enabled, allow }
    }

    pub fn from_settings() -> Self {
        Self::new(
            SETTINGS.castellan_maintenance_mode,
            SETTINGS.castellan_maintenance_allow_ips.clone(),
        )
    }
}

impl<E: Endpoint> Middleware<E> for Gatekeeper {
    type Output = GatekeeperEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        GatekeeperEndpoint {
            ep,
            enabled: self.enabled,
            allow: self.allow.clone(),
        }
    }
}

pub struct GatekeeperEndpoint<E> {
    ep: E,
    enabled: bool,
    allow: HashSet<String>,
}

impl<E: Endpoint> Endpoint for GatekeeperEndpoint<E> {
    type Output = E::Output;

    async fn call(&self, mut req: Request) -> Result<Self::Output> {
        if !self.enabled {
            return self.ep.call(req).await;
        }

        let RealIp(ip) = RealIp::from_request_without_body(&req).await?;
        let exempt = ip
            .map(|addr| self.allow.contains(&addr.to_string()))
            .unwrap_or(false);

        if !exempt {
            info!(ip = ?ip, "maintenance mode, rerouting to construction page");
            *req.uri_mut() = Uri::from_static(CONSTRUCTION_DESTINATION);
        }
        self.ep.call(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::test::TestClient;
    use poem::{handler, EndpointExt, Route};

    #[handler]
    fn portal() -> &'static str {
        "portal"
    }

    #[handler]
    fn construction() -> &'static str {
        "under construction"
    }

    fn app(enabled: bool, allow: &[&str]) -> impl Endpoint {
        let allow = allow.iter().map(|s| s.to_string()).collect();
        Route::new()
            .at("/", portal)
            .at(CONSTRUCTION_DESTINATION, construction)
            .with(Gatekeeper::new(enabled, allow))
    }

    #[tokio::test]
    async fn disabled_gate_is_transparent() {
        let cli = TestClient::new(app(false, &[]));
        let resp = cli.get("/").send().await;
        resp.assert_text("portal").await;
    }

    #[tokio::test]
    async fn maintenance_reroutes_unknown_callers() {
        let cli = TestClient::new(app(true, &["203.0.113.9"]));
        let resp = cli
            .get("/")
            .header("x-forwarded-for", "198.51.100.7")
            .send()
            .await;
        resp.assert_text("under construction").await;
    }

    #[tokio::test]
    async fn allow_listed_callers_pass_through() {
        let cli = TestClient::new(app(true, &["203.0.113.9"]));
        let resp = cli
            .get("/")
            .header("x-forwarded-for", "203.0.113.9")
            .send()
            .await;
        resp.assert_text("portal").await;
    }

    #[tokio::test]
    async fn callers_without_an_address_are_gated() {
        let cli = TestClient::new(app(true, &["203.0.113.9"]));
        let resp = cli.get("/").send().await;
        resp.assert_text("under construction").await;
    }
}
