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

//! Request access check.
//!
//! Each request maps to a `module/controller/action` dispatch target
//! taken from the first three path segments, with `default`, `index`
//! and `index` filling in what is missing. The caller's role arrives in
//! an explicit header; a denied request is rewritten to the login page
//! instead of being answered where it was aimed.

use std::sync::Arc;

use poem::http::Uri;
use poem::{Endpoint, Middleware, Request, Result};
use tracing::warn;

use crate::modules::acl::{Acl, Role};

/// Header carrying the authenticated role of the caller. Absent or
/// unknown values count as guest.
pub const ROLE_HEADER: &str = "x-castellan-role";

/// Where denied requests land.
pub const LOGIN_DESTINATION: &str = "/default/auth/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchTarget {
    pub module: String,
    pub controller: String,
    pub action: String,
}

impl DispatchTarget {
    pub fn from_path(path: &str) -> DispatchTarget {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        DispatchTarget {
            module: segments.next().unwrap_or("default").to_string(),
            controller: segments.next().unwrap_or("index").to_string(),
            action: segments.next().unwrap_or("index").to_string(),
        }
    }

    pub fn resource(&self) -> String {
        format!("{}:{}", self.module, self.controller)
    }
}

pub struct AccessCheck {
    acl: Arc<Acl>,
}

impl AccessCheck {
    pub fn new(acl: Arc<Acl>) -> Self {
        Self { acl }
    }
}

impl<E: Endpoint> Middleware<E> for AccessCheck {
    type Output = AccessCheckEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        AccessCheckEndpoint {
            ep,
            acl: self.acl.clone(),
        }
    }
}

pub struct AccessCheckEndpoint<E> {
    ep: E,
    acl: Arc<Acl>,
}

impl<E: Endpoint> Endpoint for AccessCheckEndpoint<E> {
    type Output = E::Output;

    async fn call(&self, mut req: Request) -> Result<Self::Output> {
        let role = Role::parse(req.header(ROLE_HEADER).unwrap_or_default());
        let target = DispatchTarget::from_path(req.uri().path());
        let resource = target.resource();

        if !self.acl.is_allowed(role, &resource, &target.action) {
            warn!(
                role = role.as_str(),
                resource = %resource,
                action = %target.action,
                "access denied, rerouting to login"
            );
            *req.uri_mut() = Uri::from_static(LOGIN_DESTINATION);
            req.set_data(role);
            return self.ep.call(req).await;
        }

        req.set_data(role);
        self.ep.call(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::test::TestClient;
    use poem::{handler, EndpointExt, Route};

    #[test]
    fn missing_path_segments_fall_back_to_defaults() {
        let root = DispatchTarget::from_path("/");
        assert_eq!(root.module, "default");
        assert_eq!(root.controller, "index");
        assert_eq!(root.action, "index");
        assert_eq!(root.resource(), "default:index");

        let partial = DispatchTarget::from_path("/api/domain");
        assert_eq!(partial.resource(), "api:domain");
        assert_eq!(partial.action, "index");

        let full = DispatchTarget::from_path("/api/domain/list/extra");
        assert_eq!(full.action, "list");
    }

    #[handler]
    fn login() -> &'static str {
        "login"
    }

    #[handler]
    fn domains() -> &'static str {
        "domains"
    }

    #[handler]
    fn stray() -> &'static str {
        "stray"
    }

    fn app() -> impl Endpoint {
        let acl = Arc::new(Acl::standard().unwrap());
        Route::new()
            .at(LOGIN_DESTINATION, login)
            .at("/api/domain/list", domains)
            .at("/api/unregistered/list", stray)
            .with(AccessCheck::new(acl))
    }

    #[tokio::test]
    async fn denied_requests_land_on_the_login_page() {
        let cli = TestClient::new(app());

        let resp = cli.get("/api/domain/list").send().await;
        resp.assert_status_is_ok();
        resp.assert_text("login").await;
    }

    #[tokio::test]
    async fn matching_role_passes_through() {
        let cli = TestClient::new(app());

        let resp = cli
            .get("/api/domain/list")
            .header(ROLE_HEADER, "user")
            .send()
            .await;
        resp.assert_status_is_ok();
        resp.assert_text("domains").await;
    }

    #[tokio::test]
    async fn unregistered_resources_are_denied_for_every_role() {
        let cli = TestClient::new(app());

        for role in ["user", "admin", "master"] {
            let resp = cli
                .get("/api/unregistered/list")
                .header(ROLE_HEADER, role)
                .send()
                .await;
            resp.assert_text("login").await;
        }
    }

    #[tokio::test]
    async fn unknown_roles_count_as_guest() {
        let cli = TestClient::new(app());

        let resp = cli
            .get("/api/domain/list")
            .header(ROLE_HEADER, "superuser")
            .send()
            .await;
        resp.assert_text("login").await;
    }
}
