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

//! Round-trip tests for [`DirectAdminClient`] against an in-process
//! stub panel.

use std::net::SocketAddr;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use poem::http::StatusCode;
use poem::listener::{Acceptor, Listener, TcpListener};
use poem::{handler, Request, Route, Server};
use tokio::task::JoinHandle;

use super::params::ParamList;
use super::{DirectAdminClient, PanelMethod};
use crate::modules::error::code::ErrorCode;

/// Echoes the request back as the form-encoded body the panel speaks,
/// so assertions can be made on what actually hit the wire.
#[handler]
async fn echo(req: &Request, body: String) -> String {
    let auth = req.header("authorization").unwrap_or_default();
    format!(
        "method={}&path={}&auth={}&query={}&body={}",
        urlencoding::encode(req.method().as_str()),
        urlencoding::encode(req.uri().path()),
        urlencoding::encode(auth),
        urlencoding::encode(req.uri().query().unwrap_or_default()),
        urlencoding::encode(&body),
    )
}

#[handler]
fn reject() -> poem::Response {
    poem::Response::builder()
        .status(StatusCode::UNAUTHORIZED)
        .finish()
}

#[handler]
fn login_page() -> poem::web::Html<&'static str> {
    poem::web::Html("<html><body>please log in</body></html>")
}

async fn spawn_stub(app: Route) -> (SocketAddr, JoinHandle<()>) {
    let acceptor = TcpListener::bind("127.0.0.1:0")
        .into_acceptor()
        .await
        .unwrap();
    let addr = *acceptor.local_addr()[0].as_socket_addr().unwrap();
    let handle = tokio::spawn(async move {
        let _ = Server::new_with_acceptor(acceptor).run(app).await;
    });
    (addr, handle)
}

async fn connect_to(addr: SocketAddr) -> crate::modules::error::CastellanResult<DirectAdminClient> {
    DirectAdminClient::connect(
        "127.0.0.1",
        "admin",
        "secret",
        addr.port(),
        false,
        Duration::from_secs(5),
    )
    .await
}

#[tokio::test]
async fn get_carries_params_in_the_query_string() {
    let (addr, server) = spawn_stub(Route::new().at("/:command", echo)).await;
    let client = connect_to(addr).await.unwrap();

    let mut params = ParamList::new();
    params.push("domain", "example.com");
    let response = client
        .query(PanelMethod::Get, "cmd_api_show_domains", &params)
        .await
        .unwrap();

    assert_eq!(response.get("method"), Some("GET"));
    assert_eq!(response.get("path"), Some("/CMD_API_SHOW_DOMAINS"));
    assert_eq!(response.get("query"), Some("domain=example.com"));
    assert_eq!(response.get("body"), Some(""));

    let expected = format!("Basic {}", STANDARD.encode("admin:secret"));
    assert_eq!(response.get("auth"), Some(expected.as_str()));

    server.abort();
}

#[tokio::test]
async fn post_carries_params_in_the_form_body() {
    let (addr, server) = spawn_stub(Route::new().at("/:command", echo)).await;
    let client = connect_to(addr).await.unwrap();

    let mut params = ParamList::new();
    params.push("update", "update");
    let response = client
        .query(PanelMethod::Post, "CMD_API_CHANGE_INFO", &params)
        .await
        .unwrap();

    assert_eq!(response.get("method"), Some("POST"));
    assert_eq!(response.get("query"), Some(""));
    assert_eq!(response.get("body"), Some("update=update"));

    server.abort();
}

#[tokio::test]
async fn change_login_swaps_the_auth_header_and_reprobes() {
    let (addr, server) = spawn_stub(Route::new().at("/:command", echo)).await;
    let mut client = connect_to(addr).await.unwrap();

    client.change_login("reseller", "hunter2").await.unwrap();
    assert_eq!(client.username(), "reseller");

    let response = client
        .query(PanelMethod::Get, "CMD_API_SHOW_DOMAINS", &ParamList::new())
        .await
        .unwrap();
    let expected = format!("Basic {}", STANDARD.encode("reseller:hunter2"));
    assert_eq!(response.get("auth"), Some(expected.as_str()));

    server.abort();
}

#[tokio::test]
async fn rejected_credentials_fail_the_connect_probe() {
    let (addr, server) = spawn_stub(Route::new().at("/:command", reject)).await;

    let err = connect_to(addr).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::PanelAuthFailed);

    server.abort();
}

#[tokio::test]
async fn html_body_is_reported_as_malformed() {
    let (addr, server) = spawn_stub(Route::new().at("/:command", login_page)).await;

    // The HEAD probe succeeds (no body comes back), the first real
    // query then trips over the HTML.
    let client = connect_to(addr).await.unwrap();
    let err = client
        .query(
            PanelMethod::Get,
            "CMD_API_SHOW_DOMAINS",
            &ParamList::new(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::MalformedResponse);

    server.abort();
}
