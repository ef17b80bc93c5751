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
use std::time::Duration;

use http::Method;
use poem::listener::TcpListener;
use poem::middleware::{CatchPanic, Compression, Cors};
use poem::{get, EndpointExt, Route, Server};

use crate::modules::acl::Acl;
use crate::modules::common::auth::{AccessCheck, LOGIN_DESTINATION};
use crate::modules::common::gatekeeper::{Gatekeeper, CONSTRUCTION_DESTINATION};
use crate::modules::common::log::Tracing;
use crate::modules::directadmin::DirectAdminClient;
use crate::modules::error::code::ErrorCode;
use crate::modules::error::handler::error_handler;
use crate::modules::error::{ApiErrorResponse, CastellanResult};
use crate::modules::rest::public::construction::construction;
use crate::modules::rest::public::login::login;
use crate::modules::rest::public::portal::portal_index;
use crate::modules::rest::public::status::get_status;
use crate::modules::settings::cli::SETTINGS;
use crate::modules::utils::shutdown::shutdown_signal;
use crate::raise_error;

use api::create_openapi_service;

pub mod api;
pub mod public;

pub type ApiResult<T, E = ApiErrorResponse> = std::result::Result<T, E>;

pub async fn start_http_server(
    client: Arc<DirectAdminClient>,
    acl: Arc<Acl>,
) -> CastellanResult<()> {
    let listener = TcpListener::bind((
        SETTINGS
            .castellan_bind_ip
            .clone()
            .unwrap_or("0.0.0.0".into()),
        SETTINGS.castellan_http_port as u16,
    ));

    let api_service = create_openapi_service(client)
        .summary("HTTP automation layer for DirectAdmin hosting accounts");

    let swagger = api_service.swagger_ui();
    let redoc = api_service.redoc();
    let scalar = api_service.scalar();
    let spec_json = api_service.spec_endpoint();
    let spec_yaml = api_service.spec_endpoint_yaml();
    let openapi_explorer = api_service.openapi_explorer();

    let open_api_route = Route::new()
        .nest_no_strip("/api", api_service)
        .with(Tracing);

    let cors_origins: Vec<String> = SETTINGS
        .castellan_cors_origins
        .iter()
        .cloned()
        .collect();

    let cors = Cors::new()
        .allow_origins_fn(move |origin| {
            if cors_origins.is_empty() || cors_origins.iter().any(|o| o == "*") {
                return true;
            }
            cors_origins.iter().any(|o| o == origin)
        })
        .allow_credentials(true)
        .allow_methods(&[
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
            Method::HEAD,
        ])
        .allow_headers(vec![
            "Content-Type",
            "Authorization",
            crate::modules::common::auth::ROLE_HEADER,
        ])
        .max_age(SETTINGS.castellan_cors_max_age);

    let route = Route::new()
        .nest("/api-docs/swagger", swagger)
        .nest("/api-docs/redoc", redoc)
        .nest("/api-docs/explorer", openapi_explorer)
        .nest("/api-docs/scalar", scalar)
        .nest("/api-docs/spec.json", spec_json)
        .nest("/api-docs/spec.yaml", spec_yaml)
        .at("/", get(portal_index))
        .at("/default/index/index", get(portal_index))
        .at(LOGIN_DESTINATION, get(login))
        .at(CONSTRUCTION_DESTINATION, get(construction))
        .at("/api/status", get(get_status))
        .nest_no_strip("/api", open_api_route)
        .with(cors)
        .with_if(
            SETTINGS.castellan_http_compression_enabled,
            Compression::new(),
        )
        .with(AccessCheck::new(acl))
        .with(Gatekeeper::from_settings())
        .with(CatchPanic::new());

    let server = Server::new(listener)
        .name("Castellan")
        .idle_timeout(Duration::from_secs(60))
        .run_with_graceful_shutdown(
            route.catch_all_error(error_handler),
            shutdown_signal(),
            Some(Duration::from_secs(5)),
        );
    println!(
        "Castellan is now running on port {}.",
        SETTINGS.castellan_http_port
    );
    server
        .await
        .map_err(|e| raise_error!(format!("{:#?}", e), ErrorCode::InternalError))
}
