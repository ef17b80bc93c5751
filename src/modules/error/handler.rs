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

use crate::modules::error::code::ErrorCode;
use poem::{http::StatusCode, Body, IntoResponse, Response};

/// Converts any unhandled poem error into the JSON error shape the
/// rest of the API uses.
pub async fn error_handler(err: poem::Error) -> impl IntoResponse {
    let status = err.status();
    let code = match status {
        StatusCode::NOT_FOUND => ErrorCode::ResourceNotFound,
        StatusCode::METHOD_NOT_ALLOWED => ErrorCode::MethodNotAllowed,
        StatusCode::BAD_REQUEST => ErrorCode::InvalidParameter,
        _ => ErrorCode::UnhandledPoemError,
    };

    let body = Body::from_json(serde_json::json!({
        "code": code as u32,
        "message": err.to_string(),
    }))
    .unwrap_or_else(|_| Body::from_string(err.to_string()));

    Response::builder().status(status).body(body)
}
