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

use poem::{handler, IntoResponse, Response};

/// Maintenance-mode destination. Answers 503 so load balancers and
/// monitors read it correctly.
#[handler]
pub async fn construction() -> Response {
    Response::builder()
        .status(poem::http::StatusCode::SERVICE_UNAVAILABLE)
        .content_type("text/html")
        .body(concat!(
            "<html><head><title>Under construction</title></head><body>",
            "<h1>Under construction</h1>",
            "<p>This service is undergoing maintenance. Please try again later.</p>",
            "</body></html>"
        ))
        .into_response()
}
