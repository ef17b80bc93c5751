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

use poem::error::ResponseError;
use poem::{handler, Response};

use crate::modules::error::code::ErrorCode;
use crate::raise_error;

/// Where denied requests end up. Answers 401 with the error code so API
/// callers can tell a rerouted denial apart from a missing route.
#[handler]
pub async fn login() -> Response {
    raise_error!(
        "authentication required".to_string(),
        ErrorCode::PermissionDenied
    )
    .as_response()
}
