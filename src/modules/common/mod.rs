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
use poem::{http::StatusCode, Body, Response};
use tracing::error;

use super::error::code::ErrorCode;
use super::error::CastellanError;

pub mod auth;
pub mod gatekeeper;
pub mod log;

impl ResponseError for CastellanError {
    fn status(&self) -> StatusCode {
        match self {
            CastellanError::Generic {
                message: _,
                location: _,
                code,
            } => code.status(),
            CastellanError::IoError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn as_response(&self) -> Response
    where
        Self: std::error::Error + Send + Sync + 'static,
    {
        match self {
            CastellanError::Generic {
                message,
                location,
                code,
            } => {
                error!(
                    error_code = *code as u32,
                    error_message = %message,
                    error_location = ?location
                );

                let body = Body::from_json(serde_json::json!({
                    "code": *code as u32,
                    "message": message.to_string(),
                }))
                .unwrap();

                Response::builder().status(self.status()).body(body)
            }
            CastellanError::IoError { source, location } => {
                error!(
                    error_code = ErrorCode::IoError as u32,
                    error_message = %source,
                    error_location = ?location
                );

                let body = Body::from_json(serde_json::json!({
                    "code": ErrorCode::IoError as u32,
                    "message": source.to_string(),
                }))
                .unwrap();

                Response::builder().status(self.status()).body(body)
            }
        }
    }
}
