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

use poem_openapi::param::Query;
use poem_openapi::payload::Json;
use poem_openapi::{Object, OpenApi};
use serde::{Deserialize, Serialize};

use crate::modules::directadmin::database;
use crate::modules::directadmin::DirectAdminClient;
use crate::modules::rest::api::{panel_entries, ApiTags, PanelEntry};
use crate::modules::rest::ApiResult;

pub struct DatabaseApi {
    client: Arc<DirectAdminClient>,
}

impl DatabaseApi {
    pub fn new(client: Arc<DirectAdminClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct DatabaseCreateRequest {
    pub domain: String,
    pub name: String,
    pub user: String,
    pub password: String,
    /// Attach this existing database user instead of creating one.
    pub existing_user: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct DatabaseSelection {
    pub domain: String,
    pub databases: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct DatabaseUserRequest {
    pub database: String,
    pub user: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct DatabaseUserSelection {
    pub database: String,
    pub users: Vec<String>,
}

#[OpenApi(prefix_path = "/api/database", tag = "ApiTags::Database")]
impl DatabaseApi {
    /// Lists the databases of a domain.
    #[oai(path = "/list", method = "get", operation_id = "list_databases")]
    async fn list(&self, domain: Query<String>) -> ApiResult<Json<Vec<PanelEntry>>> {
        Ok(Json(panel_entries(
            database::list(&self.client, &domain.0).await?,
        )))
    }

    /// Creates a database, with either a new or an existing user.
    #[oai(path = "/create", method = "post", operation_id = "create_database")]
    async fn create(
        &self,
        payload: Json<DatabaseCreateRequest>,
    ) -> ApiResult<Json<Vec<PanelEntry>>> {
        let payload = payload.0;
        let response = database::create(
            &self.client,
            &payload.domain,
            &payload.name,
            &payload.user,
            &payload.password,
            payload.existing_user.as_deref(),
        )
        .await?;
        Ok(Json(panel_entries(response)))
    }

    /// Deletes the selected databases.
    #[oai(path = "/delete", method = "post", operation_id = "delete_databases")]
    async fn delete(&self, payload: Json<DatabaseSelection>) -> ApiResult<Json<Vec<PanelEntry>>> {
        let payload = payload.0;
        let response = database::delete(&self.client, &payload.domain, payload.databases).await?;
        Ok(Json(panel_entries(response)))
    }

    /// Lists the users of a database.
    #[oai(path = "/users", method = "get", operation_id = "list_database_users")]
    async fn user_list(&self, database: Query<String>) -> ApiResult<Json<Vec<PanelEntry>>> {
        Ok(Json(panel_entries(
            database::user_list(&self.client, &database.0).await?,
        )))
    }

    /// Adds a user to a database.
    #[oai(
        path = "/users/create",
        method = "post",
        operation_id = "create_database_user"
    )]
    async fn user_create(
        &self,
        payload: Json<DatabaseUserRequest>,
    ) -> ApiResult<Json<Vec<PanelEntry>>> {
        let response = database::user_create(
            &self.client,
            &payload.database,
            &payload.user,
            &payload.password,
        )
        .await?;
        Ok(Json(panel_entries(response)))
    }

    /// Changes a database user's password.
    #[oai(
        path = "/users/modify",
        method = "post",
        operation_id = "modify_database_user"
    )]
    async fn user_modify(
        &self,
        payload: Json<DatabaseUserRequest>,
    ) -> ApiResult<Json<Vec<PanelEntry>>> {
        let response = database::user_modify(
            &self.client,
            &payload.database,
            &payload.user,
            &payload.password,
        )
        .await?;
        Ok(Json(panel_entries(response)))
    }

    /// Removes the selected users from a database.
    #[oai(
        path = "/users/delete",
        method = "post",
        operation_id = "delete_database_users"
    )]
    async fn user_delete(
        &self,
        payload: Json<DatabaseUserSelection>,
    ) -> ApiResult<Json<Vec<PanelEntry>>> {
        let payload = payload.0;
        let response =
            database::user_delete(&self.client, &payload.database, payload.users).await?;
        Ok(Json(panel_entries(response)))
    }
}
