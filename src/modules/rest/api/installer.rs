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

//! Installatron endpoints. Each request builds a fresh installer client
//! scoped to the target account, reusing the panel credentials.

use std::sync::Arc;

use poem_openapi::payload::Json;
use poem_openapi::{Object, OpenApi};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::modules::directadmin::DirectAdminClient;
use crate::modules::error::CastellanResult;
use crate::modules::installer::{
    ApplicationInfo, DatabaseInfo, DatabaseMode, InstallatronClient, PanelType,
};
use crate::modules::rest::api::ApiTags;
use crate::modules::rest::ApiResult;
use crate::modules::settings::cli::SETTINGS;

pub struct InstallerApi {
    client: Arc<DirectAdminClient>,
}

impl InstallerApi {
    pub fn new(client: Arc<DirectAdminClient>) -> Self {
        Self { client }
    }

    fn installer_for(&self, target: &str) -> CastellanResult<InstallatronClient> {
        let mut installer = InstallatronClient::new(
            self.client.host(),
            self.client.username(),
            SETTINGS.castellan_panel_password.clone(),
            PanelType::DirectAdmin,
        )?;
        installer.set_target(target);
        Ok(installer)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct InstallerTarget {
    /// Panel account the operation applies to.
    pub target: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct InstallerSelection {
    pub target: String,
    /// Installatron id of the installed application.
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct InstallRequest {
    pub target: String,
    /// URL under one of the target's domains to install into.
    pub location: String,
    /// Application name; unsupported names fall back to wordpress.
    pub application: Option<String>,
    /// ISO 639-1 code, defaults to `en`.
    pub language: Option<String>,
    pub admin_email: Option<String>,
    pub admin_username: Option<String>,
    /// Absent means a password is generated and reported back as
    /// `data.cf-passwd`.
    pub admin_password: Option<String>,
    pub site_title: Option<String>,
    pub version: Option<String>,
    /// Seed the install with sample content.
    pub sample_content: Option<bool>,
    /// `manual` skips database creation; defaults to `auto`.
    pub database_mode: Option<String>,
    pub database_host: Option<String>,
    pub database_name: Option<String>,
    pub database_user: Option<String>,
    pub database_password: Option<String>,
    pub database_prefix: Option<String>,
}

impl InstallRequest {
    fn application_info(&self) -> ApplicationInfo {
        let defaults = ApplicationInfo::default();
        ApplicationInfo {
            application: self
                .application
                .clone()
                .unwrap_or(defaults.application),
            language: self.language.clone().unwrap_or(defaults.language),
            email: self.admin_email.clone(),
            username: self.admin_username.clone(),
            password: self.admin_password.clone().unwrap_or_default(),
            title: self.site_title.clone(),
            version: self.version.clone(),
            content: if self.sample_content.unwrap_or(false) {
                "yes".to_string()
            } else {
                "no".to_string()
            },
        }
    }

    fn database_info(&self) -> DatabaseInfo {
        let mode = match self.database_mode.as_deref() {
            Some("manual") => DatabaseMode::Manual,
            _ => DatabaseMode::Auto,
        };
        DatabaseInfo {
            mode,
            host: self.database_host.clone(),
            name: self.database_name.clone(),
            user: self.database_user.clone(),
            password: self.database_password.clone(),
            prefix: self.database_prefix.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct EditRequest {
    pub target: String,
    /// Installatron id of the installed application.
    pub id: String,
    pub language: Option<String>,
    pub admin_email: Option<String>,
    pub admin_username: Option<String>,
    /// Absent means a password is generated and reported back as
    /// `data.cf-passwd`.
    pub admin_password: Option<String>,
    pub database_host: Option<String>,
    pub database_name: Option<String>,
    pub database_user: Option<String>,
    pub database_password: Option<String>,
    pub database_prefix: Option<String>,
}

impl EditRequest {
    fn application_info(&self) -> ApplicationInfo {
        let defaults = ApplicationInfo::default();
        ApplicationInfo {
            language: self.language.clone().unwrap_or(defaults.language),
            email: self.admin_email.clone(),
            username: self.admin_username.clone(),
            password: self.admin_password.clone().unwrap_or_default(),
            ..defaults
        }
    }

    fn database_info(&self) -> DatabaseInfo {
        DatabaseInfo {
            host: self.database_host.clone(),
            name: self.database_name.clone(),
            user: self.database_user.clone(),
            password: self.database_password.clone(),
            prefix: self.database_prefix.clone(),
            ..DatabaseInfo::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct MigrateRequest {
    pub target: String,
    /// FTP URI of the source install, credentials included.
    pub source_ftp: String,
    /// Public URL of the source install.
    pub source_url: String,
    /// Where the imported application should live.
    pub location: String,
    pub application: Option<String>,
}

#[OpenApi(prefix_path = "/api/installer", tag = "ApiTags::Installer")]
impl InstallerApi {
    /// Lists the applications installed for the target account.
    #[oai(path = "/list", method = "post", operation_id = "list_applications")]
    async fn list(&self, payload: Json<InstallerTarget>) -> ApiResult<Json<Value>> {
        let installer = self.installer_for(&payload.target)?;
        Ok(Json(installer.application_list().await?))
    }

    /// Details of one installed application.
    #[oai(path = "/details", method = "post", operation_id = "application_details")]
    async fn details(&self, payload: Json<InstallerSelection>) -> ApiResult<Json<Value>> {
        let installer = self.installer_for(&payload.target)?;
        Ok(Json(installer.application_details(&payload.id).await?))
    }

    /// Installs an application for the target account.
    #[oai(path = "/install", method = "post", operation_id = "install_application")]
    async fn install(&self, payload: Json<InstallRequest>) -> ApiResult<Json<Value>> {
        let payload = payload.0;
        let mut installer = self.installer_for(&payload.target)?;
        installer.set_application_info(payload.application_info());
        installer.set_database_info(payload.database_info());
        Ok(Json(installer.application_install(&payload.location).await?))
    }

    /// Changes the admin credentials or database settings of an
    /// installed application.
    #[oai(path = "/edit", method = "post", operation_id = "edit_application")]
    async fn edit(&self, payload: Json<EditRequest>) -> ApiResult<Json<Value>> {
        let payload = payload.0;
        let mut installer = self.installer_for(&payload.target)?;
        installer.set_application_info(payload.application_info());
        installer.set_database_info(payload.database_info());
        Ok(Json(installer.application_edit(&payload.id).await?))
    }

    /// Uninstalls an application.
    #[oai(
        path = "/uninstall",
        method = "post",
        operation_id = "uninstall_application"
    )]
    async fn uninstall(&self, payload: Json<InstallerSelection>) -> ApiResult<Json<Value>> {
        let installer = self.installer_for(&payload.target)?;
        Ok(Json(installer.application_uninstall(&payload.id).await?))
    }

    /// Imports an existing install into Installatron management.
    #[oai(path = "/migrate", method = "post", operation_id = "migrate_application")]
    async fn migrate(&self, payload: Json<MigrateRequest>) -> ApiResult<Json<Value>> {
        let payload = payload.0;
        let mut installer = self.installer_for(&payload.target)?;
        if let Some(application) = &payload.application {
            installer.set_application_info(ApplicationInfo {
                application: application.clone(),
                ..ApplicationInfo::default()
            });
        }
        Ok(Json(
            installer
                .application_migrate(&payload.source_ftp, &payload.source_url, &payload.location)
                .await?,
        ))
    }
}
