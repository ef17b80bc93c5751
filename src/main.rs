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

use mimalloc::MiMalloc;
use tracing::info;

use modules::acl::Acl;
use modules::directadmin::DirectAdminClient;
use modules::error::CastellanResult;
use modules::logger;
use modules::rest::start_http_server;
use modules::settings::cli::SETTINGS;

mod modules;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

static LOGO: &str = r#"
                    _         _  _
  ___   __ _  ___ | |_  ___ | || |  __ _  _ __
 / __| / _` |/ __|| __|/ _ \| || | / _` || '_ \
| (__ | (_| |\__ \| |_|  __/| || || (_| || | | |
 \___| \__,_||___/ \__|\___||_||_| \__,_||_| |_|

"#;

#[cfg(not(test))]
#[tokio::main]
async fn main() -> CastellanResult<()> {
    logger::initialize_logging();
    info!("{}", LOGO);
    info!("Starting castellan");
    info!("Version:  {}", env!("CARGO_PKG_VERSION"));
    info!(
        "Panel:    {}:{}",
        SETTINGS.castellan_panel_host, SETTINGS.castellan_panel_port
    );

    let client = match DirectAdminClient::from_settings().await {
        Ok(client) => Arc::new(client),
        Err(error) => {
            eprintln!("failed to reach the panel: {:?}", error);
            return Err(error);
        }
    };
    info!("Connected to panel as {}", client.username());

    let acl = Arc::new(Acl::standard()?);

    start_http_server(client, acl).await?;
    Ok(())
}
