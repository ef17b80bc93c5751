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

use clap::{builder::ValueParser, Parser};
use std::{collections::HashSet, sync::LazyLock};

#[cfg(not(test))]
pub static SETTINGS: LazyLock<Settings> = LazyLock::new(Settings::parse);

#[cfg(test)]
pub static SETTINGS: LazyLock<Settings> = LazyLock::new(|| Settings {
    castellan_log_level: "info".to_string(),
    castellan_http_port: 15780,
    castellan_bind_ip: Some("0.0.0.0".to_string()),
    castellan_cors_origins: HashSet::new(),
    castellan_cors_max_age: 86400,
    castellan_ansi_logs: true,
    castellan_log_to_file: false,
    castellan_json_logs: false,
    castellan_max_server_log_files: 5,
    castellan_log_dir: "/tmp/castellan_test".to_string(),
    castellan_http_compression_enabled: true,
    castellan_panel_host: "127.0.0.1".to_string(),
    castellan_panel_port: 2222,
    castellan_panel_username: "admin".to_string(),
    castellan_panel_password: "test-password".to_string(),
    castellan_panel_ssl: false,
    castellan_panel_timeout: 15,
    castellan_installer_endpoint: "http://127.0.0.1:8080/installatron/invoke".to_string(),
    castellan_maintenance_mode: false,
    castellan_maintenance_allow_ips: HashSet::new(),
});

#[derive(Debug, Parser)]
#[clap(
    name = "castellan",
    about = "A self-hosted automation gateway for DirectAdmin hosting panels",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Settings {
    /// castellan log level (default: "info")
    #[clap(
        long,
        default_value = "info",
        env,
        help = "Set the log level for castellan"
    )]
    pub castellan_log_level: String,

    /// castellan HTTP port (default: 15780)
    #[clap(
        long,
        default_value = "15780",
        env,
        help = "Set the HTTP port for castellan"
    )]
    pub castellan_http_port: i32,

    /// The IP address that the gateway binds to, in IPv4 format (e.g., 192.168.1.1).
    #[clap(
        long,
        env,
        default_value = "0.0.0.0",
        help = "The IP address that the gateway binds to, in IPv4 format (e.g., 192.168.1.1).",
        value_parser = ValueParser::new(|s: &str| {
            if s.parse::<std::net::Ipv4Addr>().is_err() {
                return Err("The bind IP address must be a valid IPv4 address.".to_string());
            }
            Ok(s.to_string())
        })
    )]
    pub castellan_bind_ip: Option<String>,

    /// CORS allowed origins (default: allow all)
    #[clap(
        long,
        default_value = "*",
        env,
        help = "Set the allowed CORS origins (comma-separated list, e.g., \"https://example.com, https://another.com\")",
        value_parser = ValueParser::new(|s: &str| -> Result<HashSet<String>, String> {
            let set: HashSet<String> = s.split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect();
            Ok(set)
        })
    )]
    pub castellan_cors_origins: HashSet<String>,

    /// CORS max age in seconds (default: 86400)
    #[clap(
        long,
        default_value = "86400",
        env,
        help = "Set the CORS max age in seconds"
    )]
    pub castellan_cors_max_age: i32,

    /// Enable ANSI logs (default: true)
    #[clap(long, default_value = "true", env, help = "Enable ANSI formatted logs")]
    pub castellan_ansi_logs: bool,

    /// Enable log file output (default: false)
    /// If false, logs will be printed to stdout
    #[clap(
        long,
        default_value = "false",
        env,
        help = "Enable log file output (otherwise logs go to stdout)"
    )]
    pub castellan_log_to_file: bool,

    /// Enable JSON logs (default: false)
    #[clap(
        long,
        default_value = "false",
        env,
        help = "Enable JSON formatted logs"
    )]
    pub castellan_json_logs: bool,

    /// Maximum number of log files (default: 5)
    #[clap(
        long,
        default_value = "5",
        env,
        help = "Set the maximum number of server log files"
    )]
    pub castellan_max_server_log_files: usize,

    /// Directory for server log files (default: "/var/log/castellan")
    #[clap(
        long,
        default_value = "/var/log/castellan",
        env,
        help = "Set the directory for castellan log files"
    )]
    pub castellan_log_dir: String,

    #[clap(
        long,
        default_value = "true",
        env,
        help = "Enable compression for the open api server"
    )]
    pub castellan_http_compression_enabled: bool,

    /// Hostname or IP address of the DirectAdmin control panel.
    #[clap(
        long,
        env,
        default_value = "127.0.0.1",
        help = "The hostname or IP address of the DirectAdmin control panel"
    )]
    pub castellan_panel_host: String,

    /// DirectAdmin port (default: 2222)
    #[clap(
        long,
        default_value = "2222",
        env,
        help = "Set the port of the DirectAdmin control panel"
    )]
    pub castellan_panel_port: u16,

    /// Username for the DirectAdmin control panel.
    #[clap(
        long,
        env,
        default_value = "admin",
        help = "Set the username for the DirectAdmin control panel"
    )]
    pub castellan_panel_username: String,

    /// Password for the DirectAdmin control panel.
    #[clap(
        long,
        default_value = "change-this-default-password-now",
        env,
        help = "Set the password for the DirectAdmin control panel. ⚠️ Change this default in production!"
    )]
    pub castellan_panel_password: String,

    /// Talk to the panel over HTTPS (default: true)
    #[clap(
        long,
        default_value = "true",
        env,
        help = "Use HTTPS when talking to the DirectAdmin control panel"
    )]
    pub castellan_panel_ssl: bool,

    /// Connect/read timeout for panel requests, in seconds (default: 15)
    #[clap(
        long,
        default_value = "15",
        env,
        help = "Set the connect/read timeout for panel requests in seconds",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub castellan_panel_timeout: u64,

    /// URL of the Installatron automation endpoint.
    #[clap(
        long,
        env,
        default_value = "http://127.0.0.1:8080/installatron/invoke",
        help = "Set the URL of the Installatron automation endpoint"
    )]
    pub castellan_installer_endpoint: String,

    /// Serve the under-construction page to everyone outside the allow list.
    #[clap(
        long,
        default_value = "false",
        env,
        help = "Redirect all callers outside the allow list to the under-construction page"
    )]
    pub castellan_maintenance_mode: bool,

    /// Caller addresses exempt from maintenance mode (comma-separated).
    #[clap(
        long,
        default_value = "",
        env,
        help = "Set the caller IP addresses exempt from maintenance mode (comma-separated list)",
        value_parser = ValueParser::new(|s: &str| -> Result<HashSet<String>, String> {
            let set: HashSet<String> = s.split(',')
                .map(|ip| ip.trim().to_string())
                .filter(|ip| !ip.is_empty())
                .collect();
            Ok(set)
        })
    )]
    pub castellan_maintenance_allow_ips: HashSet<String>,
}
