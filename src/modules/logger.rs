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

use crate::modules::settings::cli::SETTINGS;
use std::sync::OnceLock;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::EnvFilter;

// Keeps the non-blocking writer alive for the lifetime of the process.
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn env_filter() -> EnvFilter {
    EnvFilter::try_new(&SETTINGS.castellan_log_level).unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn initialize_logging() {
    if SETTINGS.castellan_log_to_file {
        match RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("castellan")
            .filename_suffix("log")
            .max_log_files(SETTINGS.castellan_max_server_log_files)
            .build(&SETTINGS.castellan_log_dir)
        {
            Ok(appender) => {
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let _ = LOG_GUARD.set(guard);
                let builder = tracing_subscriber::fmt()
                    .with_env_filter(env_filter())
                    .with_writer(writer)
                    .with_ansi(false);
                if SETTINGS.castellan_json_logs {
                    builder.json().init();
                } else {
                    builder.init();
                }
                return;
            }
            Err(error) => {
                eprintln!(
                    "failed to open log directory {:?}, falling back to stdout: {}",
                    SETTINGS.castellan_log_dir, error
                );
            }
        }
    }

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(SETTINGS.castellan_ansi_logs);
    if SETTINGS.castellan_json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}
