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

//! Command endpoint names fixed by the DirectAdmin panel.

pub const CMD_API_SHOW_DOMAINS: &str = "CMD_API_SHOW_DOMAINS";
pub const CMD_API_DOMAIN: &str = "CMD_API_DOMAIN";
pub const CMD_API_SUBDOMAINS: &str = "CMD_API_SUBDOMAINS";
pub const CMD_API_FTP: &str = "CMD_API_FTP";
pub const CMD_API_DATABASES: &str = "CMD_API_DATABASES";
pub const CMD_API_DB_USER: &str = "CMD_API_DB_USER";
pub const CMD_API_POP: &str = "CMD_API_POP";
pub const CMD_API_EMAIL_CATCH_ALL: &str = "CMD_API_EMAIL_CATCH_ALL";
pub const CMD_API_EMAIL_FORWARDERS: &str = "CMD_API_EMAIL_FORWARDERS";
pub const CMD_API_EMAIL_AUTORESPONDER: &str = "CMD_API_EMAIL_AUTORESPONDER";
pub const CMD_API_EMAIL_AUTORESPONDER_MODIFY: &str = "CMD_API_EMAIL_AUTORESPONDER_MODIFY";
pub const CMD_API_EMAIL_VACATION: &str = "CMD_API_EMAIL_VACATION";
pub const CMD_API_EMAIL_VACATION_MODIFY: &str = "CMD_API_EMAIL_VACATION_MODIFY";
pub const CMD_API_CRON_JOBS: &str = "CMD_API_CRON_JOBS";
pub const CMD_API_SHOW_USER_USAGE: &str = "CMD_API_SHOW_USER_USAGE";
pub const CMD_API_CHANGE_INFO: &str = "CMD_API_CHANGE_INFO";
