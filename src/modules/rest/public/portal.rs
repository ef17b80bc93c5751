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

use poem::handler;
use poem::web::Html;

/// Portal landing page.
#[handler]
pub async fn portal_index() -> Html<&'static str> {
    Html(concat!(
        "<html><head><title>Castellan</title></head><body>",
        "<h1>Castellan</h1>",
        "<p>Hosting panel automation. The API lives under <code>/api</code>; ",
        "interactive documentation under <code>/api-docs</code>.</p>",
        "</body></html>"
    ))
}
