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

use crate::modules::error::{code::ErrorCode, CastellanResult};
use crate::raise_error;

/// Parsed body of one panel response: an ordered flat `key=value`
/// mapping.
///
/// The panel signals logical failures inside the mapping itself
/// (typically `error`, `text` and `details` keys); those are passed
/// through untouched for the caller to inspect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelResponse {
    entries: Vec<(String, String)>,
}

impl PanelResponse {
    /// Parses a classic form-encoded (`a=1&b=2`) body.
    ///
    /// The panel answers every API command this way; an HTML body means
    /// the request never reached the API layer and is rejected as
    /// malformed.
    pub fn parse(body: &str) -> CastellanResult<Self> {
        let trimmed = body.trim();
        if trimmed.starts_with('<') {
            return Err(raise_error!(
                "panel returned an HTML body instead of a form-encoded response".into(),
                ErrorCode::MalformedResponse
            ));
        }

        let mut entries = Vec::new();
        for chunk in trimmed.split('&') {
            if chunk.is_empty() {
                continue;
            }
            let (key, value) = chunk.split_once('=').unwrap_or((chunk, ""));
            entries.push((url_decode(key)?, url_decode(value)?));
        }
        Ok(Self { entries })
    }

    /// Decodes a value that is itself a form-encoded `key=value` string
    /// (the vacation listing nests one level deep).
    pub fn decode_nested(value: &str) -> CastellanResult<Vec<(String, String)>> {
        let mut pairs = Vec::new();
        for chunk in value.split('&') {
            if chunk.is_empty() {
                continue;
            }
            let (key, value) = chunk.split_once('=').unwrap_or((chunk, ""));
            pairs.push((url_decode(key)?, url_decode(value)?));
        }
        Ok(pairs)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<(String, String)> {
        self.entries
    }

    #[cfg(test)]
    pub fn from_entries(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }
}

fn url_decode(raw: &str) -> CastellanResult<String> {
    // The panel encodes spaces as '+' in form bodies.
    let plus_decoded = raw.replace('+', " ");
    urlencoding::decode(&plus_decoded)
        .map(|cow| cow.into_owned())
        .map_err(|e| {
            raise_error!(
                format!("response chunk is not valid UTF-8 after decoding: {e}"),
                ErrorCode::MalformedResponse
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_form_body() {
        let response = PanelResponse::parse("list%5B%5D=x.com&list%5B%5D=y.com&error=0").unwrap();
        assert_eq!(response.len(), 3);
        assert_eq!(response.get("error"), Some("0"));
        let keys: Vec<&str> = response.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["list[]", "list[]", "error"]);
    }

    #[test]
    fn decodes_plus_and_percent_escapes() {
        let response = PanelResponse::parse("text=Out+of%20office&user=jan").unwrap();
        assert_eq!(response.get("text"), Some("Out of office"));
        assert_eq!(response.get("user"), Some("jan"));
    }

    #[test]
    fn value_less_chunk_becomes_empty_value() {
        let response = PanelResponse::parse("flag&key=value").unwrap();
        assert_eq!(response.get("flag"), Some(""));
        assert_eq!(response.get("key"), Some("value"));
    }

    #[test]
    fn html_body_is_rejected() {
        let err = PanelResponse::parse("<html><body>login</body></html>").unwrap_err();
        assert_eq!(err.code(), crate::modules::error::code::ErrorCode::MalformedResponse);
    }

    #[test]
    fn nested_values_decode_one_level() {
        let pairs =
            PanelResponse::decode_nested("starttime=morning&text=away%20until%20june").unwrap();
        assert_eq!(
            pairs,
            vec![
                ("starttime".to_string(), "morning".to_string()),
                ("text".to_string(), "away until june".to_string()),
            ]
        );
    }
}
