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

/// Ordered request parameters for one panel call.
///
/// The panel is sensitive to parameter order in a few places (the
/// `select{i}` series), so this is a plain pair list rather than a map.
/// Built fresh per call, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamList {
    pairs: Vec<(String, String)>,
}

impl ParamList {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// Serializes a boolean the `ON`/`OFF` way. The other panel spelling
    /// is [`push_yes_no`](Self::push_yes_no); both are preserved
    /// literally, never unified.
    pub fn push_on_off(&mut self, key: impl Into<String>, value: bool) -> &mut Self {
        self.push(key, if value { "ON" } else { "OFF" })
    }

    pub fn push_yes_no(&mut self, key: impl Into<String>, value: bool) -> &mut Self {
        self.push(key, if value { "yes" } else { "no" })
    }

    /// Expands a sequence of identifiers into `select0..select(n-1)`,
    /// preserving input order. A single identifier yields exactly
    /// `select0`.
    pub fn push_select<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for (i, item) in items.into_iter().enumerate() {
            self.push(format!("select{}", i), item);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_series_preserves_input_order() {
        let mut params = ParamList::new();
        params.push_select(["b.com", "a.com", "c.com"]);
        assert_eq!(
            params.as_pairs(),
            &[
                ("select0".to_string(), "b.com".to_string()),
                ("select1".to_string(), "a.com".to_string()),
                ("select2".to_string(), "c.com".to_string()),
            ]
        );
    }

    #[test]
    fn single_identifier_maps_to_select0() {
        let mut params = ParamList::new();
        params.push_select(["only.com"]);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("select0"), Some("only.com"));
    }

    #[test]
    fn boolean_spellings_stay_distinct() {
        let mut params = ParamList::new();
        params.push_on_off("ssl", true);
        params.push_on_off("cgi", false);
        params.push_yes_no("confirmed", true);
        params.push_yes_no("contents", false);
        assert_eq!(params.get("ssl"), Some("ON"));
        assert_eq!(params.get("cgi"), Some("OFF"));
        assert_eq!(params.get("confirmed"), Some("yes"));
        assert_eq!(params.get("contents"), Some("no"));
    }
}
