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

//! Role-based access rules for the HTTP surface.
//!
//! Roles form a single inheritance chain (master > admin > user >
//! guest): a role holds every permission of the roles below it.
//! Resources are named `module` or `module:controller` and may nest, so
//! a rule on `api` covers `api:domain`. Lookups are fail-closed: an
//! unregistered resource denies everything.

use ahash::AHashMap;

use crate::modules::error::{code::ErrorCode, CastellanResult};
use crate::raise_error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Guest,
    User,
    Admin,
    Master,
}

impl Role {
    /// Unknown names collapse to the weakest role.
    pub fn parse(raw: &str) -> Role {
        match raw {
            "user" => Role::User,
            "admin" => Role::Admin,
            "master" => Role::Master,
            _ => Role::Guest,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::User => "user",
            Role::Admin => "admin",
            Role::Master => "master",
        }
    }

    fn parent(self) -> Option<Role> {
        match self {
            Role::Master => Some(Role::Admin),
            Role::Admin => Some(Role::User),
            Role::User => Some(Role::Guest),
            Role::Guest => None,
        }
    }

    /// The role itself followed by everything it inherits from.
    fn chain(self) -> impl Iterator<Item = Role> {
        std::iter::successors(Some(self), |role| role.parent())
    }
}

/// An allow rule: the granted role and, optionally, a single action it
/// is limited to. `None` grants every action on the resource.
type Rule = (Role, Option<String>);

#[derive(Debug, Default)]
pub struct Acl {
    /// Resource name mapped to its optional parent resource.
    resources: AHashMap<String, Option<String>>,
    rules: AHashMap<String, Vec<Rule>>,
}

impl Acl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_resource(
        &mut self,
        name: impl Into<String>,
        parent: Option<&str>,
    ) -> CastellanResult<&mut Self> {
        let name = name.into();
        if self.resources.contains_key(&name) {
            return Err(raise_error!(
                format!("resource '{name}' is already registered"),
                ErrorCode::InvalidParameter
            ));
        }
        if let Some(parent) = parent {
            if !self.resources.contains_key(parent) {
                return Err(raise_error!(
                    format!("parent resource '{parent}' is not registered"),
                    ErrorCode::InvalidParameter
                ));
            }
        }
        self.resources.insert(name, parent.map(str::to_string));
        Ok(self)
    }

    pub fn allow(
        &mut self,
        role: Role,
        resource: &str,
        action: Option<&str>,
    ) -> CastellanResult<&mut Self> {
        if !self.resources.contains_key(resource) {
            return Err(raise_error!(
                format!("cannot allow on unregistered resource '{resource}'"),
                ErrorCode::InvalidParameter
            ));
        }
        self.rules
            .entry(resource.to_string())
            .or_default()
            .push((role, action.map(str::to_string)));
        Ok(self)
    }

    /// Walks the resource up its parent chain and the role down its
    /// inheritance chain looking for a matching allow rule.
    pub fn is_allowed(&self, role: Role, resource: &str, action: &str) -> bool {
        if !self.resources.contains_key(resource) {
            return false;
        }

        let mut current = Some(resource.to_string());
        while let Some(name) = current {
            if let Some(rules) = self.rules.get(&name) {
                for (granted, allowed_action) in rules {
                    let action_matches = match allowed_action {
                        Some(allowed) => allowed == action,
                        None => true,
                    };
                    if action_matches && role.chain().any(|r| r == *granted) {
                        return true;
                    }
                }
            }
            current = self.resources.get(&name).cloned().flatten();
        }
        false
    }

    /// The rule set the HTTP surface ships with: the public portal,
    /// error and login pages for guests, the whole API for users and
    /// up, and the backend landing page for guests so the login flow
    /// can reach it.
    pub fn standard() -> CastellanResult<Acl> {
        let mut acl = Acl::new();

        acl.add_resource("default", None)?;
        acl.add_resource("default:index", Some("default"))?;
        acl.add_resource("default:error", Some("default"))?;
        acl.add_resource("default:auth", Some("default"))?;
        acl.add_resource("default:construction", Some("default"))?;
        acl.add_resource("backend", None)?;
        acl.add_resource("backend:index", Some("backend"))?;
        acl.add_resource("api", None)?;
        acl.add_resource("api:status", Some("api"))?;
        acl.add_resource("api:domain", Some("api"))?;
        acl.add_resource("api:ftp", Some("api"))?;
        acl.add_resource("api:database", Some("api"))?;
        acl.add_resource("api:email", Some("api"))?;
        acl.add_resource("api:cron", Some("api"))?;
        acl.add_resource("api:usage", Some("api"))?;
        acl.add_resource("api:installer", Some("api"))?;
        acl.add_resource("api-docs", None)?;
        acl.add_resource("api-docs:swagger", Some("api-docs"))?;
        acl.add_resource("api-docs:redoc", Some("api-docs"))?;
        acl.add_resource("api-docs:explorer", Some("api-docs"))?;
        acl.add_resource("api-docs:scalar", Some("api-docs"))?;
        acl.add_resource("api-docs:spec.json", Some("api-docs"))?;
        acl.add_resource("api-docs:spec.yaml", Some("api-docs"))?;

        acl.allow(Role::Guest, "default:index", Some("index"))?;
        acl.allow(Role::Guest, "default:error", Some("error"))?;
        acl.allow(Role::Guest, "default:auth", Some("login"))?;
        acl.allow(Role::Guest, "default:construction", Some("index"))?;
        acl.allow(Role::Guest, "backend:index", Some("index"))?;
        acl.allow(Role::Guest, "api:status", None)?;
        acl.allow(Role::Guest, "api-docs", None)?;
        acl.allow(Role::User, "api", None)?;

        Ok(acl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guests_reach_the_portal_but_nothing_else() {
        let acl = Acl::standard().unwrap();
        assert!(acl.is_allowed(Role::Guest, "default:index", "index"));
        assert!(acl.is_allowed(Role::Guest, "default:error", "error"));
        assert!(acl.is_allowed(Role::Guest, "backend:index", "index"));
        assert!(!acl.is_allowed(Role::Guest, "backend:index", "delete"));
        assert!(!acl.is_allowed(Role::Guest, "api:domain", "list"));
    }

    #[test]
    fn stronger_roles_inherit_guest_permissions() {
        let acl = Acl::standard().unwrap();
        assert!(acl.is_allowed(Role::Master, "default:index", "index"));
        assert!(acl.is_allowed(Role::Admin, "backend:index", "index"));
    }

    #[test]
    fn users_get_the_whole_api_through_resource_nesting() {
        let acl = Acl::standard().unwrap();
        assert!(acl.is_allowed(Role::User, "api:domain", "list"));
        assert!(acl.is_allowed(Role::Master, "api:installer", "install"));
        assert!(!acl.is_allowed(Role::Guest, "api:installer", "install"));
    }

    #[test]
    fn unregistered_resources_deny_everything() {
        let acl = Acl::standard().unwrap();
        assert!(!acl.is_allowed(Role::Master, "intranet", "index"));
    }

    #[test]
    fn duplicate_or_orphaned_registrations_are_rejected() {
        let mut acl = Acl::new();
        acl.add_resource("a", None).unwrap();
        assert!(acl.add_resource("a", None).is_err());
        assert!(acl.add_resource("b", Some("missing")).is_err());
        assert!(acl.allow(Role::Guest, "missing", None).is_err());
    }

    #[test]
    fn unknown_role_names_parse_as_guest() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("superuser"), Role::Guest);
        assert_eq!(Role::parse(""), Role::Guest);
    }
}
