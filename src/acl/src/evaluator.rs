//! Evaluation core: lookup, scope aggregation and predicates
//!
//! Every surface of the crate delegates here. The evaluator holds only the
//! immutable configuration, so it is `Send + Sync` and needs no locking.
//!
//! # Semantics
//!
//! - Lookups scan in declaration order; the first entry with a matching
//!   name wins.
//! - Aggregation concatenates scopes in role order and keeps duplicates.
//! - `has_role` / `has_group` check membership on the entity only and
//!   require ALL requested names (AND logic).

use crate::config::AclConfig;
use crate::entity::AccessControlEntity;
use crate::error::{AclError, Result};
use crate::types::{Group, GroupRef, IntoNames, Role, Scope};
use tracing::debug;

/// Evaluates queries against a fixed configuration
#[derive(Debug, Clone)]
pub struct Evaluator {
    config: AclConfig,
}

impl Evaluator {
    /// Create an evaluator over the given configuration
    pub fn new(config: AclConfig) -> Self {
        Self { config }
    }

    /// The configuration this evaluator reads from
    pub fn config(&self) -> &AclConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------

    /// Find a role by name
    pub fn resolve_role(&self, name: &str) -> Result<&Role> {
        self.config
            .roles
            .iter()
            .find(|role| role.name == name)
            .ok_or_else(|| {
                debug!("Role lookup missed: {}", name);
                AclError::role_not_found(name)
            })
    }

    /// Find a group by name
    pub fn resolve_group(&self, name: &str) -> Result<&Group> {
        self.config
            .groups
            .iter()
            .find(|group| group.name == name)
            .ok_or_else(|| {
                debug!("Group lookup missed: {}", name);
                AclError::group_not_found(name)
            })
    }

    /// Find the configured default group
    pub fn resolve_default_group(&self) -> Result<&Group> {
        self.resolve_group(&self.config.default_group)
    }

    // ------------------------------------------------------------------
    // Aggregation
    // ------------------------------------------------------------------

    /// Concatenated scopes of the given roles, in order, duplicates kept
    pub fn scopes_of_roles(&self, roles: impl IntoNames) -> Result<Vec<Scope>> {
        self.collect_scopes(&roles.into_names())
    }

    /// Scopes granted by the entity's assigned roles
    ///
    /// An entity with no roles yields an empty list, not an error.
    pub fn scopes_of_user<E: AccessControlEntity + ?Sized>(&self, entity: &E) -> Result<Vec<Scope>> {
        match entity.roles() {
            Some(roles) => self.collect_scopes(roles),
            None => Ok(Vec::new()),
        }
    }

    /// Roles referenced by a group, resolved in declaration order
    pub fn roles_of_group<'g>(&self, group: impl Into<GroupRef<'g>>) -> Result<Vec<&Role>> {
        let group = match group.into() {
            GroupRef::Name(name) => self.resolve_group(name)?,
            GroupRef::Group(group) => group,
        };

        group
            .roles
            .iter()
            .map(|name| self.resolve_role(name))
            .collect()
    }

    /// Scopes of every role in a group, concatenated in role order
    pub fn scopes_of_group<'g>(&self, group: impl Into<GroupRef<'g>>) -> Result<Vec<Scope>> {
        Ok(self
            .roles_of_group(group)?
            .into_iter()
            .flat_map(|role| role.scopes.iter().cloned())
            .collect())
    }

    /// Scopes of the configured default group
    pub fn default_group_scopes(&self) -> Result<Vec<Scope>> {
        let group = self.resolve_default_group()?;
        self.scopes_of_group(group)
    }

    fn collect_scopes(&self, roles: &[String]) -> Result<Vec<Scope>> {
        let mut scopes = Vec::new();
        for name in roles {
            scopes.extend(self.resolve_role(name)?.scopes.iter().cloned());
        }
        Ok(scopes)
    }

    // ------------------------------------------------------------------
    // Predicates
    // ------------------------------------------------------------------

    /// Whether any assigned role grants `scope`
    ///
    /// Roles are resolved in assignment order and the scan stops at the
    /// first match, so an unknown role listed after a granting role is
    /// never looked up.
    pub fn has_scope<E: AccessControlEntity + ?Sized>(&self, entity: &E, scope: &str) -> Result<bool> {
        let Some(roles) = entity.roles() else {
            return Ok(false);
        };

        for name in roles {
            if self.resolve_role(name)?.grants(scope) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Whether every scope is granted (true for an empty list)
    pub fn has_scopes<E, S>(&self, entity: &E, scopes: impl IntoIterator<Item = S>) -> Result<bool>
    where
        E: AccessControlEntity + ?Sized,
        S: AsRef<str>,
    {
        for scope in scopes {
            if !self.has_scope(entity, scope.as_ref())? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Whether every requested role is assigned to the entity
    ///
    /// Pure membership; role names are never looked up in the configuration.
    pub fn has_role<E: AccessControlEntity + ?Sized>(&self, entity: &E, roles: impl IntoNames) -> bool {
        contains_all(entity.roles(), roles.into_names())
    }

    /// Whether every requested group is assigned to the entity
    pub fn has_group<E: AccessControlEntity + ?Sized>(&self, entity: &E, groups: impl IntoNames) -> bool {
        contains_all(entity.groups(), groups.into_names())
    }
}

fn contains_all(assigned: Option<&[String]>, required: Vec<String>) -> bool {
    let assigned = assigned.unwrap_or_default();
    required.iter().all(|name| assigned.contains(name))
}
