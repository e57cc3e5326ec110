//! Standalone ACL service
//!
//! Holds the configuration and operates on entities passed in by the
//! caller. Cloning is cheap: clones share one evaluator.
//!
//! ```rust
//! use cretoai_acl::{AclConfig, AclService, AclSubject};
//!
//! let config = AclConfig::builder("user")
//!     .role("role_user", ["read:own", "write:own"])
//!     .group("user", ["role_user"])
//!     .build();
//! let acl = AclService::new(config);
//!
//! let mut alice = AclSubject::new("user:alice@example.com");
//! acl.append_role(&mut alice, "role_user")?;
//!
//! assert!(acl.has_scope(&alice, "read:own")?);
//! assert_eq!(acl.scopes_of_user(&alice)?, vec!["read:own", "write:own"]);
//! # Ok::<(), cretoai_acl::AclError>(())
//! ```

use crate::config::AclConfig;
use crate::entity::AccessControlEntity;
use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::mutation;
use crate::types::{Group, GroupRef, IntoNames, Role, Scope};
use std::sync::Arc;
use tracing::info;

/// Access control service over a fixed configuration
#[derive(Debug, Clone)]
pub struct AclService {
    evaluator: Arc<Evaluator>,
}

impl AclService {
    /// Create a new service; the configuration is immutable from here on
    pub fn new(config: AclConfig) -> Self {
        info!(
            "AclService initialized with {} roles, {} groups, default group '{}'",
            config.roles.len(),
            config.groups.len(),
            config.default_group
        );

        Self {
            evaluator: Arc::new(Evaluator::new(config)),
        }
    }

    /// The shared evaluation core
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// The configuration in use
    pub fn config(&self) -> &AclConfig {
        self.evaluator.config()
    }

    /// Find a role by name
    pub fn resolve_role(&self, name: &str) -> Result<&Role> {
        self.evaluator.resolve_role(name)
    }

    /// Find a group by name
    pub fn resolve_group(&self, name: &str) -> Result<&Group> {
        self.evaluator.resolve_group(name)
    }

    /// Find the configured default group
    pub fn resolve_default_group(&self) -> Result<&Group> {
        self.evaluator.resolve_default_group()
    }

    /// Concatenated scopes of one or more roles
    pub fn scopes_of_roles(&self, roles: impl IntoNames) -> Result<Vec<Scope>> {
        self.evaluator.scopes_of_roles(roles)
    }

    /// Scopes granted by the entity's assigned roles
    pub fn scopes_of_user<E: AccessControlEntity + ?Sized>(&self, entity: &E) -> Result<Vec<Scope>> {
        self.evaluator.scopes_of_user(entity)
    }

    /// Roles referenced by a group
    pub fn roles_of_group<'g>(&self, group: impl Into<GroupRef<'g>>) -> Result<Vec<&Role>> {
        self.evaluator.roles_of_group(group)
    }

    /// Scopes of every role in a group
    pub fn scopes_of_group<'g>(&self, group: impl Into<GroupRef<'g>>) -> Result<Vec<Scope>> {
        self.evaluator.scopes_of_group(group)
    }

    /// Scopes of the default group
    pub fn default_group_scopes(&self) -> Result<Vec<Scope>> {
        self.evaluator.default_group_scopes()
    }

    /// Whether any assigned role grants `scope`
    pub fn has_scope<E: AccessControlEntity + ?Sized>(&self, entity: &E, scope: &str) -> Result<bool> {
        self.evaluator.has_scope(entity, scope)
    }

    /// Whether every scope is granted
    pub fn has_scopes<E, S>(&self, entity: &E, scopes: impl IntoIterator<Item = S>) -> Result<bool>
    where
        E: AccessControlEntity + ?Sized,
        S: AsRef<str>,
    {
        self.evaluator.has_scopes(entity, scopes)
    }

    /// Whether every requested role is assigned
    pub fn has_role<E: AccessControlEntity + ?Sized>(&self, entity: &E, roles: impl IntoNames) -> bool {
        self.evaluator.has_role(entity, roles)
    }

    /// Whether every requested group is assigned
    pub fn has_group<E: AccessControlEntity + ?Sized>(&self, entity: &E, groups: impl IntoNames) -> bool {
        self.evaluator.has_group(entity, groups)
    }

    /// Replace the entity's roles
    pub fn assign_roles<E>(&self, entity: &mut E, roles: impl IntoNames) -> std::result::Result<(), E::Error>
    where
        E: AccessControlEntity + ?Sized,
    {
        mutation::assign_roles(entity, roles)
    }

    /// Append one role to the entity
    pub fn append_role<E>(&self, entity: &mut E, role: &str) -> std::result::Result<(), E::Error>
    where
        E: AccessControlEntity + ?Sized,
    {
        mutation::append_role(entity, role)
    }

    /// Remove roles from the entity
    pub fn remove_roles<E>(&self, entity: &mut E, roles: impl IntoNames) -> std::result::Result<(), E::Error>
    where
        E: AccessControlEntity + ?Sized,
    {
        mutation::remove_roles(entity, roles)
    }

    /// Replace the entity's groups
    pub fn assign_groups<E>(&self, entity: &mut E, groups: impl IntoNames) -> std::result::Result<(), E::Error>
    where
        E: AccessControlEntity + ?Sized,
    {
        mutation::assign_groups(entity, groups)
    }

    /// Append one group to the entity
    pub fn append_group<E>(&self, entity: &mut E, group: &str) -> std::result::Result<(), E::Error>
    where
        E: AccessControlEntity + ?Sized,
    {
        mutation::append_group(entity, group)
    }

    /// Remove groups from the entity
    pub fn remove_groups<E>(&self, entity: &mut E, groups: impl IntoNames) -> std::result::Result<(), E::Error>
    where
        E: AccessControlEntity + ?Sized,
    {
        mutation::remove_groups(entity, groups)
    }
}
