//! ACL capability for self-contained entities
//!
//! Instead of passing an entity to [`AclService`] on every call, a type can
//! carry the service itself and expose the same operations on `self`:
//!
//! - implement [`AccessControlEntity`] plus [`AclCapable::acl`] on your own
//!   type, or
//! - wrap an existing type in [`WithAcl`], which adds the role/group storage
//!   and the service handle and derefs to the wrapped value.
//!
//! ```rust
//! use cretoai_acl::{AclCapable, AclConfig, AclService, WithAcl};
//!
//! struct Account {
//!     email: String,
//! }
//!
//! let acl = AclService::new(
//!     AclConfig::builder("user")
//!         .role("role_user", ["read:own"])
//!         .group("user", ["role_user"])
//!         .build(),
//! );
//!
//! let mut account = WithAcl::new(Account { email: "alice@example.com".into() }, acl);
//! account.append_role("role_user")?;
//!
//! assert_eq!(account.email, "alice@example.com");
//! assert!(account.has_scope("read:own")?);
//! # Ok::<(), cretoai_acl::AclError>(())
//! ```

use crate::entity::AccessControlEntity;
use crate::error::Result;
use crate::mutation;
use crate::service::AclService;
use crate::types::{Group, GroupName, GroupRef, IntoNames, Role, RoleName, Scope};
use std::convert::Infallible;
use std::ops::{Deref, DerefMut};

/// An entity that evaluates its own permissions
///
/// Every method delegates to the shared evaluator with `self` as the entity.
pub trait AclCapable: AccessControlEntity {
    /// The service this entity evaluates against
    fn acl(&self) -> &AclService;

    /// Find a role by name
    fn resolve_role(&self, name: &str) -> Result<&Role> {
        self.acl().resolve_role(name)
    }

    /// Find a group by name
    fn resolve_group(&self, name: &str) -> Result<&Group> {
        self.acl().resolve_group(name)
    }

    /// Find the configured default group
    fn resolve_default_group(&self) -> Result<&Group> {
        self.acl().resolve_default_group()
    }

    /// Concatenated scopes of one or more roles
    fn scopes_of_roles(&self, roles: impl IntoNames) -> Result<Vec<Scope>> {
        self.acl().scopes_of_roles(roles)
    }

    /// Scopes granted by this entity's roles
    fn scopes(&self) -> Result<Vec<Scope>> {
        self.acl().scopes_of_user(self)
    }

    /// Roles referenced by a group
    fn roles_of_group<'g>(&self, group: impl Into<GroupRef<'g>>) -> Result<Vec<&Role>> {
        self.acl().roles_of_group(group)
    }

    /// Scopes of every role in a group
    fn scopes_of_group<'g>(&self, group: impl Into<GroupRef<'g>>) -> Result<Vec<Scope>> {
        self.acl().scopes_of_group(group)
    }

    /// Whether any of this entity's roles grants `scope`
    fn has_scope(&self, scope: &str) -> Result<bool> {
        self.acl().has_scope(self, scope)
    }

    /// Whether every scope is granted
    fn has_scopes<S: AsRef<str>>(&self, scopes: impl IntoIterator<Item = S>) -> Result<bool> {
        self.acl().has_scopes(self, scopes)
    }

    /// Whether every requested role is assigned
    fn has_role(&self, roles: impl IntoNames) -> bool {
        self.acl().has_role(self, roles)
    }

    /// Whether every requested group is assigned
    fn has_group(&self, groups: impl IntoNames) -> bool {
        self.acl().has_group(self, groups)
    }

    /// Replace this entity's roles
    fn assign_roles(&mut self, roles: impl IntoNames) -> std::result::Result<(), Self::Error> {
        mutation::assign_roles(self, roles)
    }

    /// Append one role
    fn append_role(&mut self, role: &str) -> std::result::Result<(), Self::Error> {
        mutation::append_role(self, role)
    }

    /// Remove roles
    fn remove_roles(&mut self, roles: impl IntoNames) -> std::result::Result<(), Self::Error> {
        mutation::remove_roles(self, roles)
    }

    /// Replace this entity's groups
    fn assign_groups(&mut self, groups: impl IntoNames) -> std::result::Result<(), Self::Error> {
        mutation::assign_groups(self, groups)
    }

    /// Append one group
    fn append_group(&mut self, group: &str) -> std::result::Result<(), Self::Error> {
        mutation::append_group(self, group)
    }

    /// Remove groups
    fn remove_groups(&mut self, groups: impl IntoNames) -> std::result::Result<(), Self::Error> {
        mutation::remove_groups(self, groups)
    }
}

/// Wraps a base entity type with role/group storage and an ACL handle
#[derive(Debug, Clone)]
pub struct WithAcl<T> {
    inner: T,
    roles: Option<Vec<RoleName>>,
    groups: Option<Vec<GroupName>>,
    acl: AclService,
}

impl<T> WithAcl<T> {
    /// Wrap `inner` with nothing assigned
    pub fn new(inner: T, acl: AclService) -> Self {
        Self {
            inner,
            roles: None,
            groups: None,
            acl,
        }
    }

    /// Start with the given roles
    pub fn with_roles<S: Into<RoleName>>(mut self, roles: impl IntoIterator<Item = S>) -> Self {
        self.roles = Some(roles.into_iter().map(Into::into).collect());
        self
    }

    /// Start with the given groups
    pub fn with_groups<S: Into<GroupName>>(mut self, groups: impl IntoIterator<Item = S>) -> Self {
        self.groups = Some(groups.into_iter().map(Into::into).collect());
        self
    }

    /// The wrapped value
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Unwrap, dropping the ACL state
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> Deref for WithAcl<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> DerefMut for WithAcl<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T> AccessControlEntity for WithAcl<T> {
    type Error = Infallible;

    fn roles(&self) -> Option<&[RoleName]> {
        self.roles.as_deref()
    }

    fn set_roles(&mut self, roles: Vec<RoleName>) -> std::result::Result<(), Infallible> {
        self.roles = Some(roles);
        Ok(())
    }

    fn groups(&self) -> Option<&[GroupName]> {
        self.groups.as_deref()
    }

    fn set_groups(&mut self, groups: Vec<GroupName>) -> std::result::Result<(), Infallible> {
        self.groups = Some(groups);
        Ok(())
    }
}

impl<T> AclCapable for WithAcl<T> {
    fn acl(&self) -> &AclService {
        &self.acl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AclConfig;

    #[derive(Debug, Clone, PartialEq)]
    struct Profile {
        display_name: String,
    }

    fn acl() -> AclService {
        AclService::new(
            AclConfig::builder("user")
                .role("role_admin", ["read:all", "write:all", "delete:all"])
                .role("role_user", ["read:own", "write:own"])
                .group("admin", ["role_admin"])
                .group("user", ["role_user"])
                .build(),
        )
    }

    #[test]
    fn test_wrapper_derefs_to_inner() {
        let mut wrapped = WithAcl::new(
            Profile {
                display_name: "Alice".to_string(),
            },
            acl(),
        );

        wrapped.display_name.push_str(" Smith");
        assert_eq!(wrapped.inner().display_name, "Alice Smith");
        assert_eq!(wrapped.into_inner().display_name, "Alice Smith");
    }

    #[test]
    fn test_wrapper_mutations_and_queries() {
        let mut wrapped = WithAcl::new((), acl()).with_groups(["user"]);

        assert!(wrapped.scopes().unwrap().is_empty());
        wrapped.assign_roles(["role_admin", "role_user"]).unwrap();
        assert_eq!(wrapped.scopes().unwrap().len(), 5);

        wrapped.remove_roles("role_admin").unwrap();
        assert!(!wrapped.has_scope("delete:all").unwrap());
        assert!(wrapped.has_scopes(["read:own", "write:own"]).unwrap());

        wrapped.append_group("admin").unwrap();
        assert!(wrapped.has_group(["user", "admin"]));
        wrapped.remove_groups("user").unwrap();
        assert!(!wrapped.has_group("user"));
        wrapped.assign_groups(Vec::<String>::new()).unwrap();
        assert!(wrapped.has_group(Vec::<String>::new()));
    }

    #[test]
    fn test_lookups_through_capability() {
        let wrapped = WithAcl::new((), acl());

        assert_eq!(wrapped.resolve_default_group().unwrap().name, "user");
        assert_eq!(wrapped.resolve_group("admin").unwrap().roles, vec!["role_admin"]);
        assert_eq!(wrapped.resolve_role("role_user").unwrap().scopes.len(), 2);
        assert_eq!(wrapped.roles_of_group("admin").unwrap()[0].name, "role_admin");
        assert_eq!(wrapped.scopes_of_group("user").unwrap(), vec!["read:own", "write:own"]);
        assert_eq!(wrapped.scopes_of_roles("role_user").unwrap().len(), 2);
    }
}
