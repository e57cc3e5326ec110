//! Access-control entity contract
//!
//! The evaluator never owns entities. It reads and replaces the two
//! name lists through [`AccessControlEntity`] and leaves persistence to
//! whoever owns the entity. A setter that fails (for instance a store
//! write) reports through [`AccessControlEntity::Error`], and the mutation
//! operations hand that error back to the caller untouched.

use crate::types::{GroupName, RoleName};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

/// Anything holding assigned role and group names
///
/// `None` means nothing has been assigned yet. The evaluator treats it
/// exactly like an empty list.
pub trait AccessControlEntity {
    /// Error raised by the setters; `Infallible` for in-memory entities
    type Error;

    /// Currently assigned role names
    fn roles(&self) -> Option<&[RoleName]>;

    /// Replace the assigned role names
    fn set_roles(&mut self, roles: Vec<RoleName>) -> Result<(), Self::Error>;

    /// Currently assigned group names
    fn groups(&self) -> Option<&[GroupName]>;

    /// Replace the assigned group names
    fn set_groups(&mut self, groups: Vec<GroupName>) -> Result<(), Self::Error>;
}

impl<E: AccessControlEntity + ?Sized> AccessControlEntity for Box<E> {
    type Error = E::Error;

    fn roles(&self) -> Option<&[RoleName]> {
        (**self).roles()
    }

    fn set_roles(&mut self, roles: Vec<RoleName>) -> Result<(), Self::Error> {
        (**self).set_roles(roles)
    }

    fn groups(&self) -> Option<&[GroupName]> {
        (**self).groups()
    }

    fn set_groups(&mut self, groups: Vec<GroupName>) -> Result<(), Self::Error> {
        (**self).set_groups(groups)
    }
}

/// Plain in-memory entity (user, service account, agent)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclSubject {
    /// Subject identifier (e.g., "user:alice@example.com")
    pub id: String,

    /// Assigned role names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<RoleName>>,

    /// Assigned group names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupName>>,
}

impl AclSubject {
    /// Create a subject with nothing assigned
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            roles: None,
            groups: None,
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
}

impl AccessControlEntity for AclSubject {
    type Error = Infallible;

    fn roles(&self) -> Option<&[RoleName]> {
        self.roles.as_deref()
    }

    fn set_roles(&mut self, roles: Vec<RoleName>) -> Result<(), Infallible> {
        self.roles = Some(roles);
        Ok(())
    }

    fn groups(&self) -> Option<&[GroupName]> {
        self.groups.as_deref()
    }

    fn set_groups(&mut self, groups: Vec<GroupName>) -> Result<(), Infallible> {
        self.groups = Some(groups);
        Ok(())
    }
}
