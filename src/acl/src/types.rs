//! Core access control types

use serde::{Deserialize, Serialize};

/// Opaque permission identifier, compared by equality only
pub type Scope = String;

/// Role identifier
pub type RoleName = String;

/// Group identifier
pub type GroupName = String;

/// Named bundle of scopes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Role name (e.g., "role_admin")
    pub name: RoleName,

    /// Scopes granted by this role, in declaration order
    #[serde(default)]
    pub scopes: Vec<Scope>,
}

impl Role {
    /// Create a new role
    pub fn new<S: Into<Scope>>(name: impl Into<RoleName>, scopes: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            scopes: scopes.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this role grants the given scope
    pub fn grants(&self, scope: &str) -> bool {
        self.scopes.iter().any(|s| s == scope)
    }
}

/// Named bundle of role references
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Group name (e.g., "admin")
    pub name: GroupName,

    /// Names of the roles this group carries, in declaration order
    #[serde(default)]
    pub roles: Vec<RoleName>,
}

impl Group {
    /// Create a new group
    pub fn new<S: Into<RoleName>>(name: impl Into<GroupName>, roles: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }
}

/// One name or a list of names, normalized to a list
///
/// Every operation accepting "a role" or "some roles" takes `impl IntoNames`,
/// so `"role_admin"`, `vec!["a", "b"]` and `&["a", "b"]` are all valid.
pub trait IntoNames {
    /// Normalize into an owned list of names
    fn into_names(self) -> Vec<String>;
}

impl IntoNames for &str {
    fn into_names(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoNames for String {
    fn into_names(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoNames for &String {
    fn into_names(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl IntoNames for Vec<String> {
    fn into_names(self) -> Vec<String> {
        self
    }
}

impl IntoNames for Vec<&str> {
    fn into_names(self) -> Vec<String> {
        self.into_iter().map(str::to_string).collect()
    }
}

impl IntoNames for &[String] {
    fn into_names(self) -> Vec<String> {
        self.to_vec()
    }
}

impl IntoNames for &[&str] {
    fn into_names(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl IntoNames for &Vec<String> {
    fn into_names(self) -> Vec<String> {
        self.clone()
    }
}

impl<const N: usize> IntoNames for [&str; N] {
    fn into_names(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl<const N: usize> IntoNames for &[&str; N] {
    fn into_names(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

/// A group given either by name or as an already-resolved value
#[derive(Debug, Clone, Copy)]
pub enum GroupRef<'a> {
    /// Resolve by name against the configuration
    Name(&'a str),
    /// Use this definition directly
    Group(&'a Group),
}

impl<'a> From<&'a str> for GroupRef<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<&'a String> for GroupRef<'a> {
    fn from(name: &'a String) -> Self {
        Self::Name(name.as_str())
    }
}

impl<'a> From<&'a Group> for GroupRef<'a> {
    fn from(group: &'a Group) -> Self {
        Self::Group(group)
    }
}
