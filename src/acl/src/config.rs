//! Access control configuration loading and validation
//!
//! The configuration is a fixed structure of roles, groups and a default
//! group. It is supplied once to [`crate::AclService`] and never mutated
//! afterwards. Loading helpers accept TOML or JSON:
//!
//! ```toml
//! default_group = "user"
//!
//! [[roles]]
//! name = "role_user"
//! scopes = ["read:own", "write:own"]
//!
//! [[groups]]
//! name = "user"
//! roles = ["role_user"]
//! ```

use crate::error::ConfigError;
use crate::types::{Group, GroupName, Role, Scope};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

/// Complete access control configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclConfig {
    /// Group used as the baseline for entities without explicit groups
    pub default_group: GroupName,

    /// Group definitions, in declaration order
    #[serde(default)]
    pub groups: Vec<Group>,

    /// Role definitions, in declaration order
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl AclConfig {
    /// Create a configuration from its parts
    pub fn new(default_group: impl Into<GroupName>, groups: Vec<Group>, roles: Vec<Role>) -> Self {
        Self {
            default_group: default_group.into(),
            groups,
            roles,
        }
    }

    /// Start building a configuration programmatically
    pub fn builder(default_group: impl Into<GroupName>) -> AclConfigBuilder {
        AclConfigBuilder {
            config: Self::new(default_group, Vec::new(), Vec::new()),
        }
    }

    /// Parse a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Parse a JSON document
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Load configuration from a `.toml` or `.json` file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&contents)?,
            Some("json") => Self::from_json_str(&contents)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };

        debug!(
            "Loaded ACL configuration from {}: {} roles, {} groups",
            path.display(),
            config.roles.len(),
            config.groups.len()
        );

        Ok(config)
    }

    /// Basic presence checks
    ///
    /// Reports empty names, duplicate names, a default group that is not
    /// defined and group role references that do not resolve. Evaluation
    /// never calls this; lookups fail lazily on their own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();

        let mut role_names = HashSet::new();
        for role in &self.roles {
            if role.name.is_empty() {
                problems.push("role name cannot be empty".to_string());
            } else if !role_names.insert(role.name.as_str()) {
                problems.push(format!("duplicate role '{}'", role.name));
            }
        }

        let mut group_names = HashSet::new();
        for group in &self.groups {
            if group.name.is_empty() {
                problems.push("group name cannot be empty".to_string());
            } else if !group_names.insert(group.name.as_str()) {
                problems.push(format!("duplicate group '{}'", group.name));
            }

            for role in &group.roles {
                if !role_names.contains(role.as_str()) {
                    problems.push(format!(
                        "group '{}' references undefined role '{}'",
                        group.name, role
                    ));
                }
            }
        }

        if !group_names.contains(self.default_group.as_str()) {
            problems.push(format!(
                "default group '{}' is not defined",
                self.default_group
            ));
        }

        if problems.is_empty() {
            return Ok(());
        }

        for problem in &problems {
            warn!("ACL configuration problem: {}", problem);
        }

        Err(ConfigError::Invalid(problems))
    }
}

/// Builder for [`AclConfig`]
#[derive(Debug, Clone)]
pub struct AclConfigBuilder {
    config: AclConfig,
}

impl AclConfigBuilder {
    /// Add a role definition
    pub fn role<S: Into<Scope>>(mut self, name: &str, scopes: impl IntoIterator<Item = S>) -> Self {
        self.config.roles.push(Role::new(name, scopes));
        self
    }

    /// Add a group definition
    pub fn group<S: Into<String>>(mut self, name: &str, roles: impl IntoIterator<Item = S>) -> Self {
        self.config.groups.push(Group::new(name, roles));
        self
    }

    /// Finish building
    pub fn build(self) -> AclConfig {
        self.config
    }
}
