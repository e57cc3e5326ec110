//! Error types for the access control evaluator

use std::convert::Infallible;
use std::fmt;
use thiserror::Error;

/// Kind of configuration entry a lookup was searching for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A role definition
    Role,
    /// A group definition
    Group,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Role => write!(f, "role"),
            Self::Group => write!(f, "group"),
        }
    }
}

/// Access control evaluation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AclError {
    /// A role or group name did not resolve against the configuration
    #[error("{kind} not found: {name}")]
    NotFound {
        /// What was being looked up
        kind: EntryKind,
        /// The requested name
        name: String,
    },
}

impl AclError {
    /// Role lookup failure
    pub fn role_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            kind: EntryKind::Role,
            name: name.into(),
        }
    }

    /// Group lookup failure
    pub fn group_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            kind: EntryKind::Group,
            name: name.into(),
        }
    }
}

impl From<Infallible> for AclError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Result type for access control operations
pub type Result<T> = std::result::Result<T, AclError>;

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error while reading a configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error
    #[error("Invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parse error
    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension is neither `.toml` nor `.json`
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    /// Presence checks failed
    #[error("Invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        assert_eq!(
            AclError::role_not_found("role_ghost").to_string(),
            "role not found: role_ghost"
        );
        assert_eq!(
            AclError::group_not_found("nobody").to_string(),
            "group not found: nobody"
        );
    }

    #[test]
    fn test_invalid_config_display_joins_problems() {
        let err = ConfigError::Invalid(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(err.to_string(), "Invalid configuration: a; b");
    }
}
