//! # CretoAI Access Control
//!
//! In-memory role-based access control over a fixed configuration of
//! roles, groups and scopes.
//!
//! ## Features
//!
//! - **Lookups** of roles and groups by name (first declaration wins)
//! - **Scope aggregation** for roles, groups and entities, order-preserving
//! - **Predicates** with AND semantics (`has_scopes`, `has_role`, `has_group`)
//! - **Entity mutation** (assign / append / remove) through a small trait
//! - **Two surfaces**: a standalone [`AclService`] and the [`AclCapable`]
//!   trait for entities that carry their own ACL handle
//!
//! ## Example
//!
//! ```rust
//! use cretoai_acl::{AclConfig, AclService, AclSubject};
//!
//! let config = AclConfig::builder("user")
//!     .role("role_admin", ["read:all", "write:all", "delete:all"])
//!     .role("role_user", ["read:own", "write:own"])
//!     .group("admin", ["role_admin"])
//!     .group("user", ["role_user"])
//!     .build();
//!
//! let acl = AclService::new(config);
//! let alice = AclSubject::new("user:alice@example.com").with_roles(["role_user"]);
//!
//! assert!(acl.has_scope(&alice, "read:own")?);
//! assert!(!acl.has_scope(&alice, "delete:all")?);
//! assert!(!acl.has_role(&alice, "role_admin"));
//! assert_eq!(
//!     acl.scopes_of_group("admin")?,
//!     vec!["read:all", "write:all", "delete:all"]
//! );
//! # Ok::<(), cretoai_acl::AclError>(())
//! ```

pub mod types;
pub mod error;
pub mod config;
pub mod entity;
pub mod evaluator;
pub mod mutation;
pub mod service;
pub mod capability;

// Re-export commonly used types
pub use types::{Group, GroupName, GroupRef, IntoNames, Role, RoleName, Scope};
pub use error::{AclError, ConfigError, EntryKind, Result};
pub use config::{AclConfig, AclConfigBuilder};
pub use entity::{AccessControlEntity, AclSubject};
pub use evaluator::Evaluator;
pub use service::AclService;
pub use capability::{AclCapable, WithAcl};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
