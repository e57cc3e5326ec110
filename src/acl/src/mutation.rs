//! Read-modify-write operations on an entity's role and group lists
//!
//! Each operation reads the current list (absent counts as empty),
//! computes the new list and hands it to the entity's setter. Nothing is
//! retained between calls. A setter failure is returned to the caller as
//! the entity's own error, unmodified. Two callers mutating the same
//! externally stored entity concurrently can lose an update; serializing
//! them is the store's job.

use crate::entity::AccessControlEntity;
use crate::types::IntoNames;
use tracing::debug;

/// Replace the entity's roles
pub fn assign_roles<E>(entity: &mut E, roles: impl IntoNames) -> Result<(), E::Error>
where
    E: AccessControlEntity + ?Sized,
{
    let roles = roles.into_names();
    debug!("Assigning roles: {:?}", roles);
    entity.set_roles(roles)
}

/// Append one role, duplicates allowed
pub fn append_role<E>(entity: &mut E, role: &str) -> Result<(), E::Error>
where
    E: AccessControlEntity + ?Sized,
{
    let roles = appended(entity.roles(), role);
    debug!("Appending role {} -> {:?}", role, roles);
    entity.set_roles(roles)
}

/// Remove every occurrence of the given roles
pub fn remove_roles<E>(entity: &mut E, roles: impl IntoNames) -> Result<(), E::Error>
where
    E: AccessControlEntity + ?Sized,
{
    let removed = roles.into_names();
    let roles = without(entity.roles(), &removed);
    debug!("Removing roles {:?} -> {:?}", removed, roles);
    entity.set_roles(roles)
}

/// Replace the entity's groups
pub fn assign_groups<E>(entity: &mut E, groups: impl IntoNames) -> Result<(), E::Error>
where
    E: AccessControlEntity + ?Sized,
{
    let groups = groups.into_names();
    debug!("Assigning groups: {:?}", groups);
    entity.set_groups(groups)
}

/// Append one group, duplicates allowed
pub fn append_group<E>(entity: &mut E, group: &str) -> Result<(), E::Error>
where
    E: AccessControlEntity + ?Sized,
{
    let groups = appended(entity.groups(), group);
    debug!("Appending group {} -> {:?}", group, groups);
    entity.set_groups(groups)
}

/// Remove every occurrence of the given groups
pub fn remove_groups<E>(entity: &mut E, groups: impl IntoNames) -> Result<(), E::Error>
where
    E: AccessControlEntity + ?Sized,
{
    let removed = groups.into_names();
    let groups = without(entity.groups(), &removed);
    debug!("Removing groups {:?} -> {:?}", removed, groups);
    entity.set_groups(groups)
}

fn appended(current: Option<&[String]>, name: &str) -> Vec<String> {
    let mut names = current.map(<[String]>::to_vec).unwrap_or_default();
    names.push(name.to_string());
    names
}

fn without(current: Option<&[String]>, removed: &[String]) -> Vec<String> {
    current
        .unwrap_or_default()
        .iter()
        .filter(|name| !removed.contains(*name))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::AclSubject;

    /// Entity whose backing store rejects every write
    #[derive(Debug, Default)]
    struct ReadOnlyRecord {
        roles: Option<Vec<String>>,
    }

    #[derive(Debug, PartialEq)]
    struct StoreRejected(&'static str);

    impl AccessControlEntity for ReadOnlyRecord {
        type Error = StoreRejected;

        fn roles(&self) -> Option<&[String]> {
            self.roles.as_deref()
        }

        fn set_roles(&mut self, _roles: Vec<String>) -> Result<(), StoreRejected> {
            Err(StoreRejected("roles"))
        }

        fn groups(&self) -> Option<&[String]> {
            None
        }

        fn set_groups(&mut self, _groups: Vec<String>) -> Result<(), StoreRejected> {
            Err(StoreRejected("groups"))
        }
    }

    #[test]
    fn test_assign_overwrites() {
        let mut subject = AclSubject::new("alice").with_roles(["a", "b"]);

        assign_roles(&mut subject, "c").unwrap();
        assert_eq!(subject.roles, Some(vec!["c".to_string()]));

        assign_groups(&mut subject, ["x", "y"]).unwrap();
        assert_eq!(subject.groups, Some(vec!["x".to_string(), "y".to_string()]));
    }

    #[test]
    fn test_append_to_absent_list() {
        let mut subject = AclSubject::new("alice");

        append_role(&mut subject, "a").unwrap();
        append_group(&mut subject, "g").unwrap();

        assert_eq!(subject.roles, Some(vec!["a".to_string()]));
        assert_eq!(subject.groups, Some(vec!["g".to_string()]));
    }

    #[test]
    fn test_append_keeps_duplicates() {
        let mut subject = AclSubject::new("alice").with_roles(["a"]);

        append_role(&mut subject, "a").unwrap();
        assert_eq!(subject.roles, Some(vec!["a".to_string(), "a".to_string()]));
    }

    #[test]
    fn test_remove_preserves_order_of_remainder() {
        let mut subject = AclSubject::new("alice").with_roles(["a", "b", "c", "b", "d"]);

        remove_roles(&mut subject, ["b", "missing"]).unwrap();
        assert_eq!(
            subject.roles,
            Some(vec!["a".to_string(), "c".to_string(), "d".to_string()])
        );
    }

    #[test]
    fn test_remove_from_absent_list_writes_empty() {
        let mut subject = AclSubject::new("alice");

        remove_groups(&mut subject, "g").unwrap();
        assert_eq!(subject.groups, Some(Vec::new()));
    }

    #[test]
    fn test_setter_failure_reaches_caller() {
        let mut record = ReadOnlyRecord {
            roles: Some(vec!["a".to_string()]),
        };

        assert_eq!(append_role(&mut record, "b"), Err(StoreRejected("roles")));
        assert_eq!(remove_roles(&mut record, "a"), Err(StoreRejected("roles")));
        assert_eq!(assign_groups(&mut record, "g"), Err(StoreRejected("groups")));
        assert_eq!(record.roles, Some(vec!["a".to_string()]));
    }
}
