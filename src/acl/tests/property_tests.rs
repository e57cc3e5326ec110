//! Property-based tests for aggregation, predicates and mutation

use cretoai_acl::{AclConfig, AclService, AclSubject};
use proptest::prelude::*;

const ROLES: [&str; 4] = ["role_a", "role_b", "role_c", "role_d"];

/// Four roles with overlapping, partly duplicated scopes
fn service() -> AclService {
    AclService::new(
        AclConfig::builder("all")
            .role("role_a", ["read", "write"])
            .role("role_b", ["read", "read", "audit"])
            .role("role_c", Vec::<String>::new())
            .role("role_d", ["delete"])
            .group("all", ROLES)
            .build(),
    )
}

fn role_name() -> impl Strategy<Value = String> {
    prop::sample::select(ROLES.to_vec()).prop_map(str::to_string)
}

fn role_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(role_name(), 0..6)
}

fn scope_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(vec!["read", "write", "audit", "delete", "admin"]).prop_map(str::to_string),
        0..5,
    )
}

proptest! {
    #[test]
    fn test_scope_aggregation_concatenates(first in role_list(), second in role_list()) {
        let acl = service();

        let mut expected = acl.scopes_of_roles(first.clone()).unwrap();
        expected.extend(acl.scopes_of_roles(second.clone()).unwrap());

        let mut combined = first;
        combined.extend(second);

        prop_assert_eq!(acl.scopes_of_roles(combined).unwrap(), expected);
    }

    #[test]
    fn test_scopes_of_user_matches_scopes_of_roles(roles in role_list()) {
        let acl = service();
        let user = AclSubject::new("prop").with_roles(roles.clone());

        prop_assert_eq!(acl.scopes_of_user(&user).unwrap(), acl.scopes_of_roles(roles).unwrap());
    }

    #[test]
    fn test_has_scope_agrees_with_aggregation(roles in role_list(), scope in "(read|write|audit|delete|admin)") {
        let acl = service();
        let user = AclSubject::new("prop").with_roles(roles);

        let granted = acl.scopes_of_user(&user).unwrap().contains(&scope);
        prop_assert_eq!(acl.has_scope(&user, &scope).unwrap(), granted);
    }

    #[test]
    fn test_has_scopes_is_conjunction(roles in role_list(), scopes in scope_list()) {
        let acl = service();
        let user = AclSubject::new("prop").with_roles(roles);

        let expected = scopes.iter().all(|s| acl.has_scope(&user, s).unwrap());
        prop_assert_eq!(acl.has_scopes(&user, &scopes).unwrap(), expected);
    }

    #[test]
    fn test_has_role_is_membership(assigned in role_list(), required in role_list()) {
        let acl = service();
        let user = AclSubject::new("prop").with_roles(assigned.clone());

        let expected = required.iter().all(|r| assigned.contains(r));
        prop_assert_eq!(acl.has_role(&user, required), expected);
    }

    #[test]
    fn test_assign_replaces(initial in role_list(), assigned in role_list()) {
        let acl = service();
        let mut user = AclSubject::new("prop").with_roles(initial);

        acl.assign_roles(&mut user, assigned.clone()).unwrap();
        acl.assign_roles(&mut user, assigned.clone()).unwrap();

        prop_assert_eq!(user.roles, Some(assigned));
    }

    #[test]
    fn test_remove_is_set_difference(initial in role_list(), removed in role_list()) {
        let acl = service();
        let mut user = AclSubject::new("prop").with_roles(initial.clone());

        acl.remove_roles(&mut user, removed.clone()).unwrap();

        for role in &initial {
            prop_assert_eq!(acl.has_role(&user, role), !removed.contains(role));
        }

        let expected: Vec<String> = initial.into_iter().filter(|r| !removed.contains(r)).collect();
        prop_assert_eq!(user.roles, Some(expected));
    }

    #[test]
    fn test_append_adds_exactly_one(initial in role_list(), role in role_name()) {
        let acl = service();
        let mut user = AclSubject::new("prop").with_roles(initial.clone());

        acl.append_role(&mut user, &role).unwrap();

        let mut expected = initial;
        expected.push(role);
        prop_assert_eq!(user.roles, Some(expected));
    }
}

#[test]
fn test_group_scopes_follow_role_order() {
    let acl = service();

    assert_eq!(
        acl.scopes_of_group("all").unwrap(),
        vec!["read", "write", "read", "read", "audit", "delete"]
    );
}
