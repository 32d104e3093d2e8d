// Role Checker Contract Tests
//
// These tests pin down answers that callers already depend on.
// Authorization decisions downstream are made from these booleans.
//
// **Problem**: "fixing" a query silently changes who gets access
// **Solution**: Contract tests that fail loudly on any behavioural drift

use hbk_roles::{InRoleMode, RoleChecker, RoleNames, RolePolicy, UserRecord};

fn checker(groups: &[&str]) -> RoleChecker<UserRecord> {
    RoleChecker::new(UserRecord::new(groups.iter().copied()))
}

/// WHY: the super role is the escape hatch for operators
/// REASON: support staff rely on "super" passing every admin gate
/// BREAKS: operator access if super stops implying admin
#[test]
fn super_user_passes_admin_and_super_gates() {
    for groups in [&["super"][..], &["super", "viewer"][..], &["x", "super", "y"][..]] {
        let c = checker(groups);
        assert!(c.is_super());
        assert!(c.is_admin());
        assert!(c.has_group("super"));
        assert!(c.has_any_group(["super", "x"]));
    }
}

/// WHY: admin and super are distinct privileges
/// REASON: admin must not unlock super-only operations
/// BREAKS: privilege separation if admin implies super
#[test]
fn admin_is_not_super() {
    let c = checker(&["admin"]);
    assert!(c.is_admin());
    assert!(!c.is_super());
    assert!(!c.query_super().unwrap());
}

/// WHY: empty requirement lists are legal input
/// RULE: all-of over nothing is true, any-of over nothing is false
/// BREAKS: routes with empty requirement lists would flip open/closed
#[test]
fn empty_group_lists_are_vacuous() {
    for groups in [&[][..], &["a"][..], &["super"][..]] {
        let c = checker(groups);
        assert!(c.has_group(RoleNames::empty()));
        assert!(!c.has_any_group(RoleNames::empty()));
        assert!(!c.is_in_any_role(RoleNames::empty()).unwrap());
        assert!(c.is_in_role(RoleNames::empty()).unwrap());
    }
}

/// WHY: has_group is an all-of check, has_any_group an any-of check
/// BREAKS: every multi-group gate if the two are swapped
#[test]
fn group_predicates_are_all_of_and_any_of() {
    let both = checker(&["a", "b"]);
    let only_a = checker(&["a"]);
    let neither = checker(&["c"]);

    assert!(both.has_group(["a", "b"]));
    assert!(!only_a.has_group(["a", "b"]));
    assert!(!neither.has_group(["a", "b"]));

    assert!(both.has_any_group(["a", "b"]));
    assert!(only_a.has_any_group(["a", "b"]));
    assert!(!neither.has_any_group(["a", "b"]));
}

/// WHY: a super user is in every role for role queries
/// RULE: is_in_any_role([x, y]) iff groups hold x, y or super
#[test]
fn is_in_any_role_honours_super() {
    assert!(checker(&["x"]).is_in_any_role(["x", "y"]).unwrap());
    assert!(checker(&["y"]).is_in_any_role(["x", "y"]).unwrap());
    assert!(checker(&["super"]).is_in_any_role(["x", "y"]).unwrap());
    assert!(!checker(&["z"]).is_in_any_role(["x", "y"]).unwrap());
}

/// WHY: is_in_role has always answered "is super" for non-empty lists
/// REASON: existing callers were written against that answer
/// BREAKS: access decisions if the listed names start being checked
/// SACRIFICES: if this fails, you changed the default mode; use
///             `inRoleMode: allOf` in a policy instead
#[test]
fn is_in_role_literal_mode_answers_is_super() {
    let admin = checker(&["admin"]);
    assert!(!admin.is_in_role("admin").unwrap());
    assert!(!admin.is_in_role(["admin"]).unwrap());

    let editor_super = checker(&["editor", "super"]);
    assert!(editor_super.is_in_role(["editor"]).unwrap());
    assert!(editor_super.is_in_role(["not-held"]).unwrap());
}

/// WHY: all-of mode is the opt-in corrected check
/// RULE: every role held, or super
#[test]
fn is_in_role_all_of_mode_checks_every_name() {
    let policy = RolePolicy::default().with_in_role_mode(InRoleMode::AllOf);
    let c = |groups: &[&str]| {
        RoleChecker::with_policy(UserRecord::new(groups.iter().copied()), policy.clone())
    };

    assert!(c(&["admin"]).is_in_role("admin").unwrap());
    assert!(c(&["a", "b"]).is_in_role(["a", "b"]).unwrap());
    assert!(!c(&["a"]).is_in_role(["a", "b"]).unwrap());
    assert!(c(&["super"]).is_in_role(["a", "b"]).unwrap());
}

/// WHY: sync predicates and query forms must never disagree
/// BREAKS: callers that mix both forms for the same decision
#[test]
fn sync_and_query_forms_agree() {
    let samples: [&[&str]; 6] = [&[], &["admin"], &["super"], &["viewer"], &["admin", "super"], &["ops"]];
    for groups in samples {
        let c = checker(groups);
        assert_eq!(c.is_admin(), c.query_admin().unwrap(), "groups: {:?}", groups);
        assert_eq!(c.is_super(), c.query_super().unwrap(), "groups: {:?}", groups);
    }
}

/// WHY: renaming the super role must not split the two admin answers
/// RULE: the super role counts as admin in both forms, under any policy
/// BREAKS: callers that mix both forms once a policy renames "super"
#[test]
fn sync_and_query_forms_agree_under_renamed_super() {
    let validated = RolePolicy::default()
        .with_super_role("root")
        .with_admin_roles(["root", "ops"]);
    assert!(validated.validate().is_ok());

    // Built in code and never validated: adminRoles leaves out the super role
    let unvalidated = RolePolicy::default()
        .with_super_role("root")
        .with_admin_roles(["ops"]);

    let samples: [&[&str]; 6] = [&[], &["root"], &["ops"], &["super"], &["admin"], &["root", "viewer"]];
    for policy in [validated, unvalidated] {
        for groups in samples {
            let c = RoleChecker::with_policy(UserRecord::new(groups.iter().copied()), policy.clone());
            assert_eq!(c.is_admin(), c.query_admin().unwrap(), "groups: {:?}", groups);
            assert_eq!(c.is_super(), c.query_super().unwrap(), "groups: {:?}", groups);
        }
    }
}

/// WHY: allRoles belongs to the user directory, not to this crate
/// RULE: passed through unchanged, including order, duplicates and absence
#[test]
fn get_roles_is_pass_through() {
    let with_roles = UserRecord::new(["editor", "super"]).with_all_roles(["viewer", "editor", "viewer"]);
    assert_eq!(
        RoleChecker::new(&with_roles).get_roles().unwrap(),
        Some(vec!["viewer".to_string(), "editor".to_string(), "viewer".to_string()])
    );

    let without = UserRecord::new(["editor"]);
    assert_eq!(RoleChecker::new(&without).get_roles().unwrap(), None);
}
