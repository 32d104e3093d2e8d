//! Integration tests for role policy files
//!
//! Tests the lifecycle of a policy: write, load, validate and apply to a
//! checker.

use hbk_roles::{HbkError, InRoleMode, RoleChecker, RolePolicy, UserRecord};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_complete_policy_lifecycle() {
    let temp_dir = TempDir::new().unwrap();
    let policy_path = temp_dir.path().join("roles.yaml");

    // 1. Build a policy and save it
    let policy = RolePolicy::default()
        .with_super_role("root")
        .with_admin_roles(["root", "ops"])
        .with_in_role_mode(InRoleMode::AllOf);
    fs::write(&policy_path, serde_yaml::to_string(&policy).unwrap()).unwrap();

    // 2. Load it back
    let loaded = RolePolicy::load(&policy_path).unwrap();
    assert_eq!(loaded, policy);

    // 3. Apply to records
    let ops = RoleChecker::with_policy(UserRecord::new(["ops", "billing"]), loaded.clone());
    assert!(ops.is_admin());
    assert!(!ops.is_super());
    assert!(ops.is_in_role(["ops", "billing"]).unwrap());
    assert!(!ops.is_in_role(["ops", "legal"]).unwrap());

    let root = RoleChecker::with_policy(UserRecord::new(["root"]), loaded);
    assert!(root.is_super());
    assert!(root.query_super().unwrap());
    assert!(root.is_in_role(["ops", "legal"]).unwrap());
}

#[test]
fn test_broken_policy_files() {
    let temp_dir = TempDir::new().unwrap();

    let missing = temp_dir.path().join("missing.yaml");
    assert!(matches!(RolePolicy::load(&missing), Err(HbkError::FileNotFound(_))));

    let garbled = temp_dir.path().join("garbled.yaml");
    fs::write(&garbled, "apiVersion: [hbk\n").unwrap();
    assert!(matches!(RolePolicy::load(&garbled), Err(HbkError::ParseError(_))));

    let wrong_kind = temp_dir.path().join("wrong.yaml");
    fs::write(&wrong_kind, "apiVersion: hbk/v1\nkind: UserRecord\n").unwrap();
    assert!(matches!(RolePolicy::load(&wrong_kind), Err(HbkError::ValidationError(_))));
}

#[test]
fn test_default_policy_matches_builtin_checker() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("roles.yaml");
    fs::write(&path, "apiVersion: hbk/v1\nkind: RolePolicy\n").unwrap();

    let record = UserRecord::new(["admin"]);
    let from_file = RoleChecker::with_policy(&record, RolePolicy::load(&path).unwrap());
    let builtin = RoleChecker::new(&record);

    assert_eq!(from_file.is_admin(), builtin.is_admin());
    assert_eq!(from_file.is_super(), builtin.is_super());
    assert_eq!(
        from_file.is_in_role("admin").unwrap(),
        builtin.is_in_role("admin").unwrap()
    );
}
