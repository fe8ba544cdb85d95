//! Database authorization tests.
//!
//! Database grants match only on an exact level or the `All` sentinel; no
//! level implies another.

use tollgate_test::component::DatabasePrivilege;
use tollgate_test::component::auth::Principal;
use tollgate_test::fixtures::database_user;

use super::helpers::fixture_authorizer;

#[test_log::test]
fn exact_level_or_sentinel() {
    let principal = database_user(
        "carol",
        &[("mydb", DatabasePrivilege::Write), ("metrics", DatabasePrivilege::All)],
    );

    assert!(principal.authorize_database(DatabasePrivilege::Write, "mydb"));
    assert!(!principal.authorize_database(DatabasePrivilege::Read, "mydb"));
    assert!(!principal.authorize_database(DatabasePrivilege::All, "mydb"));
    assert!(!principal.authorize_database(DatabasePrivilege::Write, "unknown"));

    assert!(principal.authorize_database(DatabasePrivilege::Read, "metrics"));
    assert!(principal.authorize_database(DatabasePrivilege::Write, "metrics"));
}

#[test_log::test]
fn admin_and_empty_principals() {
    let admin = Principal::admin_user();
    let nobody = database_user("nobody", &[]);

    for privilege in [
        DatabasePrivilege::NoPrivileges,
        DatabasePrivilege::Read,
        DatabasePrivilege::Write,
        DatabasePrivilege::All,
    ] {
        assert!(admin.authorize_database(privilege, "any"));
        assert!(!nobody.authorize_database(privilege, "any"));
    }
}

#[test_log::test]
fn fixture_policy() {
    let authz = fixture_authorizer();

    assert_eq!(
        authz.authorize_database("alice", DatabasePrivilege::Write, "telegraf"),
        Ok(true)
    );
    assert_eq!(
        authz.authorize_database("alice", DatabasePrivilege::Read, "telegraf"),
        Ok(false)
    );
    assert_eq!(
        authz.authorize_database("alice", DatabasePrivilege::Read, "_internal"),
        Ok(true)
    );
    assert_eq!(
        authz.authorize_database("root", DatabasePrivilege::All, "telegraf"),
        Ok(true)
    );

    let err = authz
        .require_database("alice", DatabasePrivilege::Read, "telegraf")
        .unwrap_err();
    assert!(err.is_denied());
    assert!(err.to_string().contains("telegraf"));
}
