//! Action authorization tests.
//!
//! ## Matching Model
//! The resource and then each ancestor are checked in turn, most specific
//! first. The first path with a policy entry decides; shorter ancestors are
//! never consulted after a match.
//!
//! For `/a/b/c` the candidates are `/a/b/c`, `/a/b/`, `/a/`, `/`.

use tollgate_test::component::Privilege;
use tollgate_test::component::error::{CoreError, ServiceError};
use tollgate_test::component::{Action, classify_verb};
use tollgate_test::fixtures::principal_with;

use super::helpers::*;

// ============================================================================
// Ancestor walk
// ============================================================================

/// ## Summary
/// Each form of ancestor grants a create on `/a/b/c`.
#[test_log::test]
fn ancestor_grants_authorize() {
    for path in ["/a/b/c", "/a/b/", "/a/", "/"] {
        let principal = principal_with("bob", &[(path, Privilege::CREATE)]);
        assert!(
            principal.authorize_action(&post("/a/b/c")).is_ok(),
            "grant on {path} should authorize POST /a/b/c"
        );
    }
}

/// ## Summary
/// Grants on another branch, or on the trailing-separator form of the
/// resource itself, do not match.
#[test_log::test]
fn non_ancestors_do_not_match() {
    for path in ["/c/", "/a/b/c/", "/a/b/c/d", "/a/bb/"] {
        let principal = principal_with("bob", &[(path, Privilege::CREATE)]);
        let err = principal
            .authorize_action(&post("/a/b/c"))
            .expect_err("should be denied");
        assert!(err.is_denied(), "grant on {path} matched unexpectedly");
    }
}

/// ## Summary
/// A more specific miss is authoritative even when the root grants `ALL`.
#[test_log::test]
fn first_match_decides() {
    let principal = principal_with(
        "bob",
        &[("/a/b/c", Privilege::NONE), ("/", Privilege::ALL)],
    );
    assert!(
        principal
            .authorize_action(&post("/a/b/c"))
            .unwrap_err()
            .is_denied()
    );
    // Siblings fall through to the root grant.
    assert!(principal.authorize_action(&post("/a/b/d")).is_ok());

    let principal = principal_with(
        "bob",
        &[("/a/b/", Privilege::DELETE), ("/a/", Privilege::CREATE)],
    );
    assert!(
        principal
            .authorize_action(&post("/a/b/c"))
            .unwrap_err()
            .is_denied()
    );
}

/// ## Summary
/// The required privilege follows the verb, case-insensitively.
#[test_log::test]
fn verb_selects_required_privilege() {
    let principal = principal_with("bob", &[("/", Privilege::READ)]);
    for method in ["GET", "head", "Options"] {
        assert!(principal.authorize_action(&Action::new(method, "/x")).is_ok());
    }
    for method in ["POST", "patch", "Delete"] {
        assert!(
            principal
                .authorize_action(&Action::new(method, "/x"))
                .unwrap_err()
                .is_denied()
        );
    }

    for method in ["GET", "get", "HEAD", "OPTIONS"] {
        assert_eq!(classify_verb(method), Ok(Privilege::READ));
    }
    assert_eq!(classify_verb("post"), Ok(Privilege::CREATE));
    assert_eq!(classify_verb("PATCH"), Ok(Privilege::UPDATE));
    assert_eq!(classify_verb("delete"), Ok(Privilege::DELETE));
    assert_eq!(
        classify_verb("connect"),
        Err(CoreError::UnknownVerb("CONNECT".to_string()))
    );
}

// ============================================================================
// Malformed input
// ============================================================================

/// ## Summary
/// A relative resource is an input error, never a silent denial.
#[test_log::test]
fn relative_resource_is_rejected() {
    let principal = principal_with("bob", &[("/", Privilege::ALL)]);
    let err = principal
        .authorize_action(&get("relative/path"))
        .unwrap_err();
    assert_eq!(
        err,
        ServiceError::InvalidResource("relative/path".to_string())
    );
    assert!(err.is_input_error());
    assert!(!err.is_denied());
}

/// ## Summary
/// Unknown verbs fail before any policy is consulted.
#[test_log::test]
fn unknown_verb_is_rejected() {
    let principal = principal_with("bob", &[("/", Privilege::ALL)]);
    let err = principal
        .authorize_action(&Action::new("PUT", "/a"))
        .unwrap_err();
    assert!(err.is_input_error());
}

// ============================================================================
// Fixture policy
// ============================================================================

/// ## Summary
/// The configured policy behaves the same as a hand-built principal.
#[test_log::test]
fn fixture_policy() {
    let authz = fixture_authorizer();

    assert!(
        authz
            .authorize_action("alice", &get("/kapacitor/v1/tasks/cpu"))
            .is_ok()
    );
    assert!(
        authz
            .authorize_action("alice", &post("/kapacitor/v1/tasks/"))
            .is_ok()
    );
    assert!(
        authz
            .authorize_action("alice", &Action::new("DELETE", "/kapacitor/v1/tasks/cpu"))
            .unwrap_err()
            .is_denied()
    );
    assert!(
        authz
            .authorize_action("alice", &get("/kapacitor/v1/tasks/secret"))
            .unwrap_err()
            .is_denied()
    );
    assert!(
        authz
            .authorize_action("alice", &Action::new("DELETE", "/kapacitor/v1/alerts/a1"))
            .is_ok()
    );
    assert!(
        authz
            .authorize_action("alice", &get("/kapacitor/v1/ping"))
            .unwrap_err()
            .is_denied()
    );

    assert!(
        authz
            .authorize_action("root", &Action::new("DELETE", "/anything"))
            .is_ok()
    );
}
