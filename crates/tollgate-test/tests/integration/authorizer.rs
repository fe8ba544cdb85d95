//! Authorizer and credential backend tests.
//!
//! The authorizer never authorizes without a principal: lookup and
//! authentication failures surface as backend errors, distinct from both
//! denials and malformed requests.

use tollgate_test::component::Action;
use tollgate_test::component::auth::password::hash_password;
use tollgate_test::component::auth::{Authorizer, CredentialBackend, StaticBackend};
use tollgate_test::component::config::Settings;
use tollgate_test::component::error::ServiceError;
use tollgate_test::fixtures::POLICY_TOML;

use super::helpers::{fixture_authorizer, get};

fn with_password(toml: &str, user: &str, password: &str) -> String {
    let hash = hash_password(password).expect("Failed to hash password");
    toml.replacen(
        &format!("name = \"{user}\"\n"),
        &format!("name = \"{user}\"\npassword_hash = \"{hash}\"\n"),
        1,
    )
}

#[test_log::test]
fn error_classes_are_distinct() {
    let authz = fixture_authorizer();

    let denied = authz
        .authorize_action("alice", &get("/elsewhere"))
        .unwrap_err();
    assert!(denied.is_denied());
    assert!(!denied.is_input_error());

    let malformed = authz
        .authorize_action("alice", &Action::new("LINK", "/kapacitor/v1/tasks/"))
        .unwrap_err();
    assert!(malformed.is_input_error());
    assert!(!malformed.is_denied());

    let missing = authz
        .authorize_action("mallory", &get("/kapacitor/v1/tasks/"))
        .unwrap_err();
    assert!(matches!(missing, ServiceError::NotFound(_)));
    assert!(!missing.is_denied());
    assert!(!missing.is_input_error());
}

#[test_log::test]
fn authenticate_then_authorize() -> anyhow::Result<()> {
    let toml = with_password(POLICY_TOML, "alice", "correct horse");
    let settings = Settings::from_toml(&toml)?;
    let authz = Authorizer::new(StaticBackend::from_config(&settings.auth)?);

    let principal =
        authz.authenticate_action("alice", "correct horse", &get("/kapacitor/v1/tasks/x"))?;
    assert_eq!(principal.name(), "alice");

    assert_eq!(
        authz.authenticate_action("alice", "battery staple", &get("/kapacitor/v1/tasks/x")),
        Err(ServiceError::NotAuthenticated)
    );
    assert!(
        authz
            .authenticate_action("alice", "correct horse", &get("/kapacitor/v1/tasks/secret"))
            .unwrap_err()
            .is_denied()
    );

    // root has no password configured and cannot log in.
    assert_eq!(
        authz.authenticate_action("root", "", &get("/")),
        Err(ServiceError::NotAuthenticated)
    );
    Ok(())
}

#[test_log::test]
fn principals_are_snapshots() -> anyhow::Result<()> {
    let settings = Settings::from_toml(POLICY_TOML)?;
    let backend = StaticBackend::from_config(&settings.auth)?;

    let first = backend.lookup("alice")?;
    let second = backend.lookup("alice")?;
    assert_eq!(first, second);
    assert_eq!(first.action_privileges().len(), 3);
    assert_eq!(first.database_privileges().len(), 2);
    Ok(())
}

#[test_log::test]
fn invalid_policies_are_rejected() {
    let relative = POLICY_TOML.replace(
        "path = \"/kapacitor/v1/alerts/\"",
        "path = \"kapacitor/v1/alerts/\"",
    );
    let settings = Settings::from_toml(&relative).expect("still valid TOML");
    assert!(matches!(
        StaticBackend::from_config(&settings.auth),
        Err(ServiceError::InvalidConfiguration(_))
    ));

    let unknown_privilege = POLICY_TOML.replace("\"READ|CREATE\"", "\"READ|EXECUTE\"");
    assert!(Settings::from_toml(&unknown_privilege).is_err());
}
