use super::*;
use crate::net::api::AuthError;

fn filled_register() -> AuthForm {
    let mut form = AuthForm::register();
    form.email = "a@b.com".to_owned();
    form.password = "secret123".to_owned();
    form.accepted_terms = true;
    form
}

fn filled_login() -> AuthForm {
    let mut form = AuthForm::login();
    form.email = "a@b.com".to_owned();
    form.password = "secret123".to_owned();
    form
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_form_is_idle_and_empty() {
    let form = AuthForm::login();
    assert_eq!(form.status, FormStatus::Idle);
    assert!(form.email.is_empty());
    assert!(form.password.is_empty());
    assert!(form.message.is_none());
    assert!(!form.is_submitting());
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_rejects_malformed_emails() {
    for email in ["", "nope", "a@b", "@b.com", "a@", "a b@c.com", "a@.com", "a@b."] {
        let mut form = filled_login();
        form.email = email.to_owned();
        assert!(
            matches!(form.validate(), Err(AuthError::Validation(_))),
            "expected rejection for {email:?}"
        );
    }
}

#[test]
fn validate_accepts_plausible_emails() {
    for email in ["a@b.com", "first.last@school.edu", "  padded@mail.io  "] {
        let mut form = filled_login();
        form.email = email.to_owned();
        assert!(form.validate().is_ok(), "expected acceptance for {email:?}");
    }
}

#[test]
fn validate_rejects_empty_password() {
    let mut form = filled_login();
    form.password.clear();
    assert!(matches!(form.validate(), Err(AuthError::Validation(_))));
}

#[test]
fn register_requires_accepted_terms() {
    let mut form = filled_register();
    form.accepted_terms = false;
    assert!(matches!(form.validate(), Err(AuthError::Validation(_))));

    form.accepted_terms = true;
    assert!(form.validate().is_ok());
}

#[test]
fn login_does_not_require_terms() {
    let form = filled_login();
    assert!(!form.accepted_terms);
    assert!(form.validate().is_ok());
}

#[test]
fn credentials_trim_the_email() {
    let mut form = filled_login();
    form.email = "  a@b.com ".to_owned();
    assert_eq!(form.credentials().email, "a@b.com");
    assert_eq!(form.credentials().password, "secret123");
}

// =============================================================
// Single-flight gate
// =============================================================

#[test]
fn begin_submit_enters_submitting() {
    let mut form = filled_login();
    assert!(form.begin_submit());
    assert_eq!(form.status, FormStatus::Submitting);
    assert!(form.is_submitting());
}

#[test]
fn second_submit_while_in_flight_is_ignored() {
    let mut form = filled_login();
    assert!(form.begin_submit());
    assert!(!form.begin_submit(), "double-click must not resubmit");
    assert_eq!(form.status, FormStatus::Submitting);
}

#[test]
fn begin_submit_clears_previous_message() {
    let mut form = filled_login();
    form.begin_submit();
    form.fail(&AuthError::InvalidCredentials);
    assert!(form.message.is_some());

    assert!(form.begin_submit(), "terminal states allow resubmission");
    assert!(form.message.is_none());
}

// =============================================================
// Terminal transitions
// =============================================================

#[test]
fn register_success_shows_server_message_and_clears_fields() {
    let mut form = filled_register();
    form.begin_submit();
    form.succeed(Some("check your email".to_owned()));

    assert_eq!(form.status, FormStatus::Succeeded);
    assert_eq!(form.message.as_deref(), Some("check your email"));
    assert!(form.email.is_empty());
    assert!(form.password.is_empty());
    assert!(!form.accepted_terms);
}

#[test]
fn register_success_without_server_message_uses_default() {
    let mut form = filled_register();
    form.begin_submit();
    form.succeed(None);

    assert_eq!(form.status, FormStatus::Succeeded);
    let message = form.message.expect("default message");
    assert!(!message.is_empty());
}

#[test]
fn login_success_clears_password_but_keeps_email() {
    let mut form = filled_login();
    form.begin_submit();
    form.succeed(None);

    assert!(form.password.is_empty());
    assert_eq!(form.email, "a@b.com");
}

#[test]
fn failure_retains_entered_values() {
    let mut form = filled_register();
    form.begin_submit();
    form.fail(&AuthError::Server(500));

    assert_eq!(form.status, FormStatus::Failed);
    assert_eq!(form.email, "a@b.com");
    assert_eq!(form.password, "secret123");
    assert!(form.accepted_terms);
    assert!(form.message.is_some());
}

#[test]
fn failure_message_is_user_safe() {
    let mut form = filled_login();
    form.begin_submit();
    form.fail(&AuthError::InvalidCredentials);
    assert_eq!(form.message.as_deref(), Some("Invalid email or password."));
}

// =============================================================
// Password strength signal
// =============================================================

#[test]
fn password_strength_orders_sensibly() {
    assert_eq!(password_strength(""), PasswordStrength::Weak);
    assert_eq!(password_strength("abc"), PasswordStrength::Weak);
    assert_eq!(password_strength("abcdefgh"), PasswordStrength::Fair);
    assert_eq!(password_strength("12345678"), PasswordStrength::Fair);
    assert_eq!(password_strength("secret123"), PasswordStrength::Strong);
    assert!(PasswordStrength::Weak < PasswordStrength::Strong);
}
