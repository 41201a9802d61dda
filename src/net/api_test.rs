use super::*;

// =============================================================
// Status classification
// =============================================================

#[test]
fn login_rejection_statuses_are_invalid_credentials() {
    for status in [400, 401, 403] {
        assert_eq!(classify_login_status(status), AuthError::InvalidCredentials);
    }
}

#[test]
fn login_other_failures_are_server_errors() {
    assert_eq!(classify_login_status(500), AuthError::Server(500));
    assert_eq!(classify_login_status(404), AuthError::Server(404));
    assert_eq!(classify_login_status(429), AuthError::Server(429));
}

#[test]
fn register_input_statuses_are_validation_errors() {
    for status in [400, 409, 422] {
        assert!(matches!(
            classify_register_status(status),
            AuthError::Validation(_)
        ));
    }
}

#[test]
fn register_other_failures_are_server_errors() {
    assert_eq!(classify_register_status(500), AuthError::Server(500));
    assert_eq!(classify_register_status(503), AuthError::Server(503));
}

// =============================================================
// User-safe display strings
// =============================================================

#[test]
fn error_messages_never_leak_status_codes() {
    // Display strings go straight into the form; they must read as copy,
    // not diagnostics.
    let msg = AuthError::Server(502).to_string();
    assert!(!msg.contains("502"));

    let msg = AuthError::InvalidCredentials.to_string();
    assert!(msg.to_lowercase().contains("email"));
}

#[test]
fn validation_error_carries_its_own_text() {
    let err = AuthError::Validation("Enter a valid email address.".to_owned());
    assert_eq!(err.to_string(), "Enter a valid email address.");
}
