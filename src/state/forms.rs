//! Shared state machine for the login and register forms.
//!
//! DESIGN
//! ======
//! The two auth forms differ only in their fields and copy, so one
//! parameterized machine drives both: `idle -> submitting -> succeeded |
//! failed`, with `submitting` gating resubmission (at most one in-flight
//! request per form instance).

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::api::AuthError;
use crate::net::types::Credentials;

/// Which auth form this machine drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Register,
}

/// Submission lifecycle of one form instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Relative strength signal for the registration password meter.
///
/// Visual feedback only; submission enforces nothing beyond non-empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Weak,
    Fair,
    Strong,
}

/// Classify a password for the strength meter.
pub fn password_strength(password: &str) -> PasswordStrength {
    let long = password.chars().count() >= 8;
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_alpha = password.chars().any(char::is_alphabetic);
    match (long, has_digit && has_alpha) {
        (true, true) => PasswordStrength::Strong,
        (true, false) => PasswordStrength::Fair,
        _ => PasswordStrength::Weak,
    }
}

/// Cheap shape check: `local@domain.tld`, no whitespace. Real validation
/// belongs to the server; this only catches obvious typos before a
/// network round trip.
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain
        .split_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// State of one mounted auth form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthForm {
    kind: FormKind,
    pub email: String,
    pub password: String,
    /// Agreement checkbox; only meaningful for registration.
    pub accepted_terms: bool,
    pub status: FormStatus,
    /// User-facing text for the last terminal state.
    pub message: Option<String>,
}

impl AuthForm {
    pub fn login() -> Self {
        Self::new(FormKind::Login)
    }

    pub fn register() -> Self {
        Self::new(FormKind::Register)
    }

    fn new(kind: FormKind) -> Self {
        Self {
            kind,
            email: String::new(),
            password: String::new(),
            accepted_terms: false,
            status: FormStatus::Idle,
            message: None,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    /// True while a request is in flight; inputs and the submit control
    /// are disabled for the duration.
    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Pre-network input check.
    ///
    /// # Errors
    ///
    /// `AuthError::Validation` with user-safe text for the first problem
    /// found.
    pub fn validate(&self) -> Result<(), AuthError> {
        if !looks_like_email(self.email.trim()) {
            return Err(AuthError::Validation(
                "Enter a valid email address.".to_owned(),
            ));
        }
        if self.password.is_empty() {
            return Err(AuthError::Validation("Enter a password.".to_owned()));
        }
        if self.kind == FormKind::Register && !self.accepted_terms {
            return Err(AuthError::Validation(
                "Please accept the terms to continue.".to_owned(),
            ));
        }
        Ok(())
    }

    /// Credentials to submit, with the email trimmed.
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
        }
    }

    /// Transition into `Submitting`. Returns `false` (and changes nothing)
    /// if a submission is already in flight, making double-clicks no-ops.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.status = FormStatus::Submitting;
        self.message = None;
        true
    }

    /// Terminal success. Prefers the server-provided message, falling back
    /// to a per-form default. The password is always cleared; the email is
    /// cleared only after registration (login navigates away anyway).
    pub fn succeed(&mut self, server_message: Option<String>) {
        self.status = FormStatus::Succeeded;
        self.message = Some(server_message.unwrap_or_else(|| self.default_success_message()));
        self.password.clear();
        if self.kind == FormKind::Register {
            self.email.clear();
            self.accepted_terms = false;
        }
    }

    /// Terminal failure. Entered values are retained so the user can
    /// correct and resubmit; the message is the classified error's
    /// user-safe text.
    pub fn fail(&mut self, error: &AuthError) {
        self.status = FormStatus::Failed;
        self.message = Some(error.to_string());
    }

    fn default_success_message(&self) -> String {
        match self.kind {
            FormKind::Login => "Welcome back!".to_owned(),
            FormKind::Register => {
                "Account created. Check your email to continue.".to_owned()
            }
        }
    }
}
