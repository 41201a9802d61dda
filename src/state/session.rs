//! Session store: the single source of truth for "who is logged in".
//!
//! DESIGN
//! ======
//! One [`SessionStore`] is created in `App` and handed to components via
//! context. The state lives in a private `RwSignal`, so the reactive graph
//! is the observer set: every mutation replaces the whole snapshot in one
//! `set`, and readers are notified synchronously. Components get a
//! read-only view; only store methods mutate.
//!
//! The remote collaborator is passed in as `&impl AuthApi` on every
//! operation, which keeps the transition logic testable against a
//! scripted fake.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::{AuthApi, AuthError};
use crate::net::types::{Credentials, Profile, RegisterReply};

/// Snapshot of the client's current belief about authentication.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<Profile>,
    /// True during the startup restore and while a login/logout call is
    /// in flight; false the moment that operation resolves.
    pub loading: bool,
}

impl Default for SessionState {
    /// The session starts anonymous and loading; `restore` resolves it.
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl SessionState {
    /// Authenticated iff a user profile is present. Derived, so the
    /// invariant cannot drift out of sync with `user`.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Copyable handle to the one session store for the application.
#[derive(Clone, Copy)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
        }
    }

    /// Read-only reactive view for components.
    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    /// Current snapshot without subscribing to changes.
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    /// Single mutation point. Replaces the whole snapshot so readers never
    /// observe a half-updated session.
    fn set(&self, next: SessionState) {
        self.state.set(next);
    }

    /// Startup restore: validate any persisted session (the server-side
    /// cookie) and resolve to authenticated or anonymous.
    ///
    /// An absent or expired session is the normal anonymous outcome, not
    /// an error — nothing is reported. Always terminates with
    /// `loading = false`.
    pub async fn restore(&self, api: &impl AuthApi) {
        self.set(SessionState {
            user: None,
            loading: true,
        });
        let user = api.fetch_current_user().await;
        self.set(SessionState {
            user,
            loading: false,
        });
    }

    /// Exchange credentials for an authenticated session.
    ///
    /// # Errors
    ///
    /// Returns the classified [`AuthError`] for the caller to display.
    /// Failure restores whatever session existed before the attempt; only
    /// `loading` is toggled for the duration of the call.
    pub async fn login(
        &self,
        api: &impl AuthApi,
        credentials: &Credentials,
    ) -> Result<(), AuthError> {
        let prior = self.snapshot().user;
        self.set(SessionState {
            user: prior.clone(),
            loading: true,
        });
        match api.login(credentials).await {
            Ok(profile) => {
                self.set(SessionState {
                    user: Some(profile),
                    loading: false,
                });
                Ok(())
            }
            Err(err) => {
                self.set(SessionState {
                    user: prior,
                    loading: false,
                });
                Err(err)
            }
        }
    }

    /// Create an account. Registration never authenticates (the server may
    /// require email verification first), so the session is not touched.
    ///
    /// # Errors
    ///
    /// Returns the classified [`AuthError`] for the caller to display.
    // Takes `&self` like the other operations even though registration
    // must not read or write session state.
    #[allow(clippy::unused_self)]
    pub async fn register(
        &self,
        api: &impl AuthApi,
        credentials: &Credentials,
    ) -> Result<RegisterReply, AuthError> {
        api.register(credentials).await
    }

    /// Sign out. The remote invalidation is best-effort: local state is
    /// cleared to anonymous whether or not the server call succeeds, so the
    /// client can never get stuck authenticated behind a network failure.
    /// Calling this while already anonymous is a no-op.
    pub async fn logout(&self, api: &impl AuthApi) {
        if !self.snapshot().is_authenticated() {
            return;
        }
        self.set(SessionState {
            user: None,
            loading: true,
        });
        // Failure is already logged at the API layer; there is nothing to
        // recover locally.
        let _ = api.logout().await;
        self.set(SessionState {
            user: None,
            loading: false,
        });
    }
}
