//! Auth API client for the remote HTTP endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/`Err` since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is classified into [`AuthError`] before it leaves this
//! module. Callers (the session store and the auth forms) only ever see
//! the taxonomy, never a raw transport error, and the `Display` strings
//! are safe to put in front of the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Credentials, Profile, RegisterReply};

/// Classified authentication failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Input rejected before or by the server (duplicate email, weak
    /// password, missing agreement).
    #[error("{0}")]
    Validation(String),
    /// Login rejected by the server.
    #[error("Invalid email or password.")]
    InvalidCredentials,
    /// The request never completed.
    #[error("Could not reach the server. Check your connection and try again.")]
    Network,
    /// The request completed with a failure status.
    #[error("Something went wrong on our end. Please try again.")]
    Server(u16),
}

/// Map a non-2xx login status onto the error taxonomy.
///
/// The server answers 400/401/403 for bad credentials; anything else that
/// is not a success is a server-side failure.
pub fn classify_login_status(status: u16) -> AuthError {
    match status {
        400 | 401 | 403 => AuthError::InvalidCredentials,
        s => AuthError::Server(s),
    }
}

/// Map a non-2xx registration status onto the error taxonomy.
///
/// 400/409/422 are input problems (malformed payload, duplicate email,
/// weak password); the rest are server-side failures.
pub fn classify_register_status(status: u16) -> AuthError {
    match status {
        400 | 409 | 422 => {
            AuthError::Validation("That email or password cannot be used.".to_owned())
        }
        s => AuthError::Server(s),
    }
}

/// The remote auth collaborator, seen from the client.
///
/// The session store takes this as an explicit parameter so tests can
/// substitute a scripted fake for the HTTP implementation.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Fetch the currently authenticated user, `None` when anonymous.
    async fn fetch_current_user(&self) -> Option<Profile>;
    /// Exchange credentials for an authenticated profile.
    async fn login(&self, credentials: &Credentials) -> Result<Profile, AuthError>;
    /// Create an account; does not authenticate.
    async fn register(&self, credentials: &Credentials) -> Result<RegisterReply, AuthError>;
    /// Invalidate the server-side session.
    async fn logout(&self) -> Result<(), AuthError>;
}

/// HTTP implementation of [`AuthApi`] against `/api/auth/*`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthApi;

impl AuthApi for HttpAuthApi {
    /// `GET /api/auth/me` — returns `None` if not authenticated, on any
    /// network problem, or on the server. An absent session is the normal
    /// anonymous outcome, not a reportable error.
    async fn fetch_current_user(&self) -> Option<Profile> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get("/api/auth/me")
                .send()
                .await
                .ok()?;
            if !resp.ok() {
                return None;
            }
            resp.json::<Profile>().await.ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    /// `POST /api/auth/login`.
    async fn login(&self, credentials: &Credentials) -> Result<Profile, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post("/api/auth/login")
                .json(credentials)
                .map_err(|_| AuthError::Network)?
                .send()
                .await
                .map_err(|_| AuthError::Network)?;
            if !resp.ok() {
                log::debug!("login rejected with status {}", resp.status());
                return Err(classify_login_status(resp.status()));
            }
            let body: super::types::LoginReply =
                resp.json().await.map_err(|_| AuthError::Network)?;
            Ok(body.user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(AuthError::Network)
        }
    }

    /// `POST /api/auth/register`.
    async fn register(&self, credentials: &Credentials) -> Result<RegisterReply, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post("/api/auth/register")
                .json(credentials)
                .map_err(|_| AuthError::Network)?
                .send()
                .await
                .map_err(|_| AuthError::Network)?;
            if !resp.ok() {
                log::debug!("register rejected with status {}", resp.status());
                return Err(classify_register_status(resp.status()));
            }
            // An empty or unparseable success body still counts as success;
            // the form falls back to its default message.
            resp.json::<RegisterReply>()
                .await
                .or(Ok(RegisterReply::default()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(AuthError::Network)
        }
    }

    /// `POST /api/auth/logout` — best-effort; the caller clears local
    /// state whether or not this succeeds.
    async fn logout(&self) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post("/api/auth/logout")
                .send()
                .await
                .map_err(|_| AuthError::Network)?;
            if !resp.ok() {
                log::warn!("remote logout failed with status {}", resp.status());
                return Err(AuthError::Server(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(AuthError::Network)
        }
    }
}
