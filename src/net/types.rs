//! Wire types shared with the auth API.

use serde::{Deserialize, Serialize};

/// Profile of an authenticated user as returned by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl Profile {
    /// Name to show in the navbar identity chip: display name when the
    /// user has set one, email otherwise.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// Email + password pair submitted by the login and register forms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of a successful `POST /api/auth/login`.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginReply {
    pub user: Profile,
}

/// Body of a successful `POST /api/auth/register`.
///
/// The server may ask the user to verify their email before logging in,
/// so registration carries a message rather than a session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RegisterReply {
    #[serde(default)]
    pub message: Option<String>,
}
