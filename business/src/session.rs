//! Signed-in state of the front-end.
//!
//! The session only lives in memory: it starts signed out on every launch
//! and nothing is persisted.

use log::info;
use serde::{Deserialize, Serialize};

/// Whether somebody is signed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthStatus {
    #[default]
    SignedOut,
    SignedIn,
}

/// The signed-in user as far as the front-end knows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
}

impl SessionUser {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    status: AuthStatus,
    user: Option<SessionUser>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&mut self, user: SessionUser) {
        info!("Signed in as {}", user.email);
        self.status = AuthStatus::SignedIn;
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!("Signed out {}", user.email);
        }
        self.status = AuthStatus::SignedOut;
    }

    pub fn status(&self) -> AuthStatus {
        self.status
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == AuthStatus::SignedIn
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// Letter shown in the avatar button: the first letter of the email,
    /// upper-cased, or `U` when nobody is signed in.
    pub fn display_initial(&self) -> char {
        self.user
            .as_ref()
            .and_then(|user| user.email.chars().next())
            .and_then(|first| first.to_uppercase().next())
            .unwrap_or('U')
    }
}
