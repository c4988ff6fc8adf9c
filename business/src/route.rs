//! Routes of the front-end and the auth gate in front of them.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::session::Session;

/// Represents the current page of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// The only page reachable while signed out.
    #[default]
    Login,
    Home,
    Profile,
    Dashboard,
    Users,
}

/// Entries of the navigation drawer, in display order.
pub const NAVIGATION: [Route; 4] = [Route::Home, Route::Profile, Route::Dashboard, Route::Users];

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Home => "/",
            Self::Profile => "/profile",
            Self::Dashboard => "/dashboard",
            Self::Users => "/users",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/login" => Some(Self::Login),
            "/" => Some(Self::Home),
            "/profile" => Some(Self::Profile),
            "/dashboard" => Some(Self::Dashboard),
            "/users" => Some(Self::Users),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Home => "Home",
            Self::Profile => "Profile",
            Self::Dashboard => "Dashboard",
            Self::Users => "Users",
        }
    }

    /// Applies the auth gate to a navigation request.
    ///
    /// Signed-out users always land on the login page; signed-in users asking
    /// for the login page are sent to the dashboard instead.
    pub fn resolve(requested: Self, session: &Session) -> Self {
        let resolved = match (session.is_authenticated(), requested) {
            (false, _) => Self::Login,
            (true, Self::Login) => Self::Dashboard,
            (true, route) => route,
        };
        if resolved != requested {
            debug!("Redirecting {} to {}", requested.path(), resolved.path());
        }
        resolved
    }
}
