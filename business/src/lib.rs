//! UI-agnostic core of the Neighbor Nexus front-end.
//!
//! The [`grid`] module is a reusable data-table engine; the rest models the
//! application around it: the session and login form, routes behind the auth
//! gate, toast notifications, the demo user directory and configuration.

pub mod config;
pub mod grid;
pub mod login;
pub mod route;
pub mod session;
pub mod toast;
pub mod users;

pub use config::{AppConfig, ConfigError};
pub use login::{DEMO_CREDENTIALS, LoginError, LoginForm, LoginInput};
pub use route::{NAVIGATION, Route};
pub use session::{AuthStatus, Session, SessionUser};
pub use toast::{Severity, Toast, ToastQueue};
