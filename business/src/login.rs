//! Login form state and validation.
//!
//! Sign-in is a mock: a well-formed email and a long enough password are
//! accepted without contacting any backend.

use log::{debug, info};
use thiserror::Error;

use crate::session::SessionUser;

/// Credentials shown on the login page for trying the app out.
pub const DEMO_CREDENTIALS: Credentials<'static> = Credentials {
    email: "demo@example.com",
    password: "Demo@123",
};

/// Shortest accepted password, counted in UTF-16 code units like a browser
/// text field does.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Toast shown after a successful sign-in.
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful! Welcome back.";
/// Toast shown when the demo credentials are filled in.
pub const DEMO_FILLED_MESSAGE: &str = "Demo credentials filled in";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Password must be at least {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,
}

/// Editable fields of the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl LoginInput {
    /// Checks the fields in display order and returns the first problem.
    pub fn validate(&self) -> Result<Credentials<'_>, LoginError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(LoginError::MissingFields);
        }
        if !looks_like_email(&self.email) {
            return Err(LoginError::InvalidEmail);
        }
        if self.password.encode_utf16().count() < MIN_PASSWORD_LEN {
            return Err(LoginError::PasswordTooShort);
        }
        Ok(Credentials {
            email: &self.email,
            password: &self.password,
        })
    }
}

/// Full state of the login page.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub input: LoginInput,
    pub show_password: bool,
    /// Message of the last failed attempt, shown inline above the form.
    pub error: Option<LoginError>,
}

impl LoginForm {
    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Copies [`DEMO_CREDENTIALS`] into the input.
    pub fn fill_demo(&mut self) {
        self.input.email = DEMO_CREDENTIALS.email.to_owned();
        self.input.password = DEMO_CREDENTIALS.password.to_owned();
        debug!("Filled in demo credentials");
    }

    /// Validates the input, recording the error for inline display.
    pub fn submit(&mut self) -> Result<SessionUser, LoginError> {
        match self.input.validate() {
            Ok(credentials) => {
                info!("Login accepted for {}", credentials.email);
                let user = SessionUser::new(credentials.email);
                self.error = None;
                Ok(user)
            }
            Err(err) => {
                debug!("Login rejected: {err}");
                self.error = Some(err);
                Err(err)
            }
        }
    }

    /// Clears everything, used after signing out.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Same acceptance as searching for `\S+@\S+\.\S+`: some whitespace-free
/// run must hold an `@` with text before it, and a `.` after it with text on
/// both sides.
fn looks_like_email(text: &str) -> bool {
    text.split_whitespace().any(|token| {
        let chars: Vec<char> = token.chars().collect();
        let Some(at) = chars.iter().skip(1).position(|c| *c == '@').map(|i| i + 1) else {
            return false;
        };
        chars[..chars.len() - 1]
            .iter()
            .rposition(|c| *c == '.')
            .is_some_and(|dot| dot >= at + 2)
    })
}
