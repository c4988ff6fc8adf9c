//! Login, session and route gate working together.

use chrono::Utc;
use nexus_business::{LoginError, LoginForm, Route, Session, ToastQueue};

mod login_flow_tests {
    use super::*;

    #[test]
    fn test_demo_login_opens_dashboard() {
        let mut form = LoginForm::default();
        let mut session = Session::new();

        assert_eq!(Route::resolve(Route::Users, &session), Route::Login);

        form.fill_demo();
        let user = form.submit().expect("demo credentials are valid");
        session.sign_in(user);

        assert_eq!(Route::resolve(Route::Login, &session), Route::Dashboard);
        assert_eq!(Route::resolve(Route::Users, &session), Route::Users);
    }

    #[test]
    fn test_rejected_login_raises_error_toast() {
        let mut form = LoginForm::default();
        let mut toasts = ToastQueue::default();
        form.input.email = "someone@example".to_owned();
        form.input.password = "secret123".to_owned();

        let err = form.submit().expect_err("email has no dot after the @");
        assert_eq!(err, LoginError::InvalidEmail);
        toasts.error(err.to_string(), Utc::now());

        let messages: Vec<&str> = toasts.iter().map(|toast| toast.message.as_str()).collect();
        assert_eq!(messages, vec!["Please enter a valid email"]);
    }

    #[test]
    fn test_logout_closes_every_page() {
        let mut form = LoginForm::default();
        let mut session = Session::new();
        form.fill_demo();
        session.sign_in(form.submit().expect("demo credentials are valid"));

        session.sign_out();
        form.reset();

        assert!(form.input.email.is_empty());
        for route in nexus_business::NAVIGATION {
            assert_eq!(Route::resolve(route, &session), Route::Login);
        }
    }
}
