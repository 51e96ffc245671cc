use crate::{
    api::{LoginRequest, Role},
    components::guard::safe_redirect_target,
    utils::validation::is_valid_email,
};
use leptos::*;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFieldErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

pub fn validate_credentials(email: &str, password: &str) -> LoginFieldErrors {
    let email = email.trim();
    let email_error = if email.is_empty() {
        Some("Email is required")
    } else if !is_valid_email(email) {
        Some("Invalid email address")
    } else {
        None
    };
    let password_error = if password.is_empty() {
        Some("Password is required")
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        Some("Password must be at least 6 characters")
    } else {
        None
    };
    LoginFieldErrors {
        email: email_error.map(str::to_string),
        password: password_error.map(str::to_string),
    }
}

/// Where to go once signed in: a safe `redirect` target or the role's dashboard.
pub fn post_login_target(redirect: Option<&str>, role: Role) -> String {
    redirect
        .and_then(safe_redirect_target)
        .unwrap_or_else(|| role.dashboard_path().to_string())
}

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub show_password: RwSignal<bool>,
    pub field_errors: RwSignal<LoginFieldErrors>,
}

impl LoginFormState {
    pub fn new() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            show_password: create_rw_signal(false),
            field_errors: create_rw_signal(LoginFieldErrors::default()),
        }
    }

    /// Validates the current input; `None` when a field is invalid.
    pub fn to_request(&self) -> Option<LoginRequest> {
        let email = self.email.get_untracked();
        let password = self.password.get_untracked();
        let errors = validate_credentials(&email, &password);
        let valid = errors.is_empty();
        self.field_errors.set(errors);
        valid.then(|| LoginRequest {
            email: email.trim().to_string(),
            password,
        })
    }
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_are_reported() {
        let errors = validate_credentials("  ", "");
        assert_eq!(errors.email.as_deref(), Some("Email is required"));
        assert_eq!(errors.password.as_deref(), Some("Password is required"));
    }

    #[test]
    fn email_and_password_shape_are_checked() {
        let errors = validate_credentials("not-an-email", "12345");
        assert_eq!(errors.email.as_deref(), Some("Invalid email address"));
        assert_eq!(
            errors.password.as_deref(),
            Some("Password must be at least 6 characters")
        );
        assert!(validate_credentials("ann@example.com", "123456").is_empty());
    }

    #[test]
    fn redirect_prefers_safe_target() {
        assert_eq!(
            post_login_target(Some("/warehouses"), Role::Admin),
            "/warehouses"
        );
        assert_eq!(
            post_login_target(Some("//evil.example"), Role::Approver),
            "/approver/approver-dashboard"
        );
        assert_eq!(
            post_login_target(None, Role::Receptionist),
            "/reception/reception-dashboard"
        );
    }
}
