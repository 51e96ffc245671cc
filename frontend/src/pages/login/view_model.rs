use super::utils::{post_login_target, LoginFormState, LOGIN_FAILED_MESSAGE};
use crate::api::{ApiError, LoginRequest, User};
use crate::state::auth::{self, use_auth};
use crate::utils::location;
use leptos::*;
use leptos_router::use_query_map;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    /// The `redirect` query parameter the guard put on the login URL.
    pub redirect: Signal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<LoginRequest, Result<User, ApiError>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        self.error.set(None);
        if let Some(request) = self.form.to_request() {
            self.login_action.dispatch(request);
        }
    }
}

fn login_error_text(error: &ApiError) -> String {
    if error.error.trim().is_empty() {
        LOGIN_FAILED_MESSAGE.to_string()
    } else {
        error.error.clone()
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::new();
    let query = use_query_map();
    let redirect = Signal::derive(move || query.with(|params| params.get("redirect").cloned()));
    let error = create_rw_signal(None::<String>);
    let login_action = auth::use_login_action();
    let (auth_state, _) = use_auth();

    create_effect(move |_| {
        let state = auth_state.get();
        if state.loading || !state.is_authenticated {
            return;
        }
        if let Some(role) = state.role() {
            let redirect = redirect.get_untracked();
            location::navigate(&post_login_target(redirect.as_deref(), role));
        }
    });

    create_effect(move |_| {
        if let Some(Err(err)) = login_action.value().get() {
            log::warn!("login failed: {}", err);
            form.password.set(String::new());
            error.set(Some(login_error_text(&err)));
        }
    });

    LoginViewModel {
        form,
        redirect,
        error,
        login_action,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_server_message_uses_default_text() {
        assert_eq!(
            login_error_text(&ApiError::unauthorized("")),
            LOGIN_FAILED_MESSAGE
        );
        assert_eq!(
            login_error_text(&ApiError::unauthorized("Invalid email or password")),
            "Invalid email or password"
        );
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_in_router;

    fn with_login_view_model(url: &str, check: impl FnOnce(LoginViewModel) + 'static) -> String {
        render_in_router(url, move || {
            let vm = use_login_view_model();
            check(vm);
            view! { <span>{move || vm.redirect.get().unwrap_or_default()}</span> }
        })
    }

    #[test]
    fn login_view_model_defaults_empty() {
        with_login_view_model("http://localhost/login", |vm| {
            assert!(vm.error.get().is_none());
            assert!(vm.redirect.get().is_none());
            assert!(vm.form.email.get().is_empty());
            assert!(!vm.form.show_password.get());
        });
    }

    #[test]
    fn redirect_is_read_from_the_query_string() {
        let html = with_login_view_model(
            "http://localhost/login?redirect=%2Fwarehouse-time-slots%3Fwarehouse%3Dw1",
            |vm| {
                assert_eq!(
                    vm.redirect.get().as_deref(),
                    Some("/warehouse-time-slots?warehouse=w1")
                );
            },
        );
        assert!(html.contains("/warehouse-time-slots?warehouse=w1"));
    }

    #[test]
    fn invalid_submit_sets_field_errors_without_dispatch() {
        with_login_view_model("http://localhost/login", |vm| {
            vm.form.email.set("bad".into());
            vm.submit();
            assert_eq!(
                vm.form.field_errors.get().email.as_deref(),
                Some("Invalid email address")
            );
            assert_eq!(vm.login_action.version().get(), 0);
        });
    }
}
