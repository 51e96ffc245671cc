use crate::pages::login::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <LoginForm
            form=vm.form
            error=vm.error
            pending=pending
            on_submit=on_submit
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_in_router;

    #[test]
    fn login_panel_renders_form() {
        let html = render_in_router("http://localhost/login", move || view! { <LoginPanel /> });
        assert!(html.contains("Sign in to your account"));
        assert!(html.contains("Email address"));
    }
}
