use crate::{
    api::Role,
    components::layout::LoadingSpinner,
    state::auth::{use_auth, AuthState},
    utils::location,
};
use leptos::*;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session is still being resolved.
    Wait,
    Render,
    RedirectToLogin,
    RedirectToUnauthorized,
}

/// Admin may open every role-gated page.
pub fn role_allowed(role: Role, allowed: &[Role]) -> bool {
    role == Role::Admin || allowed.contains(&role)
}

pub fn guard_decision(state: &AuthState, allowed: Option<&[Role]>) -> GuardDecision {
    if state.loading {
        return GuardDecision::Wait;
    }
    if !state.is_authenticated || state.user.is_none() {
        return GuardDecision::RedirectToLogin;
    }
    match (allowed, state.role()) {
        (None, _) => GuardDecision::Render,
        (Some(roles), Some(role)) if role_allowed(role, roles) => GuardDecision::Render,
        _ => GuardDecision::RedirectToUnauthorized,
    }
}

pub fn login_redirect_url(target: &str) -> String {
    let target = target.trim();
    if target.is_empty() || target == "/" {
        return LOGIN_PATH.to_string();
    }
    format!(
        "{}?redirect={}",
        LOGIN_PATH,
        utf8_percent_encode(target, NON_ALPHANUMERIC)
    )
}

/// Accepts only same-origin absolute paths that do not loop back to login.
pub fn safe_redirect_target(raw: &str) -> Option<String> {
    let target = raw.trim();
    if !target.starts_with('/') || target.starts_with("//") || target.starts_with(LOGIN_PATH) {
        return None;
    }
    Some(target.to_string())
}

fn guarded_view(allowed: StoredValue<Option<Vec<Role>>>, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let decision =
        create_memo(move |_| allowed.with_value(|roles| guard_decision(&auth.get(), roles.as_deref())));

    create_effect(move |_| match decision.get() {
        GuardDecision::RedirectToLogin => {
            let target = location::current_path().unwrap_or_default();
            log::debug!("unauthenticated access to {}", target);
            location::navigate(&login_redirect_url(&target));
        }
        GuardDecision::RedirectToUnauthorized => location::navigate(UNAUTHORIZED_PATH),
        GuardDecision::Wait | GuardDecision::Render => {}
    });

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || {
                if decision.get() == GuardDecision::Wait {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded_view(store_value(None), children)
}

#[component]
pub fn RequireRole(roles: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    guarded_view(store_value(Some(roles)), children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{approver_user, regular_user};

    fn state(user: Option<crate::api::User>, loading: bool) -> AuthState {
        AuthState {
            is_authenticated: user.is_some(),
            user,
            loading,
        }
    }

    #[test]
    fn loading_state_waits() {
        assert_eq!(guard_decision(&state(None, true), None), GuardDecision::Wait);
    }

    #[test]
    fn signed_out_users_go_to_login() {
        assert_eq!(
            guard_decision(&state(None, false), Some(&[Role::Admin])),
            GuardDecision::RedirectToLogin
        );
    }

    #[test]
    fn role_mismatch_goes_to_unauthorized() {
        let approver = state(Some(approver_user()), false);
        assert_eq!(
            guard_decision(&approver, Some(&[Role::Receptionist])),
            GuardDecision::RedirectToUnauthorized
        );
        assert_eq!(
            guard_decision(&approver, Some(&[Role::Approver])),
            GuardDecision::Render
        );
        assert_eq!(guard_decision(&approver, None), GuardDecision::Render);
    }

    #[test]
    fn admin_passes_every_role_gate() {
        for role in Role::ALL {
            assert!(role_allowed(Role::Admin, &[role]));
        }
        assert!(!role_allowed(Role::User, &[Role::Admin]));
        let user = state(Some(regular_user()), false);
        assert_eq!(
            guard_decision(&user, Some(&[Role::User])),
            GuardDecision::Render
        );
    }

    #[test]
    fn login_redirect_preserves_target() {
        assert_eq!(
            login_redirect_url("/warehouses?view=disabled"),
            "/login?redirect=%2Fwarehouses%3Fview%3Ddisabled"
        );
        assert_eq!(login_redirect_url("/"), "/login");
    }

    #[test]
    fn redirect_targets_must_be_local_paths() {
        assert_eq!(
            safe_redirect_target("/admin/admin-dashboard").as_deref(),
            Some("/admin/admin-dashboard")
        );
        assert!(safe_redirect_target("https://evil.example").is_none());
        assert!(safe_redirect_target("//evil.example").is_none());
        assert!(safe_redirect_target("/login?redirect=/x").is_none());
        assert!(safe_redirect_target("").is_none());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth, receptionist_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn require_auth_renders_children_when_authenticated() {
        let html = render_to_string(move || {
            provide_auth(Some(receptionist_user()));
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_when_unauthenticated() {
        let html = render_to_string(move || {
            provide_auth(None);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_auth_shows_spinner_while_loading() {
        let html = render_to_string(move || {
            let (auth, set_auth) = create_signal(AuthState {
                loading: true,
                ..AuthState::default()
            });
            provide_context((auth, set_auth));
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_role_blocks_other_roles() {
        let html = render_to_string(move || {
            provide_auth(Some(receptionist_user()));
            view! {
                <RequireRole roles=vec![Role::Approver]>
                    {|| view! { <div>"approver-only"</div> }}
                </RequireRole>
            }
        });
        assert!(!html.contains("approver-only"));
    }

    #[test]
    fn require_role_lets_admin_through() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! {
                <RequireRole roles=vec![Role::Approver]>
                    {|| view! { <div>"approver-only"</div> }}
                </RequireRole>
            }
        });
        assert!(html.contains("approver-only"));
    }
}
