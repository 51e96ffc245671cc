use crate::{
    api::Role,
    state::auth::{self, use_auth},
    utils::location,
};
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

const ADMIN_MANAGEMENT: [NavItem; 6] = [
    NavItem {
        label: "Users",
        href: "/users",
    },
    NavItem {
        label: "Warehouses",
        href: "/warehouses",
    },
    NavItem {
        label: "Visitor Types",
        href: "/visitor-types",
    },
    NavItem {
        label: "Time Slots",
        href: "/warehouse-time-slots",
    },
    NavItem {
        label: "Visitor Requests",
        href: "/visitor-requests",
    },
    NavItem {
        label: "Workflow Management",
        href: "/workflow-management",
    },
];

/// Sidebar entries per role. Every role starts with its own dashboard.
pub fn navigation_for(role: Role) -> Vec<NavItem> {
    let mut items = vec![NavItem {
        label: "Dashboard",
        href: role.dashboard_path(),
    }];
    if role == Role::Admin {
        items.extend(ADMIN_MANAGEMENT.iter().cloned());
    }
    items
}

fn nav_link_class(active: bool) -> &'static str {
    if active {
        "block px-3 py-2 rounded-md text-sm font-medium bg-action-primary-bg text-action-primary-text"
    } else {
        "block px-3 py-2 rounded-md text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let (auth, _) = use_auth();
    let items = move || {
        auth.get()
            .role()
            .map(navigation_for)
            .unwrap_or_default()
    };
    let current = location::current_pathname().unwrap_or_default();

    view! {
        <nav class="w-full lg:w-60 bg-surface-elevated border-r border-border p-4 space-y-1">
            <For
                each=items
                key=|item| item.href
                children=move |item| {
                    let active = current == item.href;
                    view! {
                        <a href=item.href class=nav_link_class(active)>
                            {item.label}
                        </a>
                    }
                }
            />
        </nav>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _) = use_auth();
    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();

    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            location::navigate("/login");
        }
    });

    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        logout_action.dispatch(());
    };

    let user_name = move || {
        auth.get()
            .user
            .map(|user| user.name)
            .unwrap_or_default()
    };
    let role_label = move || auth.get().role().map(|role| role.as_str()).unwrap_or("");

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">"Gate Pass"</h1>
                    <div class="flex items-center gap-4">
                        <div class="text-right">
                            <p class="text-sm font-medium text-fg">{user_name}</p>
                            <p class="text-xs text-fg-muted">{role_label}</p>
                        </div>
                        <button
                            on:click=on_logout
                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium disabled:opacity-50 hover:bg-action-ghost-bg-hover"
                            disabled=move || logout_pending.get()
                        >
                            "Logout"
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn DashboardLayout(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <div class="flex flex-col lg:flex-row">
                <Sidebar/>
                <main class="flex-1 py-6 px-4 sm:px-6 lg:px-8 space-y-6">
                    <h2 class="text-2xl font-bold text-fg">{title}</h2>
                    {children()}
                </main>
            </div>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_starts_with_its_dashboard() {
        for role in Role::ALL {
            let items = navigation_for(role);
            assert_eq!(items[0].label, "Dashboard");
            assert_eq!(items[0].href, role.dashboard_path());
        }
    }

    #[test]
    fn only_admin_sees_management_pages() {
        let admin: Vec<_> = navigation_for(Role::Admin)
            .into_iter()
            .map(|item| item.href)
            .collect();
        assert!(admin.contains(&"/workflow-management"));
        assert!(admin.contains(&"/warehouse-time-slots"));
        assert_eq!(admin.len(), 7);

        for role in [Role::Receptionist, Role::Approver, Role::User] {
            assert_eq!(navigation_for(role).len(), 1);
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, approver_user, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn admin_layout_renders_management_links() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <DashboardLayout title="Admin Dashboard"><div>"child"</div></DashboardLayout> }
        });
        assert!(html.contains("Admin Dashboard"));
        assert!(html.contains("child"));
        assert!(html.contains("/visitor-types"));
        assert!(html.contains("Logout"));
    }

    #[test]
    fn approver_layout_hides_management_links() {
        let html = render_to_string(move || {
            provide_auth(Some(approver_user()));
            view! { <DashboardLayout title="Approvals"><div>"child"</div></DashboardLayout> }
        });
        assert!(html.contains("/approver/approver-dashboard"));
        assert!(!html.contains("/warehouses"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="error" />
                    <SuccessMessage message="ok" />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("error"));
        assert!(html.contains("ok"));
    }
}
