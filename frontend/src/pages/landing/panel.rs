use crate::{
    components::alert::AlertDialog,
    pages::landing::{components::visitor_form::VisitorRequestForm, view_model::use_landing_view_model},
};
use leptos::*;

#[component]
pub fn LandingPanel() -> impl IntoView {
    let vm = use_landing_view_model();

    view! {
        <div class="min-h-screen bg-surface">
            <nav class="bg-surface-elevated shadow">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex justify-between h-16 items-center">
                    <h1 class="text-xl font-bold text-fg">"GatePass"</h1>
                    <a
                        href="/login"
                        class="inline-flex items-center rounded-md border border-border px-4 py-2 text-sm font-medium text-fg hover:bg-action-ghost-bg-hover"
                    >
                        "Login"
                    </a>
                </div>
            </nav>
            <div class="max-w-4xl mx-auto mt-8 bg-surface-elevated p-6 rounded-lg shadow">
                <h2 class="text-2xl font-bold mb-6 text-center text-fg">"Visitor Request"</h2>
                <VisitorRequestForm vm=vm />
            </div>
            <AlertDialog alert=vm.alert />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn landing_renders_public_form() {
        let html = render_to_string(move || view! { <LandingPanel /> });
        assert!(html.contains("Visitor Request"));
        assert!(html.contains("Select Warehouse"));
        assert!(html.contains("Add Accompanying Person"));
        assert!(html.contains("Submit Request"));
        assert!(html.contains("href=\"/login\""));
    }

    #[test]
    fn time_slot_select_is_disabled_without_warehouse() {
        let html = render_to_string(move || view! { <LandingPanel /> });
        let slot_select = html
            .split("Select Time Slot")
            .next()
            .and_then(|head| head.rsplit("<select").next())
            .unwrap_or_default()
            .to_string();
        assert!(slot_select.contains("disabled"));
    }

    #[test]
    fn add_control_disappears_at_cap() {
        let html = render_to_string(move || {
            let vm = crate::pages::landing::view_model::use_landing_view_model();
            for _ in 0..4 {
                vm.add_accompanying();
            }
            view! { <crate::pages::landing::components::accompanying::AccompanyingList vm=vm /> }
        });
        assert!(!html.contains("Add Accompanying Person"));
        assert_eq!(html.matches("Remove").count(), 4);
    }
}
