use crate::{
    api::VisitorRequest,
    components::{
        alert::AlertDialog,
        cards::{StatCard, StatTone},
        error::InlineErrorMessage,
        forms::SearchInput,
        layout::{DashboardLayout, LoadingSpinner},
    },
    pages::receptionist_dashboard::{
        components::{table::ReceptionTable, visit_modal::VisitModal},
        utils::ReceptionView,
        view_model::use_reception_view_model,
    },
};
use leptos::*;

#[component]
pub fn ReceptionDashboardPanel() -> impl IntoView {
    let vm = use_reception_view_model();

    let stats = create_memo(move |_| vm.stats());
    let visible = Signal::derive(move || vm.visible());
    let load_error = Signal::derive(move || vm.requests.get().and_then(Result::err));
    let loading = move || vm.requests.loading().get();
    let on_record = Callback::new(move |request: VisitorRequest| vm.open_visit(&request));

    view! {
        <DashboardLayout title="Reception Dashboard">
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                <StatCard label="Pending Approval" value=Signal::derive(move || stats.get().pending_approval) tone=StatTone::Warning />
                <StatCard label="Visited" value=Signal::derive(move || stats.get().visited) tone=StatTone::Success />
                <StatCard label="No Shows" value=Signal::derive(move || stats.get().no_show) tone=StatTone::Danger />
                <StatCard label="Total" value=Signal::derive(move || stats.get().total) tone=StatTone::Info />
            </div>

            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-3">
                <div class="inline-flex rounded-md shadow-sm" role="group">
                    {ReceptionView::ALL
                        .into_iter()
                        .map(|view| {
                            let active = move || vm.view.get() == view;
                            view! {
                                <button
                                    type="button"
                                    aria-pressed=move || active().to_string()
                                    class=move || {
                                        if active() {
                                            "px-4 py-2 text-sm font-medium border border-border bg-action-primary-bg text-action-primary-text"
                                        } else {
                                            "px-4 py-2 text-sm font-medium border border-border bg-surface-elevated text-fg"
                                        }
                                    }
                                    on:click=move |_| vm.switch_view(view)
                                >
                                    {view.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <SearchInput term=vm.search placeholder="Search name, email, phone, type, code or date" />
            </div>

            <InlineErrorMessage error=load_error />

            <div class="bg-surface-elevated rounded-lg shadow">
                <Show when=loading fallback=move || view! { <ReceptionTable items=visible on_record=on_record /> }>
                    <LoadingSpinner />
                </Show>
            </div>

            <VisitModal vm=vm />
            <AlertDialog alert=vm.alert />
        </DashboardLayout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, receptionist_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn panel_renders_view_switcher_and_stats() {
        let html = render_to_string(move || {
            provide_auth(Some(receptionist_user()));
            view! { <ReceptionDashboardPanel /> }
        });
        assert!(html.contains("Reception Dashboard"));
        assert!(html.contains("My Requests"));
        assert!(html.contains("Warehouse Requests"));
        assert!(html.contains("Today&#x27;s Requests") || html.contains("Today's Requests"));
        assert!(html.contains("No Shows"));
    }
}
