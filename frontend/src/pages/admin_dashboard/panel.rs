use crate::{
    components::{
        cards::{StatCard, StatTone},
        error::InlineErrorMessage,
        forms::SECONDARY_BUTTON_CLASS,
        layout::DashboardLayout,
    },
    pages::admin_dashboard::{
        components::quick_links::QuickLinks, view_model::use_admin_dashboard_view_model,
    },
};
use leptos::*;

#[component]
pub fn AdminDashboardPanel() -> impl IntoView {
    let vm = use_admin_dashboard_view_model();
    let stats = create_memo(move |_| vm.current());
    let load_error = Signal::derive(move || vm.stats.get().and_then(Result::err));
    let loading = vm.stats.loading();

    view! {
        <DashboardLayout title="Admin Dashboard">
            <div class="flex justify-end">
                <button
                    class=SECONDARY_BUTTON_CLASS
                    disabled=move || loading.get()
                    on:click=move |_| vm.refresh()
                >
                    {move || if loading.get() { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>
            <InlineErrorMessage error=load_error />
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                <StatCard label="Total Passes" value=Signal::derive(move || stats.get().total_passes) tone=StatTone::Info />
                <StatCard label="Active Users" value=Signal::derive(move || stats.get().active_users) tone=StatTone::Success />
                <StatCard label="Pending Approvals" value=Signal::derive(move || stats.get().pending_approvals) tone=StatTone::Warning />
                <StatCard label="Approved Today" value=Signal::derive(move || stats.get().approved_today) />
            </div>
            <QuickLinks />
        </DashboardLayout>
    }
}
