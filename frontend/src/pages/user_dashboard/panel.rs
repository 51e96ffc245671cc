use crate::{
    components::{
        cards::{StatCard, StatTone},
        error::InlineErrorMessage,
        layout::{DashboardLayout, LoadingSpinner},
    },
    pages::user_dashboard::{
        components::request_list::RequestList, view_model::use_user_dashboard_view_model,
    },
};
use leptos::*;

#[component]
pub fn UserDashboardPanel() -> impl IntoView {
    let vm = use_user_dashboard_view_model();
    let counts = create_memo(move |_| vm.counts());
    let items = Signal::derive(move || vm.items());
    let load_error = Signal::derive(move || vm.requests.get().and_then(Result::err));
    let loading = move || vm.requests.loading().get();

    view! {
        <DashboardLayout title="My Dashboard">
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                <StatCard label="Pending" value=Signal::derive(move || counts.get().pending) tone=StatTone::Warning />
                <StatCard label="Approved" value=Signal::derive(move || counts.get().approved) tone=StatTone::Success />
                <StatCard label="Rejected" value=Signal::derive(move || counts.get().rejected) tone=StatTone::Danger />
                <StatCard label="Total" value=Signal::derive(move || counts.get().total) />
            </div>
            <InlineErrorMessage error=load_error />
            <section class="bg-surface-elevated rounded-lg shadow">
                <h2 class="px-4 py-3 text-lg font-semibold text-fg border-b border-border">"My Requests"</h2>
                <Show when=loading fallback=move || view! { <RequestList items=items /> }>
                    <LoadingSpinner />
                </Show>
            </section>
        </DashboardLayout>
    }
}
