use crate::{
    components::{
        error::InlineErrorMessage,
        forms::SearchInput,
        layout::{DashboardLayout, LoadingSpinner},
    },
    pages::visitor_requests::{
        components::table::VisitorRequestTable, view_model::use_visitor_requests_view_model,
    },
};
use leptos::*;

#[component]
pub fn VisitorRequestsPanel() -> impl IntoView {
    let vm = use_visitor_requests_view_model();
    let visible = Signal::derive(move || vm.visible());
    let load_error = Signal::derive(move || vm.requests.get().and_then(Result::err));
    let loading = move || vm.requests.loading().get();

    view! {
        <DashboardLayout title="Visitor Requests">
            <div class="flex flex-col sm:flex-row sm:justify-between sm:items-center gap-3">
                <h2 class="text-2xl font-bold text-fg">"Manage Visitor Requests"</h2>
                <SearchInput term=vm.search placeholder="Search by name, email, phone, or status..." />
            </div>
            <InlineErrorMessage error=load_error />
            <div class="bg-surface-elevated rounded-lg shadow overflow-x-auto">
                <Show when=loading fallback=move || view! { <VisitorRequestTable items=visible /> }>
                    <LoadingSpinner />
                </Show>
            </div>
        </DashboardLayout>
    }
}
