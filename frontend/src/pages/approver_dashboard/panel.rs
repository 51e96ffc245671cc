use crate::{
    components::{
        alert::AlertDialog,
        cards::{StatCard, StatTone},
        error::InlineErrorMessage,
        layout::{DashboardLayout, LoadingSpinner},
    },
    pages::approver_dashboard::{
        components::table::ApprovalTable,
        utils::{ApprovalDecision, ApprovalTab},
        view_model::use_approver_view_model,
    },
};
use leptos::*;

const TAB_CLASS: &str = "px-4 py-2 text-sm font-medium border-b-2";

#[component]
pub fn ApproverDashboardPanel() -> impl IntoView {
    let vm = use_approver_view_model();
    let busy = vm.decision_action.pending();

    let count = move |tab: ApprovalTab| Signal::derive(move || vm.snapshot().count(tab));
    let total = Signal::derive(move || vm.snapshot().total());
    let items = Signal::derive(move || vm.snapshot().items(vm.tab.get()).to_vec());
    let load_error = Signal::derive(move || vm.buckets.get().and_then(Result::err));
    let loading = move || vm.buckets.loading().get();

    let on_decide = Callback::new(move |(id, decision): (String, ApprovalDecision)| {
        vm.decide(id, decision);
    });

    view! {
        <DashboardLayout title="Approver Dashboard">
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                <StatCard label="Pending" value=count(ApprovalTab::Pending) tone=StatTone::Warning />
                <StatCard label="Approved" value=count(ApprovalTab::Approved) tone=StatTone::Success />
                <StatCard label="Rejected" value=count(ApprovalTab::Rejected) tone=StatTone::Danger />
                <StatCard label="Total" value=total />
            </div>

            <InlineErrorMessage error=load_error />

            <div class="bg-surface-elevated rounded-lg shadow">
                <nav class="flex border-b border-border" role="tablist">
                    {ApprovalTab::ALL
                        .into_iter()
                        .map(|tab| {
                            let selected = move || vm.tab.get() == tab;
                            view! {
                                <button
                                    role="tab"
                                    aria-selected=move || selected().to_string()
                                    class=move || {
                                        if selected() {
                                            format!("{} border-action-primary-bg text-fg", TAB_CLASS)
                                        } else {
                                            format!("{} border-transparent text-fg-muted", TAB_CLASS)
                                        }
                                    }
                                    on:click=move |_| vm.tab.set(tab)
                                >
                                    {move || vm.snapshot().tab_label(tab)}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <Show when=loading fallback=move || view! {
                    <ApprovalTable items=items tab=vm.tab busy=busy on_decide=on_decide />
                }>
                    <LoadingSpinner />
                </Show>
            </div>
            <AlertDialog alert=vm.alert />
        </DashboardLayout>
    }
}
