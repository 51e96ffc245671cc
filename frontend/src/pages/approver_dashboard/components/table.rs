use crate::{
    api::VisitorRequest,
    components::{
        empty_state::EmptyRow,
        forms::DANGER_BUTTON_CLASS,
        status::RequestStatusBadge,
    },
    pages::approver_dashboard::utils::{ApprovalDecision, ApprovalTab},
    utils::time::display_date,
};
use leptos::*;

const APPROVE_BUTTON_CLASS: &str = "inline-flex items-center justify-center rounded-md px-3 py-1.5 text-xs font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50";

#[component]
pub fn ApprovalTable(
    #[prop(into)] items: Signal<Vec<VisitorRequest>>,
    #[prop(into)] tab: Signal<ApprovalTab>,
    #[prop(into)] busy: Signal<bool>,
    on_decide: Callback<(String, ApprovalDecision)>,
) -> impl IntoView {
    let show_actions = move || tab.get() == ApprovalTab::Pending;

    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Visitor"</th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Contact"</th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Visitor Type"</th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Warehouse"</th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Date"</th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Status"</th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Actions"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {move || {
                        let rows = items.get();
                        if rows.is_empty() {
                            return view! { <EmptyRow colspan=7 message="No requests found." /> }.into_view();
                        }
                        rows.into_iter().map(|request| {
                            let id = request.id.clone();
                            let reject_id = request.id.clone();
                            view! {
                                <tr>
                                    <td class="px-4 py-3 text-sm text-fg">
                                        <div class="font-medium">{request.name.clone()}</div>
                                        <div class="text-xs text-fg-muted">{request.description.clone()}</div>
                                    </td>
                                    <td class="px-4 py-3 text-sm text-fg-muted">
                                        <div>{request.email.clone()}</div>
                                        <div>{request.phone.clone()}</div>
                                    </td>
                                    <td class="px-4 py-3 text-sm text-fg">{request.visitor_type_name.clone()}</td>
                                    <td class="px-4 py-3 text-sm text-fg">{request.warehouse_name.clone()}</td>
                                    <td class="px-4 py-3 text-sm text-fg">{display_date(&request.date)}</td>
                                    <td class="px-4 py-3 text-sm"><RequestStatusBadge status=request.status_kind() /></td>
                                    <td class="px-4 py-3 text-sm space-x-2">
                                        <Show when=show_actions fallback=|| view! { <span class="text-fg-muted">"-"</span> }>
                                            <button
                                                class=APPROVE_BUTTON_CLASS
                                                disabled=move || busy.get()
                                                on:click={
                                                    let id = id.clone();
                                                    move |_| on_decide.call((id.clone(), ApprovalDecision::Approve))
                                                }
                                            >
                                                "Approve"
                                            </button>
                                            <button
                                                class=DANGER_BUTTON_CLASS
                                                disabled=move || busy.get()
                                                on:click={
                                                    let id = reject_id.clone();
                                                    move |_| on_decide.call((id.clone(), ApprovalDecision::Reject))
                                                }
                                            >
                                                "Reject"
                                            </button>
                                        </Show>
                                    </td>
                                </tr>
                            }
                        }).collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
