use crate::{
    api::{WorkflowGroup, WorkflowStep},
    components::forms::{DANGER_BUTTON_CLASS, LINK_BUTTON_CLASS},
};
use leptos::*;

/// One visitor type's ordered approval chain.
#[component]
pub fn WorkflowGroupCard(
    group: WorkflowGroup,
    on_edit: Callback<WorkflowStep>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let mut steps = group.steps;
    steps.sort_by_key(|step| step.step_no);
    view! {
        <div class="border border-border rounded-lg p-4">
            <h4 class="text-md font-semibold text-fg mb-3">{group.visitor_type}</h4>
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Step No"</th>
                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Approver"</th>
                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        {steps.into_iter().map(|step| {
                            let id = step.id.clone();
                            let for_edit = step.clone();
                            view! {
                                <tr>
                                    <td class="px-4 py-3 text-sm font-medium text-fg">{step.step_no}</td>
                                    <td class="px-4 py-3 text-sm text-fg-muted">{step.approver}</td>
                                    <td class="px-4 py-3 text-sm space-x-3">
                                        <button class=LINK_BUTTON_CLASS on:click=move |_| on_edit.call(for_edit.clone())>
                                            "Edit"
                                        </button>
                                        <button class=DANGER_BUTTON_CLASS on:click=move |_| on_delete.call(id.clone())>
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
