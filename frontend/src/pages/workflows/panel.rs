use crate::{
    api::WorkflowStep,
    components::{
        alert::AlertDialog,
        forms::{INPUT_CLASS, PRIMARY_BUTTON_CLASS},
        layout::{DashboardLayout, LoadingSpinner},
    },
    pages::workflows::{
        components::{form_modal::WorkflowFormModal, group::WorkflowGroupCard},
        view_model::use_workflows_view_model,
    },
};
use leptos::*;

#[component]
pub fn WorkflowsPanel() -> impl IntoView {
    let vm = use_workflows_view_model();
    let has_warehouse = move || vm.selected_warehouse.with(|id| !id.is_empty());
    let loading = move || vm.workflows.loading().get();
    let on_edit = Callback::new(move |step: WorkflowStep| vm.open_edit(&step));
    let on_delete = Callback::new(move |id: String| vm.delete_step(id));

    view! {
        <DashboardLayout title="Workflow Management">
            <label class="block text-sm font-medium text-fg">
                "Select Warehouse"
                <select
                    class=INPUT_CLASS
                    prop:value=move || vm.selected_warehouse.get()
                    on:change=move |ev| vm.selected_warehouse.set(event_target_value(&ev))
                >
                    <option value="">"Select a warehouse"</option>
                    {move || vm.warehouses.get().unwrap_or_default().into_iter().map(|w| view! {
                        <option value=w.id.clone()>{w.name}</option>
                    }).collect_view()}
                </select>
            </label>
            <Show when=has_warehouse>
                <div class="bg-surface-elevated rounded-lg shadow p-6 space-y-4">
                    <div class="flex justify-between items-center">
                        <h3 class="text-lg font-medium text-fg">"Workflows for Selected Warehouse"</h3>
                        <button class=PRIMARY_BUTTON_CLASS on:click=move |_| vm.open_create()>
                            "Add Step"
                        </button>
                    </div>
                    <Show when=loading fallback=move || {
                        let groups = vm.groups();
                        if groups.is_empty() {
                            view! {
                                <p class="text-center py-8 text-fg-muted">"No workflows found for this warehouse."</p>
                            }.into_view()
                        } else {
                            view! {
                                <div class="space-y-6">
                                    {groups.into_iter().map(|group| view! {
                                        <WorkflowGroupCard group=group on_edit=on_edit on_delete=on_delete />
                                    }).collect_view()}
                                </div>
                            }.into_view()
                        }
                    }>
                        <LoadingSpinner />
                    </Show>
                </div>
            </Show>
            <WorkflowFormModal vm=vm />
            <AlertDialog alert=vm.alert />
        </DashboardLayout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn hides_step_list_until_warehouse_chosen() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <WorkflowsPanel /> }
        });
        assert!(html.contains("Workflow Management"));
        assert!(html.contains("Select a warehouse"));
        assert!(!html.contains("Add Step"));
    }
}
