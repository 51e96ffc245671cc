use crate::{
    components::{
        error::FieldError,
        forms::{Modal, INPUT_CLASS, PRIMARY_BUTTON_CLASS, SECONDARY_BUTTON_CLASS},
    },
    pages::workflows::{utils::WorkflowForm, view_model::WorkflowsViewModel},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn WorkflowFormModal(vm: WorkflowsViewModel) -> impl IntoView {
    let is_open = Signal::derive(move || vm.editing.with(Option::is_some));
    let is_create = move || vm.editing.with(|form| form.as_ref().is_some_and(|f| !f.is_edit()));
    let title = Signal::derive(move || {
        vm.editing
            .with(|form| form.as_ref().map(|f| f.title().to_string()).unwrap_or_default())
    });
    let submit_label = move || {
        vm.editing
            .with(|form| form.as_ref().map(WorkflowForm::submit_label).unwrap_or("Create"))
    };
    let read = move |get: fn(&WorkflowForm) -> String| {
        vm.editing.with(|form| form.as_ref().map(get).unwrap_or_default())
    };
    let write = move |set: fn(&mut WorkflowForm, String), value: String| {
        vm.editing.update(|form| {
            if let Some(form) = form {
                set(form, value);
            }
        })
    };
    let type_error = Signal::derive(move || vm.error_for("visitor_type_id"));
    let step_error = Signal::derive(move || vm.error_for("step_no"));
    let approver_error = Signal::derive(move || vm.error_for("approver"));
    let saving = vm.save_action.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_form();
    };

    view! {
        <Modal is_open=is_open title=title on_close=Callback::new(move |_| vm.close_form())>
            {move || vm.submit_error.get().map(|message| view! {
                <p class="text-sm text-status-error-text mb-4">{message}</p>
            })}
            <form class="space-y-4" on:submit=on_submit novalidate>
                <Show when=is_create>
                    <label class="block text-sm font-medium text-fg">
                        "Visitor Type"
                        <select
                            class=INPUT_CLASS
                            prop:value=move || read(|f| f.visitor_type_id.clone())
                            on:change=move |ev| write(|f, v| f.visitor_type_id = v, event_target_value(&ev))
                        >
                            <option value="">"Select Visitor Type"</option>
                            {move || vm.visitor_types.get().unwrap_or_default().into_iter().map(|t| view! {
                                <option value=t.id.clone()>{t.name}</option>
                            }).collect_view()}
                        </select>
                        <FieldError message=type_error />
                    </label>
                </Show>
                <label class="block text-sm font-medium text-fg">
                    "Step Number"
                    <input
                        type="number"
                        min="1"
                        class=INPUT_CLASS
                        placeholder="Enter step number (positive integer)"
                        prop:value=move || read(|f| f.step_no.clone())
                        on:input=move |ev| write(|f, v| f.step_no = v, event_target_value(&ev))
                    />
                    <FieldError message=step_error />
                </label>
                <label class="block text-sm font-medium text-fg">
                    "Approver"
                    <select
                        class=INPUT_CLASS
                        prop:value=move || read(|f| f.approver.clone())
                        on:change=move |ev| write(|f, v| f.approver = v, event_target_value(&ev))
                    >
                        <option value="">"Select Approver"</option>
                        {move || vm.approvers.get().unwrap_or_default().into_iter().map(|user| view! {
                            <option value=user.id.clone()>{user.name}</option>
                        }).collect_view()}
                    </select>
                    <FieldError message=approver_error />
                </label>
                <div class="flex justify-end gap-2">
                    <button type="button" class=SECONDARY_BUTTON_CLASS on:click=move |_| vm.close_form()>
                        "Cancel"
                    </button>
                    <button type="submit" class=PRIMARY_BUTTON_CLASS disabled=move || saving.get()>
                        {submit_label}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
