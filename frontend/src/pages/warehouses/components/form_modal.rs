use crate::{
    components::{
        error::FieldError,
        forms::{Modal, TextField, PRIMARY_BUTTON_CLASS, SECONDARY_BUTTON_CLASS},
    },
    pages::warehouses::view_model::WarehousesViewModel,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn WarehouseFormModal(vm: WarehousesViewModel) -> impl IntoView {
    let pending = vm.save_action.pending();
    let is_open = Signal::derive(move || vm.editing.with(Option::is_some));
    let title = Signal::derive(move || {
        vm.editing
            .with(|form| form.as_ref().map(|f| f.title().to_string()).unwrap_or_default())
    });
    let name = Signal::derive(move || {
        vm.editing
            .with(|form| form.as_ref().map(|f| f.name.clone()).unwrap_or_default())
    });
    let location = Signal::derive(move || {
        vm.editing
            .with(|form| form.as_ref().map(|f| f.location.clone()).unwrap_or_default())
    });
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_form();
    };

    view! {
        <Modal is_open=is_open title=title on_close=Callback::new(move |_| vm.close_form())>
            <form class="space-y-4" on:submit=on_submit novalidate>
                <TextField
                    label="Name"
                    value=name
                    required=true
                    on_input=Callback::new(move |value: String| {
                        vm.editing.update(|form| {
                            if let Some(form) = form {
                                form.name = value;
                            }
                        })
                    })
                />
                <TextField
                    label="Location"
                    value=location
                    required=true
                    on_input=Callback::new(move |value: String| {
                        vm.editing.update(|form| {
                            if let Some(form) = form {
                                form.location = value;
                            }
                        })
                    })
                />
                <FieldError message=vm.form_error />
                <div class="flex justify-end gap-2">
                    <button type="button" class=SECONDARY_BUTTON_CLASS on:click=move |_| vm.close_form()>
                        "Cancel"
                    </button>
                    <button type="submit" class=PRIMARY_BUTTON_CLASS disabled=move || pending.get()>
                        {move || if pending.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
