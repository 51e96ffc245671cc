use crate::{
    api::TimeSlot,
    components::{
        alert::AlertDialog,
        confirm_dialog::ConfirmDialog,
        error::InlineErrorMessage,
        forms::{
            Modal, SearchInput, TextField, INPUT_CLASS, PRIMARY_BUTTON_CLASS,
            SECONDARY_BUTTON_CLASS,
        },
        layout::{DashboardLayout, LoadingSpinner},
    },
    pages::time_slots::{
        components::table::TimeSlotTable, utils::TimeSlotForm,
        view_model::use_time_slots_view_model,
    },
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn TimeSlotsPanel() -> impl IntoView {
    let vm = use_time_slots_view_model();
    let visible = Signal::derive(move || vm.visible());
    let load_error = Signal::derive(move || vm.slots.get().and_then(Result::err));
    let loading = move || vm.slots.loading().get();
    let has_warehouse = move || vm.selected_warehouse.with(|id| !id.is_empty());
    let saving = vm.save_action.pending();

    let is_open = Signal::derive(move || vm.editing.with(Option::is_some));
    let title = Signal::derive(move || {
        vm.editing
            .with(|form| form.as_ref().map(|f| f.title().to_string()).unwrap_or_default())
    });
    let field = move |read: fn(&TimeSlotForm) -> String| {
        Signal::derive(move || vm.editing.with(|form| form.as_ref().map(read).unwrap_or_default()))
    };
    let setter = move |write: fn(&mut TimeSlotForm, String)| {
        Callback::new(move |value: String| {
            vm.editing.update(|form| {
                if let Some(form) = form {
                    write(form, value);
                }
            })
        })
    };
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_form();
    };

    let delete_open = Signal::derive(move || vm.delete_target.with(Option::is_some));
    let delete_message = Signal::derive(move || {
        vm.delete_target.with(|slot| {
            slot.as_ref()
                .map(|slot| format!("Are you sure you want to delete the time slot \"{}\"?", slot.name))
                .unwrap_or_default()
        })
    });

    view! {
        <DashboardLayout title="Warehouse Time Slots">
            <div class="flex flex-col md:flex-row md:items-end md:justify-between gap-3">
                <label class="block text-sm font-medium text-fg md:w-72">
                    "Warehouse"
                    <select
                        class=INPUT_CLASS
                        prop:value=move || vm.selected_warehouse.get()
                        on:change=move |ev| vm.select_warehouse(event_target_value(&ev))
                    >
                        <option value="">"Select Warehouse"</option>
                        {move || vm.warehouses.get().unwrap_or_default().into_iter().map(|w| view! {
                            <option value=w.id.clone()>{w.name}</option>
                        }).collect_view()}
                    </select>
                </label>
                <div class="flex flex-col sm:flex-row gap-2">
                    <SearchInput term=vm.search placeholder="Search by name or time" />
                    <button
                        class=PRIMARY_BUTTON_CLASS
                        disabled=move || !has_warehouse()
                        on:click=move |_| vm.open_form(None)
                    >
                        "Add Time Slot"
                    </button>
                </div>
            </div>
            <InlineErrorMessage error=load_error />
            <div class="bg-surface-elevated rounded-lg shadow overflow-x-auto">
                <Show
                    when=has_warehouse
                    fallback=|| view! {
                        <p class="p-6 text-sm text-fg-muted">"Select a warehouse to manage its time slots."</p>
                    }
                >
                    <Show when=loading fallback=move || view! {
                        <TimeSlotTable
                            items=visible
                            on_edit=Callback::new(move |slot: TimeSlot| vm.open_form(Some(&slot)))
                            on_delete=Callback::new(move |slot: TimeSlot| vm.delete_target.set(Some(slot)))
                        />
                    }>
                        <LoadingSpinner />
                    </Show>
                </Show>
            </div>
            <Modal is_open=is_open title=title on_close=Callback::new(move |_| vm.close_form())>
                <form class="space-y-4" on:submit=on_submit novalidate>
                    <TextField label="Name" value=field(|f| f.name.clone()) required=true
                        on_input=setter(|f, v| f.name = v) />
                    <div class="grid grid-cols-2 gap-4">
                        <TextField label="From" input_type="time" value=field(|f| f.from.clone()) required=true
                            on_input=setter(|f, v| f.from = v) />
                        <TextField label="To" input_type="time" value=field(|f| f.to.clone()) required=true
                            on_input=setter(|f, v| f.to = v) />
                    </div>
                    <div class="flex justify-end gap-2">
                        <button type="button" class=SECONDARY_BUTTON_CLASS on:click=move |_| vm.close_form()>
                            "Cancel"
                        </button>
                        <button type="submit" class=PRIMARY_BUTTON_CLASS disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </Modal>
            <ConfirmDialog
                is_open=delete_open
                title="Delete Time Slot"
                message=delete_message
                confirm_label="Delete"
                confirm_disabled=vm.delete_action.pending()
                destructive=true
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.delete_target.set(None))
            />
            <AlertDialog alert=vm.alert />
        </DashboardLayout>
    }
}
