use super::accompanying::AccompanyingList;
use crate::{
    components::{
        error::FieldError,
        forms::{INPUT_CLASS, PRIMARY_BUTTON_CLASS},
    },
    pages::landing::{utils::VisitorFormState, view_model::LandingViewModel},
    utils::time::today_iso,
};
use leptos::{ev::SubmitEvent, *};

type Setter = fn(&mut VisitorFormState, String);

#[component]
fn InputRow(
    vm: LandingViewModel,
    field: &'static str,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] min: Option<String>,
    read: fn(&VisitorFormState) -> String,
    write: Setter,
) -> impl IntoView {
    let error = Signal::derive(move || vm.error_for(field));
    view! {
        <label class="block text-sm font-medium text-fg">
            {label}
            <input
                type=input_type
                class=INPUT_CLASS
                placeholder=placeholder
                min=min
                prop:value=move || vm.form.with(read)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.form.update(|form| write(form, value));
                }
            />
            <FieldError message=error />
        </label>
    }
}

#[component]
pub fn VisitorRequestForm(vm: LandingViewModel) -> impl IntoView {
    let pending = vm.submit_action.pending();
    let visitor_types = move || vm.visitor_types.get().unwrap_or_default();
    let warehouses = move || vm.warehouses.get().unwrap_or_default();
    let no_warehouse = move || vm.form.with(|form| form.warehouse_id.is_empty());

    let type_error = Signal::derive(move || vm.error_for("visitor_type_id"));
    let warehouse_error = Signal::derive(move || vm.error_for("warehouse_id"));
    let slot_error = Signal::derive(move || vm.error_for("warehouse_time_slot_id"));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <form class="space-y-6" on:submit=on_submit novalidate>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <InputRow vm=vm field="name" label="Name" placeholder="Enter your name"
                    read=|f| f.name.clone() write=|f, v| f.name = v />
                <InputRow vm=vm field="email" label="Email" placeholder="Enter email" input_type="email"
                    read=|f| f.email.clone() write=|f, v| f.email = v />
                <InputRow vm=vm field="phone" label="Phone Number" placeholder="Enter phone number" input_type="tel"
                    read=|f| f.phone.clone() write=|f, v| f.phone = v />
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <label class="block text-sm font-medium text-fg">
                    "Visitor Type"
                    <select
                        class=INPUT_CLASS
                        prop:value=move || vm.form.with(|f| f.visitor_type_id.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| f.visitor_type_id = value);
                        }
                    >
                        <option value="">"Select Visitor Type"</option>
                        {move || visitor_types().into_iter().map(|t| view! {
                            <option value=t.id.clone()>{t.name}</option>
                        }).collect_view()}
                    </select>
                    <FieldError message=type_error />
                </label>
                <label class="block text-sm font-medium text-fg">
                    "Warehouse"
                    <select
                        class=INPUT_CLASS
                        prop:value=move || vm.form.with(|f| f.warehouse_id.clone())
                        on:change=move |ev| vm.set_warehouse(event_target_value(&ev))
                    >
                        <option value="">"Select Warehouse"</option>
                        {move || warehouses().into_iter().map(|w| view! {
                            <option value=w.id.clone()>{w.name}</option>
                        }).collect_view()}
                    </select>
                    <FieldError message=warehouse_error />
                </label>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <label class="block text-sm font-medium text-fg">
                    "Time Slot"
                    <select
                        class=INPUT_CLASS
                        disabled=no_warehouse
                        prop:value=move || vm.form.with(|f| f.warehouse_time_slot_id.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| f.warehouse_time_slot_id = value);
                        }
                    >
                        <option value="">"Select Time Slot"</option>
                        {move || vm.time_slots.get().into_iter().map(|slot| view! {
                            <option value=slot.id.clone()>{slot.label()}</option>
                        }).collect_view()}
                    </select>
                    <FieldError message=slot_error />
                </label>
                <InputRow vm=vm field="date" label="Date" placeholder="" input_type="date" min=today_iso()
                    read=|f| f.date.clone() write=|f, v| f.date = v />
            </div>

            <InputRow vm=vm field="description" label="Description" placeholder="Enter description"
                read=|f| f.description.clone() write=|f, v| f.description = v />

            <AccompanyingList vm=vm />

            <button type="submit" class=format!("w-full {}", PRIMARY_BUTTON_CLASS) disabled=move || pending.get()>
                {move || if pending.get() { "Submitting..." } else { "Submit Request" }}
            </button>
        </form>
    }
}
