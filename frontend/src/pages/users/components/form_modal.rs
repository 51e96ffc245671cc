use crate::{
    components::{
        error::FieldError,
        forms::{Modal, INPUT_CLASS, PRIMARY_BUTTON_CLASS, SECONDARY_BUTTON_CLASS},
    },
    pages::users::{utils::UserField, view_model::UsersViewModel},
};
use leptos::{ev::SubmitEvent, *};

fn read(vm: UsersViewModel, field: UserField) -> String {
    vm.editing.with(|form| {
        form.as_ref()
            .map(|f| f.get(field).to_string())
            .unwrap_or_default()
    })
}

fn write(vm: UsersViewModel, field: UserField, value: String) {
    vm.editing.update(|form| {
        if let Some(form) = form {
            form.set(field, value);
        }
    });
}

#[component]
fn UserInput(
    vm: UsersViewModel,
    field: UserField,
    error_key: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] hint: Option<&'static str>,
) -> impl IntoView {
    view! {
        <label class="block text-sm font-medium text-fg">
            {label}
            <input
                type=input_type
                class=INPUT_CLASS
                prop:value=move || read(vm, field)
                on:input=move |ev| write(vm, field, event_target_value(&ev))
            />
            {hint.map(|hint| view! { <span class="text-xs text-fg-muted">{hint}</span> })}
            <FieldError message=Signal::derive(move || vm.error_for(error_key)) />
        </label>
    }
}

#[component]
pub fn UserFormModal(vm: UsersViewModel) -> impl IntoView {
    let pending = vm.save_action.pending();
    let is_open = Signal::derive(move || vm.editing.with(Option::is_some));
    let title = Signal::derive(move || {
        vm.editing
            .with(|form| form.as_ref().map(|f| f.title().to_string()).unwrap_or_default())
    });
    let is_edit = move || vm.editing.with(|form| form.as_ref().is_some_and(|f| f.is_edit()));
    let roles = move || vm.roles.get().unwrap_or_default();
    let warehouses = move || vm.warehouses.get().unwrap_or_default();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_form();
    };

    view! {
        <Modal is_open=is_open title=title on_close=Callback::new(move |_| vm.close_form())>
            <form class="space-y-4" on:submit=on_submit novalidate>
                <UserInput vm=vm field=UserField::Name error_key="name" label="Name" />
                <UserInput vm=vm field=UserField::Email error_key="email" label="Email" input_type="email" />
                <UserInput vm=vm field=UserField::Phone error_key="phone" label="Phone" input_type="tel" />
                <Show
                    when=is_edit
                    fallback=move || view! {
                        <UserInput vm=vm field=UserField::Password error_key="password" label="Password" input_type="password" />
                    }
                >
                    <UserInput
                        vm=vm
                        field=UserField::Password
                        error_key="password"
                        label="Password"
                        input_type="password"
                        hint="Leave blank to keep the current password."
                    />
                </Show>
                <label class="block text-sm font-medium text-fg">
                    "Role"
                    <select
                        class=INPUT_CLASS
                        prop:value=move || read(vm, UserField::Role)
                        on:change=move |ev| write(vm, UserField::Role, event_target_value(&ev))
                    >
                        <option value="">"Select Role"</option>
                        {move || roles().into_iter().map(|role| view! {
                            <option value=role.clone()>{role}</option>
                        }).collect_view()}
                    </select>
                    <FieldError message=Signal::derive(move || vm.error_for("role")) />
                </label>
                <label class="block text-sm font-medium text-fg">
                    "Warehouse"
                    <select
                        class=INPUT_CLASS
                        prop:value=move || read(vm, UserField::Warehouse)
                        on:change=move |ev| write(vm, UserField::Warehouse, event_target_value(&ev))
                    >
                        <option value="">"Select Warehouse"</option>
                        {move || warehouses().into_iter().map(|w| view! {
                            <option value=w.id.clone()>{w.name}</option>
                        }).collect_view()}
                    </select>
                    <FieldError message=Signal::derive(move || vm.error_for("warehouse_id")) />
                </label>
                <FieldError message=vm.server_error />
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
