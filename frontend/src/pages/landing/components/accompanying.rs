use crate::{
    components::{
        error::FieldError,
        forms::{INPUT_CLASS, SECONDARY_BUTTON_CLASS},
    },
    pages::landing::{
        utils::{AccompanyingField, MAX_ACCOMPANYING},
        view_model::LandingViewModel,
    },
};
use leptos::*;

#[component]
pub fn AccompanyingList(vm: LandingViewModel) -> impl IntoView {
    let rows = move || {
        vm.form
            .with(|form| form.accompanying.iter().cloned().enumerate().collect::<Vec<_>>())
    };
    let can_add_more = move || vm.form.with(|form| form.can_add_more());

    view! {
        <div class="space-y-3">
            <p class="block text-sm font-medium text-fg">
                {format!("Accompanying Persons (up to {})", MAX_ACCOMPANYING)}
            </p>
            <For
                each=rows
                key=|(index, row)| (*index, row.key)
                children=move |(index, row)| {
                    let key = row.key;
                    let field_input = move |field: AccompanyingField, label: &'static str, input_type: &'static str, initial: String| {
                        let error_key = format!(
                            "accompanying.{}.{}",
                            index,
                            match field {
                                AccompanyingField::Name => "name",
                                AccompanyingField::Phone => "phone",
                                AccompanyingField::Email => "email",
                            }
                        );
                        let error = Signal::derive(move || vm.error_for(&error_key));
                        view! {
                            <label class="block text-sm font-medium text-fg">
                                {label}
                                <input
                                    type=input_type
                                    class=INPUT_CLASS
                                    placeholder=label
                                    value=initial
                                    on:input=move |ev| vm.update_accompanying(key, field, event_target_value(&ev))
                                />
                                <FieldError message=error />
                            </label>
                        }
                    };
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-4 gap-4 p-4 border border-border rounded">
                            {field_input(AccompanyingField::Name, "Name", "text", row.name.clone())}
                            {field_input(AccompanyingField::Phone, "Phone", "tel", row.phone.clone())}
                            {field_input(AccompanyingField::Email, "Email", "email", row.email.clone())}
                            <div class="flex items-end">
                                <button
                                    type="button"
                                    class=SECONDARY_BUTTON_CLASS
                                    on:click=move |_| vm.remove_accompanying(key)
                                >
                                    "Remove"
                                </button>
                            </div>
                        </div>
                    }
                }
            />
            <Show when=can_add_more>
                <button type="button" class=SECONDARY_BUTTON_CLASS on:click=move |_| vm.add_accompanying()>
                    "Add Accompanying Person"
                </button>
            </Show>
        </div>
    }
}
