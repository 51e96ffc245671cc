use crate::{
    api::VisitorType,
    components::{
        alert::AlertDialog,
        error::{FieldError, InlineErrorMessage},
        forms::{Modal, TextField, PRIMARY_BUTTON_CLASS, SECONDARY_BUTTON_CLASS},
        layout::{DashboardLayout, LoadingSpinner},
        management::{ManagementToolbar, ToggleConfirm},
    },
    pages::visitor_types::{
        components::table::VisitorTypeTable,
        view_model::{use_visitor_types_view_model, NOUN},
    },
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn VisitorTypesPanel() -> impl IntoView {
    let vm = use_visitor_types_view_model();
    let visible = Signal::derive(move || vm.visible());
    let load_error = Signal::derive(move || vm.visitor_types.get().and_then(Result::err));
    let loading = move || vm.visitor_types.loading().get();
    let saving = vm.save_action.pending();

    let is_open = Signal::derive(move || vm.editing.with(Option::is_some));
    let title = Signal::derive(move || {
        vm.editing
            .with(|form| form.as_ref().map(|f| f.title().to_string()).unwrap_or_default())
    });
    let name = Signal::derive(move || {
        vm.editing
            .with(|form| form.as_ref().map(|f| f.name.clone()).unwrap_or_default())
    });
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_form();
    };

    view! {
        <DashboardLayout title="Visitor Types">
            <ManagementToolbar
                filter=vm.filter
                search=vm.search
                add_label="Add Visitor Type"
                on_add=Callback::new(move |_| vm.open_form(None))
            />
            <InlineErrorMessage error=load_error />
            <div class="bg-surface-elevated rounded-lg shadow overflow-x-auto">
                <Show when=loading fallback=move || view! {
                    <VisitorTypeTable
                        items=visible
                        on_edit=Callback::new(move |t: VisitorType| vm.open_form(Some(&t)))
                        on_toggle=Callback::new(move |t: VisitorType| vm.request_toggle(&t))
                    />
                }>
                    <LoadingSpinner />
                </Show>
            </div>
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
                    <FieldError message=vm.form_error />
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
            <ToggleConfirm
                target=vm.toggle_target
                noun=NOUN
                pending=vm.toggle_action.pending()
                on_confirm=Callback::new(move |target| vm.toggle_action.dispatch(target))
            />
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
    fn visitor_types_panel_renders_empty_table() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <VisitorTypesPanel /> }
        });
        assert!(html.contains("Add Visitor Type"));
        assert!(html.contains("No visitor types found."));
    }
}
