use crate::{
    api::User,
    components::{
        alert::AlertDialog,
        error::InlineErrorMessage,
        layout::{DashboardLayout, LoadingSpinner},
        management::{ManagementToolbar, ToggleConfirm},
    },
    pages::users::{
        components::{form_modal::UserFormModal, table::UserTable},
        view_model::{use_users_view_model, NOUN},
    },
};
use leptos::*;

#[component]
pub fn UsersPanel() -> impl IntoView {
    let vm = use_users_view_model();
    let visible = Signal::derive(move || vm.visible());
    let load_error = Signal::derive(move || vm.users.get().and_then(Result::err));
    let loading = move || vm.users.loading().get();

    view! {
        <DashboardLayout title="Users">
            <ManagementToolbar
                filter=vm.filter
                search=vm.search
                add_label="Add User"
                on_add=Callback::new(move |_| vm.open_form(None))
            />
            <InlineErrorMessage error=load_error />
            <div class="bg-surface-elevated rounded-lg shadow overflow-x-auto">
                <Show when=loading fallback=move || view! {
                    <UserTable
                        items=visible
                        on_edit=Callback::new(move |user: User| vm.open_form(Some(&user)))
                        on_toggle=Callback::new(move |user: User| vm.request_toggle(&user))
                    />
                }>
                    <LoadingSpinner />
                </Show>
            </div>
            <UserFormModal vm=vm />
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
