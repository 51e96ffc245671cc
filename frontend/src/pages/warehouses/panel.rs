use crate::{
    api::Warehouse,
    components::{
        alert::AlertDialog,
        error::InlineErrorMessage,
        layout::{DashboardLayout, LoadingSpinner},
        management::{ManagementToolbar, ToggleConfirm},
    },
    pages::warehouses::{
        components::{form_modal::WarehouseFormModal, table::WarehouseTable},
        view_model::{use_warehouses_view_model, NOUN},
    },
};
use leptos::*;

#[component]
pub fn WarehousesPanel() -> impl IntoView {
    let vm = use_warehouses_view_model();
    let visible = Signal::derive(move || vm.visible());
    let load_error = Signal::derive(move || vm.warehouses.get().and_then(Result::err));
    let loading = move || vm.warehouses.loading().get();

    view! {
        <DashboardLayout title="Warehouses">
            <ManagementToolbar
                filter=vm.filter
                search=vm.search
                add_label="Add Warehouse"
                on_add=Callback::new(move |_| vm.open_create())
            />
            <InlineErrorMessage error=load_error />
            <div class="bg-surface-elevated rounded-lg shadow overflow-x-auto">
                <Show when=loading fallback=move || view! {
                    <WarehouseTable
                        items=visible
                        on_edit=Callback::new(move |w: Warehouse| vm.open_edit(&w))
                        on_toggle=Callback::new(move |w: Warehouse| vm.request_toggle(&w))
                    />
                }>
                    <LoadingSpinner />
                </Show>
            </div>
            <WarehouseFormModal vm=vm />
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
