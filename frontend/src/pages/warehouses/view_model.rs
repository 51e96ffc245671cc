use super::{
    repository::WarehousesRepository,
    utils::{filter_warehouses, WarehouseForm},
};
use crate::{
    api::{ActiveFilter, ApiClient, ApiError, Warehouse, WarehousePayload},
    components::{alert::AlertState, management::ToggleTarget},
};
use leptos::*;
use std::rc::Rc;

pub const NOUN: &str = "Warehouse";

#[derive(Clone, Copy)]
pub struct WarehousesViewModel {
    pub filter: RwSignal<ActiveFilter>,
    pub search: RwSignal<String>,
    pub reload: RwSignal<u32>,
    pub warehouses: Resource<(ActiveFilter, u32), Result<Vec<Warehouse>, ApiError>>,
    pub editing: RwSignal<Option<WarehouseForm>>,
    pub form_error: RwSignal<Option<String>>,
    pub save_action: Action<(Option<String>, WarehousePayload), Result<(), ApiError>>,
    pub toggle_target: RwSignal<Option<ToggleTarget>>,
    pub toggle_action: Action<ToggleTarget, Result<ToggleTarget, ApiError>>,
    pub alert: RwSignal<Option<AlertState>>,
}

impl WarehousesViewModel {
    pub fn visible(&self) -> Vec<Warehouse> {
        let term = self.search.get();
        self.warehouses.with(|state| match state {
            Some(Ok(items)) => filter_warehouses(items, &term),
            _ => Vec::new(),
        })
    }

    pub fn open_create(&self) {
        self.form_error.set(None);
        self.editing.set(Some(WarehouseForm::default()));
    }

    pub fn open_edit(&self, warehouse: &Warehouse) {
        self.form_error.set(None);
        self.editing.set(Some(WarehouseForm::from_warehouse(warehouse)));
    }

    pub fn close_form(&self) {
        self.editing.set(None);
    }

    pub fn submit_form(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        let Some(form) = self.editing.get_untracked() else {
            return;
        };
        match form.to_payload() {
            Ok(payload) => {
                self.form_error.set(None);
                self.save_action.dispatch((form.id, payload));
            }
            Err(message) => self.form_error.set(Some(message)),
        }
    }

    pub fn request_toggle(&self, warehouse: &Warehouse) {
        self.toggle_target.set(Some(ToggleTarget::for_entity(
            &warehouse.id,
            &warehouse.name,
            warehouse.is_active,
        )));
    }
}

pub fn use_warehouses_view_model() -> WarehousesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = WarehousesRepository::new_with_client(Rc::new(api));

    let filter = create_rw_signal(ActiveFilter::default());
    let search = create_rw_signal(String::new());
    let reload = create_rw_signal(0u32);
    let editing = create_rw_signal(None::<WarehouseForm>);
    let form_error = create_rw_signal(None::<String>);
    let toggle_target = create_rw_signal(None::<ToggleTarget>);
    let alert = create_rw_signal(None::<AlertState>);

    let repo_for_list = repository.clone();
    let warehouses = create_resource(
        move || (filter.get(), reload.get()),
        move |(filter, _)| {
            let repo = repo_for_list.clone();
            async move {
                repo.list(filter).await.map_err(|err| {
                    log::error!("Error fetching warehouses: {}", err);
                    err
                })
            }
        },
    );

    let repo_for_save = repository.clone();
    let save_action = create_action(move |(id, payload): &(Option<String>, WarehousePayload)| {
        let repo = repo_for_save.clone();
        let id = id.clone();
        let payload = payload.clone();
        async move { repo.save(id.as_deref(), &payload).await }
    });

    let toggle_action = create_action(move |target: &ToggleTarget| {
        let repo = repository.clone();
        let target = target.clone();
        async move { repo.set_active(&target.id, target.enable).await.map(|_| target) }
    });

    create_effect(move |_| match save_action.value().get() {
        Some(Ok(())) => {
            editing.set(None);
            alert.set(Some(AlertState::success("Warehouse saved successfully.")));
            reload.update(|value| *value = value.wrapping_add(1));
        }
        Some(Err(err)) => {
            log::error!("Error saving warehouse: {}", err);
            form_error.set(Some(err.error));
        }
        None => {}
    });

    create_effect(move |_| match toggle_action.value().get() {
        Some(Ok(target)) => {
            toggle_target.set(None);
            alert.set(Some(AlertState::success(target.success_message(NOUN))));
            reload.update(|value| *value = value.wrapping_add(1));
        }
        Some(Err(err)) => {
            log::error!("Error toggling warehouse: {}", err);
            toggle_target.set(None);
            alert.set(Some(AlertState::error(err.error)));
        }
        None => {}
    });

    WarehousesViewModel {
        filter,
        search,
        reload,
        warehouses,
        editing,
        form_error,
        save_action,
        toggle_target,
        toggle_action,
        alert,
    }
}
