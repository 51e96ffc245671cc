use super::{
    repository::TimeSlotsRepository,
    utils::{filter_time_slots, TimeSlotForm},
};
use crate::{
    api::{ApiClient, ApiError, TimeSlot, TimeSlotPayload, Warehouse},
    components::alert::AlertState,
};
use leptos::*;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSlot {
    pub warehouse_id: String,
    pub id: Option<String>,
    pub payload: TimeSlotPayload,
}

#[derive(Clone, Copy)]
pub struct TimeSlotsViewModel {
    pub warehouses: Resource<(), Vec<Warehouse>>,
    pub selected_warehouse: RwSignal<String>,
    pub search: RwSignal<String>,
    pub reload: RwSignal<u32>,
    pub slots: Resource<(String, u32), Result<Vec<TimeSlot>, ApiError>>,
    pub editing: RwSignal<Option<TimeSlotForm>>,
    pub save_action: Action<SaveSlot, Result<(), ApiError>>,
    pub delete_target: RwSignal<Option<TimeSlot>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
    pub alert: RwSignal<Option<AlertState>>,
}

impl TimeSlotsViewModel {
    pub fn visible(&self) -> Vec<TimeSlot> {
        let term = self.search.get();
        self.slots.with(|state| match state {
            Some(Ok(items)) => filter_time_slots(items, &term),
            _ => Vec::new(),
        })
    }

    pub fn select_warehouse(&self, warehouse_id: String) {
        self.search.set(String::new());
        self.selected_warehouse.set(warehouse_id);
    }

    pub fn open_form(&self, existing: Option<&TimeSlot>) {
        if self.selected_warehouse.with_untracked(String::is_empty) {
            self.alert
                .set(Some(AlertState::warning("Please select a warehouse first.")));
            return;
        }
        self.editing
            .set(Some(existing.map(TimeSlotForm::from_slot).unwrap_or_default()));
    }

    pub fn close_form(&self) {
        self.editing.set(None);
    }

    /// Validation failures surface in the alert dialog like server errors.
    pub fn submit_form(&self) -> bool {
        if self.save_action.pending().get_untracked() {
            return false;
        }
        let Some(form) = self.editing.get_untracked() else {
            return false;
        };
        match form.to_payload() {
            Ok(payload) => {
                self.save_action.dispatch(SaveSlot {
                    warehouse_id: self.selected_warehouse.get_untracked(),
                    id: form.id,
                    payload,
                });
                true
            }
            Err(message) => {
                self.alert.set(Some(AlertState::error(message)));
                false
            }
        }
    }

    pub fn confirm_delete(&self) {
        if let Some(slot) = self.delete_target.get_untracked() {
            self.delete_action.dispatch(slot.id);
        }
    }
}

pub fn use_time_slots_view_model() -> TimeSlotsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = TimeSlotsRepository::new_with_client(Rc::new(api));

    let selected_warehouse = create_rw_signal(String::new());
    let search = create_rw_signal(String::new());
    let reload = create_rw_signal(0u32);
    let editing = create_rw_signal(None::<TimeSlotForm>);
    let delete_target = create_rw_signal(None::<TimeSlot>);
    let alert = create_rw_signal(None::<AlertState>);

    let repo_for_warehouses = repository.clone();
    let warehouses = create_resource(
        || (),
        move |_| {
            let repo = repo_for_warehouses.clone();
            async move {
                repo.warehouses().await.unwrap_or_else(|err| {
                    log::error!("Error fetching warehouses: {}", err);
                    Vec::new()
                })
            }
        },
    );

    let repo_for_slots = repository.clone();
    let slots = create_resource(
        move || (selected_warehouse.get(), reload.get()),
        move |(warehouse_id, _)| {
            let repo = repo_for_slots.clone();
            async move {
                if warehouse_id.is_empty() {
                    return Ok(Vec::new());
                }
                repo.list(&warehouse_id).await.map_err(|err| {
                    log::error!("Error fetching time slots: {}", err);
                    err
                })
            }
        },
    );

    let repo_for_save = repository.clone();
    let save_action = create_action(move |request: &SaveSlot| {
        let repo = repo_for_save.clone();
        let request = request.clone();
        async move {
            repo.save(&request.warehouse_id, request.id.as_deref(), request.payload)
                .await
        }
    });

    let delete_action = create_action(move |id: &String| {
        let repo = repository.clone();
        let id = id.clone();
        async move { repo.delete(&id).await }
    });

    create_effect(move |_| match save_action.value().get() {
        Some(Ok(())) => {
            editing.set(None);
            alert.set(Some(AlertState::success("Time slot saved successfully.")));
            reload.update(|value| *value = value.wrapping_add(1));
        }
        Some(Err(err)) => {
            log::error!("Error saving time slot: {}", err);
            alert.set(Some(AlertState::error(err.error)));
        }
        None => {}
    });

    create_effect(move |_| match delete_action.value().get() {
        Some(Ok(())) => {
            delete_target.set(None);
            alert.set(Some(AlertState::success("Time slot deleted successfully.")));
            reload.update(|value| *value = value.wrapping_add(1));
        }
        Some(Err(err)) => {
            log::error!("Error deleting time slot: {}", err);
            delete_target.set(None);
            alert.set(Some(AlertState::error(err.error)));
        }
        None => {}
    });

    TimeSlotsViewModel {
        warehouses,
        selected_warehouse,
        search,
        reload,
        slots,
        editing,
        save_action,
        delete_target,
        delete_action,
        alert,
    }
}
