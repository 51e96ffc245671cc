use super::{
    repository::LandingRepository,
    utils::{
        AccompanyingField, SlotLoadGuard, VisitorFormErrors, VisitorFormState,
        SUBMIT_FAILED_MESSAGE, SUBMIT_SUCCESS_MESSAGE,
    },
};
use crate::{
    api::{ApiClient, ApiError, TimeSlot, VisitorRequestPayload, VisitorType, Warehouse},
    components::alert::AlertState,
    utils::time::today_local,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct LandingViewModel {
    pub form: RwSignal<VisitorFormState>,
    pub errors: RwSignal<VisitorFormErrors>,
    pub visitor_types: Resource<(), Vec<VisitorType>>,
    pub warehouses: Resource<(), Vec<Warehouse>>,
    pub time_slots: RwSignal<Vec<TimeSlot>>,
    pub submit_action: Action<VisitorRequestPayload, Result<(), ApiError>>,
    pub alert: RwSignal<Option<AlertState>>,
}

impl LandingViewModel {
    pub fn set_warehouse(&self, warehouse_id: String) {
        self.form.update(|form| form.set_warehouse(warehouse_id));
    }

    pub fn add_accompanying(&self) {
        self.form.update(|form| {
            form.add_accompanying();
        });
    }

    pub fn remove_accompanying(&self, key: u32) {
        self.form.update(|form| form.remove_accompanying(key));
    }

    pub fn update_accompanying(&self, key: u32, field: AccompanyingField, value: String) {
        self.form
            .update(|form| form.update_accompanying(key, field, value));
    }

    pub fn error_for(&self, field: &str) -> Option<String> {
        self.errors.with(|errors| errors.get(field).cloned())
    }

    /// Validates and dispatches; returns whether a request was sent.
    pub fn submit(&self) -> bool {
        if self.submit_action.pending().get_untracked() {
            return false;
        }
        let form = self.form.get_untracked();
        let errors = form.validate(today_local());
        let valid = errors.is_empty();
        self.errors.set(errors);
        if valid {
            self.submit_action.dispatch(form.to_payload());
        }
        valid
    }
}

pub fn use_landing_view_model() -> LandingViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = LandingRepository::new_with_client(Rc::new(api));

    let form = create_rw_signal(VisitorFormState::default());
    let errors = create_rw_signal(VisitorFormErrors::new());
    let time_slots = create_rw_signal(Vec::<TimeSlot>::new());
    let alert = create_rw_signal(None::<AlertState>);

    let repo_for_types = repo.clone();
    let visitor_types = create_resource(
        || (),
        move |_| {
            let repo = repo_for_types.clone();
            async move {
                repo.visitor_types().await.unwrap_or_else(|err| {
                    log::error!("Error fetching visitor types: {}", err);
                    Vec::new()
                })
            }
        },
    );

    let repo_for_warehouses = repo.clone();
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

    let selected_warehouse = create_memo(move |_| form.with(|f| f.warehouse_id.clone()));
    let guard = SlotLoadGuard::default();
    let repo_for_slots = repo.clone();
    create_effect(move |_| {
        let warehouse_id = selected_warehouse.get();
        let ticket = guard.begin();
        if warehouse_id.is_empty() {
            time_slots.set(Vec::new());
            return;
        }
        let repo = repo_for_slots.clone();
        let guard = guard.clone();
        spawn_local(async move {
            if let Some(slots) = repo
                .time_slots_for_ticket(&guard, ticket, &warehouse_id)
                .await
            {
                time_slots.set(slots);
            }
        });
    });

    let submit_action = create_action(move |payload: &VisitorRequestPayload| {
        let repo = repo.clone();
        let payload = payload.clone();
        async move { repo.submit(&payload).await }
    });

    create_effect(move |_| match submit_action.value().get() {
        Some(Ok(())) => {
            form.update(VisitorFormState::reset);
            errors.set(VisitorFormErrors::new());
            alert.set(Some(AlertState::success(SUBMIT_SUCCESS_MESSAGE)));
        }
        Some(Err(err)) => {
            log::error!("Error submitting visitor request: {}", err);
            alert.set(Some(AlertState::error(SUBMIT_FAILED_MESSAGE)));
        }
        None => {}
    });

    LandingViewModel {
        form,
        errors,
        visitor_types,
        warehouses,
        time_slots,
        submit_action,
        alert,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_suppressed_runtime;

    #[test]
    fn invalid_submit_collects_errors_without_dispatch() {
        with_suppressed_runtime(|| {
            let vm = use_landing_view_model();
            assert!(!vm.submit());
            assert_eq!(vm.error_for("email").as_deref(), Some("Email is required"));
            assert_eq!(vm.submit_action.version().get(), 0);
        });
    }

    #[test]
    fn add_control_respects_cap() {
        with_suppressed_runtime(|| {
            let vm = use_landing_view_model();
            for _ in 0..6 {
                vm.add_accompanying();
            }
            assert_eq!(vm.form.get().accompanying.len(), 4);
            let key = vm.form.get().accompanying[0].key;
            vm.remove_accompanying(key);
            assert!(vm.form.get().can_add_more());
        });
    }

    #[test]
    fn clearing_warehouse_clears_slot_choice() {
        with_suppressed_runtime(|| {
            let vm = use_landing_view_model();
            vm.set_warehouse("w1".into());
            vm.form.update(|f| f.warehouse_time_slot_id = "s1".into());
            vm.set_warehouse(String::new());
            assert!(vm.form.get().warehouse_time_slot_id.is_empty());
        });
    }
}
