use super::{
    repository::VisitorTypesRepository,
    utils::{filter_visitor_types, VisitorTypeForm},
};
use crate::{
    api::{ActiveFilter, ApiClient, ApiError, VisitorType, VisitorTypePayload},
    components::{alert::AlertState, management::ToggleTarget},
};
use leptos::*;
use std::rc::Rc;

pub const NOUN: &str = "Visitor Type";

#[derive(Clone, Copy)]
pub struct VisitorTypesViewModel {
    pub filter: RwSignal<ActiveFilter>,
    pub search: RwSignal<String>,
    pub reload: RwSignal<u32>,
    pub visitor_types: Resource<(ActiveFilter, u32), Result<Vec<VisitorType>, ApiError>>,
    pub editing: RwSignal<Option<VisitorTypeForm>>,
    pub form_error: RwSignal<Option<String>>,
    pub save_action: Action<(Option<String>, VisitorTypePayload), Result<(), ApiError>>,
    pub toggle_target: RwSignal<Option<ToggleTarget>>,
    pub toggle_action: Action<ToggleTarget, Result<ToggleTarget, ApiError>>,
    pub alert: RwSignal<Option<AlertState>>,
}

impl VisitorTypesViewModel {
    pub fn visible(&self) -> Vec<VisitorType> {
        let term = self.search.get();
        self.visitor_types.with(|state| match state {
            Some(Ok(items)) => filter_visitor_types(items, &term),
            _ => Vec::new(),
        })
    }

    pub fn open_form(&self, existing: Option<&VisitorType>) {
        self.form_error.set(None);
        self.editing.set(Some(
            existing
                .map(VisitorTypeForm::from_visitor_type)
                .unwrap_or_default(),
        ));
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

    pub fn request_toggle(&self, visitor_type: &VisitorType) {
        self.toggle_target.set(Some(ToggleTarget::for_entity(
            &visitor_type.id,
            &visitor_type.name,
            visitor_type.is_active,
        )));
    }
}

pub fn use_visitor_types_view_model() -> VisitorTypesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = VisitorTypesRepository::new_with_client(Rc::new(api));

    let filter = create_rw_signal(ActiveFilter::default());
    let search = create_rw_signal(String::new());
    let reload = create_rw_signal(0u32);
    let editing = create_rw_signal(None::<VisitorTypeForm>);
    let form_error = create_rw_signal(None::<String>);
    let toggle_target = create_rw_signal(None::<ToggleTarget>);
    let alert = create_rw_signal(None::<AlertState>);

    let repo_for_list = repository.clone();
    let visitor_types = create_resource(
        move || (filter.get(), reload.get()),
        move |(filter, _)| {
            let repo = repo_for_list.clone();
            async move {
                repo.list(filter).await.map_err(|err| {
                    log::error!("Error fetching visitor types: {}", err);
                    err
                })
            }
        },
    );

    let repo_for_save = repository.clone();
    let save_action =
        create_action(move |(id, payload): &(Option<String>, VisitorTypePayload)| {
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
            alert.set(Some(AlertState::success("Visitor type saved successfully.")));
            reload.update(|value| *value = value.wrapping_add(1));
        }
        Some(Err(err)) => {
            log::error!("Error saving visitor type: {}", err);
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
            log::error!("Error toggling visitor type: {}", err);
            toggle_target.set(None);
            alert.set(Some(AlertState::error(err.error)));
        }
        None => {}
    });

    VisitorTypesViewModel {
        filter,
        search,
        reload,
        visitor_types,
        editing,
        form_error,
        save_action,
        toggle_target,
        toggle_action,
        alert,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_suppressed_runtime;

    #[test]
    fn edit_form_is_prefilled() {
        with_suppressed_runtime(|| {
            let vm = use_visitor_types_view_model();
            let courier = VisitorType {
                id: "t1".into(),
                name: "Courier".into(),
                is_active: true,
            };
            vm.open_form(Some(&courier));
            let form = vm.editing.get().unwrap();
            assert_eq!(form.id.as_deref(), Some("t1"));
            assert_eq!(form.name, "Courier");
            vm.close_form();
            assert!(vm.editing.get().is_none());
        });
    }

    #[test]
    fn filter_change_keys_the_list() {
        with_suppressed_runtime(|| {
            let vm = use_visitor_types_view_model();
            assert_eq!(vm.filter.get(), ActiveFilter::Active);
            vm.filter.update(|f| *f = f.toggled());
            assert_eq!(vm.filter.get(), ActiveFilter::Disabled);
        });
    }
}
