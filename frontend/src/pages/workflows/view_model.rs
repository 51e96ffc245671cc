use super::{
    repository::WorkflowsRepository,
    utils::{WorkflowForm, WorkflowFormErrors, WorkflowSave, DELETE_CONFIRM_MESSAGE, SAVE_FAILED_MESSAGE},
};
use crate::{
    api::{ApiClient, ApiError, User, VisitorType, Warehouse, WorkflowGroup, WorkflowStep},
    components::alert::AlertState,
    utils::location::confirm,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct WorkflowsViewModel {
    pub warehouses: Resource<(), Vec<Warehouse>>,
    pub visitor_types: Resource<(), Vec<VisitorType>>,
    pub selected_warehouse: RwSignal<String>,
    pub reload: RwSignal<u32>,
    pub workflows: Resource<(String, u32), Result<Vec<WorkflowGroup>, ApiError>>,
    pub approvers: Resource<String, Vec<User>>,
    pub editing: RwSignal<Option<WorkflowForm>>,
    pub form_errors: RwSignal<WorkflowFormErrors>,
    pub submit_error: RwSignal<Option<String>>,
    pub save_action: Action<WorkflowSave, Result<(), ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
    pub alert: RwSignal<Option<AlertState>>,
}

impl WorkflowsViewModel {
    pub fn groups(&self) -> Vec<WorkflowGroup> {
        self.workflows
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    }

    pub fn error_for(&self, field: &str) -> Option<String> {
        self.form_errors.with(|errors| errors.get(field).cloned())
    }

    pub fn open_create(&self) {
        self.open(WorkflowForm::default());
    }

    pub fn open_edit(&self, step: &WorkflowStep) {
        let approvers = untrack(|| self.approvers.get()).unwrap_or_default();
        self.open(WorkflowForm::from_step(step, &approvers));
    }

    fn open(&self, form: WorkflowForm) {
        self.form_errors.set(WorkflowFormErrors::new());
        self.submit_error.set(None);
        self.editing.set(Some(form));
    }

    pub fn close_form(&self) {
        self.editing.set(None);
    }

    pub fn submit_form(&self) -> bool {
        if self.save_action.pending().get_untracked() {
            return false;
        }
        let Some(form) = self.editing.get_untracked() else {
            return false;
        };
        self.submit_error.set(None);
        self.form_errors.set(form.validate());
        match form.to_save(&self.selected_warehouse.get_untracked()) {
            Some(request) => {
                self.save_action.dispatch(request);
                true
            }
            None => false,
        }
    }

    /// Deletes only after the browser confirmation is accepted.
    pub fn delete_step(&self, id: String) {
        if confirm(DELETE_CONFIRM_MESSAGE) {
            self.delete_action.dispatch(id);
        }
    }
}

pub fn use_workflows_view_model() -> WorkflowsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = WorkflowsRepository::new_with_client(Rc::new(api));

    let selected_warehouse = create_rw_signal(String::new());
    let reload = create_rw_signal(0u32);
    let editing = create_rw_signal(None::<WorkflowForm>);
    let form_errors = create_rw_signal(WorkflowFormErrors::new());
    let submit_error = create_rw_signal(None::<String>);
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

    let repo_for_types = repository.clone();
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

    let repo_for_approvers = repository.clone();
    let approvers = create_resource(
        move || selected_warehouse.get(),
        move |warehouse_id| {
            let repo = repo_for_approvers.clone();
            async move {
                if warehouse_id.is_empty() {
                    return Vec::new();
                }
                repo.approvers(&warehouse_id).await.unwrap_or_else(|err| {
                    log::error!("Error fetching users by warehouse: {}", err);
                    Vec::new()
                })
            }
        },
    );

    let repo_for_list = repository.clone();
    let workflows = create_resource(
        move || (selected_warehouse.get(), reload.get()),
        move |(warehouse_id, _)| {
            let repo = repo_for_list.clone();
            async move {
                if warehouse_id.is_empty() {
                    return Ok(Vec::new());
                }
                repo.list(&warehouse_id).await.map_err(|err| {
                    log::error!("Error fetching workflows: {}", err);
                    err
                })
            }
        },
    );

    let repo_for_save = repository.clone();
    let save_action = create_action(move |request: &WorkflowSave| {
        let repo = repo_for_save.clone();
        let request = request.clone();
        async move { repo.save(&request).await }
    });

    let delete_action = create_action(move |id: &String| {
        let repo = repository.clone();
        let id = id.clone();
        async move { repo.delete(&id).await }
    });

    create_effect(move |_| match save_action.value().get() {
        Some(Ok(())) => {
            editing.set(None);
            reload.update(|value| *value = value.wrapping_add(1));
        }
        Some(Err(err)) => {
            log::error!("Error saving workflow step: {}", err);
            let message = if err.error.is_empty() {
                SAVE_FAILED_MESSAGE.to_string()
            } else {
                err.error
            };
            submit_error.set(Some(message));
        }
        None => {}
    });

    create_effect(move |_| match delete_action.value().get() {
        Some(Ok(())) => reload.update(|value| *value = value.wrapping_add(1)),
        Some(Err(err)) => {
            log::error!("Error deleting workflow step: {}", err);
            alert.set(Some(AlertState::error(err.error)));
        }
        None => {}
    });

    WorkflowsViewModel {
        warehouses,
        visitor_types,
        selected_warehouse,
        reload,
        workflows,
        approvers,
        editing,
        form_errors,
        submit_error,
        save_action,
        delete_action,
        alert,
    }
}
