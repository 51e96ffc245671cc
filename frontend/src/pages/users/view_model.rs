use super::{
    repository::UsersRepository,
    utils::{filter_users, role_options, UserForm, UserFormErrors},
};
use crate::{
    api::{ActiveFilter, ApiClient, ApiError, User, UserPayload, Warehouse},
    components::{alert::AlertState, management::ToggleTarget},
};
use leptos::*;
use std::rc::Rc;

pub const NOUN: &str = "User";

#[derive(Clone, Copy)]
pub struct UsersViewModel {
    pub filter: RwSignal<ActiveFilter>,
    pub search: RwSignal<String>,
    pub reload: RwSignal<u32>,
    pub users: Resource<(ActiveFilter, u32), Result<Vec<User>, ApiError>>,
    pub roles: Resource<(), Vec<String>>,
    pub warehouses: Resource<(), Vec<Warehouse>>,
    pub editing: RwSignal<Option<UserForm>>,
    pub form_errors: RwSignal<UserFormErrors>,
    pub server_error: RwSignal<Option<String>>,
    pub save_action: Action<(Option<String>, UserPayload), Result<(), ApiError>>,
    pub toggle_target: RwSignal<Option<ToggleTarget>>,
    pub toggle_action: Action<ToggleTarget, Result<ToggleTarget, ApiError>>,
    pub alert: RwSignal<Option<AlertState>>,
}

impl UsersViewModel {
    pub fn visible(&self) -> Vec<User> {
        let term = self.search.get();
        self.users.with(|state| match state {
            Some(Ok(items)) => filter_users(items, &term),
            _ => Vec::new(),
        })
    }

    pub fn open_form(&self, existing: Option<&User>) {
        self.form_errors.set(UserFormErrors::new());
        self.server_error.set(None);
        self.editing
            .set(Some(existing.map(UserForm::from_user).unwrap_or_default()));
    }

    pub fn close_form(&self) {
        self.editing.set(None);
    }

    pub fn error_for(&self, key: &str) -> Option<String> {
        self.form_errors.with(|errors| errors.get(key).cloned())
    }

    pub fn submit_form(&self) -> bool {
        if self.save_action.pending().get_untracked() {
            return false;
        }
        let Some(form) = self.editing.get_untracked() else {
            return false;
        };
        let errors = form.validate();
        let valid = errors.is_empty();
        self.form_errors.set(errors);
        if valid {
            self.server_error.set(None);
            self.save_action.dispatch((form.id.clone(), form.to_payload()));
        }
        valid
    }

    pub fn request_toggle(&self, user: &User) {
        self.toggle_target.set(Some(ToggleTarget::for_entity(
            &user.id,
            &user.name,
            user.is_active,
        )));
    }
}

pub fn use_users_view_model() -> UsersViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = UsersRepository::new_with_client(Rc::new(api));

    let filter = create_rw_signal(ActiveFilter::default());
    let search = create_rw_signal(String::new());
    let reload = create_rw_signal(0u32);
    let editing = create_rw_signal(None::<UserForm>);
    let form_errors = create_rw_signal(UserFormErrors::new());
    let server_error = create_rw_signal(None::<String>);
    let toggle_target = create_rw_signal(None::<ToggleTarget>);
    let alert = create_rw_signal(None::<AlertState>);

    let repo_for_list = repository.clone();
    let users = create_resource(
        move || (filter.get(), reload.get()),
        move |(filter, _)| {
            let repo = repo_for_list.clone();
            async move {
                repo.list(filter).await.map_err(|err| {
                    log::error!("Error fetching users: {}", err);
                    err
                })
            }
        },
    );

    let repo_for_roles = repository.clone();
    let roles = create_resource(
        || (),
        move |_| {
            let repo = repo_for_roles.clone();
            async move {
                let server_roles = repo.roles().await.unwrap_or_else(|err| {
                    log::error!("Error fetching roles: {}", err);
                    Vec::new()
                });
                role_options(server_roles)
            }
        },
    );

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

    let repo_for_save = repository.clone();
    let save_action = create_action(move |(id, payload): &(Option<String>, UserPayload)| {
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
            alert.set(Some(AlertState::success("User saved successfully.")));
            reload.update(|value| *value = value.wrapping_add(1));
        }
        Some(Err(err)) => {
            log::error!("Error saving user: {}", err);
            server_error.set(Some(err.error));
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
            log::error!("Error toggling user: {}", err);
            toggle_target.set(None);
            alert.set(Some(AlertState::error(err.error)));
        }
        None => {}
    });

    UsersViewModel {
        filter,
        search,
        reload,
        users,
        roles,
        warehouses,
        editing,
        form_errors,
        server_error,
        save_action,
        toggle_target,
        toggle_action,
        alert,
    }
}
