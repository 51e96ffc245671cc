use super::{
    repository::ReceptionRepository,
    utils::{filter_requests, ReceptionStats, ReceptionView, VisitForm},
};
use crate::{
    api::{ApiClient, ApiError, User, VisitRecordPayload, VisitorRequest},
    components::alert::AlertState,
    state::auth::use_auth,
};
use leptos::*;
use std::rc::Rc;

type RequestsResource =
    Resource<(Option<User>, ReceptionView, u32), Result<Vec<VisitorRequest>, ApiError>>;

#[derive(Clone, Copy)]
pub struct ReceptionViewModel {
    pub view: RwSignal<ReceptionView>,
    pub search: RwSignal<String>,
    pub reload: RwSignal<u32>,
    pub requests: RequestsResource,
    pub visit_form: RwSignal<Option<VisitForm>>,
    pub record_action: Action<(String, VisitRecordPayload), Result<(), ApiError>>,
    pub alert: RwSignal<Option<AlertState>>,
}

impl ReceptionViewModel {
    pub fn loaded(&self) -> Vec<VisitorRequest> {
        self.requests
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    }

    pub fn visible(&self) -> Vec<VisitorRequest> {
        let term = self.search.get();
        self.requests.with(|state| match state {
            Some(Ok(items)) => filter_requests(items, &term),
            _ => Vec::new(),
        })
    }

    pub fn stats(&self) -> ReceptionStats {
        self.requests.with(|state| match state {
            Some(Ok(items)) => ReceptionStats::from_requests(items),
            _ => ReceptionStats::default(),
        })
    }

    pub fn switch_view(&self, view: ReceptionView) {
        if self.view.get_untracked() != view {
            self.view.set(view);
        }
    }

    pub fn open_visit(&self, request: &VisitorRequest) {
        self.visit_form.set(Some(VisitForm::from_request(request)));
    }

    pub fn close_visit(&self) {
        self.visit_form.set(None);
    }

    pub fn submit_visit(&self) {
        if self.record_action.pending().get_untracked() {
            return;
        }
        if let Some(form) = self.visit_form.get_untracked() {
            self.record_action
                .dispatch((form.request_id.clone(), form.to_payload()));
        }
    }
}

pub fn use_reception_view_model() -> ReceptionViewModel {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ReceptionRepository::new_with_client(Rc::new(api));

    let view = create_rw_signal(ReceptionView::default());
    let search = create_rw_signal(String::new());
    let reload = create_rw_signal(0u32);
    let visit_form = create_rw_signal(None::<VisitForm>);
    let alert = create_rw_signal(None::<AlertState>);

    let repo_for_resource = repository.clone();
    let requests = create_resource(
        move || (auth.get().user, view.get(), reload.get()),
        move |(user, view, _)| {
            let repo = repo_for_resource.clone();
            async move {
                let user = user.ok_or_else(|| ApiError::unauthorized("Not signed in."))?;
                repo.load(view, &user).await.map_err(|err| {
                    log::error!("Error fetching {}: {}", view.label(), err);
                    err
                })
            }
        },
    );

    let record_action = create_action(move |(id, payload): &(String, VisitRecordPayload)| {
        let repo = repository.clone();
        let id = id.clone();
        let payload = payload.clone();
        async move { repo.record_visit(&id, &payload).await }
    });

    create_effect(move |_| match record_action.value().get() {
        Some(Ok(())) => {
            visit_form.set(None);
            alert.set(Some(AlertState::success("Visit details updated.")));
            reload.update(|value| *value = value.wrapping_add(1));
        }
        Some(Err(err)) => {
            log::error!("Error recording visit: {}", err);
            alert.set(Some(AlertState::error(err.error)));
        }
        None => {}
    });

    ReceptionViewModel {
        view,
        search,
        reload,
        requests,
        visit_form,
        record_action,
        alert,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::VisitStatus;
    use crate::test_support::helpers::{provide_auth, receptionist_user};
    use crate::test_support::ssr::with_suppressed_runtime;
    use serde_json::json;

    fn loaded_vm() -> ReceptionViewModel {
        provide_auth(Some(receptionist_user()));
        let vm = use_reception_view_model();
        let items: Vec<VisitorRequest> = serde_json::from_value(json!([
            { "id": "v1", "name": "Alice", "status": "pending" },
            { "id": "v2", "name": "Bob", "status": "approved", "visitStatus": "visited" }
        ]))
        .unwrap();
        vm.requests.set(Ok(items));
        vm
    }

    #[test]
    fn search_narrows_visible_rows_only() {
        with_suppressed_runtime(|| {
            let vm = loaded_vm();
            vm.search.set("bob".into());
            assert_eq!(vm.visible().len(), 1);
            assert_eq!(vm.loaded().len(), 2);
            assert_eq!(vm.stats().total, 2);
            vm.search.set(String::new());
            assert_eq!(vm.visible().len(), 2);
        });
    }

    #[test]
    fn opening_visit_copies_tracking_fields() {
        with_suppressed_runtime(|| {
            let vm = loaded_vm();
            let bob = vm.loaded()[1].clone();
            vm.open_visit(&bob);
            let form = vm.visit_form.get().unwrap();
            assert_eq!(form.request_id, "v2");
            assert_eq!(form.visit_status, VisitStatus::Visited);
            vm.close_visit();
            assert!(vm.visit_form.get().is_none());
        });
    }

    #[test]
    fn switching_view_updates_selection() {
        with_suppressed_runtime(|| {
            let vm = loaded_vm();
            vm.switch_view(ReceptionView::Today);
            assert_eq!(vm.view.get(), ReceptionView::Today);
        });
    }
}
