use super::{
    repository::ApproverRepository,
    utils::{ApprovalBuckets, ApprovalDecision, ApprovalTab},
};
use crate::{
    api::{ApiClient, ApiError},
    components::alert::AlertState,
    state::auth::use_auth,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct ApproverViewModel {
    pub tab: RwSignal<ApprovalTab>,
    pub reload: RwSignal<u32>,
    pub buckets: Resource<(Option<String>, u32), Result<ApprovalBuckets, ApiError>>,
    pub decision_action: Action<(String, ApprovalDecision), Result<ApprovalDecision, ApiError>>,
    pub alert: RwSignal<Option<AlertState>>,
}

impl ApproverViewModel {
    /// Last successful load; empty while loading or after a failure.
    pub fn snapshot(&self) -> ApprovalBuckets {
        self.buckets
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    }

    pub fn decide(&self, request_id: String, decision: ApprovalDecision) {
        if self.decision_action.pending().get_untracked() {
            return;
        }
        self.decision_action.dispatch((request_id, decision));
    }
}

pub fn use_approver_view_model() -> ApproverViewModel {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ApproverRepository::new_with_client(Rc::new(api));

    let tab = create_rw_signal(ApprovalTab::default());
    let reload = create_rw_signal(0u32);
    let alert = create_rw_signal(None::<AlertState>);

    let repo_for_resource = repository.clone();
    let buckets = create_resource(
        move || (auth.get().user.map(|user| user.id), reload.get()),
        move |(user_id, _)| {
            let repo = repo_for_resource.clone();
            async move {
                let user_id = user_id.ok_or_else(|| ApiError::unauthorized("Not signed in."))?;
                repo.load_buckets(&user_id).await.map_err(|err| {
                    log::error!("Error fetching approval requests: {}", err);
                    err
                })
            }
        },
    );

    let decision_action = create_action(move |(id, decision): &(String, ApprovalDecision)| {
        let repo = repository.clone();
        let id = id.clone();
        let decision = *decision;
        async move { repo.decide(&id, decision).await.map(|_| decision) }
    });

    create_effect(move |_| {
        if let Some(result) = decision_action.value().get() {
            match result {
                Ok(decision) => {
                    alert.set(Some(AlertState::success(decision.success_message())));
                    reload.update(|value| *value = value.wrapping_add(1));
                }
                Err(err) => {
                    log::error!("Error updating visitor request: {}", err);
                    alert.set(Some(AlertState::error(err.error)));
                }
            }
        }
    });

    ApproverViewModel {
        tab,
        reload,
        buckets,
        decision_action,
        alert,
    }
}
