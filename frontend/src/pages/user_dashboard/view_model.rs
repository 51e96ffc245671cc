use super::{repository::UserDashboardRepository, utils::StatusCounts};
use crate::{
    api::{ApiClient, ApiError, VisitorRequest},
    state::auth::use_auth,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct UserDashboardViewModel {
    pub requests: Resource<Option<String>, Result<Vec<VisitorRequest>, ApiError>>,
}

impl UserDashboardViewModel {
    pub fn items(&self) -> Vec<VisitorRequest> {
        self.requests.get().and_then(Result::ok).unwrap_or_default()
    }

    pub fn counts(&self) -> StatusCounts {
        self.requests.with(|state| match state {
            Some(Ok(items)) => StatusCounts::from_requests(items),
            _ => StatusCounts::default(),
        })
    }
}

pub fn use_user_dashboard_view_model() -> UserDashboardViewModel {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = UserDashboardRepository::new_with_client(Rc::new(api));

    let requests = create_resource(
        move || auth.get().user.map(|user| user.id),
        move |user_id| {
            let repo = repository.clone();
            async move {
                let user_id = user_id.ok_or_else(|| ApiError::unauthorized("Not signed in."))?;
                repo.my_requests(&user_id).await.map_err(|err| {
                    log::error!("Error fetching your requests: {}", err);
                    err
                })
            }
        },
    );

    UserDashboardViewModel { requests }
}
