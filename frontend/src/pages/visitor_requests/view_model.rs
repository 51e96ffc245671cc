use super::{repository::VisitorRequestsRepository, utils::filter_visitor_requests};
use crate::api::{ApiClient, ApiError, VisitorRequest};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct VisitorRequestsViewModel {
    pub search: RwSignal<String>,
    pub requests: Resource<(), Result<Vec<VisitorRequest>, ApiError>>,
}

impl VisitorRequestsViewModel {
    pub fn visible(&self) -> Vec<VisitorRequest> {
        let term = self.search.get();
        self.requests.with(|state| match state {
            Some(Ok(items)) => filter_visitor_requests(items, &term),
            _ => Vec::new(),
        })
    }
}

pub fn use_visitor_requests_view_model() -> VisitorRequestsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = VisitorRequestsRepository::new_with_client(Rc::new(api));
    let search = create_rw_signal(String::new());

    let requests = create_resource(
        || (),
        move |_| {
            let repo = repository.clone();
            async move {
                repo.list().await.map_err(|err| {
                    log::error!("Error fetching visitors: {}", err);
                    err
                })
            }
        },
    );

    VisitorRequestsViewModel { search, requests }
}
