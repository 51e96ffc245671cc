use super::{repository::AdminDashboardRepository, utils::AdminStats};
use crate::{
    api::{ApiClient, ApiError},
    utils::time::today_local,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AdminDashboardViewModel {
    pub stats: Resource<u32, Result<AdminStats, ApiError>>,
    pub reload: RwSignal<u32>,
}

impl AdminDashboardViewModel {
    pub fn current(&self) -> AdminStats {
        self.stats.get().and_then(Result::ok).unwrap_or_default()
    }

    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

pub fn use_admin_dashboard_view_model() -> AdminDashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AdminDashboardRepository::new_with_client(Rc::new(api));
    let reload = create_rw_signal(0u32);

    let stats = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repository.clone();
            async move {
                repo.load_stats(today_local()).await.map_err(|err| {
                    log::error!("Error fetching dashboard data: {}", err);
                    err
                })
            }
        },
    );

    AdminDashboardViewModel { stats, reload }
}
