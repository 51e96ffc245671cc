use super::utils::AdminStats;
use crate::api::{ActiveFilter, ApiClient, ApiError};
use chrono::NaiveDate;
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminDashboardRepository {
    client: Rc<ApiClient>,
}

impl AdminDashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn load_stats(&self, today: NaiveDate) -> Result<AdminStats, ApiError> {
        let visitors = self.client.get_all_visitors().await?;
        let users = self.client.get_users(ActiveFilter::Active).await?;
        Ok(AdminStats::compute(&visitors, &users, today))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    #[tokio::test]
    async fn stats_combine_visitor_and_user_lists() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/visitors/getall");
            then.status(200).json_body(json!({
                "data": {
                    "data": [
                        { "id": "1", "status": "pending", "date": "2030-01-10" },
                        { "id": "2", "status": "approved", "date": "2030-01-10" }
                    ],
                    "success": true
                }
            }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/users/getall");
            then.status(200)
                .json_body(json!({ "data": [{ "id": "u1" }, { "id": "u2" }, { "id": "u3" }] }));
        });
        let repo = AdminDashboardRepository::new_with_client(Rc::new(
            ApiClient::new_with_base_url(server.url("/api")),
        ));

        let stats = repo
            .load_stats(NaiveDate::from_ymd_opt(2030, 1, 10).unwrap())
            .await
            .unwrap();
        assert_eq!(stats.total_passes, 2);
        assert_eq!(stats.active_users, 3);
        assert_eq!(stats.pending_approvals, 1);
        assert_eq!(stats.approved_today, 1);
    }

    #[tokio::test]
    async fn failed_user_list_fails_the_load() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/visitors/getall");
            then.status(200).json_body(json!({ "data": [] }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/users/getall");
            then.status(500).json_body(json!({ "message": "boom" }));
        });
        let repo = AdminDashboardRepository::new_with_client(Rc::new(
            ApiClient::new_with_base_url(server.url("/api")),
        ));
        let err = repo
            .load_stats(NaiveDate::from_ymd_opt(2030, 1, 10).unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.error, "boom");
    }
}
