use super::utils::{ApprovalBuckets, ApprovalDecision};
use crate::api::{ApiClient, ApiError, RequestStatus};
use std::rc::Rc;

#[derive(Clone)]
pub struct ApproverRepository {
    client: Rc<ApiClient>,
}

impl ApproverRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Fetches all three buckets; any failure fails the whole load.
    pub async fn load_buckets(&self, user_id: &str) -> Result<ApprovalBuckets, ApiError> {
        let pending = self
            .client
            .get_visitors_by_user_status(user_id, RequestStatus::Pending)
            .await?;
        let approved = self
            .client
            .get_visitors_by_user_status(user_id, RequestStatus::Approved)
            .await?;
        let rejected = self
            .client
            .get_visitors_by_user_status(user_id, RequestStatus::Rejected)
            .await?;
        Ok(ApprovalBuckets {
            pending,
            approved,
            rejected,
        })
    }

    pub async fn decide(&self, request_id: &str, decision: ApprovalDecision) -> Result<(), ApiError> {
        match decision {
            ApprovalDecision::Approve => self.client.approve_visitor(request_id).await,
            ApprovalDecision::Reject => self.client.reject_visitor(request_id).await,
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::pages::approver_dashboard::utils::ApprovalTab;
    use serde_json::{json, Value};

    fn bucket_routes(server: &MockServer, pending: Value, approved: Value, rejected: Value) {
        for (status, body) in [("pending", pending), ("approved", approved), ("rejected", rejected)] {
            server.mock(|when, then| {
                when.method(GET)
                    .path(&format!("/api/visitors/user/u-approver/{}", status));
                then.status(200).json_body(json!({ "data": body }));
            });
        }
    }

    #[tokio::test]
    async fn approving_moves_request_between_buckets_after_refetch() {
        let server = MockServer::start_async().await;
        let visitor = json!({ "id": "v1", "name": "Vera", "status": "pending" });
        bucket_routes(&server, json!([visitor]), json!([]), json!([]));
        server.mock(|when, then| {
            when.method(PUT).path("/api/visitors/v1/approve");
            then.status(200).json_body(json!({ "success": true }));
        });
        let repo = ApproverRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));

        let before = repo.load_buckets("u-approver").await.unwrap();
        assert_eq!(before.tab_label(ApprovalTab::Pending), "Pending (1)");

        repo.decide("v1", ApprovalDecision::Approve).await.unwrap();
        let approved = json!({ "id": "v1", "name": "Vera", "status": "approved" });
        bucket_routes(&server, json!([]), json!([approved]), json!([]));

        let after = repo.load_buckets("u-approver").await.unwrap();
        assert_eq!(after.tab_label(ApprovalTab::Pending), "Pending (0)");
        assert_eq!(after.tab_label(ApprovalTab::Approved), "Approved (1)");
        assert_eq!(server.hits(PUT, "/api/visitors/v1/approve"), 1);
        assert_eq!(server.hits(GET, "/api/visitors/user/u-approver/rejected"), 2);
    }

    #[tokio::test]
    async fn reject_hits_reject_endpoint() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PUT).path("/api/visitors/v2/reject");
            then.status(200).json_body(json!({}));
        });
        let repo = ApproverRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));
        repo.decide("v2", ApprovalDecision::Reject).await.unwrap();
        assert_eq!(server.hits(PUT, "/api/visitors/v2/reject"), 1);
        assert_eq!(server.hits(PUT, "/api/visitors/v2/approve"), 0);
    }
}
