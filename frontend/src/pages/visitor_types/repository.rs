use crate::api::{ActiveFilter, ApiClient, ApiError, VisitorType, VisitorTypePayload};
use std::rc::Rc;

#[derive(Clone)]
pub struct VisitorTypesRepository {
    client: Rc<ApiClient>,
}

impl VisitorTypesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: ActiveFilter) -> Result<Vec<VisitorType>, ApiError> {
        self.client.get_visitor_types(filter).await
    }

    pub async fn save(&self, id: Option<&str>, payload: &VisitorTypePayload) -> Result<(), ApiError> {
        match id {
            Some(id) => self.client.update_visitor_type(id, payload).await,
            None => self.client.create_visitor_type(payload).await,
        }
    }

    pub async fn set_active(&self, id: &str, active: bool) -> Result<(), ApiError> {
        self.client.set_visitor_type_active(id, active).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    #[tokio::test]
    async fn disabled_filter_and_enable_use_own_endpoints() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/visitortypes/disabled");
            then.status(200)
                .json_body(json!({ "data": [{ "_id": "t9", "name": "Courier", "isActive": false }] }));
        });
        server.mock(|when, then| {
            when.method(PUT).path("/api/visitortypes/t9/enable");
            then.status(200).json_body(json!({ "success": true }));
        });
        let repo = VisitorTypesRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));

        let disabled = repo.list(ActiveFilter::Disabled).await.unwrap();
        assert_eq!(disabled[0].id, "t9");
        repo.set_active("t9", true).await.unwrap();
        assert_eq!(server.hits(PUT, "/api/visitortypes/t9/enable"), 1);
        assert_eq!(server.hits(GET, "/api/visitortypes/getall"), 0);
    }

    #[tokio::test]
    async fn save_surfaces_server_message() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/visitortypes/create");
            then.status(409).json_body(json!({ "message": "Visitor type already exists" }));
        });
        let repo = VisitorTypesRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));
        let err = repo
            .save(None, &VisitorTypePayload { name: "Courier".into() })
            .await
            .unwrap_err();
        assert_eq!(err.error, "Visitor type already exists");
    }
}
