use crate::api::{ActiveFilter, ApiClient, ApiError, User, UserPayload, Warehouse};
use std::rc::Rc;

#[derive(Clone)]
pub struct UsersRepository {
    client: Rc<ApiClient>,
}

impl UsersRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: ActiveFilter) -> Result<Vec<User>, ApiError> {
        self.client.get_users(filter).await
    }

    pub async fn roles(&self) -> Result<Vec<String>, ApiError> {
        self.client.get_roles().await
    }

    pub async fn warehouses(&self) -> Result<Vec<Warehouse>, ApiError> {
        self.client.get_warehouses(ActiveFilter::Active).await
    }

    pub async fn save(&self, id: Option<&str>, payload: &UserPayload) -> Result<(), ApiError> {
        match id {
            Some(id) => self.client.update_user(id, payload).await,
            None => self.client.create_user(payload).await,
        }
    }

    pub async fn set_active(&self, id: &str, active: bool) -> Result<(), ApiError> {
        self.client.set_user_active(id, active).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    fn repo(server: &MockServer) -> UsersRepository {
        UsersRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(server.url("/api"))))
    }

    #[tokio::test]
    async fn roles_accept_strings_or_objects() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/role/getall");
            then.status(200)
                .json_body(json!({ "data": ["Admin", { "name": "Approver" }] }));
        });
        assert_eq!(
            repo(&server).roles().await.unwrap(),
            vec!["Admin".to_string(), "Approver".to_string()]
        );
    }

    #[tokio::test]
    async fn update_without_password_omits_field() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PUT).path("/api/users/u1");
            then.status(200).json_body(json!({ "success": true }));
        });
        let payload = UserPayload {
            name: "Rita".into(),
            email: "rita@example.com".into(),
            phone: "5550100".into(),
            password: None,
            warehouse_id: "w1".into(),
            role: "Receptionist".into(),
        };
        repo(&server).save(Some("u1"), &payload).await.unwrap();
        let body = server.requests()[0].body.clone().unwrap();
        assert!(body.get("password").is_none());
        assert_eq!(body["role"], "Receptionist");
    }

    #[tokio::test]
    async fn disable_hits_disable_endpoint() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PUT).path("/api/users/u1/disable");
            then.status(200).json_body(json!({ "success": true }));
        });
        repo(&server).set_active("u1", false).await.unwrap();
        assert_eq!(server.hits(PUT, "/api/users/u1/disable"), 1);
    }
}
