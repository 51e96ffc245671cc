use crate::api::{self, ApiClient, ApiError, LoginRequest, LoginResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl Default for LoginRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Signs in and stores the returned token for later calls.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = self.client.login(&request).await?;
        api::persist_token(&response.token)?;
        Ok(response)
    }

    /// The local session is cleared even when the server call fails.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self.client.logout().await;
        api::clear_session();
        result
    }
}
