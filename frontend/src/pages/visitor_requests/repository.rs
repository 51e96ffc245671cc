use crate::api::{ApiClient, ApiError, VisitorRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct VisitorRequestsRepository {
    client: Rc<ApiClient>,
}

impl VisitorRequestsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<VisitorRequest>, ApiError> {
        self.client.get_all_visitors().await
    }
}
