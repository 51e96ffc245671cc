use crate::api::{ApiClient, ApiError, VisitorRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct UserDashboardRepository {
    client: Rc<ApiClient>,
}

impl UserDashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn my_requests(&self, user_id: &str) -> Result<Vec<VisitorRequest>, ApiError> {
        self.client.get_visitors_by_user(user_id).await
    }
}
