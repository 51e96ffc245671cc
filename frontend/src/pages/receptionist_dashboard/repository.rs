use super::utils::ReceptionView;
use crate::api::{ApiClient, ApiError, User, VisitRecordPayload, VisitorRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct ReceptionRepository {
    client: Rc<ApiClient>,
}

impl ReceptionRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Loads the set behind `view`; warehouse views need an assigned warehouse.
    pub async fn load(&self, view: ReceptionView, user: &User) -> Result<Vec<VisitorRequest>, ApiError> {
        let warehouse_id = || {
            user.warehouse_id
                .as_deref()
                .filter(|id| !id.is_empty())
                .ok_or_else(|| ApiError::validation("No warehouse is assigned to your account."))
        };
        match view {
            ReceptionView::Mine => self.client.get_visitors_by_user(&user.id).await,
            ReceptionView::Warehouse => {
                self.client
                    .get_visitors_by_warehouse(warehouse_id()?)
                    .await
            }
            ReceptionView::Today => {
                self.client
                    .get_today_visitors_by_warehouse(warehouse_id()?)
                    .await
            }
        }
    }

    pub async fn record_visit(
        &self,
        request_id: &str,
        payload: &VisitRecordPayload,
    ) -> Result<(), ApiError> {
        self.client.record_visit(request_id, payload).await
    }
}
